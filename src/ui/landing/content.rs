// SPDX-License-Identifier: MPL-2.0
//! Static catalog shown on the landing screen.
//!
//! Everything here is immutable for the lifetime of the process. Array order
//! is display order: features rotate in `FEATURES` order and format tabs are
//! listed in `DemoKey::ALL` order.

use std::fmt;

/// Symbolic icon reference, resolved to a glyph by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Wikipedia,
    Code,
    Image,
    Play,
}

impl FeatureIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::Wikipedia => "W",
            FeatureIcon::Code => "</>",
            FeatureIcon::Image => "▣",
            FeatureIcon::Play => "▶",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
}

pub const FEATURES: [FeatureEntry; 3] = [
    FeatureEntry {
        title: "Wikipedia Integration",
        description: "Simply paste a Wikipedia link and get interactive visualizations instantly.",
        icon: FeatureIcon::Wikipedia,
    },
    FeatureEntry {
        title: "Multiple Formats",
        description: "Choose from p5.js, Three.js, D3.js, or Mermaid.js visualizations.",
        icon: FeatureIcon::Code,
    },
    FeatureEntry {
        title: "Image Analysis",
        description: "Upload diagrams or charts and get interactive simulations automatically.",
        icon: FeatureIcon::Image,
    },
];

/// Visualization technology whose sample is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DemoKey {
    #[default]
    P5js,
    Threejs,
    D3js,
    Mermaidjs,
}

impl DemoKey {
    /// Tab order.
    pub const ALL: [DemoKey; 4] = [
        DemoKey::P5js,
        DemoKey::Threejs,
        DemoKey::D3js,
        DemoKey::Mermaidjs,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DemoKey::P5js => "p5js",
            DemoKey::Threejs => "threejs",
            DemoKey::D3js => "d3js",
            DemoKey::Mermaidjs => "mermaidjs",
        }
    }

    #[must_use]
    pub fn entry(self) -> &'static DemoEntry {
        demo(self)
    }
}

impl fmt::Display for DemoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Displayed verbatim, never executed.
    pub code: &'static str,
}

const P5JS: DemoEntry = DemoEntry {
    title: "p5.js Visualizations",
    description: "Create beautiful 2D animations and interactive art with p5.js",
    code: "function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
  fill(255, 0, 0);
  ellipse(mouseX, mouseY, 50, 50);
}",
};

const THREEJS: DemoEntry = DemoEntry {
    title: "Three.js 3D Models",
    description: "Render stunning 3D visualizations with Three.js",
    code: "const scene = new THREE.Scene();
const camera = new THREE.PerspectiveCamera(75, window.innerWidth / window.innerHeight, 0.1, 1000);
const renderer = new THREE.WebGLRenderer();
renderer.setSize(window.innerWidth, window.innerHeight);
document.body.appendChild(renderer.domElement);",
};

const D3JS: DemoEntry = DemoEntry {
    title: "D3.js Data Visualizations",
    description: "Build professional data visualizations with D3.js",
    code: "const svg = d3.select(\"body\").append(\"svg\")
  .attr(\"width\", 400)
  .attr(\"height\", 200);

svg.selectAll(\"rect\")
  .data([4, 8, 15, 16, 23, 42])
  .enter().append(\"rect\")
  .attr(\"x\", (d, i) => i * 40)
  .attr(\"y\", (d) => 200 - d * 4)",
};

const MERMAIDJS: DemoEntry = DemoEntry {
    title: "Mermaid.js Diagrams",
    description: "Generate flowcharts, sequence diagrams and more",
    code: "graph TD
    A[Start] --> B{Decision}
    B -->|Yes| C[Action 1]
    B -->|No| D[Action 2]",
};

#[must_use]
pub fn demo(key: DemoKey) -> &'static DemoEntry {
    match key {
        DemoKey::P5js => &P5JS,
        DemoKey::Threejs => &THREEJS,
        DemoKey::D3js => &D3JS,
        DemoKey::Mermaidjs => &MERMAIDJS,
    }
}

// =============================================================================
// Promotional cards
// =============================================================================

/// Tint family of a remix card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemixTone {
    Purple,
    Blue,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemixPrompt {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: RemixTone,
}

pub const REMIX_PROMPTS: [RemixPrompt; 3] = [
    RemixPrompt {
        number: 1,
        title: "Fix Display",
        description: "Automatically corrects visualization rendering issues and improves layout.",
        tone: RemixTone::Purple,
    },
    RemixPrompt {
        number: 2,
        title: "Enhance Layout",
        description: "Optimizes the structure and organization of your visualization.",
        tone: RemixTone::Blue,
    },
    RemixPrompt {
        number: 3,
        title: "Add Interactivity",
        description: "Introduces interactive elements to engage your audience.",
        tone: RemixTone::Green,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryExample {
    pub title: &'static str,
    pub description: &'static str,
    pub excerpt: &'static str,
}

pub const SUMMARY_EXAMPLE: SummaryExample = SummaryExample {
    title: "Auto-Generated Summaries",
    description: "Every visualization comes with a concise summary of the concept, helping you understand the key points quickly.",
    excerpt: "\"The visualization demonstrates Newton's First Law of Motion, showing that an object in motion stays in motion unless acted upon by an external force...\"",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizExample {
    pub title: &'static str,
    pub description: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 3],
    /// Index into `options`.
    pub correct: usize,
}

pub const QUIZ_EXAMPLE: QuizExample = QuizExample {
    title: "Interactive MCQs",
    description: "Test your understanding with automatically generated multiple-choice questions based on the visualization.",
    question: "What does this visualization demonstrate?",
    options: [
        "Newton's First Law",
        "The Theory of Relativity",
        "Quantum Mechanics",
    ],
    correct: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: [&'static str; 4],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Features",
        links: [
            "Wikipedia Integration",
            "Image Analysis",
            "Text to Visualization",
            "Remix Prompts",
        ],
    },
    FooterColumn {
        heading: "Formats",
        links: ["p5.js", "Three.js", "D3.js", "Mermaid.js"],
    },
    FooterColumn {
        heading: "Resources",
        links: ["Documentation", "Tutorials", "API Reference", "GitHub"],
    },
];

pub const SOCIAL_LINKS: [&str; 3] = ["GitHub", "Twitter", "YouTube"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_order_is_fixed() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            ["Wikipedia Integration", "Multiple Formats", "Image Analysis"]
        );
    }

    #[test]
    fn demo_identifiers_are_unique() {
        let ids = DemoKey::ALL.map(DemoKey::as_str);
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
            assert_eq!(DemoKey::ALL[i].to_string(), *id);
        }
    }

    #[test]
    fn tab_order_starts_with_p5js() {
        assert_eq!(DemoKey::ALL[0], DemoKey::default());
        assert_eq!(
            DemoKey::ALL.map(DemoKey::as_str),
            ["p5js", "threejs", "d3js", "mermaidjs"]
        );
    }

    #[test]
    fn mermaid_sample_is_the_flowchart() {
        assert_eq!(
            demo(DemoKey::Mermaidjs).code,
            "graph TD\n    A[Start] --> B{Decision}\n    B -->|Yes| C[Action 1]\n    B -->|No| D[Action 2]"
        );
    }

    #[test]
    fn every_demo_has_content() {
        for key in DemoKey::ALL {
            let entry = key.entry();
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.code.is_empty());
        }
    }

    #[test]
    fn quiz_answer_is_in_range() {
        assert!(QUIZ_EXAMPLE.correct < QUIZ_EXAMPLE.options.len());
    }

    #[test]
    fn remix_prompts_are_numbered_in_order() {
        for (index, prompt) in REMIX_PROMPTS.iter().enumerate() {
            assert_eq!(usize::from(prompt.number), index + 1);
        }
    }
}
