// SPDX-License-Identifier: MPL-2.0
//! Cyclic highlight over the feature cards.

use std::time::Duration;

/// Period of the automatic advance.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(5000);

/// Index into a fixed-length list that advances by one and wraps.
///
/// Invariant: `index < len`, with `len >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRotation {
    index: usize,
    len: usize,
}

impl FeatureRotation {
    /// Starts at the first entry. A zero `len` is treated as one.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.index
    }

    /// Moves to the next entry, wrapping from the last back to the first.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(FeatureRotation::new(3).current(), 0);
    }

    #[test]
    fn index_after_n_advances_is_n_mod_len() {
        let mut rotation = FeatureRotation::new(3);
        for n in 1..=10 {
            rotation.advance();
            assert_eq!(rotation.current(), n % 3);
        }
    }

    #[test]
    fn wraps_from_last_to_first() {
        let mut rotation = FeatureRotation::new(3);
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.current(), 2);
        assert_eq!(rotation.advance(), 0);
    }

    #[test]
    fn zero_length_behaves_as_single_entry() {
        let mut rotation = FeatureRotation::new(0);
        assert_eq!(rotation.advance(), 0);
        assert_eq!(rotation.advance(), 0);
    }

    #[test]
    fn interval_is_five_seconds() {
        assert_eq!(ROTATION_INTERVAL.as_millis(), 5000);
    }
}
