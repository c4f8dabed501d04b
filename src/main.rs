// SPDX-License-Identifier: MPL-2.0
use microsim_landing::app::{self, paths, Flags};
use microsim_landing::logging;

const HELP: &str = "\
MicroSim landing screen

USAGE:
    microsim_landing [OPTIONS]

OPTIONS:
    --lang <LOCALE>        Interface language (e.g. en-US, fr)
    --config-dir <PATH>    Directory holding settings.toml
    -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init();
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
