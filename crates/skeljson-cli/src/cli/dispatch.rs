//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::convert::ConvertArgs;

pub struct ConvertParams {
    pub inputs: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub pretty: bool,
    pub verbose: bool,
    pub color: ColorChoice,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: m
                .get_many::<PathBuf>("inputs")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            out_dir: m.get_one::<PathBuf>("out_dir").cloned(),
            pretty: m.get_flag("pretty"),
            verbose: m.get_flag("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self {
            inputs: p.inputs,
            out_dir: p.out_dir,
            pretty: p.pretty,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
