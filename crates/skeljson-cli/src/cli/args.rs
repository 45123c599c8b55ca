//! Argument builders for the convert command.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Skeleton and atlas files (two positionals, any order).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("FILE")
        .num_args(2)
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Binary skeleton (.skel) and its atlas (.atlas)")
}

/// Output directory (--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .long("out-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write outputs here instead of next to the skeleton")
}

/// Pretty-print JSON (--pretty).
pub fn pretty_arg() -> Arg {
    Arg::new("pretty")
        .long("pretty")
        .action(ArgAction::SetTrue)
        .help("Pretty-print the JSON output")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Debug logging (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Log each decoded section (RUST_LOG overrides)")
}
