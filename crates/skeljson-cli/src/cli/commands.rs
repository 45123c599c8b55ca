//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("skeljson")
        .about("Convert Spine 3.5 binary skeletons to JSON")
        .override_usage(
            "\
  skeljson <SKEL> <ATLAS> [OPTIONS]",
        )
        .after_help(
            r#"EXAMPLES:
  skeljson hero.skel hero.atlas               # writes hero.json and hero.txt
  skeljson hero.atlas hero.skel --pretty      # inputs in any order
  skeljson hero.skel hero.atlas --out-dir out # write into out/"#,
        )
        .arg_required_else_help(true)
        .arg(inputs_arg())
        .arg(out_dir_arg())
        .arg(pretty_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
