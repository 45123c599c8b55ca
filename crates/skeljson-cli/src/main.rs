mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{ConvertParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let params = ConvertParams::from_matches(&matches);

    init_logging(params.verbose);
    commands::convert::run(params.into());
}

/// `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}
