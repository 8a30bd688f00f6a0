mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{CheckParams, LangsParams, ScalarsParams, TransformParams, build_cli};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "TYREFLECT_LOG";

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("transform", m)) => {
            let params = TransformParams::from_matches(m);
            commands::transform::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("scalars", m)) => {
            let params = ScalarsParams::from_matches(m);
            commands::scalars::run(params.into());
        }
        Some(("langs", m)) => {
            let _params = LangsParams::from_matches(m);
            commands::langs::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
