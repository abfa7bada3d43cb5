//! Command-line interface for the execution context header generator
//!
//! Usage:
//!   execctx-gen [--input `<path>`] [--output `<path>`] [--pointer-type `<type>`]
//!               [--year `<year>`] [--config `<file>`] [-v...]
//!
//! Reads `AICExecContext_` from the input header and writes the 32-bit pointer
//! variant to the output header. Errors go to stderr with exit status 1.

mod cli;
mod settings;

use tracing_subscriber::EnvFilter;

fn main() {
    let matches = cli::build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let result = settings::resolve(&matches).and_then(|options| execctx_header::generate(&options));
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install a stderr subscriber; `RUST_LOG` wins over `-v`
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
