use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use harbor_tag::cli::Cli;
use harbor_tag::{exit_codes, ui};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.run() {
        Ok(version) => {
            println!("{}", version);
            ExitCode::from(exit_codes::SUCCESS)
        }
        Err(err) => {
            ui::display_error(&ui::format_error_chain(&err));
            ExitCode::from(exit_codes::for_error(&err))
        }
    }
}

/// Log to stderr, honouring RUST_LOG when set; `--debug` raises the default
/// level from warn to debug.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
