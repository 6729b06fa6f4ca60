mod cli;
mod commands;
mod config;
mod constants;
mod models;
mod operations;
mod utils;

use cli::run_cli;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("❌ Error: {e:?}");
        std::process::exit(1);
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` directives are honored on
/// top of the default level.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
