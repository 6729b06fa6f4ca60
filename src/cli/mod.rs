mod args;
mod config_resolution;

#[cfg(test)]
mod tests;

pub use args::*;

use crate::commands::{run_combine, run_learn_lings, run_status};
use crate::config;
use clap::Parser;

const SUMMARY: &str = "Build combined lesson and exercise documents for the Boba Lang site";

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    crate::init_tracing(cli.verbose)?;

    if cli.summary {
        println!("{SUMMARY}");
        return Ok(());
    }

    let current_dir = std::env::current_dir()?;

    let config = config::load_config(&current_dir)?;

    match cli.command {
        Some(Commands::LearnLings(args)) => {
            let final_args = args.with_config(&current_dir, config.as_ref());
            run_learn_lings(&current_dir, final_args)
        }
        Some(Commands::Combine(args)) => {
            let final_args = args.with_config(&current_dir, config.as_ref());
            run_combine(&current_dir, final_args)
        }
        Some(Commands::Status(args)) => {
            let final_args = args.with_config(&current_dir, config.as_ref());
            run_status(&current_dir, final_args)
        }
        None => {
            // If no command is provided and --summary is not used, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
