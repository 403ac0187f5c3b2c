//! Confile CLI entry point.

use clap::Parser;

use confile::cli::{Cli, Commands};
use confile::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();

    let logger = match LoggerImpl::init(&cli.log_config()) {
        Ok(logger) => logger,
        Err(err) => confile::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Show(args) => confile::cli::commands::show::execute(args, cli.json),
        Commands::Resolve(args) => confile::cli::commands::resolve::execute(args, cli.json),
    };

    if let Err(err) = result {
        // Flush the file writer before exiting
        drop(logger);
        confile::cli::handle_error(err, cli.json);
    }
}
