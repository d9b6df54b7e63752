//! Command dispatch logic for cogniscreen

use crate::cli::{Cli, Commands};
use crate::commands;
use cogniscreen_core::error::{Result, ScreenError};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => Err(ScreenError::UsageError(
            "no command given (try `cogniscreen analyze --help`)".to_string(),
        )),

        Some(Commands::Analyze(args)) => commands::analyze::execute(cli, args),

        Some(Commands::Features(args)) => commands::features::execute(cli, args),
    }
}
