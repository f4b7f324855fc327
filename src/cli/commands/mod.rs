//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod add;
pub mod check;
pub mod list;
pub mod remove;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Add(args) => add::run(ctx, args),
        Commands::Remove(args) => remove::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Check(args) => check::run(ctx, args),
    }
}
