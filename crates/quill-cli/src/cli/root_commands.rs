use clap::Subcommand;

use crate::cli::subcommands::TaskCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Upcoming open tasks, soonest due first.
    Dashboard,
}
