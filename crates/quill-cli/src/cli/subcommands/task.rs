use clap::{Args, Subcommand};

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Extract title, due date, and priority from free text.
    Parse {
        text: String,
        /// Reference date for relative phrases (YYYY-MM-DD, defaults to today).
        #[arg(long)]
        today: Option<String>,
    },
    /// Suggest subtasks for a title.
    Suggest {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Create a task, optionally with suggested subtasks.
    Create(CreateArgs),
    /// List tasks.
    List {
        /// pending, in-progress, completed, or all
        #[arg(long, default_value = "all")]
        status: String,
        /// Hide subtasks.
        #[arg(long)]
        top_level: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a task and its subtasks.
    Get { id: String },
    /// Update a task.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// YYYY-MM-DD
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        #[arg(long)]
        clear_due: bool,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Mark a task completed.
    Complete { id: String },
    /// Delete a task and its subtasks.
    Delete { id: String },
}

/// Arguments for `quill task create`.
///
/// `--text` is parsed first; explicit flags then override parsed fields.
#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Free text such as "Finish report by tomorrow urgent".
    #[arg(long)]
    pub text: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// Request subtask suggestions; all are created unless --select narrows them.
    #[arg(long)]
    pub suggest: bool,
    /// Comma-separated suggestion indices to keep, e.g. "0,2".
    #[arg(long, requires = "suggest", conflicts_with = "no_subtasks")]
    pub select: Option<String>,
    /// Create no subtasks even with --suggest.
    #[arg(long)]
    pub no_subtasks: bool,
}
