use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `quill` binary.
#[derive(Debug, Parser)]
#[command(name = "quill", version, about = "Quill - free-text task intake")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Act as this user id (overrides identity.user_id from config)
    #[arg(short, long, global = true)]
    pub user: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            user: self.user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::TaskCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "quill",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["quill", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["quill", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["quill", "--user", "user_2abc", "dashboard"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.user.as_deref(), Some("user_2abc"));
    }

    #[test]
    fn task_create_accepts_text_and_selection() {
        let cli = Cli::try_parse_from([
            "quill",
            "task",
            "create",
            "--text",
            "Write report by tomorrow",
            "--suggest",
            "--select",
            "0,2",
        ])
        .expect("cli should parse");

        let Commands::Task {
            action: TaskCommands::Create(args),
        } = cli.command
        else {
            panic!("expected task create");
        };
        assert_eq!(args.text.as_deref(), Some("Write report by tomorrow"));
        assert!(args.suggest);
        assert_eq!(args.select.as_deref(), Some("0,2"));
    }

    #[test]
    fn select_requires_suggest() {
        let parsed =
            Cli::try_parse_from(["quill", "task", "create", "--title", "x", "--select", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn select_conflicts_with_no_subtasks() {
        let parsed = Cli::try_parse_from([
            "quill",
            "task",
            "create",
            "--title",
            "x",
            "--suggest",
            "--select",
            "0",
            "--no-subtasks",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn update_due_conflicts_with_clear_due() {
        let parsed = Cli::try_parse_from([
            "quill",
            "task",
            "update",
            "tsk-1",
            "--due",
            "2026-10-20",
            "--clear-due",
        ]);
        assert!(parsed.is_err());
    }
}
