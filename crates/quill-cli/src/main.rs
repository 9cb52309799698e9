use anyhow::Context;
use clap::Parser;
use quill_config::QuillConfig;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("quill error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    // Parsing is pure; it needs neither config nor a database.
    if let cli::Commands::Task {
        action: cli::subcommands::TaskCommands::Parse { text, today },
    } = &cli.command
    {
        return commands::task::run_parse(text, today.as_deref(), &flags);
    }

    let config = QuillConfig::load_with_dotenv().context("failed to load quill configuration")?;
    let ctx = context::AppContext::init(config, &flags)
        .await
        .context("failed to initialize quill application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("QUILL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
