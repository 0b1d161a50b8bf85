//! gelete - Interactive deletion of local git branches

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use gelete::app::App;
use gelete::config::Config;
use gelete::git::{BranchManager, Repository, WorktreeManager};
use tracing::{info, warn};

/// Interactively select and delete local git branches
#[derive(Parser, Debug)]
#[command(name = "gelete")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: (),
}

fn main() -> Result<()> {
    if let Err(e) = Cli::try_parse() {
        // Let --help and --version exit normally
        if e.kind() == clap::error::ErrorKind::DisplayHelp
            || e.kind() == clap::error::ErrorKind::DisplayVersion
        {
            e.exit();
        }
        eprintln!("error: {}\n", e.kind());
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    init_logging();

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let repo = Repository::new(cwd);
    repo.validate()?;

    let branches = repo.list_branches()?;
    if branches.is_empty() {
        println!("No branches to delete.");
        println!("(The current branch is excluded from the list)");
        return Ok(());
    }
    info!(count = branches.len(), "Loaded deletable branches");

    let worktrees = WorktreeManager::new(&repo).list().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to list worktrees; continuing without annotations");
        Vec::new()
    });

    let app = App::new(Config::default(), branches, worktrees);
    let app = gelete::tui::run(app, &BranchManager::new(&repo))?;

    if !app.outcome().is_empty() {
        print!("{}", app.outcome());
    }

    Ok(())
}

/// Log to `gelete.log` in the temp dir - tail with: `tail -f /tmp/gelete.log`
///
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug).
fn init_logging() {
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let log_dir = std::env::temp_dir();
    // Clear the log file on startup
    if let Err(e) = std::fs::write(log_dir.join("gelete.log"), "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let file_appender = tracing_appender::rolling::never(log_dir, "gelete.log");
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}
