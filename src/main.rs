mod action;
mod commands;
mod config;
mod format;
mod search;
mod transport;
mod ui;

use action::{ActionDispatcher, ActionKind};
use clap::Parser;
use colored::Colorize;
use commands::{Presentation, SearchCommand};
use search::SearchOptions;
use std::env;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;
use transport::{GhCli, TransportKind};
use ui::{TerminalPicker, ThemePalette};

/// Environment variable holding a tracing filter, e.g. `GH_SEARCH_LOG=debug`
const LOG_ENV: &str = "GH_SEARCH_LOG";

/// gh-search - Interactive GitHub repository search
#[derive(Parser)]
#[command(name = "gh-search")]
#[command(version)]
#[command(about = "Search GitHub repositories")]
#[command(long_about = "Search for GitHub repositories.

Search through names, descriptions, or readmes,
sort by repository stats, and filter by topic or language.")]
#[command(after_help = "Example:\n  gh search cli --topic=hacktoberfest")]
struct Cli {
    /// Search query
    query: String,

    /// Specify a topic
    #[arg(short, long, default_value = "")]
    topic: String,

    /// Search in "name", "description", or "readme"
    #[arg(short = 'i', long = "in", default_value = "name")]
    search_in: String,

    /// Sort by "stars", "forks", or "issues"
    #[arg(short, long)]
    sort: Option<String>,

    /// Max number of search results
    #[arg(short = 'L', long, default_value_t = 30, allow_negative_numbers = true)]
    limit: i64,

    /// Filter by primary language
    #[arg(short, long, default_value = "")]
    language: String,

    /// Search transport (overrides settings)
    #[arg(long, value_enum)]
    transport: Option<TransportKind>,

    /// Open the chosen repository with "gh repo view"
    #[arg(short = 'w', long)]
    view: bool,

    /// Print results without the interactive menu
    #[arg(short = 'y', long)]
    no_interactive: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    let color = !cli.no_color && env::var_os("NO_COLOR").is_none();

    if let Err(e) = run(cli, color) {
        let prefix = if color {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };
        eprintln!("{} {:#}", prefix, e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, color: bool) -> anyhow::Result<()> {
    // Flags are validated before anything touches gh
    let opts = SearchOptions::new(
        cli.query,
        &cli.search_in,
        cli.topic,
        cli.sort.as_deref(),
        cli.language,
        cli.limit,
    )?;

    let settings = config::load_settings();
    let gh = GhCli::locate(settings.gh_path.as_deref())?;

    let transport = transport::connect(cli.transport.unwrap_or(settings.transport), gh.clone());

    let action = if cli.view {
        ActionKind::View
    } else {
        settings.action
    };
    let dispatcher = match action {
        ActionKind::Summary => ActionDispatcher::Summary { color },
        ActionKind::View => ActionDispatcher::View { gh },
    };

    let interactive =
        !cli.no_interactive && io::stdout().is_terminal() && io::stdin().is_terminal();

    let mut command = SearchCommand {
        transport: &*transport,
        dispatcher: &dispatcher,
        out: io::stdout(),
        color,
    };

    let outcome = if interactive {
        let palette = if color {
            settings.theme.palette()
        } else {
            ThemePalette::plain()
        };
        let mut picker = TerminalPicker::new(palette, settings.page_size);
        command.execute(&opts, Presentation::Interactive(&mut picker))?
    } else {
        command.execute(&opts, Presentation::List)?
    };

    tracing::debug!(?outcome, "finished");
    Ok(())
}
