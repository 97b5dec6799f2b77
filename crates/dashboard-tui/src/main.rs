mod app;
mod keys;
mod snapshot;
mod ui;
mod widgets;

use app::DashboardApp;
use clap::{Parser, Subcommand, ValueEnum};
use dashboard_core::{IncidentStore, Severity, SeverityFilter, SortOrder};
use tracing::info;

#[derive(Parser)]
#[command(name = "safedash")]
#[command(about = "Terminal dashboard for recording and browsing AI safety incident reports")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    Run {
        /// Start with an empty store instead of the seed incidents
        #[arg(long)]
        empty: bool,
    },
    /// Print the filtered, sorted incident list as JSON and exit
    Dump {
        /// Severity filter
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        /// Sort order
        #[arg(long, value_enum, default_value_t = SortArg::Newest)]
        sort: SortArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Low,
    Medium,
    High,
}

impl From<FilterArg> for SeverityFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => SeverityFilter::All,
            FilterArg::Low => SeverityFilter::Only(Severity::Low),
            FilterArg::Medium => SeverityFilter::Only(Severity::Medium),
            FilterArg::High => SeverityFilter::Only(Severity::High),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Newest,
    Oldest,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortOrder::NewestFirst,
            SortArg::Oldest => SortOrder::OldestFirst,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { empty: false }) {
        Commands::Run { empty } => {
            let store = if empty {
                IncidentStore::new()
            } else {
                IncidentStore::with_seed()
            };
            info!(incidents = store.len(), "starting dashboard");
            ui::run_tui(DashboardApp::new(store))?;
        }
        Commands::Dump { filter, sort } => {
            let mut store = IncidentStore::with_seed();
            store.set_filter(filter.into());
            store.set_sort_order(sort.into());
            let view = store.view();
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}
