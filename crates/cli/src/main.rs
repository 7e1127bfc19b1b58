//! island-scout: browse, filter and AI-search the local island catalog from
//! the terminal.

mod flags;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use island_browse::{SearchOutcome, Session};
use island_catalog::Catalog;
use island_recommend::{GeminiBackend, RecommendError};

#[derive(Parser)]
#[command(name = "island-scout", version, about = "Find your Maldives local island")]
struct Cli {
    /// Emit machine-readable JSON instead of styled text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the whole catalog in default order
    List,
    /// Apply facet filters and show matching islands
    Filter(flags::FilterArgs),
    /// Ask the AI consultant, optionally combined with facet filters
    Ask {
        /// Free-text description of the trip
        query: String,

        #[command(flatten)]
        filters: flags::FilterArgs,
    },
    /// Show which facet values are still selectable under the given filters
    Facets(flags::FilterArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::new(Catalog::builtin()?);

    match cli.command {
        Command::List => report::results(&session, cli.json)?,
        Command::Filter(filters) => {
            filters.apply(&mut session);
            report::results(&session, cli.json)?;
        }
        Command::Ask { query, filters } => {
            filters.apply(&mut session);
            run_search(&mut session, &query).await?;
            report::results(&session, cli.json)?;
        }
        Command::Facets(filters) => {
            filters.apply(&mut session);
            report::facets(&session, cli.json)?;
        }
    }

    Ok(())
}

async fn run_search(session: &mut Session, query: &str) -> Result<()> {
    match GeminiBackend::from_env() {
        Ok(backend) => {
            session.search(&backend, query).await;
        }
        // Per the adapter contract a missing credential behaves like an
        // empty answer: logged, not surfaced as a distinct error.
        Err(RecommendError::MissingCredential(var)) => {
            log::warn!("recommendation backend disabled: {var} is not set");
            let generation = session.begin_search();
            session.apply_outcome(generation, SearchOutcome::Success(Vec::new()));
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
