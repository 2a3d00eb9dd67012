//! Command implementations for the GreenShift CLI.
//!
//! Each subcommand talks to the backend through the same [`ApiClient`] the
//! web app uses.

use clap::Subcommand;
use gs_api::ApiClient;

pub mod calculate;
pub mod clear;
pub mod history;
pub mod search;

#[derive(Subcommand)]
pub enum Command {
    /// Look up cities whose name matches the text
    Search {
        /// At least three characters of a city name
        text: String,
    },

    /// Calculate the footprint of a route between two cities
    Calculate {
        /// Origin; resolved to its first search match
        #[arg(long)]
        from: String,

        /// Destination; resolved to its first search match
        #[arg(long)]
        to: String,
    },

    /// Show past calculations grouped by route
    History {
        /// Also write the flat records to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Delete every saved calculation
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(command: Command, api: ApiClient) -> anyhow::Result<()> {
    match command {
        Command::Search { text } => search::run_search(&api, &text).await,
        Command::Calculate { from, to } => calculate::run_calculate(&api, &from, &to).await,
        Command::History { csv } => history::run_history(&api, csv.as_deref()).await,
        Command::Clear { yes } => clear::run_clear(&api, yes).await,
    }
}
