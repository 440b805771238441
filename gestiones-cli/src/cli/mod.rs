//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};

use crate::api::StatusFilter;

pub mod commands;

/// Terminal viewer for SharePoint gestión worklists.
#[derive(Debug, Parser)]
#[command(name = "gestiones-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the interactive viewer (default).
    Browse(BrowseArgs),
    /// Run one query against the service and print the results.
    Fetch(commands::fetch::FetchArgs),
}

/// Startup filters for the interactive viewer.
#[derive(Debug, Args, Default)]
pub struct BrowseArgs {
    /// Initial status bucket (pendiente or procesados).
    #[arg(long, value_parser = parse_status)]
    pub status: Option<StatusFilter>,

    /// Initial lower date bound (YYYY-MM-DD).
    #[arg(long)]
    pub from_date: Option<String>,

    /// Initial upper date bound (YYYY-MM-DD).
    #[arg(long)]
    pub to_date: Option<String>,
}

pub(crate) fn parse_status(raw: &str) -> Result<StatusFilter, String> {
    raw.parse()
}
