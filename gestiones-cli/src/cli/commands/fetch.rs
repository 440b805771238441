//! One-shot fetch command: query the service and print the records.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use is_terminal::IsTerminal;

use crate::api::{Item, ItemQuery, StatusFilter};

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Status bucket to query (pendiente or procesados).
    #[arg(long, default_value = "pendiente", value_parser = crate::cli::parse_status)]
    pub status: StatusFilter,

    /// Lower date bound (YYYY-MM-DD).
    #[arg(long)]
    pub from_date: Option<String>,

    /// Upper date bound (YYYY-MM-DD).
    #[arg(long)]
    pub to_date: Option<String>,

    /// Ask the service to bypass its cache.
    #[arg(long)]
    pub force_refresh: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

pub async fn handle_fetch_command(args: FetchArgs) -> Result<()> {
    if args.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut query = ItemQuery::new(args.status).force_refresh(args.force_refresh);
    if let Some(from) = args.from_date {
        query = query.from_date(from);
    }
    if let Some(to) = args.to_date {
        query = query.to_date(to);
    }

    let client = crate::global_client();
    let items = client.fetch_items(&query).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
        OutputFormat::Table => print_table(&items),
    }
    Ok(())
}

fn print_table(items: &[Item]) {
    println!(
        "{:<40} {:<14} {:<28} {:<10} {}",
        "Título".bold(),
        "ID".bold(),
        "Origen".bold(),
        "Fecha".bold(),
        "Estatus".bold(),
    );
    for item in items {
        let title = non_empty_or(item.title_str(), "Sin Título");
        let short_id = non_empty_or(item.short_id(), "N/A");
        let origin = non_empty_or(item.list_sublabel().unwrap_or(item.list_str()), "N/A");
        let created = item
            .created_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let status = non_empty_or(item.status_str(), "N/A");
        let status = if item.is_pendiente() {
            status.red().to_string()
        } else {
            status.green().to_string()
        };
        println!(
            "{:<40} {:<14} {:<28} {:<10} {}",
            clip(title, 40),
            clip(short_id, 14),
            clip(origin, 28),
            created,
            status,
        );
    }
    println!();
    println!("{} registros", items.len().to_string().bold());
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn clip(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let kept: String = value.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip() {
        assert_eq!(clip("corto", 10), "corto");
        assert_eq!(clip("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_non_empty_or() {
        assert_eq!(non_empty_or("", "N/A"), "N/A");
        assert_eq!(non_empty_or("x", "N/A"), "x");
    }
}
