use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pagination::{PageInfo, QueryParams};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod action;
mod config;

use action::Action;
use config::Settings;

#[derive(Parser)]
#[command(name = "pager")]
#[command(about = "Page through a JSON array", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file holding an array of items
    file: PathBuf,

    /// Steps to apply in order: next, prev, first, last, goto:N, size:N, total:N
    actions: Vec<Action>,

    #[command(flatten)]
    settings: Settings,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct PageReport<'a> {
    info: PageInfo,
    range: Vec<u32>,
    query: QueryParams,
    items: &'a [Value],
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pager={},pagination={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Loading items from: {}", cli.file.display());
    let content = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Cannot read {}", cli.file.display()))?;
    let items: Vec<Value> = serde_json::from_str(&content)
        .with_context(|| format!("{} must contain a JSON array", cli.file.display()))?;
    tracing::debug!("Loaded {} items", items.len());

    let mut state = cli.settings.open_state(items.len() as u64)?;

    for action in &cli.actions {
        if !action.apply(&mut state) {
            tracing::info!("Action '{}' left page {} unchanged", action, state.current_page());
        }
    }

    let report = PageReport {
        info: state.page_info(),
        range: state.compute_page_range(cli.settings.window),
        query: state.to_query_params(),
        items: state.slice_for_current_page(&items),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize page")?
    );

    Ok(())
}
