//! ArtBrowse terminal browser
//!
//! Pages through the remote artwork catalog and keeps a selection that can
//! grow across pages:
//! 1. `select 30` takes what it can from the page on screen
//! 2. the rest is picked up from the next pages as they load
//!
//! Usage:
//!   artbrowse --page-size 12 --page 1
//!
//! Commands are read from stdin one per line; `help` lists them.

use anyhow::{Context, Result};
use artbrowse_catalog::{CatalogConfig, DEFAULT_BASE_URL, HttpPageSource};
use artbrowse_cli::{Command, Flow, execute, render_page};
use artbrowse_session::{
    BrowserSession, DEFAULT_MAX_FILL_PAGES, DEFAULT_PAGE_SIZE, DEFAULT_PREFETCH_DEPTH,
    SessionConfig,
};
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "artbrowse")]
#[command(about = "Browse the artwork catalog and select rows across pages")]
struct Args {
    /// Catalog API root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Rows per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// Page to open first
    #[arg(short, long, default_value = "1")]
    page: u32,

    /// Pages fetched concurrently by `fill`
    #[arg(long, default_value_t = DEFAULT_PREFETCH_DEPTH)]
    prefetch: usize,

    /// Most pages one `fill` may scan
    #[arg(long, default_value_t = DEFAULT_MAX_FILL_PAGES)]
    max_fill: u32,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let catalog_config = CatalogConfig {
        base_url: args.base_url,
        timeout_secs: args.timeout,
        ..Default::default()
    };
    let session_config = SessionConfig {
        page_size: args.page_size,
        prefetch_depth: args.prefetch,
        max_fill_pages: args.max_fill,
    };

    let source = HttpPageSource::new(catalog_config).context("Failed to set up catalog client")?;
    info!("Catalog: {}", source.config().artworks_url());
    let mut session =
        BrowserSession::new(source, session_config).context("Invalid session configuration")?;

    let mut out = std::io::stdout();
    if let Err(e) = session.load_page(args.page).await {
        warn!("Initial page load failed: {}", e);
        writeln!(out, "error: {e}")?;
    }
    render_page(&session.view(), &mut out)?;
    prompt(&mut out)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match line.parse::<Command>() {
            Ok(command) => {
                if execute(&mut session, command, &mut out).await? == Flow::Quit {
                    break;
                }
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
        prompt(&mut out)?;
    }

    info!("Session ended with {} row(s) selected", session.selection().len());
    Ok(())
}
