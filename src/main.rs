// src/main.rs
// =============================================================================
// Entry point of the CLI application.
//
// What happens here:
// 1. Initialize logging (stderr; `RUST_LOG` overrides the default filter)
// 2. Parse command-line arguments using clap
// 3. Build the HTTP client and run the crawl
// 4. Exit non-zero only on startup failures; per-page fetch errors are
//    logged by the crawl loop and never abort the run
//
// The crawl is strictly sequential, so the whole program runs on a
// single-threaded tokio executor.
// =============================================================================

mod cli;
mod crawl;
mod fetcher;
mod link;
mod scanner;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use env_logger::Env;
use reqwest::Client;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    log::debug!("args: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // No request timeout: a page is waited on for as long as it takes.
    let client = Client::builder().build()?;

    log::info!("crawling {} down to depth {}", cli.url, cli.max_depth);
    crawl::crawl_site(&client, &cli.url, cli.max_depth).await;

    Ok(())
}
