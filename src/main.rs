use std::process::ExitCode;

use anyhow::Context;
use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod format;
mod models;
mod search;

use crate::cli::Cli;
use crate::config::Config;
use crate::search::SearchClient;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) if cli::is_informational(&err) => err.exit(),
        Err(err) => return Err(cli::usage_error(&err).into()),
    };

    // The key is checked before anything else so a misconfigured run never
    // reaches the network.
    let config = Config::from_env()?;
    let invocation = cli.into_invocation()?;

    if !invocation.json {
        println!(
            "{}",
            format::format_preamble(&invocation.query, invocation.max_results)
        );
    }

    let client = SearchClient::new(&config, invocation.timeout)
        .context("failed to build HTTP client")?
        .with_search_depth(invocation.depth);

    let response = client
        .search(&invocation.query, invocation.max_results)
        .await
        .context("搜索失败")?;

    if invocation.json {
        println!("{}", format::format_json(&response)?);
    } else {
        println!("{}", format::format_results(Some(&response)));
    }

    Ok(())
}
