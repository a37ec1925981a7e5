//! neofeed command-line client
//!
//! Loads the NeoWs feed for one day, prints it, then applies any requested
//! nickname edits optimistically and reports how the (simulated) remote
//! answered.
//!
//! Usage:
//!   neofeed --date 2018-09-01 --nickname "(2018 RC)=Rocky"

use anyhow::{Context, Result, bail};
use clap::Parser;
use neofeed_cli::{Args, render_neo_list};
use neofeed_sync::{Navigator, NeoFeedService, NeoStore};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = args.feed_config()?;
    let query = args.feed_query()?;

    let store = Arc::new(NeoStore::new());
    let navigator = Navigator::new();
    let service = NeoFeedService::with_http(config, store.clone(), &navigator)
        .context("failed to create feed service")?;

    info!("Loading near-earth objects for {}", query);
    let neos = service
        .init(query)
        .await
        .with_context(|| format!("failed to load feed for {query}"))?;
    print!("{}", render_neo_list(&neos));

    if args.nicknames.is_empty() {
        return Ok(());
    }

    // Start every edit before waiting on any of them.
    let mut pending = Vec::new();
    for edit in &args.nicknames {
        let Some(current) = store.neo(edit.name.as_str()) else {
            warn!("No object named {} in the feed", edit.name);
            continue;
        };
        let task = service.update(current.with_nickname(edit.nickname.as_str()));
        pending.push((edit.name.clone(), task.start()));
    }

    println!("\nApplied locally:");
    print!("{}", render_neo_list(&store.neos()));

    let mut rejected = 0;
    for (name, update) in pending {
        match update.await {
            Ok(neo) => println!("Saved {} as {:?}", name, neo.nickname),
            Err(e) => {
                rejected += 1;
                println!("Not saved: {e}");
            }
        }
    }

    if let Some(error) = store.error() {
        eprintln!("\nerror: {}", error.message);
        // Leaving the detail view clears the banner.
        navigator.navigate("/neos");
    }

    if rejected > 0 {
        bail!("{rejected} update(s) rejected");
    }
    Ok(())
}
