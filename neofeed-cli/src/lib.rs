//! Argument parsing and rendering for the `neofeed` binary.

use anyhow::{Context, Result};
use clap::Parser;
use neofeed_sync::FeedConfig;
use neofeed_types::{FeedQuery, Neo, NeoName};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "neofeed")]
#[command(about = "Load NASA near-earth objects and nickname them optimistically")]
pub struct Args {
    /// Day to load (YYYY-MM-DD), defaults to today (UTC)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// NeoWs API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// NeoWs base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Artificial feed delay in milliseconds
    #[arg(long)]
    pub fetch_delay_ms: Option<u64>,

    /// Simulated update round trip in milliseconds
    #[arg(long)]
    pub update_delay_ms: Option<u64>,

    /// Nickname an object, as NAME=NICKNAME (repeatable)
    #[arg(short, long = "nickname", value_parser = parse_nickname_edit)]
    pub nicknames: Vec<NicknameEdit>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the service configuration: file values first, then flags.
    pub fn feed_config(&self) -> Result<FeedConfig> {
        let mut config = match &self.config {
            Some(path) => FeedConfig::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => FeedConfig::default(),
        };

        if let Some(key) = &self.api_key {
            config.api_key = key.clone();
        }
        if let Some(url) = &self.base_url {
            config.api_base_url = url.clone();
        }
        if let Some(ms) = self.fetch_delay_ms {
            config.fetch_delay_ms = ms;
        }
        if let Some(ms) = self.update_delay_ms {
            config.update_delay_ms = ms;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    /// The date range to request.
    pub fn feed_query(&self) -> Result<FeedQuery> {
        match &self.date {
            Some(date) => FeedQuery::parse_day(date).with_context(|| format!("invalid date {date}")),
            None => Ok(FeedQuery::today()),
        }
    }
}

/// A requested nickname change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameEdit {
    pub name: NeoName,
    pub nickname: String,
}

/// Parses `NAME=NICKNAME`. Splits on the first `=`.
pub fn parse_nickname_edit(s: &str) -> Result<NicknameEdit, String> {
    let (name, nickname) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=NICKNAME, got {s:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("object name must not be empty".to_string());
    }
    Ok(NicknameEdit {
        name: NeoName::new(name),
        nickname: nickname.trim().to_string(),
    })
}

/// Renders the entity list as a fixed-width table.
pub fn render_neo_list(neos: &[Neo]) -> String {
    let mut out = format!(
        "{:<24} {:<16} {:>13}  {}\n",
        "NAME", "NICKNAME", "DIAMETER (mi)", "HAZARDOUS"
    );
    for neo in neos {
        let nickname = if neo.nickname.is_empty() {
            "-"
        } else {
            neo.nickname.as_str()
        };
        out.push_str(&format!(
            "{:<24} {:<16} {:>13.3}  {}\n",
            neo.name,
            nickname,
            neo.estimated_diameter,
            if neo.hazardous { "yes" } else { "no" }
        ));
    }
    out
}
