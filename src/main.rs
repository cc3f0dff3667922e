//! CLI driver: classify an exported message batch and print the digest
//! summary as JSON.
//!
//! The export file is the retrieval collaborator's output — a JSON array
//! of message records for one channel. Fetching, scheduling, and digest
//! rendering live elsewhere.

use std::fs;
use std::process;

use anyhow::Context;
use chrono::{Duration, Utc};
use tracing::info;

use channel_digest::config::DigestConfig;
use channel_digest::digest::{DigestAggregator, DigestWindow};
use channel_digest::message::{self, Message};
use channel_digest::pipeline::classifier::MessageClassifier;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| {
        eprintln!("Usage: channel-digest <messages.json> [days-back]");
        process::exit(1);
    });
    let days_back: i64 = args
        .next()
        .map(|s| s.parse())
        .transpose()
        .context("days-back must be an integer")?
        .unwrap_or(7);

    let raw = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let messages: Vec<Message> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
    message::validate_batch(&messages)?;
    info!(count = messages.len(), "Loaded message batch");

    let channel_id = messages
        .first()
        .map(|m| m.channel_id.clone())
        .unwrap_or_default();
    let end = Utc::now();
    let window = DigestWindow {
        channel_id,
        start: end - Duration::days(days_back),
        end,
    };

    let config = DigestConfig::default();
    config.validate()?;

    let classifier = MessageClassifier::new(config.clone());
    let classified = classifier.classify_batch(messages);
    let summary = DigestAggregator::new(config).aggregate(&window, &classified);
    info!(
        channel = %summary.window.channel_id,
        total = summary.total,
        "Digest ready"
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
