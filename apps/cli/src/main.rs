mod config;
mod notion;
mod npc;
mod page;
mod publish;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::task::JoinSet;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::notion::NotionClient;
use crate::npc::generate::generate;
use crate::npc::normalize::normalize;

const GENERATE_MINIMUM: i64 = 1;
const GENERATE_MAXIMUM: i64 = 10;

#[derive(Debug, Parser)]
#[command(
    name = "npcsmith",
    about = "Generates tabletop NPCs and publishes each one as a Notion page"
)]
struct Cli {
    /// How many NPCs to generate, clamped to 1-10. Non-numeric input falls
    /// back to 1 rather than erroring out.
    count: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (errors on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting npcsmith v{}", env!("CARGO_PKG_VERSION"));

    let count = clamp_count(cli.count.as_deref());
    let store = Arc::new(NotionClient::new(
        config.notion_api_key.clone(),
        config.notion_database_id.clone(),
    ));
    let race_relations = Arc::new(config.race_relations);

    info!("Generating {count} NPC(s)");

    // Each submission is an independent fire-and-forget request — no
    // ordering, no shared mutable state, one failure never cancels the
    // rest. The set is drained only so the runtime outlives the in-flight
    // calls.
    let mut submissions = JoinSet::new();
    for _ in 0..count {
        let store = Arc::clone(&store);
        let race_relations = Arc::clone(&race_relations);
        let npc = normalize(generate());
        submissions.spawn(async move {
            publish::publish_npc(store.as_ref(), &race_relations, &npc).await;
        });
    }
    while submissions.join_next().await.is_some() {}

    Ok(())
}

/// Clamps the repeat-count argument into [GENERATE_MINIMUM, GENERATE_MAXIMUM].
/// Absent or non-numeric input silently defaults to the minimum — the
/// argument is never rejected.
fn clamp_count(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|n| n.clamp(GENERATE_MINIMUM, GENERATE_MAXIMUM))
        .unwrap_or(GENERATE_MINIMUM)
}
