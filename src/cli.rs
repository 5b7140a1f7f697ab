use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use time::Duration;

use usermap_boundary::UserPinRecord;
use usermap_core::{
    cache::{DatasetCache, FreshnessPolicy},
    entities::{MapBbox, UserAnnotation},
};

use crate::{
    config::Config,
    gateways::{self, JsonFileGateway},
};

#[derive(Debug, Parser)]
#[command(name = "usermap", about = "Query user pins for a map viewport", version)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON file with user pin records (overrides the configuration).
    #[arg(long, value_name = "FILE")]
    annotations: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the dataset for a viewport and print the contained pins as JSON.
    Query {
        /// Viewport as "sw_lat,sw_lng,ne_lat,ne_lng" in degrees.
        #[arg(long, value_name = "BBOX")]
        bbox: String,
    },
    /// Parse the records file and report malformed records.
    Check,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    let records = args.annotations.unwrap_or(cfg.annotations.records);
    match args.command {
        Command::Query { bbox } => query(records, cfg.cache.max_age, &bbox).await,
        Command::Check => check(records).await,
    }
}

async fn query(records: PathBuf, max_age: Option<Duration>, bbox: &str) -> Result<()> {
    let viewport: MapBbox = bbox
        .parse()
        .context("Failed to parse the viewport bounding box")?;
    let gateway = JsonFileGateway::new(records);
    let mut cache = DatasetCache::with_policy(gateway, FreshnessPolicy { max_age });
    let dataset = cache.ensure_coverage(viewport).await?;
    info!(
        "{} annotations loaded at {} for {viewport}",
        dataset.len(),
        dataset.loaded_at()
    );
    let pins: Vec<UserPinRecord> = dataset
        .annotations_in(&viewport)
        .cloned()
        .map(Into::into)
        .collect();
    println!("{}", serde_json::to_string_pretty(&pins)?);
    Ok(())
}

async fn check(records: PathBuf) -> Result<()> {
    let records = gateways::read_records(&records).await?;
    let total = records.len();
    let mut malformed = 0;
    for (idx, record) in records.into_iter().enumerate() {
        let id = record.id;
        if let Err(err) = UserAnnotation::try_from(record) {
            malformed += 1;
            warn!("Record #{idx} (user {id}): {err}");
        }
    }
    if malformed > 0 {
        bail!("{malformed} of {total} records are malformed");
    }
    println!("All {total} records are well-formed");
    Ok(())
}
