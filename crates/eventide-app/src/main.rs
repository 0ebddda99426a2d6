use anyhow::Context;
use clap::Parser;
use eventide_app::cli::Cli;
use eventide_app::report::build_report;
use eventide_calendar::RelativeRangeCalculator;
use eventide_core::config::load_config;
use eventide_store::MemoryStore;
use eventide_store::snapshot::Snapshot;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let date = cli.date_or(chrono::Local::now().date_naive());
    let path = cli.snapshot.display();

    let raw = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("failed to read snapshot {path}"))?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse snapshot {path}"))?;
    let store = MemoryStore::from_snapshot(snapshot)?;

    tracing::info!(events = store.len(), %date, "Snapshot loaded");

    let calculator = RelativeRangeCalculator::new(config.calendar);
    let report = build_report(&store, &calculator, date)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
