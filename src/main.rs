use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use journal_core::config::Config;
use journal_core::core::clock::{Clock, SystemClock};
use journal_core::models::TradeEvent;
use journal_core::persist::{AutosavePump, JsonFileSink};
use journal_core::report::DashboardSnapshot;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let clock = SystemClock::from_name(&cfg.timezone);

    let snapshot = build_snapshot(&cfg, &clock)?;
    snapshot.print_summary();

    let sink = Arc::new(JsonFileSink::new(&cfg.snapshot_file));
    let pump = AutosavePump::spawn(sink, Duration::from_millis(cfg.autosave_delay_ms));
    #[cfg(unix)]
    let _suspend_watch = pump.spawn_suspend_flush();

    pump.schedule(snapshot.payload());

    // Re-read the journal on an interval; an unchanged file dedupes to a
    // no-op inside the pump.
    let mut refresh = tokio::time::interval(Duration::from_secs(cfg.refresh_interval_secs));
    refresh.tick().await; // first tick is immediate

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = refresh.tick() => {
                match build_snapshot(&cfg, &clock) {
                    Ok(snapshot) => pump.schedule(snapshot.payload()),
                    Err(e) => warn!(error = %e, "journal refresh failed, keeping last snapshot"),
                }
            }
        }
    }

    let state = pump.flush().await;
    info!(?state, "shutting down, autosave flushed");
    Ok(())
}

fn build_snapshot(cfg: &Config, clock: &dyn Clock) -> Result<DashboardSnapshot> {
    let raw = std::fs::read_to_string(&cfg.journal_file)
        .with_context(|| format!("reading journal file {}", cfg.journal_file))?;
    let events: Vec<TradeEvent> =
        serde_json::from_str(&raw).context("parsing journal file")?;

    // Checklist file is optional; no file means no plan for the day.
    let checklist: HashMap<String, bool> = std::fs::read_to_string(&cfg.checklist_file)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default();

    let today = clock.today();
    info!(events = events.len(), %today, "journal loaded");

    Ok(DashboardSnapshot::build(&events, &checklist, cfg, today))
}
