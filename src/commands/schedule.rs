use anyhow::Context;
use std::future::Future;
use std::sync::Arc;
use tokio::time::{self, Instant, MissedTickBehavior};

use swapi_sync_source::{HttpPageFetcher, PageFetcher};

use super::sync_once;
use crate::config::{ScheduleSettings, Settings};

/// Resync on a fixed interval until Ctrl-C.
pub async fn run_schedule(settings: &Settings, schedule: ScheduleSettings) -> anyhow::Result<()> {
    let fetcher = Arc::new(
        HttpPageFetcher::new(settings.request_timeout).context("Failed to create HTTP client")?,
    );

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received interrupt signal (Ctrl+C)"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    run_schedule_with(settings, schedule, fetcher, shutdown).await?;
    Ok(())
}

/// Resync through `fetcher` every `schedule.interval` until `shutdown`
/// completes. Returns the number of runs started.
///
/// A failed run is logged and the loop waits for the next tick; nothing is
/// retried early.
pub async fn run_schedule_with<F, S>(
    settings: &Settings,
    schedule: ScheduleSettings,
    fetcher: F,
    shutdown: S,
) -> anyhow::Result<usize>
where
    F: PageFetcher + Clone,
    S: Future<Output = ()>,
{
    tracing::info!(
        "Scheduling catalog sync every {:?} (run on start: {})",
        schedule.interval,
        schedule.run_on_start
    );

    let mut runs = 0;
    if schedule.run_on_start {
        runs += 1;
        run_scheduled(settings, fetcher.clone(), runs).await;
    }

    let mut ticker = time::interval_at(Instant::now() + schedule.interval, schedule.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    loop {
        if let Some(next) = chrono::Duration::from_std(schedule.interval)
            .ok()
            .and_then(|d| chrono::Utc::now().checked_add_signed(d))
        {
            tracing::info!("Next catalog sync at {next}");
        }

        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Stopping scheduler after {runs} runs");
                return Ok(runs);
            }
            _ = ticker.tick() => {
                runs += 1;
                run_scheduled(settings, fetcher.clone(), runs).await;
            }
        }
    }
}

async fn run_scheduled<F: PageFetcher>(settings: &Settings, fetcher: F, run: usize) {
    tracing::info!("Scheduled catalog sync #{run} starting");
    match sync_once(settings, fetcher).await {
        Ok(report) => tracing::info!(
            "Scheduled catalog sync #{run} finished: {} saved, {} skipped{}",
            report.total_saved(),
            report.total_skipped(),
            if report.is_partial() { " (partial)" } else { "" }
        ),
        Err(e) => tracing::error!("Scheduled catalog sync #{run} failed: {e:#}"),
    }
}
