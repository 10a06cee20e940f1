use tracing::{debug, error, info};

use crate::config::Settings;
use crate::error::AppResult;
use crate::shutdown::ShutdownReceiver;
use crate::stats::StatsFetcher;
use crate::statsd::MetricEmitter;

use super::report::report_cycle;

/// One fetch-then-emit pass. Nothing is sent when the fetch fails.
///
/// # Errors
///
/// Returns the fetch or transport error that aborted the cycle.
pub async fn run_cycle(fetcher: &StatsFetcher, emitter: &MetricEmitter) -> AppResult<usize> {
    let table = fetcher.fetch().await?;
    debug!("Fetched {} stats rows from {}", table.len(), fetcher.url());
    let sent = emitter.emit(table.rows()).await?;
    Ok(sent)
}

/// Runs cycles every `settings.interval` until a shutdown is broadcast.
///
/// A failed cycle is logged and the loop carries on with the next interval.
/// In single-shot mode exactly one cycle runs and its error is returned.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built, or when the only
/// cycle of a single-shot run fails.
pub async fn run(settings: &Settings, mut shutdown_rx: ShutdownReceiver) -> AppResult<()> {
    let fetcher = StatsFetcher::new(&settings.source)?;
    let emitter = MetricEmitter::new(
        &settings.namespace,
        settings.sink.clone(),
        settings.fields.clone(),
    );
    info!(
        "Polling {} every {:?}, sending to {} as '{}'",
        fetcher.url(),
        settings.interval,
        emitter.target(),
        emitter.namespace()
    );

    loop {
        let outcome = tokio::select! {
            _ = shutdown_rx.recv() => {
                info!("Shutdown requested; abandoning current cycle");
                return Ok(());
            }
            outcome = run_cycle(&fetcher, &emitter) => outcome,
        };

        match outcome {
            Ok(count) => report_cycle(count),
            Err(err) => {
                if settings.once {
                    return Err(err);
                }
                error!("Cycle failed: {}", err);
            }
        }

        if settings.once {
            return Ok(());
        }

        tokio::select! {
            _ = shutdown_rx.recv() => {
                info!("Shutdown requested; exiting");
                return Ok(());
            }
            () = tokio::time::sleep(settings.interval) => {}
        }
    }
}
