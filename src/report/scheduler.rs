//! Scheduled sales report emission.

use std::time::Duration;
use tokio::time::interval;

use super::SalesReport;

/// Emit a sales report as a log record on a fixed period.
///
/// Runs in its own tokio task for the life of the process. The first
/// interval tick fires immediately, so it is consumed up front to keep
/// startup quiet.
pub async fn run(period: Duration) {
    let mut tick = interval(period);
    tick.tick().await;

    tracing::info!(
        "[ReportScheduler] started (every {} seconds)",
        period.as_secs()
    );

    loop {
        tick.tick().await;
        let report = SalesReport::generate();
        tracing::info!("\n{}", report.render());
    }
}
