use crate::core::cycle::CycleOrchestrator;
use crate::core::{Prober, ReportSink};
use std::time::Duration;
use tokio::sync::watch;

pub const DEFAULT_CYCLE_INTERVAL: Duration = Duration::from_secs(15);

/// Repeats monitoring cycles on a fixed interval until stopped.
///
/// The interval is measured from cycle completion, so cycles never overlap
/// and one cycle's aggregator is never visible to the next.
pub struct Scheduler<P: Prober + 'static, S: ReportSink> {
    orchestrator: CycleOrchestrator<P, S>,
    interval: Duration,
    shutdown: watch::Receiver<bool>,
}

pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
}

impl SchedulerHandle {
    /// Stops the scheduler once the cycle in progress completes.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }
}

impl<P: Prober + 'static, S: ReportSink> Scheduler<P, S> {
    pub fn new(
        orchestrator: CycleOrchestrator<P, S>,
        interval: Duration,
    ) -> (Self, SchedulerHandle) {
        let (tx, rx) = watch::channel(false);
        (
            Self {
                orchestrator,
                interval,
                shutdown: rx,
            },
            SchedulerHandle { shutdown: tx },
        )
    }

    pub async fn run(mut self) {
        loop {
            tracing::info!("Starting monitoring cycle");
            let stats = self.orchestrator.run_cycle().await;
            tracing::debug!(domains = stats.len(), "Cycle complete");

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                // Fires on stop() and on a dropped handle.
                _ = self.shutdown.changed() => {
                    tracing::info!("Scheduler stopped");
                    break;
                }
            }
        }
    }
}
