use crate::core::report::Reporter;
use crate::core::stats::StatsAggregator;
use crate::core::{DomainStats, Endpoint, Prober, ReportSink};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Drives one complete measurement cycle over the configured endpoints.
///
/// Each cycle gets a fresh, pre-populated aggregator, dispatches one probe
/// task per endpoint, waits for every probe to finish and only then hands
/// the quiesced stats to the reporter. A failing endpoint never aborts the
/// cycle for the others.
pub struct CycleOrchestrator<P: Prober + 'static, S: ReportSink> {
    prober: Arc<P>,
    endpoints: Arc<[Endpoint]>,
    reporter: Reporter<S>,
}

impl<P: Prober + 'static, S: ReportSink> CycleOrchestrator<P, S> {
    pub fn new(prober: P, endpoints: Vec<Endpoint>, sink: S) -> Self {
        Self {
            prober: Arc::new(prober),
            endpoints: endpoints.into(),
            reporter: Reporter::new(sink),
        }
    }

    pub async fn run_cycle(&self) -> BTreeMap<String, DomainStats> {
        let aggregator = Arc::new(StatsAggregator::for_endpoints(&self.endpoints));
        tracing::debug!(
            endpoints = self.endpoints.len(),
            domains = aggregator.domain_count(),
            "Dispatching probes"
        );

        let mut probes = JoinSet::new();
        for endpoint in self.endpoints.iter() {
            let endpoint = endpoint.clone();
            let prober = Arc::clone(&self.prober);
            let aggregator = Arc::clone(&aggregator);
            probes.spawn(async move {
                let outcome = prober.probe(&endpoint).await;
                aggregator.record(&endpoint.domain(), outcome.success);
            });
        }

        // The reporter must only ever see a fully quiesced aggregator.
        while let Some(joined) = probes.join_next().await {
            if let Err(e) = joined {
                tracing::warn!("Probe task did not complete: {}", e);
            }
        }

        let stats = aggregator.snapshot();
        self.reporter.report(&stats);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProbeOutcome;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    struct FnProber<F: Fn(&Endpoint) -> bool + Send + Sync>(F);

    #[async_trait]
    impl<F: Fn(&Endpoint) -> bool + Send + Sync> Prober for FnProber<F> {
        async fn probe(&self, endpoint: &Endpoint) -> ProbeOutcome {
            let success = (self.0)(endpoint);
            ProbeOutcome {
                success,
                latency: Duration::from_millis(1),
                status: if success { Some(200) } else { Some(500) },
                error: None,
            }
        }
    }

    #[derive(Clone, Default)]
    struct VecSink {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl VecSink {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl ReportSink for VecSink {
        fn emit(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }
    }

    fn endpoint(url: &str) -> Endpoint {
        Endpoint {
            name: url.to_string(),
            url: url.to_string(),
            method: String::new(),
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    #[tokio::test]
    async fn test_all_probes_succeeding_report_full_availability() {
        let sink = VecSink::default();
        let orchestrator = CycleOrchestrator::new(
            FnProber(|_: &Endpoint| true),
            vec![endpoint("http://x.com/a"), endpoint("http://x.com/b")],
            sink.clone(),
        );

        let stats = orchestrator.run_cycle().await;

        assert_eq!(stats["x.com"], DomainStats { success: 2, total: 2 });
        assert_eq!(sink.lines(), vec!["x.com has 100% availability".to_string()]);
    }

    #[tokio::test]
    async fn test_one_failing_endpoint_does_not_abort_the_cycle() {
        let sink = VecSink::default();
        let orchestrator = CycleOrchestrator::new(
            FnProber(|e: &Endpoint| !e.url.contains("/broken")),
            vec![
                endpoint("http://x.com/a"),
                endpoint("http://x.com/broken"),
                endpoint("http://x.com/b"),
                endpoint("http://x.com/c"),
            ],
            sink.clone(),
        );

        let stats = orchestrator.run_cycle().await;

        assert_eq!(stats["x.com"], DomainStats { success: 3, total: 4 });
        assert_eq!(sink.lines(), vec!["x.com has 75% availability".to_string()]);
    }

    #[tokio::test]
    async fn test_domains_are_pooled_and_reported_in_order() {
        let sink = VecSink::default();
        let orchestrator = CycleOrchestrator::new(
            FnProber(|e: &Endpoint| e.domain() == "alpha.com"),
            vec![
                endpoint("http://zeta.com/x"),
                endpoint("http://alpha.com/a"),
                endpoint("http://alpha.com/b"),
            ],
            sink.clone(),
        );

        let stats = orchestrator.run_cycle().await;

        assert_eq!(stats["alpha.com"], DomainStats { success: 2, total: 2 });
        assert_eq!(stats["zeta.com"], DomainStats { success: 0, total: 1 });
        assert_eq!(
            sink.lines(),
            vec![
                "alpha.com has 100% availability".to_string(),
                "zeta.com has 0% availability".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_every_reported_domain_has_at_least_one_probe() {
        let orchestrator = CycleOrchestrator::new(
            FnProber(|_: &Endpoint| true),
            vec![
                endpoint("http://a.com/1"),
                endpoint("http://b.com/1"),
                endpoint("http://b.com/2"),
            ],
            VecSink::default(),
        );

        let stats = orchestrator.run_cycle().await;

        for stat in stats.values() {
            assert!(stat.total >= 1);
            assert!(stat.success <= stat.total);
        }
    }

    #[tokio::test]
    async fn test_cycles_are_independent() {
        let sink = VecSink::default();
        let orchestrator = CycleOrchestrator::new(
            FnProber(|e: &Endpoint| !e.url.contains("/broken")),
            vec![
                endpoint("http://x.com/a"),
                endpoint("http://x.com/broken"),
            ],
            sink.clone(),
        );

        let first = orchestrator.run_cycle().await;
        let second = orchestrator.run_cycle().await;

        // Counters reset each cycle instead of accumulating.
        assert_eq!(first, second);
        assert_eq!(first["x.com"], DomainStats { success: 1, total: 2 });
        assert_eq!(
            sink.lines(),
            vec![
                "x.com has 50% availability".to_string(),
                "x.com has 50% availability".to_string(),
            ]
        );
    }
}
