use crate::core::{DomainStats, Endpoint};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
struct DomainCounters {
    success: AtomicU64,
    total: AtomicU64,
}

/// Per-domain probe counters for one monitoring cycle.
///
/// The key set is fixed at construction: every domain derived from the
/// cycle's endpoint list gets a zeroed entry before any probe runs, so
/// concurrent probes only ever touch the atomic counters. Lookups for a
/// configured endpoint's domain cannot miss.
#[derive(Debug)]
pub struct StatsAggregator {
    domains: HashMap<String, DomainCounters>,
}

impl StatsAggregator {
    pub fn for_endpoints(endpoints: &[Endpoint]) -> Self {
        let mut domains = HashMap::new();
        for endpoint in endpoints {
            domains
                .entry(endpoint.domain())
                .or_insert_with(DomainCounters::default);
        }
        Self { domains }
    }

    /// Records one probe outcome against the endpoint's domain.
    pub fn record(&self, domain: &str, success: bool) {
        match self.domains.get(domain) {
            Some(counters) => {
                counters.total.fetch_add(1, Ordering::Relaxed);
                if success {
                    counters.success.fetch_add(1, Ordering::Relaxed);
                }
            }
            None => {
                // Pre-population covers every configured endpoint, so this
                // only fires for a domain that was never in the cycle.
                tracing::warn!(domain, "Dropping probe outcome for unknown domain");
            }
        }
    }

    /// Snapshot of all counters, keyed in lexicographic domain order.
    ///
    /// Callers must wait for every probe of the cycle to finish first.
    pub fn snapshot(&self) -> BTreeMap<String, DomainStats> {
        self.domains
            .iter()
            .map(|(domain, counters)| {
                (
                    domain.clone(),
                    DomainStats {
                        success: counters.success.load(Ordering::Relaxed),
                        total: counters.total.load(Ordering::Relaxed),
                    },
                )
            })
            .collect()
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }
}
