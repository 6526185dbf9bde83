use crate::domain::model::{Endpoint, ProbeOutcome};
use async_trait::async_trait;

#[async_trait]
pub trait Prober: Send + Sync {
    /// Performs exactly one probe attempt against the endpoint.
    async fn probe(&self, endpoint: &Endpoint) -> ProbeOutcome;
}

pub trait ReportSink: Send + Sync {
    fn emit(&self, line: &str);
}
