use crate::core::{DomainStats, ReportSink};
use std::collections::BTreeMap;

/// Formats quiesced cycle stats into one availability line per domain.
pub struct Reporter<S: ReportSink> {
    sink: S,
}

impl<S: ReportSink> Reporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn report(&self, stats: &BTreeMap<String, DomainStats>) {
        for (domain, stat) in stats {
            self.sink.emit(&format!(
                "{} has {}% availability",
                domain,
                stat.availability_percent()
            ));
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}
