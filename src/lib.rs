pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{yaml_config::YamlConfig, CliConfig};
pub use core::cycle::CycleOrchestrator;
pub use core::probe::HttpProber;
pub use core::report::{Reporter, StdoutSink};
pub use core::scheduler::{Scheduler, SchedulerHandle, DEFAULT_CYCLE_INTERVAL};
pub use core::stats::StatsAggregator;
pub use domain::model::{extract_domain, DomainStats, Endpoint, ProbeOutcome};
pub use domain::ports::{Prober, ReportSink};
pub use utils::error::{MonitorError, Result};
