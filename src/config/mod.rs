pub mod yaml_config;

use crate::core::scheduler::DEFAULT_CYCLE_INTERVAL;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "uptrack")]
#[command(about = "HTTP endpoint availability monitor with per-domain reporting")]
pub struct CliConfig {
    /// Path to the YAML endpoints file
    pub config: String,

    /// Seconds to wait between monitoring cycles
    #[arg(long, default_value_t = DEFAULT_CYCLE_INTERVAL.as_secs())]
    pub interval_secs: u64,

    /// Run a single monitoring cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON instead of human-readable lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_positive_number("interval_secs", self.interval_secs, 1)
    }
}
