use clap::Parser;
use std::time::Duration;
use uptrack::utils::{logger, validation::Validate};
use uptrack::{CliConfig, CycleOrchestrator, HttpProber, Scheduler, StdoutSink, YamlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting uptrack");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 載入端點清單
    let endpoints = match YamlConfig::from_file(&config.config) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", config.config, e);
            eprintln!("💡 Make sure the file exists and is a valid YAML endpoint list");
            std::process::exit(1);
        }
    };

    if let Err(e) = endpoints.validate() {
        tracing::error!("❌ Endpoint validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "✅ Loaded {} endpoints from {}",
        endpoints.endpoints.len(),
        config.config
    );

    let prober = HttpProber::new()?;
    let orchestrator = CycleOrchestrator::new(prober, endpoints.endpoints, StdoutSink);

    if config.once {
        orchestrator.run_cycle().await;
        return Ok(());
    }

    let interval = Duration::from_secs(config.interval_secs);
    let (scheduler, handle) = Scheduler::new(orchestrator, interval);
    let scheduler_task = tokio::spawn(scheduler.run());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Received Ctrl-C, stopping after the current cycle");
    handle.stop();
    scheduler_task.await?;

    Ok(())
}
