use clap::Parser;
use gesture_relay::app::run_replay;
use gesture_relay::utils::{logger, validation::Validate};
use gesture_relay::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting gesture-relay CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    match run_replay(&config, &config.frames).await {
        Ok(summary) => {
            tracing::info!("✅ Relay finished: {} frames processed", summary.frames);
            for (label, count) in &summary.labels {
                tracing::info!("   {}: {}", label, count);
            }
        }
        Err(e) => {
            tracing::error!("❌ Relay failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
