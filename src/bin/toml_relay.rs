use clap::Parser;
use gesture_relay::app::run_replay;
use gesture_relay::core::ConfigProvider;
use gesture_relay::utils::{logger, validation::Validate};
use gesture_relay::TomlConfig;

#[derive(Parser)]
#[command(name = "toml-relay")]
#[command(about = "Gesture relay with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "gesture-relay.toml")]
    config: String,

    /// Override the frame input from config (- for stdin)
    #[arg(long)]
    frames: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Validate the configuration and exit
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(frames) = args.frames {
        config.source.frames = Some(frames);
    }

    logger::init_logger(args.verbose || config.verbose(), config.log_json());
    tracing::info!("🚀 Starting TOML-based gesture relay");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Endpoint: {}", config.report_endpoint());
    tracing::info!("   Frames: {}", config.frames());
    tracing::info!("   Timeout: {:?}", config.request_timeout());
    tracing::info!("   Shutdown grace: {:?}", config.shutdown_grace());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - configuration is valid, nothing replayed");
        return Ok(());
    }

    let frames = config.frames().to_string();
    match run_replay(&config, &frames).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Relay finished: {} frames, {} reports dispatched",
                summary.frames,
                summary.reports_dispatched
            );
        }
        Err(e) => {
            tracing::error!("❌ Relay failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
