use clap::Parser;
use wordrank::domain::ports::ConfigProvider;
use wordrank::utils::{logger, validation::Validate};
use wordrank::{LocalStorage, RankEngine, RankPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-rank")]
#[command(about = "Token frequency ranking driven by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "wordrank.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override top-n setting from config
    #[arg(long, allow_negative_numbers = true)]
    top_n: Option<i64>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based ranking tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 套用命令列覆寫
    if let Some(top_n) = args.top_n {
        config.analysis.top_n = top_n;
        tracing::info!("🔧 top-n overridden to: {}", top_n);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = RankPipeline::new(storage, config);
    let engine = RankEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Ranking completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Ranking failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Pipeline: {} (v{})", config.pipeline.name, config.pipeline.version);
    match config.source.text {
        Some(ref text) => tracing::info!("📋 Source: inline text ({} bytes)", text.len()),
        None => tracing::info!(
            "📋 Source: {} ({})",
            config.source.location.as_deref().unwrap_or("-"),
            config.source.r#type
        ),
    }
    tracing::info!("📋 Top-n: {}", config.analysis.top_n);
    tracing::info!(
        "📋 Output: {} [{}]",
        config.load.output_path,
        config.load.output_formats.join(", ")
    );
}
