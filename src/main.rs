use clap::Parser;
use wordrank::utils::{logger, validation::Validate};
use wordrank::{CliConfig, LocalStorage, RankEngine, RankPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wordrank CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 建立儲存與 pipeline
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = RankPipeline::new(storage, config);

    // 建立引擎並執行
    let engine = RankEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Ranking completed successfully!");
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("✅ Ranking completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤資訊
            tracing::error!(
                "❌ Ranking failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出使用者看得懂的錯誤訊息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 依錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                wordrank::utils::error::ErrorSeverity::Low => 0,
                wordrank::utils::error::ErrorSeverity::Medium => 2,
                wordrank::utils::error::ErrorSeverity::High => 1,
                wordrank::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
