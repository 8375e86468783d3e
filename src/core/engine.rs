use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct RankEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RankEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// 依序執行 extract -> transform -> load，回傳報表輸出路徑
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting ranking pipeline...");

        tracing::info!("Extracting text...");
        let text = self.pipeline.extract().await?;
        tracing::info!("Extracted {} bytes", text.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Building token ranking...");
        let report = self.pipeline.transform(text).await?;
        tracing::info!(
            "Ranked {} of {} distinct tokens",
            report.ranking.len(),
            report.summary.distinct_tokens
        );
        self.monitor.log_stats("Transform");

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Report saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
