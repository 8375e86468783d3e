use crate::core::{frequency, ranking, tokenizer::Tokenizer};
use crate::core::{ConfigProvider, Pipeline, RankSummary, ReportBundle, Storage, TokenFrequency};
use crate::utils::error::{RankError, Result};
use reqwest::Client;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct RankPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> RankPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    fn wants_format(&self, format: &str) -> bool {
        let formats = self.config.output_formats();
        formats.is_empty() || formats.iter().any(|f| f == format)
    }

    /// 以 csv crate 產生分隔檔輸出（CSV 或 TSV）
    fn render_delimited(entries: &[TokenFrequency], delimiter: u8) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());

        writer.write_record(["token", "count"])?;
        for entry in entries {
            writer.write_record([entry.token.as_str(), entry.count.to_string().as_str()])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| RankError::ProcessingError {
                message: format!("Failed to flush report writer: {}", e),
            })?;

        String::from_utf8(bytes).map_err(|e| RankError::ProcessingError {
            message: format!("Rendered report is not valid UTF-8: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RankPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        // 命令列直接給的文字優先
        if let Some(text) = self.config.inline_text() {
            tracing::debug!("Using inline text input ({} bytes)", text.len());
            return Ok(text.to_string());
        }

        let source = self.config.source();

        if source.starts_with("http://") || source.starts_with("https://") {
            tracing::debug!("Fetching text from: {}", source);
            let response = self.client.get(source).send().await?;

            tracing::debug!("Source response status: {}", response.status());
            if !response.status().is_success() {
                return Err(RankError::ProcessingError {
                    message: format!("Source request failed with status {}", response.status()),
                });
            }

            return Ok(response.text().await?);
        }

        tracing::debug!("Reading text from file: {}", source);
        let bytes = self.storage.read_file(source).await?;
        String::from_utf8(bytes).map_err(|e| RankError::ProcessingError {
            message: format!("Source is not valid UTF-8: {}", e),
        })
    }

    async fn transform(&self, text: String) -> Result<ReportBundle> {
        let tokenizer = Tokenizer::new(&text);
        let total_tokens = tokenizer.total_count();

        let counts = frequency::count_tokens(tokenizer.tokens());
        let distinct_tokens = counts.len() as u64;

        let requested = self.config.top_n();
        let ranking = ranking::rank_counts(&counts, requested)?;

        tracing::debug!(
            "Ranked {} of {} distinct tokens ({} total)",
            ranking.len(),
            distinct_tokens,
            total_tokens
        );

        let csv_output = Self::render_delimited(&ranking, b',')?;
        let tsv_output = Self::render_delimited(&ranking, b'\t')?;

        let summary = RankSummary {
            total_tokens,
            distinct_tokens,
            requested_top_n: requested as u64,
            ranking: ranking.clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        };

        Ok(ReportBundle {
            ranking,
            summary,
            csv_output,
            tsv_output,
        })
    }

    async fn load(&self, report: ReportBundle) -> Result<String> {
        let output_path = format!("{}/wordrank_output.zip", self.config.output_path());

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            if self.wants_format("csv") {
                zip.start_file::<_, ()>("ranking.csv", FileOptions::default())?;
                zip.write_all(report.csv_output.as_bytes())?;
            }

            if self.wants_format("tsv") {
                zip.start_file::<_, ()>("ranking.tsv", FileOptions::default())?;
                zip.write_all(report.tsv_output.as_bytes())?;
            }

            if self.wants_format("json") {
                zip.start_file::<_, ()>("summary.json", FileOptions::default())?;
                let json_data = serde_json::to_string_pretty(&report.summary)?;
                zip.write_all(json_data.as_bytes())?;
            }

            // 完成並取回底層 Vec<u8>
            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file("wordrank_output.zip", &zip_data).await?;

        Ok(output_path)
    }
}
