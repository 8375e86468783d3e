pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wordrank")]
#[command(about = "A small token frequency ranking tool")]
pub struct CliConfig {
    /// 直接在命令列提供文字，優先於 --source
    #[arg(long)]
    pub text: Option<String>,

    /// 文字來源：本地檔案路徑或 http(s) URL
    #[arg(long, default_value = "./input.txt")]
    pub source: String,

    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub top_n: i64,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// 要輸出的報表格式（csv, tsv, json），不指定則全部輸出
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source(&self) -> &str {
        &self.source
    }

    fn inline_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn top_n(&self) -> i64 {
        self.top_n
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.text.is_none() {
            if self.source.starts_with("http://") || self.source.starts_with("https://") {
                validation::validate_url("source", &self.source)?;
            } else {
                validation::validate_path("source", &self.source)?;
            }
        }

        validation::validate_top_n("top_n", self.top_n)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats)?;

        Ok(())
    }
}
