use crate::core::ConfigProvider;
use crate::utils::error::{RankError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub analysis: AnalysisConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// "file"、"url" 或 "inline"
    pub r#type: String,
    /// 檔案路徑或 http(s) URL；inline 時可留空
    pub location: Option<String>,
    /// inline 模式直接提供的文字
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub top_n: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RankError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RankError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CORPUS_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        match self.source.r#type.as_str() {
            "inline" => {
                if self.source.text.is_none() {
                    return Err(RankError::MissingConfigError {
                        field: "source.text".to_string(),
                    });
                }
            }
            "url" => {
                let location = require_location(&self.source.location)?;
                validation::validate_url("source.location", location)?;
            }
            "file" => {
                let location = require_location(&self.source.location)?;
                validation::validate_path("source.location", location)?;
            }
            other => {
                return Err(RankError::InvalidConfigValueError {
                    field: "source.type".to_string(),
                    value: other.to_string(),
                    reason: "Supported source types: file, url, inline".to_string(),
                });
            }
        }

        validation::validate_top_n("analysis.top_n", self.analysis.top_n)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

fn require_location(location: &Option<String>) -> Result<&str> {
    location
        .as_deref()
        .ok_or_else(|| RankError::MissingConfigError {
            field: "source.location".to_string(),
        })
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        self.source.location.as_deref().unwrap_or("")
    }

    fn inline_text(&self) -> Option<&str> {
        self.source.text.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn top_n(&self) -> i64 {
        self.analysis.top_n
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
