use serde::{Deserialize, Serialize};

/// 單一 token 與其出現次數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFrequency {
    pub token: String,
    pub count: u64,
}

impl TokenFrequency {
    pub fn new(token: impl Into<String>, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

/// 整體統計摘要，會序列化為 summary.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankSummary {
    pub total_tokens: u64,
    pub distinct_tokens: u64,
    pub requested_top_n: u64,
    pub ranking: Vec<TokenFrequency>,
    pub generated_at: String,
}

#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub ranking: Vec<TokenFrequency>,
    pub summary: RankSummary,
    pub csv_output: String,
    pub tsv_output: String,
}
