use crate::domain::model::ReportBundle;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// 文字來源：本地檔案路徑或 http(s) URL
    fn source(&self) -> &str;
    /// 命令列直接給的文字，優先於 source
    fn inline_text(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn top_n(&self) -> i64;
    /// 要輸出的報表格式，空陣列代表全部
    fn output_formats(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, text: String) -> Result<ReportBundle>;
    async fn load(&self, report: ReportBundle) -> Result<String>;
}
