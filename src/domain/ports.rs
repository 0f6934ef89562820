use crate::domain::model::{RawPages, ResultsBundle};
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
    fn pools_url(&self) -> &str;
    fn lotto_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawPages>;
    async fn transform(&self, pages: RawPages) -> Result<ResultsBundle>;
    async fn load(&self, bundle: ResultsBundle) -> Result<String>;
}
