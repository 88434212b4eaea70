use crate::core::catalog::JobCatalog;
use crate::domain::model::{MatchOutcome, MatchRequest};
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
    fn roles_file(&self) -> &str;
    fn companies_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn compress_output(&self) -> bool;
    fn archive_name(&self) -> &str;
    fn request(&self) -> &MatchRequest;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<JobCatalog>;
    async fn transform(&self, catalog: &JobCatalog) -> Result<MatchOutcome>;
    async fn load(&self, outcome: MatchOutcome) -> Result<String>;
}
