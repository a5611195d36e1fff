use crate::domain::model::{CopyReport, NormalizedContent, TemplateSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = Result<bool>> + Send;
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Creates or truncates `path`. Missing parent directories are an error.
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn template_path(&self) -> &Path;
    fn target_path(&self) -> &Path;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<TemplateSource>;
    async fn transform(&self, source: TemplateSource) -> Result<NormalizedContent>;
    async fn load(&self, content: NormalizedContent) -> Result<CopyReport>;
}
