use crate::core::normalize::{count_lines, normalize_trailing_whitespace};
use crate::core::{ConfigProvider, CopyReport, NormalizedContent, Pipeline, Storage, TemplateSource};
use crate::utils::error::{CopierError, Result};

pub struct TemplatePipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> TemplatePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TemplatePipeline<S, C> {
    async fn extract(&self) -> Result<TemplateSource> {
        let path = self.config.template_path();

        if !self.storage.exists(path).await? {
            return Err(CopierError::TemplateNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = self.storage.read_file(path).await?;
        let content = String::from_utf8(bytes).map_err(|source| CopierError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(TemplateSource {
            path: path.to_path_buf(),
            content,
        })
    }

    async fn transform(&self, source: TemplateSource) -> Result<NormalizedContent> {
        let content = normalize_trailing_whitespace(&source.content);
        let line_count = count_lines(&content);

        Ok(NormalizedContent {
            content,
            line_count,
        })
    }

    async fn load(&self, content: NormalizedContent) -> Result<CopyReport> {
        let target = self.config.target_path();

        tracing::debug!(
            "Writing {} bytes to {}",
            content.content.len(),
            target.display()
        );
        self.storage
            .write_file(target, content.content.as_bytes())
            .await?;

        Ok(CopyReport {
            target_path: target.to_path_buf(),
            line_count: content.line_count,
        })
    }
}
