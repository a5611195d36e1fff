use crate::core::{CopyReport, Pipeline};
use crate::utils::error::Result;

/// Runs a [`Pipeline`] once: extract, transform, load.
pub struct Copier<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Copier<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<CopyReport> {
        tracing::debug!("Starting template copy");

        let source = self.pipeline.extract().await?;
        tracing::info!(
            "Read template {} ({} bytes)",
            source.path.display(),
            source.content.len()
        );

        let normalized = self.pipeline.transform(source).await?;
        tracing::debug!("Normalized content has {} lines", normalized.line_count);

        let report = self.pipeline.load(normalized).await?;
        tracing::info!("{}", report);

        Ok(report)
    }
}
