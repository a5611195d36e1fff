pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use app::pipelines::TemplatePipeline;
pub use config::{local::LocalStorage, CopierConfig};
pub use crate::core::copier::Copier;
pub use domain::model::CopyReport;
pub use utils::error::{CopierError, Result};

/// Copies and normalizes the configured template, with paths resolved against `storage`.
pub async fn run_with_storage(storage: LocalStorage, config: CopierConfig) -> Result<CopyReport> {
    let pipeline = TemplatePipeline::new(storage, config);
    Copier::new(pipeline).run().await
}

/// Copies the template relative to the current working directory.
pub async fn run(config: CopierConfig) -> Result<CopyReport> {
    run_with_storage(LocalStorage::working_dir(), config).await
}
