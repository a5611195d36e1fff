pub mod copier;
pub mod normalize;

pub use crate::domain::model::{CopyReport, NormalizedContent, TemplateSource};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
