pub mod template_pipeline;

pub use template_pipeline::TemplatePipeline;
