#[cfg(feature = "cli")]
pub mod cli;
pub mod local;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

/// Template shipped with the crate, located at build time.
pub const DEFAULT_TEMPLATE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/contacts-import-modal.tsx.template"
);

/// Generated artifact, relative to the working directory.
pub const DEFAULT_TARGET_PATH: &str = "app/(dashboard)/contacts/contacts-import-modal.tsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopierConfig {
    pub template_path: PathBuf,
    pub target_path: PathBuf,
}

impl Default for CopierConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
        }
    }
}

impl CopierConfig {
    pub fn new(template_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            target_path: target_path.into(),
        }
    }

    /// Resolves paths with precedence: explicit override, then TOML, then built-in default.
    pub fn layered(
        file: Option<&TomlConfig>,
        template_override: Option<PathBuf>,
        target_override: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::default();

        let template_path = template_override
            .or_else(|| file.and_then(|f| f.template_path()).map(Path::to_path_buf))
            .unwrap_or(defaults.template_path);
        let target_path = target_override
            .or_else(|| file.and_then(|f| f.target_path()).map(Path::to_path_buf))
            .unwrap_or(defaults.target_path);

        Self {
            template_path,
            target_path,
        }
    }
}

impl ConfigProvider for CopierConfig {
    fn template_path(&self) -> &Path {
        &self.template_path
    }

    fn target_path(&self) -> &Path {
        &self.target_path
    }
}

impl Validate for CopierConfig {
    fn validate(&self) -> Result<()> {
        validate_path("template.path", &self.template_path)?;
        validate_path("target.path", &self.target_path)?;
        validate_distinct_paths("target.path", &self.template_path, &self.target_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_shipped_template() {
        let config = CopierConfig::default();
        assert!(config
            .template_path
            .ends_with("templates/contacts-import-modal.tsx.template"));
        assert!(config.template_path.is_absolute());
        assert_eq!(
            config.target_path,
            PathBuf::from("app/(dashboard)/contacts/contacts-import-modal.tsx")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layered_precedence() {
        let file = TomlConfig::from_toml_str(
            "[template]\npath = \"toml.template\"\n[target]\npath = \"toml-target.tsx\"\n",
        )
        .unwrap();

        let from_file = CopierConfig::layered(Some(&file), None, None);
        assert_eq!(from_file, CopierConfig::new("toml.template", "toml-target.tsx"));

        let overridden =
            CopierConfig::layered(Some(&file), None, Some(PathBuf::from("flag-target.tsx")));
        assert_eq!(
            overridden,
            CopierConfig::new("toml.template", "flag-target.tsx")
        );

        assert_eq!(CopierConfig::layered(None, None, None), CopierConfig::default());
    }

    #[test]
    fn test_same_template_and_target_rejected() {
        let config = CopierConfig::new("same.tsx", "same.tsx");
        assert!(config.validate().is_err());
    }
}
