use crate::utils::error::{CopierError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(CopierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(CopierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_distinct_paths(field_name: &str, source: &Path, target: &Path) -> Result<()> {
    if source == target {
        return Err(CopierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: target.display().to_string(),
            reason: "Target must differ from the template".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CopierError::MissingConfigError {
        field: field_name.to_string(),
    })
}
