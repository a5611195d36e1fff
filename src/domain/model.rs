use std::fmt;
use std::path::PathBuf;

/// Template text as read from disk, already decoded as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContent {
    pub content: String,
    pub line_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub target_path: PathBuf,
    pub line_count: usize,
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} ({} lines)",
            self.target_path.display(),
            self.line_count
        )
    }
}
