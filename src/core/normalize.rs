//! Text normalization applied to the template before it is written.

/// Strips all trailing whitespace and appends exactly one `\n`.
///
/// Whitespace-only input normalizes to a single `"\n"`.
pub fn normalize_trailing_whitespace(content: &str) -> String {
    let trimmed = content.trim_end();
    let mut normalized = String::with_capacity(trimmed.len() + 1);
    normalized.push_str(trimmed);
    normalized.push('\n');
    normalized
}

/// Number of lines in `content`. A final line terminator does not open a new line.
pub fn count_lines(content: &str) -> usize {
    content.lines().count()
}
