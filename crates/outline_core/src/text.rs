use serde::{Deserialize, Serialize};

/// Marker appended to truncated titles and previews.
pub const ELLIPSIS: char = '…';

/// Independent character limits for titles and previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLimits {
    pub title_max_len: usize,
    pub preview_max_len: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            title_max_len: 50,
            preview_max_len: 100,
        }
    }
}

/// Collapse every run of whitespace into one space and trim both ends.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Normalize `text`, then cut it to at most `max_len` characters.
///
/// Strings longer than the limit keep their first `max_len - 1` characters and
/// end in [`ELLIPSIS`].
pub fn truncate(text: &str, max_len: usize) -> String {
    let normalized = normalize_text(text);
    if max_len == 0 {
        return String::new();
    }
    if normalized.chars().count() <= max_len {
        return normalized;
    }
    let mut out: String = normalized.chars().take(max_len - 1).collect();
    out.push(ELLIPSIS);
    out
}
