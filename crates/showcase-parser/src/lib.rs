//! Showcase Parser Library
//!
//! Turns Markdown content files into frontmatter plus rendered HTML.

pub mod markdown;

use std::path::Path;

pub use markdown::MarkdownParser;
use showcase_core::ParsedContent;
use thiserror::Error;

/// Parser errors.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Markdown parsing error.
    #[error("markdown error: {0}")]
    Markdown(#[from] markdown::MarkdownError),

    /// Unknown file extension.
    #[error("unknown file extension: {0}")]
    UnknownExtension(String),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// File extensions recognized as content.
pub const CONTENT_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Whether a path has a content file extension.
pub fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            CONTENT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Parse a content file, checking its extension first.
pub fn parse(parser: &MarkdownParser, content: &str, path: &Path) -> Result<ParsedContent> {
    if !is_content_file(path) {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        return Err(ParserError::UnknownExtension(ext));
    }

    Ok(parser.parse(content, path)?)
}
