//! Markdown parser using pulldown-cmark.

use std::path::Path;

use pulldown_cmark::{Event, Options, Parser, html};
use showcase_core::{ParsedContent, error::CoreError, frontmatter::parse_frontmatter};
use thiserror::Error;

/// Markdown parsing errors.
#[derive(Debug, Error)]
pub enum MarkdownError {
    /// Failed to parse frontmatter.
    #[error("frontmatter error: {0}")]
    Frontmatter(#[from] CoreError),
}

/// Result type for markdown operations.
pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Markdown parser producing HTML fragments.
#[derive(Debug, Clone)]
pub struct MarkdownParser {
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser {
    /// Create a new markdown parser with default options.
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self { options }
    }

    /// Parse markdown content with frontmatter.
    pub fn parse(&self, content: &str, path: &Path) -> Result<ParsedContent> {
        let (frontmatter, body) = parse_frontmatter(content, path)?;
        let html = self.render(&body);

        Ok(ParsedContent {
            frontmatter,
            html,
            raw: body,
        })
    }

    /// Render a markdown body to HTML.
    pub fn render(&self, body: &str) -> String {
        let parser = Parser::new_ext(body, self.options).map(|event| match event {
            // Soft breaks render as spaces so paragraphs reflow predictably.
            Event::SoftBreak => Event::Text(" ".into()),
            other => other,
        });

        let mut output = String::with_capacity(body.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}
