//! Content types and structures.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    path::PathBuf,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::frontmatter::Frontmatter;

/// Parsed content with metadata and rendered HTML.
#[derive(Debug, Clone)]
pub struct ParsedContent {
    /// Parsed frontmatter metadata.
    pub frontmatter: Frontmatter,

    /// Rendered HTML content.
    pub html: String,

    /// Raw source content (without frontmatter).
    pub raw: String,
}

/// A content tag.
///
/// Tags compare, sort and hash by their canonical string, so "Dark Mode" and
/// "dark-mode" are the same tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Create a tag from its display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Display name as written by the author.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase, dash-separated form used for ordering and URLs.
    pub fn canonical(&self) -> String {
        slugify(&self.name)
    }

    /// URL path of the tag details page.
    pub fn path(&self) -> String {
        format!("/tags/{}", self.canonical())
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Tag {}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

/// A dated entry inside a section, such as a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Section identifier (first path component below the content dir).
    pub section: String,

    /// Path below the section, without extension.
    pub slug: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Publication date.
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Rendered HTML body.
    #[serde(default)]
    pub body: String,

    /// Source file path.
    #[serde(default)]
    pub source_path: Option<PathBuf>,
}

impl Item {
    /// Create an item with an empty body and no tags.
    pub fn new(
        section: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            section: section.into(),
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            date,
            tags: Vec::new(),
            body: String::new(),
            source_path: None,
        }
    }

    /// Replace the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Tag::new).collect();
        self
    }

    /// Replace the body HTML.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// URL path for this item.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.section, self.slug)
    }

    /// Whether the item carries a tag.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A free-standing page such as `/privacy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Rendered HTML body.
    #[serde(default)]
    pub body: String,
}

impl Page {
    /// URL path for this page.
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// Generate a URL-safe slug from a string.
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Turn a section id or file stem into a display title.
pub fn title_case(s: &str) -> String {
    s.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust & Go"), "rust-go");
        assert_eq!(slugify("  multiple   spaces  "), "multiple-spaces");
        assert_eq!(slugify("CamelCase"), "camelcase");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("posts"), "Posts");
        assert_eq!(title_case("release-notes"), "Release Notes");
        assert_eq!(title_case("dev_log"), "Dev Log");
    }

    #[test]
    fn test_tag_identity_uses_canonical_form() {
        let a = Tag::new("Dark Mode");
        let b = Tag::new("dark-mode");

        assert_eq!(a, b);
        assert_eq!(a.canonical(), "dark-mode");
        assert_eq!(a.path(), "/tags/dark-mode");
        assert_eq!(a.name(), "Dark Mode");

        let set: BTreeSet<_> = [a, b, Tag::new("news")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_tags_sort_lexicographically() {
        let mut tags = vec![Tag::new("b"), Tag::new("a"), Tag::new("c")];
        tags.sort();
        let names: Vec<_> = tags.iter().map(Tag::name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_item_path_and_tags() {
        let date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let item = Item::new("posts", "launch", "Launch", date).with_tags(["News", "release"]);

        assert_eq!(item.path(), "/posts/launch");
        assert!(item.has_tag(&Tag::new("news")));
        assert!(!item.has_tag(&Tag::new("rust")));
    }

    #[test]
    fn test_page_path() {
        let page = Page {
            slug: "privacy".to_string(),
            title: "Privacy".to_string(),
            description: String::new(),
            body: String::new(),
        };
        assert_eq!(page.path(), "/privacy");
    }
}
