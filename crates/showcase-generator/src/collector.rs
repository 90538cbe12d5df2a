//! Content collection and organization.
//!
//! Walks the content directory: files at the top level become pages, files
//! below `<section>/` become dated items of that section.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use showcase_core::{Config, Item, Page, Tag, content::title_case};
use showcase_parser::{MarkdownParser, is_content_file};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Content collection errors.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Parser error.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Invalid content path.
    #[error("invalid content path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for collector operations.
pub type Result<T> = std::result::Result<T, CollectorError>;

/// Items of one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionContent {
    /// Directory name, also the URL prefix.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Items in collection order (source path).
    pub items: Vec<Item>,
}

impl SectionContent {
    /// Empty section titled after its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: title_case(&id),
            id,
            description: String::new(),
            items: Vec::new(),
        }
    }

    /// URL path of the section listing.
    pub fn path(&self) -> String {
        format!("/{}", self.id)
    }

    /// Items newest first. Equal dates keep collection order.
    pub fn items_by_date(&self) -> Vec<&Item> {
        sort_by_date(self.items.iter().collect())
    }
}

/// Collected site content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    /// Sections by id.
    pub sections: BTreeMap<String, SectionContent>,

    /// Free-standing pages, ordered by source path.
    pub pages: Vec<Page>,
}

impl SiteContent {
    /// Add an item, creating its section on first use.
    ///
    /// Tags without a single letter or digit have no URL of their own and
    /// are dropped.
    pub fn add_item(&mut self, mut item: Item) {
        let path = item.path();
        item.tags.retain(|tag| {
            let usable = !tag.canonical().is_empty();
            if !usable {
                warn!(item = %path, tag = tag.name(), "dropping tag without letters or digits");
            }
            usable
        });

        self.sections
            .entry(item.section.clone())
            .or_insert_with_key(|id| SectionContent::new(id.clone()))
            .items
            .push(item);
    }

    /// All items in collection order.
    pub fn items(&self) -> Vec<&Item> {
        self.sections
            .values()
            .flat_map(|section| section.items.iter())
            .collect()
    }

    /// Distinct tags, sorted by canonical string.
    pub fn tags(&self) -> Vec<Tag> {
        self.items()
            .into_iter()
            .flat_map(|item| item.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Items carrying `tag`, newest first.
    pub fn items_tagged(&self, tag: &Tag) -> Vec<&Item> {
        sort_by_date(
            self.items()
                .into_iter()
                .filter(|item| item.has_tag(tag))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.pages.is_empty()
    }
}

fn sort_by_date(mut items: Vec<&Item>) -> Vec<&Item> {
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
}

/// One parsed content file.
enum Collected {
    Page(Page),
    Item(Item),
    SectionIndex {
        section: String,
        title: String,
        description: String,
    },
    Draft(PathBuf),
}

/// Content collector that walks directories and parses files.
#[derive(Debug)]
pub struct ContentCollector {
    config: Config,
    parser: MarkdownParser,
    content_dir: PathBuf,
}

impl ContentCollector {
    /// Create a new content collector.
    #[must_use]
    pub fn new(config: Config, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            parser: MarkdownParser::new(),
            content_dir: content_dir.into(),
        }
    }

    /// Collect all content from the content directory.
    pub fn collect(&self) -> Result<SiteContent> {
        info!(dir = %self.content_dir.display(), "collecting content");

        let files = self.find_content_files()?;
        info!(count = files.len(), "found content files");

        // Parsing is independent per file; collect keeps walk order.
        let collected = files
            .par_iter()
            .map(|path| self.parse_file(path))
            .collect::<Result<Vec<_>>>()?;

        let mut content = SiteContent::default();
        let mut indexes = Vec::new();

        for entry in collected {
            match entry {
                Collected::Page(page) => content.pages.push(page),
                Collected::Item(item) => content.add_item(item),
                Collected::SectionIndex {
                    section,
                    title,
                    description,
                } => indexes.push((section, title, description)),
                Collected::Draft(path) => debug!(path = %path.display(), "skipping draft"),
            }
        }

        // A section index alone still defines an (empty) section.
        for (id, title, description) in indexes {
            let section = content
                .sections
                .entry(id.clone())
                .or_insert_with(|| SectionContent::new(id));
            if !title.is_empty() {
                section.title = title;
            }
            section.description = description;
        }

        info!(
            pages = content.pages.len(),
            sections = content.sections.len(),
            items = content.items().len(),
            tags = content.tags().len(),
            "content collection complete"
        );

        Ok(content)
    }

    /// Find all content files, sorted by path, skipping hidden entries.
    fn find_content_files(&self) -> Result<Vec<PathBuf>> {
        if !self.content_dir.exists() {
            debug!(dir = %self.content_dir.display(), "content directory does not exist");
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.content_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry?;
            if entry.file_type().is_file() && is_content_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn parse_file(&self, path: &Path) -> Result<Collected> {
        let relative = path
            .strip_prefix(&self.content_dir)
            .map_err(|_| CollectorError::InvalidPath(path.to_path_buf()))?;

        let components: Vec<String> = relative
            .with_extension("")
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let (section, rest) = match components.as_slice() {
            [] => return Err(CollectorError::InvalidPath(path.to_path_buf())),
            [slug] => (None, slug.clone()),
            [section, rest @ ..] => (Some(section.clone()), rest.join("/")),
        };

        debug!(path = %path.display(), "parsing content file");
        let source = fs::read_to_string(path)?;
        let parsed = showcase_parser::parse(&self.parser, &source, path).map_err(|e| {
            CollectorError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        let frontmatter = parsed.frontmatter;

        if frontmatter.draft && !self.config.build.drafts {
            return Ok(Collected::Draft(path.to_path_buf()));
        }

        let Some(section) = section else {
            let title = if frontmatter.title.is_empty() {
                title_case(&rest)
            } else {
                frontmatter.title
            };
            return Ok(Collected::Page(Page {
                slug: rest,
                title,
                description: frontmatter.description,
                body: parsed.html,
            }));
        };

        if rest == "index" {
            return Ok(Collected::SectionIndex {
                section,
                title: frontmatter.title,
                description: frontmatter.description,
            });
        }

        let date = match frontmatter.date {
            Some(date) => date,
            None => modified_date(path)?,
        };
        let title = if frontmatter.title.is_empty() {
            title_case(rest.rsplit('/').next().unwrap_or(&rest))
        } else {
            frontmatter.title
        };

        let mut item = Item::new(section, rest, title, date)
            .with_tags(frontmatter.tags)
            .with_body(parsed.html);
        item.description = frontmatter.description;
        item.source_path = Some(path.to_path_buf());

        Ok(Collected::Item(item))
    }
}

/// Whether a walk entry is a dotfile or dot-directory.
pub fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn modified_date(path: &Path) -> Result<DateTime<Utc>> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use showcase_core::SiteConfig;
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config() -> Config {
        Config::new(SiteConfig::new("Site", "https://example.com"))
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_collect_pages_items_and_sections() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "privacy.md",
            "---\ntitle: Privacy Policy\n---\nNothing leaves your device.",
        );
        write(
            dir.path(),
            "posts/index.md",
            "---\ntitle: Journal\ndescription: Release notes and stories\n---\n",
        );
        write(
            dir.path(),
            "posts/launch.md",
            "---\ntitle: Launch\ndate: 2020-01-01\ntags: [news]\n---\nWe are live.",
        );
        write(
            dir.path(),
            "posts/2020/update.md",
            "---\ntitle: Update\ndate: 2020-02-01\ntags: [news, release]\n---\nMore.",
        );
        write(dir.path(), "posts/.hidden.md", "---\ntitle: Hidden\n---\n");
        write(dir.path(), "posts/logo.png", "not content");

        let content = ContentCollector::new(config(), dir.path()).collect().unwrap();

        assert_eq!(content.pages.len(), 1);
        assert_eq!(content.pages[0].path(), "/privacy");
        assert_eq!(content.pages[0].title, "Privacy Policy");

        let posts = &content.sections["posts"];
        assert_eq!(posts.title, "Journal");
        assert_eq!(posts.description, "Release notes and stories");
        let paths: Vec<_> = posts.items.iter().map(Item::path).collect();
        assert_eq!(paths, ["/posts/2020/update", "/posts/launch"]);

        let by_date: Vec<_> = posts.items_by_date().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(by_date, ["Update", "Launch"]);
    }

    #[test]
    fn test_drafts_skipped_unless_enabled() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "posts/draft.md",
            "---\ntitle: Draft\ndate: 2020-01-01\ndraft: true\n---\n",
        );

        let content = ContentCollector::new(config(), dir.path()).collect().unwrap();
        assert!(content.items().is_empty());

        let mut with_drafts = config();
        with_drafts.build.drafts = true;
        let content = ContentCollector::new(with_drafts, dir.path())
            .collect()
            .unwrap();
        assert_eq!(content.items().len(), 1);
    }

    #[test]
    fn test_missing_date_uses_modification_time() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "notes/undated.md", "No frontmatter at all.");

        let content = ContentCollector::new(config(), dir.path()).collect().unwrap();
        let items = content.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Undated");
        assert!(items[0].date > date(2000, 1, 1));
        assert_eq!(content.sections["notes"].title, "Notes");
    }

    #[test]
    fn test_missing_content_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let content = ContentCollector::new(config(), dir.path().join("missing"))
            .collect()
            .unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_parse_error_fails_collection() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "broken.md", "---\ntitle: [unclosed\n---\n");

        let result = ContentCollector::new(config(), dir.path()).collect();
        assert!(matches!(result, Err(CollectorError::Parse { .. })));
    }

    #[test]
    fn test_tags_sorted_and_deduplicated() {
        let mut content = SiteContent::default();
        content.add_item(Item::new("posts", "one", "One", date(2020, 1, 1)).with_tags(["b", "a"]));
        content.add_item(Item::new("posts", "two", "Two", date(2020, 2, 1)).with_tags(["c", "A"]));

        let tags: Vec<_> = content.tags().iter().map(Tag::canonical).collect();
        assert_eq!(tags, ["a", "b", "c"]);

        let tagged: Vec<_> = content
            .items_tagged(&Tag::new("a"))
            .iter()
            .map(|i| i.slug.as_str())
            .collect();
        assert_eq!(tagged, ["two", "one"]);
    }

    #[test]
    fn test_tags_without_slug_are_dropped() {
        let mut content = SiteContent::default();
        content.add_item(
            Item::new("posts", "one", "One", date(2020, 1, 1)).with_tags(["news", "++", "#", "-"]),
        );

        let tags: Vec<_> = content.tags().iter().map(Tag::canonical).collect();
        assert_eq!(tags, ["news"]);
        assert_eq!(content.sections["posts"].items[0].tags, [Tag::new("news")]);
    }

    #[test]
    fn test_equal_dates_keep_collection_order() {
        let mut content = SiteContent::default();
        let same = date(2020, 1, 1);
        content.add_item(Item::new("posts", "first", "First", same).with_tags(["x"]));
        content.add_item(Item::new("posts", "second", "Second", same).with_tags(["x"]));
        content.add_item(Item::new("posts", "newer", "Newer", date(2021, 1, 1)).with_tags(["x"]));

        let order: Vec<_> = content
            .items_tagged(&Tag::new("x"))
            .iter()
            .map(|i| i.slug.as_str())
            .collect();
        assert_eq!(order, ["newer", "first", "second"]);
    }
}
