//! Build orchestration.
//!
//! Coordinates the full site build process.

use std::{
    collections::HashSet,
    fmt, fs,
    path::{Path, PathBuf},
    time::Instant,
};

use rayon::prelude::*;
use showcase_core::{Config, CoreError, Item, Page, Tag};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    assets::{AssetError, AssetProcessor},
    collector::{CollectorError, ContentCollector, SectionContent, SiteContent},
    landing::LandingTheme,
    node::Document,
    rss::RssGenerator,
    theme::{RenderContext, Theme, check_capabilities},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Collector error.
    #[error("collector error: {0}")]
    Collector(#[from] CollectorError),

    /// Rendering or capability error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Asset error.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// Two pages map to the same output file.
    #[error("more than one page writes to {0}")]
    DuplicatePath(String),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Index, listing, item and standalone pages written.
    pub pages: usize,

    /// Tag list and tag detail pages written.
    pub tag_pages: usize,

    /// Static files copied.
    pub assets: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
pub struct Builder {
    config: Config,
    content_dir: PathBuf,
    output_dir: PathBuf,
    static_dir: Option<PathBuf>,
    theme: Box<dyn Theme>,
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("content_dir", &self.content_dir)
            .field("output_dir", &self.output_dir)
            .field("static_dir", &self.static_dir)
            .field("theme", &self.theme.name())
            .finish_non_exhaustive()
    }
}

impl Builder {
    /// Create a builder using the landing theme.
    #[must_use]
    pub fn new(
        config: Config,
        content_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        let feed = config.rss.enabled.then(|| config.rss.path.clone());
        let theme = LandingTheme::new(config.theme.clone()).with_feed(feed);

        Self {
            config,
            content_dir: content_dir.into(),
            output_dir: output_dir.into(),
            static_dir: None,
            theme: Box::new(theme),
        }
    }

    /// Set the static assets directory.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Replace the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Box<dyn Theme>) -> Self {
        self.theme = theme;
        self
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            content = %self.content_dir.display(),
            output = %self.output_dir.display(),
            theme = self.theme.name(),
            "starting build"
        );

        // Fail before touching any output.
        check_capabilities(self.theme.as_ref(), &self.config)?;

        self.clean_output()?;

        let collector = ContentCollector::new(self.config.clone(), &self.content_dir);
        let content = collector.collect()?;
        self.check_output_paths(&content)?;
        let ctx = RenderContext::new(&self.config, &content);

        stats.pages = self.generate_pages(&ctx)?;

        if !content.tags().is_empty() {
            stats.tag_pages = self.generate_tag_pages(&ctx)?;
        }

        self.write_resources()?;

        if self.config.rss.enabled {
            self.generate_rss(&content)?;
        }

        if let Some(static_dir) = &self.static_dir {
            stats.assets = AssetProcessor::new().process(static_dir, &self.output_dir)?;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            tag_pages = stats.tag_pages,
            assets = stats.assets,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Reject content where two pages would share one `index.html`.
    fn check_output_paths(&self, content: &SiteContent) -> Result<()> {
        let mut urls = vec!["/".to_string()];
        urls.extend(content.sections.values().map(SectionContent::path));
        urls.extend(content.items().into_iter().map(Item::path));
        urls.extend(content.pages.iter().map(Page::path));

        let tags = content.tags();
        if !tags.is_empty() {
            urls.push("/tags".to_string());
            urls.extend(tags.iter().map(Tag::path));
        }

        let mut seen = HashSet::new();
        for url in urls {
            if !seen.insert(output_path(&self.output_dir, &url)) {
                return Err(BuildError::DuplicatePath(url));
            }
        }

        Ok(())
    }

    /// Index, section listings, items and standalone pages.
    fn generate_pages(&self, ctx: &RenderContext<'_>) -> Result<usize> {
        let content = ctx.content;
        let mut count = 0;

        self.write_document("/", &self.theme.render_index(ctx)?)?;
        count += 1;

        for section in content.sections.values() {
            self.write_document(&section.path(), &self.theme.render_listing(section, ctx)?)?;
            count += 1;
        }

        let items = content.items();
        info!(count = items.len(), "generating item pages");

        // Any failing item fails the build.
        items.par_iter().try_for_each(|item| {
            let doc = self.theme.render_item(item, ctx)?;
            self.write_document(&item.path(), &doc)
        })?;
        count += items.len();

        for page in &content.pages {
            self.write_document(&page.path(), &self.theme.render_page(page, ctx)?)?;
            count += 1;
        }

        Ok(count)
    }

    fn generate_tag_pages(&self, ctx: &RenderContext<'_>) -> Result<usize> {
        self.write_document("/tags", &self.theme.render_tag_list(ctx)?)?;
        let mut count = 1;

        for tag in ctx.content.tags() {
            self.write_document(&tag.path(), &self.theme.render_tag_details(&tag, ctx)?)?;
            count += 1;
        }

        Ok(count)
    }

    fn write_resources(&self) -> Result<()> {
        for resource in self.theme.resources() {
            let path = self.output_dir.join(resource.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, resource.contents)?;
            debug!(path = %path.display(), "wrote theme resource");
        }
        Ok(())
    }

    fn generate_rss(&self, content: &SiteContent) -> Result<()> {
        let generator = RssGenerator::new(self.config.clone());
        let xml = generator.generate(&content.items());

        let output_path = self.output_dir.join(self.config.rss.path.trim_start_matches('/'));
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, xml)?;

        info!(path = %output_path.display(), "generated RSS feed");
        Ok(())
    }

    /// Write a document for a URL path at `<path>/index.html`.
    fn write_document(&self, url: &str, doc: &Document) -> Result<()> {
        let output_path = output_path(&self.output_dir, url);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, doc.to_html())?;

        debug!(path = %output_path.display(), "wrote page");
        Ok(())
    }
}

/// File path for a URL path below the output directory.
pub fn output_path(output_dir: &Path, url: &str) -> PathBuf {
    let relative = url.trim_matches('/');
    if relative.is_empty() {
        output_dir.join("index.html")
    } else {
        output_dir.join(relative).join("index.html")
    }
}
