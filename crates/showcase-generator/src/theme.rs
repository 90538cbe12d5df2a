//! Theme abstraction.
//!
//! A theme turns a site description and its collected content into document
//! trees. It only sees the site through [`Website`], so it must ask for the
//! capabilities it needs rather than assume a concrete site type.

use showcase_core::{CapabilityKind, CoreError, Item, Page, Result, Tag, Website};

use crate::{
    collector::{SectionContent, SiteContent},
    node::Document,
};

/// Everything a render call may read.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a dyn Website,
    pub content: &'a SiteContent,
}

impl<'a> RenderContext<'a> {
    pub fn new(site: &'a dyn Website, content: &'a SiteContent) -> Self {
        Self { site, content }
    }
}

/// A file shipped with a theme and written below the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeResource {
    /// Output-relative path, without a leading slash.
    pub path: &'static str,
    pub contents: &'static str,
}

/// Page composer.
pub trait Theme: Send + Sync {
    fn name(&self) -> &str;

    /// Capabilities the theme cannot render without.
    fn required_capabilities(&self) -> &[CapabilityKind] {
        &[]
    }

    /// Embedded files to publish with the site.
    fn resources(&self) -> &[ThemeResource] {
        &[]
    }

    /// The landing page.
    fn render_index(&self, ctx: &RenderContext<'_>) -> Result<Document>;

    /// Listing of one section's items.
    fn render_listing(&self, section: &SectionContent, ctx: &RenderContext<'_>)
    -> Result<Document>;

    fn render_item(&self, item: &Item, ctx: &RenderContext<'_>) -> Result<Document>;

    fn render_page(&self, page: &Page, ctx: &RenderContext<'_>) -> Result<Document>;

    /// Index of every tag.
    fn render_tag_list(&self, ctx: &RenderContext<'_>) -> Result<Document>;

    /// Items carrying one tag.
    fn render_tag_details(&self, tag: &Tag, ctx: &RenderContext<'_>) -> Result<Document>;
}

/// Fail with the first required capability the site does not provide.
pub fn check_capabilities(theme: &dyn Theme, site: &dyn Website) -> Result<()> {
    match theme
        .required_capabilities()
        .iter()
        .find(|kind| !site.has(**kind))
    {
        Some(kind) => Err(CoreError::missing_capability(*kind)),
        None => Ok(()),
    }
}
