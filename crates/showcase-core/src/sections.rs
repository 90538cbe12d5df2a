//! Capability records for the landing page.
//!
//! Each record is a plain data value holding display text and an ordered list
//! of children. Records never depend on each other; a site owns any subset of
//! them and a theme decides how to lay them out.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of content capability a site may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    Hero,
    Why,
    How,
    Technology,
    Features,
    Brands,
    Community,
    Download,
}

impl CapabilityKind {
    /// Every capability, in landing page order.
    pub const ALL: [CapabilityKind; 8] = [
        Self::Hero,
        Self::Why,
        Self::How,
        Self::Technology,
        Self::Features,
        Self::Brands,
        Self::Community,
        Self::Download,
    ];

    /// Lowercase identifier, also used as the HTML anchor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Why => "why",
            Self::How => "how",
            Self::Technology => "technology",
            Self::Features => "features",
            Self::Brands => "brands",
            Self::Community => "community",
            Self::Download => "download",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A child entry of a section: a step, a feature, a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Icon glyph or image name, depending on the section.
    #[serde(default)]
    pub symbol: String,

    /// Entry title.
    pub title: String,

    /// Entry description.
    #[serde(default)]
    pub description: String,

    /// Optional hyperlink.
    #[serde(default)]
    pub href: Option<String>,
}

impl Entry {
    /// Create an entry without a link.
    pub fn new(
        symbol: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            title: title.into(),
            description: description.into(),
            href: None,
        }
    }

    /// Attach a hyperlink.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Read-only view over a titled section with ordered children.
pub trait Section {
    /// Child item type.
    type Item;

    /// Which capability this record provides.
    const KIND: CapabilityKind;

    /// Section title, always rendered.
    fn title(&self) -> &str;

    /// Subtitle; empty means no subtitle element.
    fn subtitle(&self) -> &str;

    /// Children in stored order.
    fn items(&self) -> &[Self::Item];
}

/// Top of the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Headline; falls back to the site name when empty.
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    /// Hero image path below `/img/`.
    #[serde(default)]
    pub image: Option<String>,
}

/// Motivation paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Why {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// Numbered walkthrough; each step symbol names an SVG under `/img/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct How {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub steps: Vec<Entry>,
}

/// Technology highlights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub features: Vec<Entry>,
}

/// Product differentiators, optionally linking to more detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub differentiators: Vec<Entry>,
}

/// Logos of supported brands, by image slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brands {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Community channels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub links: Vec<Entry>,
}

/// Store availability, which selects the badge artwork.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseState {
    #[default]
    Available,
    PreOrder,
}

impl ReleaseState {
    /// Badge artwork prefix.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Available => "download-on-the",
            Self::PreOrder => "pre-order-on-the",
        }
    }
}

/// Download call to action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub app_store_url: String,
    #[serde(default)]
    pub state: ReleaseState,
    /// Secondary download links shown below the badge.
    #[serde(default)]
    pub links: Vec<Entry>,
}

macro_rules! impl_section {
    ($record:ty, $kind:ident, $field:ident: $item:ty) => {
        impl Section for $record {
            type Item = $item;

            const KIND: CapabilityKind = CapabilityKind::$kind;

            fn title(&self) -> &str {
                &self.title
            }

            fn subtitle(&self) -> &str {
                &self.subtitle
            }

            fn items(&self) -> &[Self::Item] {
                &self.$field
            }
        }
    };
}

impl_section!(Why, Why, paragraphs: String);
impl_section!(How, How, steps: Entry);
impl_section!(Technology, Technology, features: Entry);
impl_section!(Features, Features, differentiators: Entry);
impl_section!(Brands, Brands, sources: String);
impl_section!(Community, Community, links: Entry);
impl_section!(Download, Download, links: Entry);

/// All capability records of a site. A `None` field is an absent capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub why: Option<Why>,
    #[serde(default)]
    pub how: Option<How>,
    #[serde(default)]
    pub technology: Option<Technology>,
    #[serde(default)]
    pub features: Option<Features>,
    #[serde(default)]
    pub brands: Option<Brands>,
    #[serde(default)]
    pub community: Option<Community>,
    #[serde(default)]
    pub download: Option<Download>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_kind_strings() {
        assert_eq!(CapabilityKind::Technology.as_str(), "technology");
        assert_eq!(CapabilityKind::Download.to_string(), "download");
        assert_eq!(CapabilityKind::ALL.first(), Some(&CapabilityKind::Hero));
        assert_eq!(CapabilityKind::ALL.last(), Some(&CapabilityKind::Download));
    }

    #[test]
    fn test_section_accessors_keep_order() {
        let how = How {
            title: "How it works".to_string(),
            subtitle: String::new(),
            steps: vec![
                Entry::new("separate", "Separate", "Split the feed"),
                Entry::new("classify", "Classify", "Score each headline"),
                Entry::new("redact", "Redact", "Hide the noise"),
            ],
        };

        assert_eq!(How::KIND, CapabilityKind::How);
        assert_eq!(how.title(), "How it works");
        assert!(how.subtitle().is_empty());
        let titles: Vec<_> = how.items().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Separate", "Classify", "Redact"]);
    }

    #[test]
    fn test_release_state_badge() {
        assert_eq!(ReleaseState::Available.badge(), "download-on-the");
        assert_eq!(ReleaseState::PreOrder.badge(), "pre-order-on-the");
        assert_eq!(ReleaseState::default(), ReleaseState::Available);
    }

    #[test]
    fn test_sections_deserialize_partial() {
        let sections: Sections = toml::from_str(
            r#"
[why]
title = "Why"
paragraphs = ["One", "Two"]

[download]
title = "Get it"
app_store_url = "https://apps.apple.com/app/id1"
state = "pre-order"
"#,
        )
        .expect("parse sections");

        assert!(sections.hero.is_none());
        assert!(sections.brands.is_none());
        assert_eq!(sections.why.as_ref().map(|w| w.paragraphs.len()), Some(2));
        let download = sections.download.expect("download present");
        assert_eq!(download.state, ReleaseState::PreOrder);
        assert!(download.subtitle.is_empty());
    }
}
