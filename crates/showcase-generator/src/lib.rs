//! Showcase Generator Library
//!
//! Builds a static landing page site: a document tree for markup, themes that
//! compose pages from a site's capabilities, content collection, RSS and the
//! build pipeline that ties them together.

pub mod assets;
pub mod build;
pub mod collector;
pub mod labeled;
pub mod landing;
pub mod node;
pub mod rss;
pub mod theme;

pub use build::{BuildError, BuildStats, Builder};
pub use collector::{ContentCollector, SectionContent, SiteContent};
pub use labeled::LabeledSection;
pub use landing::LandingTheme;
pub use node::{Document, Element, Node};
pub use theme::{RenderContext, Theme, ThemeResource, check_capabilities};
