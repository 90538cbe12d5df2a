//! Showcase Core Library
//!
//! Section model, site configuration, content types and error handling for the
//! Showcase landing page generator.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod sections;
pub mod site;

pub use config::{Config, SiteConfig};
pub use content::{Item, Page, ParsedContent, Tag};
pub use error::{CoreError, Result};
pub use frontmatter::Frontmatter;
pub use sections::{CapabilityKind, Entry, Section, Sections};
pub use site::{Website, require};
