//! Capability lookup for themes.
//!
//! Themes receive a `&dyn Website` and ask it for the capabilities they
//! render. A theme that cannot work without a capability uses [`require`] and
//! reports [`CoreError::MissingCapability`] instead of assuming a concrete
//! site type.

use crate::{
    config::{Config, SiteConfig},
    error::{CoreError, Result},
    sections::{
        Brands, CapabilityKind, Community, Download, Features, Hero, How, Technology, Why,
    },
};

/// A site description a theme can render.
pub trait Website: Send + Sync {
    /// Global site metadata.
    fn metadata(&self) -> &SiteConfig;

    fn hero(&self) -> Option<&Hero> {
        None
    }

    fn why(&self) -> Option<&Why> {
        None
    }

    fn how(&self) -> Option<&How> {
        None
    }

    fn technology(&self) -> Option<&Technology> {
        None
    }

    fn features(&self) -> Option<&Features> {
        None
    }

    fn brands(&self) -> Option<&Brands> {
        None
    }

    fn community(&self) -> Option<&Community> {
        None
    }

    fn download(&self) -> Option<&Download> {
        None
    }

    /// Whether the site provides a capability.
    fn has(&self, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::Hero => self.hero().is_some(),
            CapabilityKind::Why => self.why().is_some(),
            CapabilityKind::How => self.how().is_some(),
            CapabilityKind::Technology => self.technology().is_some(),
            CapabilityKind::Features => self.features().is_some(),
            CapabilityKind::Brands => self.brands().is_some(),
            CapabilityKind::Community => self.community().is_some(),
            CapabilityKind::Download => self.download().is_some(),
        }
    }

    /// Present capabilities, in landing page order.
    fn capabilities(&self) -> Vec<CapabilityKind> {
        CapabilityKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }
}

/// Resolve a capability a caller cannot do without.
pub fn require<T: ?Sized>(capability: Option<&T>, kind: CapabilityKind) -> Result<&T> {
    capability.ok_or_else(|| CoreError::missing_capability(kind))
}

impl Website for Config {
    fn metadata(&self) -> &SiteConfig {
        &self.site
    }

    fn hero(&self) -> Option<&Hero> {
        self.sections.hero.as_ref()
    }

    fn why(&self) -> Option<&Why> {
        self.sections.why.as_ref()
    }

    fn how(&self) -> Option<&How> {
        self.sections.how.as_ref()
    }

    fn technology(&self) -> Option<&Technology> {
        self.sections.technology.as_ref()
    }

    fn features(&self) -> Option<&Features> {
        self.sections.features.as_ref()
    }

    fn brands(&self) -> Option<&Brands> {
        self.sections.brands.as_ref()
    }

    fn community(&self) -> Option<&Community> {
        self.sections.community.as_ref()
    }

    fn download(&self) -> Option<&Download> {
        self.sections.download.as_ref()
    }
}
