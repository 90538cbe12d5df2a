//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    sections::Sections,
};

/// Main configuration structure for Showcase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide metadata.
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// RSS feed settings.
    #[serde(default)]
    pub rss: RssConfig,

    /// Theme presentation settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Landing page capabilities. Absent tables are not rendered.
    #[serde(default)]
    pub sections: Sections,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Product or site name.
    pub name: String,

    /// Site description for meta tags and the feed.
    #[serde(default)]
    pub description: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Language tag for the `lang` attribute.
    #[serde(default = "default_language")]
    pub language: String,

    /// Copyright line shown in the footer.
    #[serde(default)]
    pub copyright: String,

    /// Keywords for the meta tag.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Social preview image.
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Markdown content directory.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Static files copied verbatim.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Whether to publish drafts.
    #[serde(default)]
    pub drafts: bool,
}

/// RSS feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RssConfig {
    /// Whether RSS feed is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum number of items in feed.
    #[serde(default = "default_rss_limit")]
    pub limit: usize,

    /// Feed path relative to the output directory.
    #[serde(default = "default_rss_path")]
    pub path: String,
}

/// Theme presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Stylesheets linked from every page, in order.
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,

    /// Separator between page title and site name.
    #[serde(default = "default_title_separator")]
    pub title_separator: String,

    /// Links shown in the footer after "Home".
    #[serde(default)]
    pub footer_links: Vec<FooterLink>,
}

/// A footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub title: String,
    pub href: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_true() -> bool {
    true
}

fn default_rss_limit() -> usize {
    20
}

fn default_rss_path() -> String {
    "feed.rss".to_string()
}

fn default_stylesheets() -> Vec<String> {
    vec![
        "/styles.css".to_string(),
        "/theme/css/landing.css".to_string(),
        "/theme/fonts/stylesheet.css".to_string(),
    ]
}

fn default_title_separator() -> String {
    " | ".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            content_dir: default_content_dir(),
            static_dir: default_static_dir(),
            drafts: false,
        }
    }
}

impl Default for RssConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            limit: default_rss_limit(),
            path: default_rss_path(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            stylesheets: default_stylesheets(),
            title_separator: default_title_separator(),
            footer_links: Vec::new(),
        }
    }
}

impl Config {
    /// Build a configuration in code, with every section absent.
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site,
            build: BuildConfig::default(),
            rss: RssConfig::default(),
            theme: ThemeConfig::default(),
            sections: Sections::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `SHOWCASE__` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("SHOWCASE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.is_empty() {
            return Err(CoreError::config("site.name cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        if self.rss.limit == 0 && self.rss.enabled {
            tracing::warn!("rss.limit is 0, the feed will be empty");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        self.site.url_for(path)
    }
}

impl SiteConfig {
    /// Create metadata with the required fields and defaults elsewhere.
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            base_url: base_url.into(),
            language: default_language(),
            copyright: String::new(),
            keywords: Vec::new(),
            image_path: None,
        }
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
