//! Check command - validate configuration, capabilities and content

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use showcase_core::{CapabilityKind, Config, Entry, Website};
use showcase_generator::{LandingTheme, Theme, collector::is_hidden};
use showcase_parser::{MarkdownParser, is_content_file};

use crate::site_path;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!("\nChecking capabilities...");
        check_capabilities(cfg, &mut result);

        println!("\nChecking links...");
        let warnings = href_warnings(cfg);
        if warnings.is_empty() {
            println!("  ✓ All links look valid");
        }
        for warning in warnings {
            result.add_warning(warning);
        }

        let content_dir = site_path(config_path, &cfg.build.content_dir);
        if content_dir.exists() {
            println!("\nChecking content files...");
            validate_content_files(&content_dir, &mut result);
        } else {
            result.add_warning(format!(
                "Content directory does not exist: {}",
                content_dir.display()
            ));
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Report present and absent capabilities; missing required ones are errors.
fn check_capabilities(config: &Config, result: &mut ValidationResult) {
    let theme = LandingTheme::new(config.theme.clone());
    let required = theme.required_capabilities();

    for kind in CapabilityKind::ALL {
        let is_required = required.contains(&kind);
        if config.has(kind) {
            println!("  ✓ {kind}");
        } else if is_required {
            println!("  ✗ {kind} (required by the {} theme)", theme.name());
            result.add_error(format!("missing required capability: {kind}"));
        } else {
            println!("  · {kind} (not provided)");
        }
    }
}

/// Links that are neither absolute http(s) URLs nor root-relative paths.
pub fn href_warnings(config: &Config) -> Vec<String> {
    let mut links = Vec::new();

    if let Some(features) = config.features() {
        links.extend(entry_links(CapabilityKind::Features, &features.differentiators));
    }
    if let Some(community) = config.community() {
        links.extend(entry_links(CapabilityKind::Community, &community.links));
    }
    if let Some(download) = config.download() {
        links.extend(entry_links(CapabilityKind::Download, &download.links));
        links.push((
            "download app_store_url".to_string(),
            download.app_store_url.as_str(),
        ));
    }
    for link in &config.theme.footer_links {
        links.push((format!("footer \"{}\"", link.title), link.href.as_str()));
    }

    links
        .into_iter()
        .filter(|(_, href)| is_suspicious_href(href))
        .map(|(location, href)| format!("{location}: suspicious link \"{href}\""))
        .collect()
}

fn entry_links(kind: CapabilityKind, entries: &[Entry]) -> impl Iterator<Item = (String, &str)> {
    entries.iter().filter_map(move |entry| {
        entry
            .href
            .as_deref()
            .map(|href| (format!("{kind} \"{}\"", entry.title), href))
    })
}

fn is_suspicious_href(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() {
        return true;
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.split("://").nth(1).is_none_or(str::is_empty);
    }
    if href.starts_with("mailto:") {
        return false;
    }
    !href.starts_with('/') || href.starts_with("//")
}

/// Parse every content file the build would read, recording failures.
fn validate_content_files(dir: &Path, result: &mut ValidationResult) {
    let parser = MarkdownParser::new();
    let mut checked = 0;
    let mut failed = 0;

    for entry in walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                result.add_error(format!("Failed to walk content directory: {e}"));
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_content_file(path) {
            continue;
        }

        checked += 1;

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                result.add_error(format!("{}: Failed to read file: {e}", path.display()));
                failed += 1;
                continue;
            }
        };

        if let Err(e) = parser.parse(&content, path) {
            result.add_error(format!("{}: Parse error: {e}", path.display()));
            failed += 1;
        }
    }

    if failed == 0 {
        println!("  ✓ All {checked} content files valid");
    } else {
        println!("  ✗ {failed}/{checked} content files have errors");
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use showcase_core::{
        SiteConfig,
        config::FooterLink,
        sections::{Download, Features},
    };

    use super::*;

    #[test]
    fn test_is_suspicious_href() {
        assert!(!is_suspicious_href("https://apps.apple.com/app/id1"));
        assert!(!is_suspicious_href("http://example.com"));
        assert!(!is_suspicious_href("/privacy"));
        assert!(!is_suspicious_href("mailto:hello@example.com"));
        assert!(is_suspicious_href(""));
        assert!(is_suspicious_href("privacy"));
        assert!(is_suspicious_href("https://"));
        assert!(is_suspicious_href("//cdn.example.com"));
        assert!(is_suspicious_href("javascript:alert(1)"));
    }

    #[test]
    fn test_href_warnings() {
        let mut config = Config::new(SiteConfig::new("Site", "https://example.com"));
        config.sections.features = Some(Features {
            title: "Features".to_string(),
            subtitle: String::new(),
            differentiators: vec![
                Entry::new("bolt", "Fast", "").with_href("/fast"),
                Entry::new("lock", "Private", "").with_href("private"),
            ],
        });
        config.sections.download = Some(Download {
            title: "Download".to_string(),
            app_store_url: String::new(),
            ..Default::default()
        });
        config.theme.footer_links = vec![FooterLink {
            title: "GitHub".to_string(),
            href: "https://github.com/getshields".to_string(),
        }];

        let warnings = href_warnings(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Private"));
        assert!(warnings[1].contains("app_store_url"));
    }

    #[test]
    fn test_check_reports_missing_hero() {
        let config = Config::new(SiteConfig::new("Site", "https://example.com"));
        let mut result = ValidationResult::default();

        check_capabilities(&config, &mut result);
        assert_eq!(result.errors, ["missing required capability: hero"]);
    }

    #[test]
    fn test_run_strict_fails_on_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[site]
name = "Shield"
base_url = "https://example.com"

[sections.hero]
subtitle = "Calm news"

[theme]
footer_links = [{ title = "Privacy", href = "privacy" }]
"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();

        assert!(run(&config_path, false).is_ok());
        assert!(run(&config_path, true).is_err());
    }

    #[test]
    fn test_hidden_content_is_not_validated() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".drafts")).unwrap();
        fs::write(dir.path().join(".drafts/x.md"), "---\ntitle: [oops\n---\n").unwrap();
        fs::write(dir.path().join(".scratch.md"), "---\ntitle: [oops\n---\n").unwrap();
        fs::write(dir.path().join("about.md"), "---\ntitle: About\n---\n").unwrap();

        let mut result = ValidationResult::default();
        validate_content_files(dir.path(), &mut result);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_run_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[site]
name = "Shield"
base_url = "https://example.com"

[sections.hero]
subtitle = "Calm news"
"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content/bad.md"), "---\ntitle: [oops\n---\n").unwrap();

        assert!(run(&config_path, false).is_err());
    }
}
