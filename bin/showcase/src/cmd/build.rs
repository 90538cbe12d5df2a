//! Build command - generates the static site

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use showcase_core::Config;
use showcase_generator::Builder;

use super::check::href_warnings;
use crate::site_path;

/// Run the build command.
///
/// Without an explicit output directory the configured `build.output_dir`
/// is used, relative to the configuration file.
pub fn run(
    config_path: &Path,
    output: Option<&Path>,
    drafts: bool,
    base_url: Option<&str>,
) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, drafts, ?base_url, "Starting build");

    let mut config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    apply_overrides(&mut config, drafts, base_url);

    let warnings = href_warnings(&config);
    if !warnings.is_empty() {
        println!();
        println!("  Warnings:");
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
        println!();
    }

    tracing::debug!(?config, "Loaded configuration");

    let content_dir = site_path(config_path, &config.build.content_dir);
    let static_dir = site_path(config_path, &config.build.static_dir);
    let output_dir = match output {
        Some(dir) => dir.to_path_buf(),
        None => site_path(config_path, &config.build.output_dir),
    };

    let mut builder = Builder::new(config, content_dir, &output_dir);
    if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "Found static directory, will copy to output");
        builder = builder.with_static_dir(static_dir);
    }

    let stats = builder.build().wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!("  Tag pages:  {}", stats.tag_pages);
    println!("  Assets:     {}", stats.assets);
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output_dir.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut Config, drafts: bool, base_url: Option<&str>) {
    if drafts {
        config.build.drafts = true;
    }

    if let Some(url) = base_url {
        tracing::info!(base_url = url, "Overriding site base_url from CLI");
        config.site.base_url = url.to_string();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use showcase_core::SiteConfig;

    use super::*;

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::new(SiteConfig::new("Site", "https://example.com"));

        apply_overrides(&mut config, false, None);
        assert!(!config.build.drafts);
        assert_eq!(config.site.base_url, "https://example.com");

        apply_overrides(&mut config, true, Some("https://staging.example.com"));
        assert!(config.build.drafts);
        assert_eq!(config.site.base_url, "https://staging.example.com");
    }

    #[test]
    fn test_run_builds_site_next_to_config() {
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
        fs::create_dir_all(dir.path().join("content/posts")).unwrap();
        fs::write(
            dir.path().join("content/posts/launch.md"),
            "---\ntitle: Launch\ndate: 2020-01-01\n---\nLive.",
        )
        .unwrap();

        run(&config_path, None, false, None).unwrap();

        let public = dir.path().join("public");
        assert!(public.join("index.html").exists());
        assert!(public.join("posts/launch/index.html").exists());
    }

    #[test]
    fn test_run_fails_without_hero() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[site]\nname = \"Bare\"\nbase_url = \"https://example.com\"\n",
        )
        .unwrap();

        let err = run(&config_path, Some(&dir.path().join("out")), false, None).unwrap_err();
        assert!(format!("{err:?}").contains("missing required capability: hero"));
    }
}
