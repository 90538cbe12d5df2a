//! New command - scaffold a content item

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr, bail};
use showcase_core::{Config, content::title_case};

use crate::site_path;

/// Run the new command.
///
/// Creates `<content_dir>/<path>.md` with draft frontmatter. The content
/// directory comes from the configuration when it can be loaded.
pub fn run(config_path: &Path, path: &Path, title: Option<&str>) -> Result<()> {
    tracing::info!(?path, ?title, "Creating new content");

    let file_path = create(&content_dir(config_path), path, title)?;

    tracing::info!(?file_path, "Created new content file");
    println!("Created: {}", file_path.display());

    Ok(())
}

/// Content directory as `build` would resolve it, environment overrides included.
fn content_dir(config_path: &Path) -> PathBuf {
    match Config::load_with_env(config_path) {
        Ok(config) => site_path(config_path, &config.build.content_dir),
        Err(e) => {
            tracing::debug!(error = %e, "No usable configuration, using ./content");
            PathBuf::from("content")
        }
    }
}

/// Write the scaffold below `content_dir`, refusing to overwrite.
fn create(content_dir: &Path, path: &Path, title: Option<&str>) -> Result<PathBuf> {
    let full_path = content_dir.join(path);
    let file_path = if full_path.extension().is_some() {
        full_path
    } else {
        full_path.with_extension("md")
    };

    if file_path.exists() {
        bail!("{} already exists", file_path.display());
    }

    let title = match title {
        Some(title) => title.to_string(),
        None => path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(title_case)
            .unwrap_or_else(|| "Untitled".to_string()),
    };

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
    }

    fs::write(&file_path, markdown_scaffold(&title)).wrap_err("Failed to write file")?;

    Ok(file_path)
}

fn markdown_scaffold(title: &str) -> String {
    let date = Utc::now().format("%Y-%m-%d").to_string();
    let title = title.replace('\\', "\\\\").replace('"', "\\\"");

    format!(
        r#"---
title: "{title}"
description: ""
date: {date}
draft: true
tags: []
---

Write your content here.
"#
    )
}
