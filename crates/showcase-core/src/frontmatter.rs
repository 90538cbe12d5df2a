//! Frontmatter parsing for content files.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, Result};

/// Frontmatter metadata for content files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Title; pages and items without one fall back to their file stem.
    #[serde(default)]
    pub title: String,

    /// Summary used in listings and the feed.
    #[serde(default)]
    pub description: String,

    /// Publication date.
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<DateTime<Utc>>,

    /// Tags for the item.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether this is a draft.
    #[serde(default)]
    pub draft: bool,
}

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();

    // The closing delimiter must start a line.
    let after_first = &content[delimiter.len()..];
    let closing_pos = after_first.find(&format!("\n{delimiter}"))? + 1;

    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + delimiter.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Parse frontmatter from a string.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Frontmatter, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let frontmatter: Frontmatter = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((frontmatter, body.to_string()))
}

/// Parse a date in RFC 3339, `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<DateValue> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(DateValue::Text(text)) => parse_date(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {text}"))),
        Some(DateValue::Toml(datetime)) => {
            let text = datetime.to_string();
            parse_date(&text)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {text}")))
        }
    }
}

/// YAML hands dates over as strings, TOML as native datetimes.
#[derive(Deserialize)]
#[serde(untagged)]
enum DateValue {
    Text(String),
    Toml(toml::value::Datetime),
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn test_split_yaml_frontmatter() {
        let content = r#"---
title: "Launch"
---

# Body"#;

        let (format, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Yaml);
        assert_eq!(fm, r#"title: "Launch""#);
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_split_ignores_delimiter_inside_value() {
        let content = "---\ntitle: \"A --- B\"\n---\nBody";

        let (_, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(fm, "title: \"A --- B\"");
        assert_eq!(body, "Body");

        let (fm, _) = parse_frontmatter(content, Path::new("dashes.md")).expect("parse");
        assert_eq!(fm.title, "A --- B");
    }

    #[test]
    fn test_split_empty_frontmatter() {
        let (_, fm, body) = split_frontmatter("---\n---\nBody").expect("split");
        assert!(fm.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_without_frontmatter() {
        assert!(split_frontmatter("# Just a heading").is_none());
    }

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: "Launch day"
description: "We shipped"
date: 2020-02-01
tags:
  - release
  - News
---

Hello"#;

        let (fm, body) = parse_frontmatter(content, Path::new("launch.md")).expect("parse");
        assert_eq!(fm.title, "Launch day");
        assert_eq!(fm.description, "We shipped");
        assert_eq!(fm.tags, vec!["release", "News"]);
        assert!(!fm.draft);
        let date = fm.date.expect("date");
        assert_eq!((date.year(), date.month(), date.day()), (2020, 2, 1));
        assert_eq!(body, "Hello");
    }

    #[test]
    fn test_parse_toml_frontmatter() {
        let content = r#"+++
title = "Toml"
date = "2020-01-01T10:30:00Z"
draft = true
+++

Body"#;

        let (fm, body) = parse_frontmatter(content, Path::new("toml.md")).expect("parse");
        assert_eq!(fm.title, "Toml");
        assert!(fm.draft);
        assert_eq!(
            fm.date.map(|d| d.to_rfc3339()),
            Some("2020-01-01T10:30:00+00:00".to_string())
        );
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_no_frontmatter() {
        let (fm, body) = parse_frontmatter("Plain text", Path::new("plain.md")).expect("parse");
        assert!(fm.title.is_empty());
        assert!(fm.date.is_none());
        assert_eq!(body, "Plain text");
    }

    #[test]
    fn test_invalid_frontmatter_reports_path() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        let err = parse_frontmatter(content, Path::new("broken.md")).unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2020-01-01").is_some());
        assert!(parse_date("2020-01-01 08:15").is_some());
        assert!(parse_date("2020-01-01T08:15:00+02:00").is_some());
        assert!(parse_date("January first").is_none());

        let later = parse_date("2020-02-01").expect("date");
        let earlier = parse_date("2020-01-01").expect("date");
        assert!(later > earlier);
    }
}
