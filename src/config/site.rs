//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub footer: String,
    pub language: String,

    // Directory
    pub source_dir: String,
    pub posts_dir: String,
    pub public_dir: String,

    // Writing
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Date format (Moment.js tokens)
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "entmoot.io".to_string(),
            description: "Anthony Cardillo, MD - Informatics // AI // Digital Pathology"
                .to_string(),
            author: "Anthony Cardillo".to_string(),
            footer: "© 2025 Anthony Cardillo".to_string(),
            language: "en".to_string(),

            source_dir: "source".to_string(),
            posts_dir: "blog/posts".to_string(),
            public_dir: ".".to_string(),

            highlight: HighlightConfig::default(),

            date_format: "YYYY-MM-DD".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "entmoot.io");
        assert_eq!(config.posts_dir, "blog/posts");
        assert_eq!(config.public_dir, ".");
        assert_eq!(config.date_format, "YYYY-MM-DD");
        assert!(config.highlight.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
posts_dir: content/posts
highlight:
  enable: false
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.posts_dir, "content/posts");
        assert!(!config.highlight.enable);
        // Untouched keys keep their defaults
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
        assert_eq!(config.public_dir, ".");
    }

    #[test]
    fn test_load_rejects_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: [unclosed").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }
}
