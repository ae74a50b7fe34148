//! entmoot: static site generator for a personal site and blog
//!
//! Reads Markdown posts with YAML front-matter, renders them to HTML and
//! writes the home, about, projects, blog index and blog post pages, all
//! wrapped in one shared page template.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The site being built
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory (static page data)
    pub source_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from a directory and an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let source_dir = base_dir.join(&config.source_dir);
        let posts_dir = base_dir.join(&config.posts_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            source_dir,
            posts_dir,
            public_dir,
        }
    }

    /// Output directory for the blog index and post pages
    pub fn blog_dir(&self) -> PathBuf {
        self.public_dir.join(helpers::PageDepth::Nested.dir())
    }

    /// Location of the static page data file
    pub fn data_path(&self) -> PathBuf {
        self.source_dir.join("_data").join("pages.yml")
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<commands::generate::BuildReport> {
        commands::generate::run(self)
    }

    /// Create a new post, returning its path
    pub fn new_post(&self, title: &str, slug: Option<&str>) -> Result<PathBuf> {
        commands::new::run(self, title, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_site_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.posts_dir, dir.path().join("blog/posts"));
        assert_eq!(site.blog_dir(), dir.path().join(".").join("blog"));
        assert_eq!(site.data_path(), dir.path().join("source/_data/pages.yml"));
    }

    #[test]
    fn test_site_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "title: Elsewhere\npublic_dir: public\nposts_dir: posts\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "Elsewhere");
        assert_eq!(site.public_dir, dir.path().join("public"));
        assert_eq!(site.posts_dir, dir.path().join("posts"));
    }
}
