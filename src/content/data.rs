//! Static page data - the home, about and projects content
//!
//! Read from `<source_dir>/_data/pages.yml` when present, otherwise from the
//! copy embedded in the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in page data, used when the site has no `pages.yml`
pub const DEFAULT_PAGES: &str = include_str!("defaults/pages.yml");

/// Content for the three static pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData {
    pub home: HomeData,
    pub about: AboutData,
    pub projects: ProjectsData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeData {
    pub heading: String,
    #[serde(default)]
    pub taglines: Vec<String>,
    pub recent_heading: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutData {
    pub heading: String,
    #[serde(default)]
    pub sections: Vec<AboutSection>,
}

/// One card on the about page; `body` is markdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutSection {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsData {
    pub heading: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub entries: Vec<Project>,
}

/// A project shown on the projects page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl PageData {
    /// Load page data from a file, falling back to the built-in content
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No page data at {:?}, using built-in content", path);
            return Self::builtin();
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        serde_yaml::from_str(&content).with_context(|| format!("Invalid page data {:?}", path))
    }

    /// The built-in page data
    pub fn builtin() -> Result<Self> {
        serde_yaml::from_str(DEFAULT_PAGES).context("Invalid built-in page data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses() {
        let data = PageData::builtin().unwrap();
        assert_eq!(data.home.heading, "Tony Cardillo");
        assert_eq!(data.about.sections.len(), 4);
        assert_eq!(data.projects.entries.len(), 4);
        assert_eq!(
            data.projects.entries[0].tech,
            vec!["CSS3", "Design Systems", "Glassmorphism"]
        );
    }

    #[test]
    fn test_load_missing_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let data = PageData::load(dir.path().join("pages.yml")).unwrap();
        assert_eq!(data.projects.heading, "Projects");
    }

    #[test]
    fn test_load_custom_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.yml");
        fs::write(
            &path,
            r#"
home:
  heading: Someone Else
  recent_heading: Latest
about:
  heading: About
projects:
  heading: Work
  entries:
    - title: Thing
      description: Does stuff
"#,
        )
        .unwrap();

        let data = PageData::load(&path).unwrap();
        assert_eq!(data.home.heading, "Someone Else");
        assert!(data.home.taglines.is_empty());
        assert!(data.about.sections.is_empty());
        assert_eq!(data.projects.entries[0].title, "Thing");
        assert!(data.projects.entries[0].tech.is_empty());
    }

    #[test]
    fn test_load_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.yml");
        fs::write(&path, "home: {heading: only}").unwrap();
        assert!(PageData::load(&path).is_err());
    }
}
