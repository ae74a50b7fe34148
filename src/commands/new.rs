//! Create a new post

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Front-matter written into a new post
#[derive(Serialize)]
struct Scaffold<'a> {
    title: &'a str,
    date: String,
    excerpt: &'a str,
}

/// Create a new post dated `date`; the slug defaults to the slugified title
pub fn create_post(
    site: &Site,
    title: &str,
    slug: Option<&str>,
    date: NaiveDate,
) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    fs::create_dir_all(&site.posts_dir)
        .with_context(|| format!("Failed to create {:?}", site.posts_dir))?;

    let file_path = site.posts_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // serde_yaml quotes titles that need it (colons, leading dashes, ...)
    let front_matter = serde_yaml::to_string(&Scaffold {
        title,
        date: date.format("%Y-%m-%d").to_string(),
        excerpt: "",
    })?;
    let content = format!("---\n{}---\n\n", front_matter);

    fs::write(&file_path, content).with_context(|| format!("Failed to write {:?}", file_path))?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Run the new command, dating the post today
pub fn run(site: &Site, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    create_post(site, title, slug, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_create_post() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let path = create_post(&site, "Rust: A Love Story", None, date()).unwrap();
        assert_eq!(path, site.posts_dir.join("rust-a-love-story.md"));

        let content = fs::read_to_string(&path).unwrap();
        let (fm, body) = FrontMatter::parse(&content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Rust: A Love Story"));
        assert_eq!(fm.date.as_deref(), Some("2025-06-01"));
        assert!(fm.require_date().is_ok());
        assert!(body.is_empty());
    }

    #[test]
    fn test_create_post_explicit_slug() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let path = create_post(&site, "Whatever", Some("custom"), date()).unwrap();
        assert_eq!(path, site.posts_dir.join("custom.md"));
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        create_post(&site, "Twice", None, date()).unwrap();
        let err = create_post(&site, "Twice", None, date()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_create_post_rejects_empty_slug() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(create_post(&site, "!!!", None, date()).is_err());
    }
}
