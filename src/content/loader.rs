//! Content loader - loads posts from the posts directory

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, MarkdownRenderer, Post};
use crate::Site;

/// Loads content from the posts directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        let renderer = MarkdownRenderer::with_options(&site.config.highlight);
        Self { site, renderer }
    }

    /// The markdown renderer posts are rendered with
    pub fn renderer(&self) -> &MarkdownRenderer {
        &self.renderer
    }

    /// Load all published posts, newest first
    ///
    /// A missing posts directory is created and yields no posts. Any post
    /// that cannot be read or has a bad header aborts the load.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = &self.site.posts_dir;
        if !posts_dir.exists() {
            tracing::info!("Posts directory {:?} does not exist, creating it", posts_dir);
            fs::create_dir_all(posts_dir)
                .with_context(|| format!("Failed to create {:?}", posts_dir))?;
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| format!("Failed to read {:?}", posts_dir))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown_file(path) {
                continue;
            }

            match self
                .load_post(path)
                .with_context(|| format!("Failed to load post {:?}", path))?
            {
                Some(post) => posts.push(post),
                None => tracing::debug!("Skipping unpublished post {:?}", path),
            }
        }

        check_unique_slugs(&posts)?;
        sort_posts(&mut posts);

        Ok(posts)
    }

    /// Load a single post from a file, or `None` if it is unpublished
    fn load_post(&self, path: &Path) -> Result<Option<Post>> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        if !fm.published {
            return Ok(None);
        }

        let slug = slug_for(path)?;
        if slug == RESERVED_SLUG {
            return Err(ContentError::ReservedSlug { slug }.into());
        }
        let title = fm.require_title()?.to_string();
        let date = fm.require_date()?;
        let content_html = self.renderer.render(body)?;

        Ok(Some(Post {
            slug,
            title,
            date,
            excerpt: fm.excerpt.clone(),
            content: content_html,
            source: path.to_path_buf(),
            front_matter: fm,
        }))
    }
}

/// `blog/index.html` is the listing, so no post may be written there
const RESERVED_SLUG: &str = "index";

/// Two posts with one slug would be written to the same file
fn check_unique_slugs(posts: &[Post]) -> Result<(), ContentError> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for post in posts {
        if let Some(first) = seen.insert(&post.slug, &post.source) {
            return Err(ContentError::DuplicateSlug {
                slug: post.slug.clone(),
                first: first.to_path_buf(),
                second: post.source.clone(),
            });
        }
    }
    Ok(())
}

/// Sort posts newest first; posts sharing a date are ordered by slug
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}

/// The slug of a post is its filename without the extension
///
/// Non-UTF-8 names are rejected rather than mangled, so the output file
/// always carries the same name as its source.
pub fn slug_for(path: &Path) -> Result<String, ContentError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| ContentError::NonUtf8FileName {
            path: path.to_path_buf(),
        })
}

/// Check if a file is a markdown file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
