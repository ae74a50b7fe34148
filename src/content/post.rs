//! Post model

use chrono::NaiveDateTime;
use std::path::PathBuf;

use super::FrontMatter;

/// A blog post
#[derive(Debug, Clone)]
pub struct Post {
    /// Source filename without its extension
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: NaiveDateTime,

    /// Excerpt from front-matter, if any
    pub excerpt: Option<String>,

    /// Rendered HTML content
    pub content: String,

    /// Full source file path
    pub source: PathBuf,

    /// Front-matter as written, including custom fields
    pub front_matter: FrontMatter,
}

impl Post {
    /// Output filename, relative to the blog directory
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}
