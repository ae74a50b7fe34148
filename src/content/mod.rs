//! Content module - handles posts, static page data, and content processing

pub mod data;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::Post;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a source document into a post
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Front-matter has no closing `---` line")]
    UnterminatedFrontMatter,

    #[error("Invalid front-matter: {0}")]
    InvalidFrontMatter(#[from] serde_yaml::Error),

    #[error("Missing required front-matter field `{field}`")]
    MissingField { field: &'static str },

    #[error("Invalid date: {value:?}")]
    InvalidDate { value: String },

    #[error("File name {path:?} is not valid UTF-8")]
    NonUtf8FileName { path: PathBuf },

    #[error("Slug `{slug}` is reserved for the blog index")]
    ReservedSlug { slug: String },

    #[error("Posts {first:?} and {second:?} share the slug `{slug}`")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}
