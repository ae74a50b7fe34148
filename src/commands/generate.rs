//! Generate static files

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::content::data::PageData;
use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// What a build wrote
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of posts rendered
    pub posts: usize,
    /// Every file written, in write order
    pub written: Vec<PathBuf>,
}

impl BuildReport {
    fn write(&mut self, path: PathBuf, html: &str) -> Result<()> {
        write_page(&path, html)?;
        tracing::debug!("Generated: {:?}", path);
        self.written.push(path);
        Ok(())
    }
}

/// Generate the static site
///
/// Files are written one at a time; a failure part way through leaves the
/// files already written in place.
pub fn run(site: &Site) -> Result<BuildReport> {
    let start = Instant::now();
    tracing::info!("Building site...");

    let blog_dir = site.blog_dir();
    fs::create_dir_all(&blog_dir)
        .with_context(|| format!("Failed to create dir {:?}", blog_dir))?;

    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;
    tracing::info!("Found {} blog posts", posts.len());

    let pages = PageData::load(site.data_path())?;
    let generator = Generator::new(&site.config)?;

    let mut report = BuildReport {
        posts: posts.len(),
        written: Vec::new(),
    };

    report.write(blog_dir.join("index.html"), &generator.blog_index(&posts)?)?;
    tracing::info!("Generated blog index");

    for post in &posts {
        report.write(blog_dir.join(post.file_name()), &generator.blog_post(post)?)?;
        tracing::info!("Generated blog post: {}", post.title);
    }

    let public_dir = &site.public_dir;
    report.write(
        public_dir.join("index.html"),
        &generator.home_page(&pages.home)?,
    )?;
    report.write(
        public_dir.join("about.html"),
        &generator.about_page(&pages.about, loader.renderer())?,
    )?;
    report.write(
        public_dir.join("projects.html"),
        &generator.projects_page(&pages.projects)?,
    )?;
    tracing::info!("Generated static pages");

    tracing::info!(
        "Build complete: {} files in {:.2}s",
        report.written.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(report)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create dir {:?}", parent))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))
}
