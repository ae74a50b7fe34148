//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::helpers::format_date;
use crate::Site;

/// One line per post, newest first
pub fn format_posts(posts: &[Post], date_format: &str) -> Vec<String> {
    posts
        .iter()
        .map(|post| {
            format!(
                "{} - {} [{}]",
                format_date(&post.date, date_format),
                post.title,
                post.slug
            )
        })
        .collect()
}

/// Print every post
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;

    println!("Posts ({}):", posts.len());
    for line in format_posts(&posts, &site.config.date_format) {
        println!("  {}", line);
    }

    Ok(())
}
