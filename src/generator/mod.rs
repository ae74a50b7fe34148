//! Generator module - turns posts and static page data into HTML pages
//!
//! Every function here is pure: same inputs, same output. Writing the
//! results to disk is the job of [`crate::commands::generate`].

use anyhow::Result;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::data::{AboutData, HomeData, ProjectsData};
use crate::content::{MarkdownRenderer, Post};
use crate::helpers::{encode_segment, format_date, PageDepth};
use crate::templates::{PostData, SectionData, TemplateRenderer};

/// Page generator using the built-in templates
pub struct Generator {
    renderer: TemplateRenderer,
    date_format: String,
}

impl Generator {
    /// Create a new generator
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            renderer: TemplateRenderer::new(config)?,
            date_format: config.date_format.clone(),
        })
    }

    /// Blog index page listing every post, in the order given
    pub fn blog_index(&self, posts: &[Post]) -> Result<String> {
        let posts: Vec<PostData> = posts.iter().map(|p| self.post_data(p)).collect();

        let mut context = Context::new();
        context.insert("posts", &posts);
        let content = self.renderer.render("blog_index.html", &context)?;

        self.renderer
            .render_page("Blog", &content, PageDepth::Nested)
    }

    /// Page for a single post
    pub fn blog_post(&self, post: &Post) -> Result<String> {
        let mut context = Context::new();
        context.insert("post", &self.post_data(post));
        context.insert("back_href", &PageDepth::Nested.url_for("blog/index.html"));
        let content = self.renderer.render("post.html", &context)?;

        self.renderer
            .render_page(&post.title, &content, PageDepth::Nested)
    }

    /// Home page
    pub fn home_page(&self, home: &HomeData) -> Result<String> {
        let mut context = Context::new();
        context.insert("home", home);
        context.insert("blog_href", &PageDepth::Root.url_for("blog/index.html"));
        let content = self.renderer.render("home.html", &context)?;

        self.renderer.render_page("Home", &content, PageDepth::Root)
    }

    /// About page; section bodies are markdown
    pub fn about_page(&self, about: &AboutData, markdown: &MarkdownRenderer) -> Result<String> {
        let sections = about
            .sections
            .iter()
            .map(|s| {
                Ok(SectionData {
                    heading: s.heading.clone(),
                    body: markdown.render(&s.body)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut context = Context::new();
        context.insert("heading", &about.heading);
        context.insert("sections", &sections);
        let content = self.renderer.render("about.html", &context)?;

        self.renderer.render_page("About", &content, PageDepth::Root)
    }

    /// Projects page
    pub fn projects_page(&self, projects: &ProjectsData) -> Result<String> {
        let mut context = Context::new();
        context.insert("projects", projects);
        let content = self.renderer.render("projects.html", &context)?;

        self.renderer
            .render_page("Projects", &content, PageDepth::Root)
    }

    fn post_data(&self, post: &Post) -> PostData {
        PostData {
            title: post.title.clone(),
            date: format_date(&post.date, &self.date_format),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            href: format!("{}.html", encode_segment(&post.slug)),
            content: post.content.clone(),
        }
    }
}
