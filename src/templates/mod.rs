//! Built-in site templates using the Tera template engine
//!
//! Every template is embedded in the binary. Autoescaping is on for all of
//! them and goes through [`html_escape`], so values inserted into a context
//! are escaped unless a template marks them `| safe`. Only HTML this crate
//! rendered itself (markdown output, page fragments) is marked safe.

use anyhow::{Context as _, Result};
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{html_escape, PageDepth};

/// Fixed navigation menu, as (label, path relative to the output root)
const NAV: [(&str, &str); 4] = [
    ("Home", "index.html"),
    ("About Me", "about.html"),
    ("Projects", "projects.html"),
    ("Blog", "blog/index.html"),
];

const FAVICON: &str = "favicon.svg";
const STYLESHEET: &str = "css/style.css";

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
    site: SiteData,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        tera.autoescape_on(vec![".html"]);
        tera.set_escape_fn(html_escape);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("blog_index.html", include_str!("site/blog_index.html")),
            ("post.html", include_str!("site/post.html")),
            ("home.html", include_str!("site/home.html")),
            ("about.html", include_str!("site/about.html")),
            ("projects.html", include_str!("site/projects.html")),
        ])?;

        Ok(Self {
            tera,
            site: SiteData::from(config),
        })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(template_name, context)
            .with_context(|| format!("Failed to render template {}", template_name))
    }

    /// Wrap an HTML fragment in the shared page shell
    ///
    /// `title` is escaped; `content` is inserted as-is. Asset and navigation
    /// links are made relative to where the page is written.
    pub fn render_page(&self, title: &str, content: &str, depth: PageDepth) -> Result<String> {
        let nav: Vec<NavItem> = NAV
            .iter()
            .map(|&(name, path)| NavItem {
                name,
                href: depth.url_for(path),
            })
            .collect();

        let mut context = Context::new();
        context.insert("site", &self.site);
        context.insert("title", title);
        context.insert("content", content);
        context.insert("favicon", &depth.url_for(FAVICON));
        context.insert("stylesheet", &depth.url_for(STYLESHEET));
        context.insert("nav", &nav);

        self.render("layout.html", &context)
    }
}

// Data structures for template contexts

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub footer: String,
    pub language: String,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            footer: config.footer.clone(),
            language: config.language.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub href: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionData {
    pub heading: String,
    pub body: String,
}
