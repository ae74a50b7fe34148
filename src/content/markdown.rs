//! Markdown rendering with syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::config::HighlightConfig;
use crate::helpers::html_escape;

/// Markdown renderer with optional syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    highlight: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer with default highlighting
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default())
    }

    /// Create with custom settings
    pub fn with_options(config: &HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: config.theme.clone(),
            highlight: config.enable,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Front-matter is stripped before we get here, so no metadata blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::new();
        if !self.highlight {
            html::push_html(&mut html_output, parser);
            return Ok(html_output);
        }

        let mut events: Vec<Event> = Vec::new();
        // Some(lang) while inside a fenced block we are going to highlight
        let mut code_block_lang: Option<String> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref lang)))
                    if !lang.is_empty() =>
                {
                    // Only the first word names the language: ```rust,ignore
                    let lang = lang
                        .split(|c: char| c == ',' || c.is_whitespace())
                        .next()
                        .unwrap_or_default()
                        .to_string();
                    code_block_lang = Some(lang);
                    code_block_content.clear();
                }
                Event::Text(text) if code_block_lang.is_some() => {
                    code_block_content.push_str(&text);
                }
                Event::End(TagEnd::CodeBlock) if code_block_lang.is_some() => {
                    let lang = code_block_lang.take().unwrap_or_default();
                    let highlighted = self.highlight_code(&code_block_content, &lang);
                    events.push(Event::Html(CowStr::from(highlighted)));
                }
                _ => events.push(event),
            }
        }

        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block into `<pre><code class="language-LANG">`
    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let body = match theme.map(|theme| self.highlight_spans(code, syntax, theme)) {
            Some(Ok(spans)) => spans,
            Some(Err(e)) => {
                tracing::warn!("Failed to highlight {} code block: {}", lang, e);
                html_escape(code)
            }
            None => html_escape(code),
        };

        format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            html_escape(lang),
            body
        )
    }

    /// Inline-styled spans for every line of `code`, without a background
    fn highlight_spans(
        &self,
        code: &str,
        syntax: &SyntaxReference,
        theme: &Theme,
    ) -> Result<String, syntect::Error> {
        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut html = String::new();
        for line in LinesWithEndings::from(code) {
            let regions = highlighter.highlight_line(line, &self.syntax_set)?;
            html.push_str(&styled_line_to_highlighted_html(
                &regions[..],
                IncludeBackground::No,
            )?);
        }
        Ok(html)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_renderer() -> MarkdownRenderer {
        MarkdownRenderer::with_options(&HighlightConfig {
            enable: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.").unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_heading_only() {
        let html = plain_renderer().render("# Hi").unwrap();
        assert_eq!(html.trim(), "<h1>Hi</h1>");
    }

    #[test]
    fn test_render_gfm_extensions() {
        let renderer = plain_renderer();
        let html = renderer
            .render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n\n- [x] done")
            .unwrap();
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```").unwrap();
        assert!(html.contains(r#"<pre><code class="language-rust">"#));
        assert!(html.contains("<span style="));
        assert!(html.contains("main"));
        assert!(html.trim_end().ends_with("</code></pre>"));
        assert!(!html.contains("<figure"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_highlighted_code_is_escaped() {
        let html = MarkdownRenderer::new()
            .render("```html\n<b>&</b>\n```")
            .unwrap();
        assert!(html.contains(r#"<pre><code class="language-html">"#));
        assert!(html.contains("&lt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = MarkdownRenderer::new()
            .render("```nosuchlang\nx < y\n```")
            .unwrap();
        assert!(html.contains(r#"<pre><code class="language-nosuchlang">"#));
        assert!(html.contains("x &lt; y"));
    }

    #[test]
    fn test_render_code_block_without_highlighting() {
        let html = plain_renderer()
            .render("```rust\nlet x = 1 < 2;\n```")
            .unwrap();
        assert!(html.contains(r#"<code class="language-rust">"#));
        assert!(html.contains("1 &lt; 2"));
    }

    #[test]
    fn test_unlabelled_code_block_untouched() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```\nplain <text>\n```").unwrap();
        assert!(html.contains("<pre><code>plain &lt;text&gt;"));
    }
}
