//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that cannot appear raw inside one URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where a generated page sits in the output tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDepth {
    /// Written directly into the output root
    Root,
    /// Written one directory deep, inside `blog/`
    Nested,
}

impl PageDepth {
    /// Directory of the page, relative to the output root
    pub fn dir(&self) -> &'static str {
        match self {
            PageDepth::Root => "",
            PageDepth::Nested => "blog",
        }
    }

    /// Link from a page at this depth to a path given relative to the
    /// output root
    ///
    /// # Examples
    /// ```ignore
    /// PageDepth::Root.url_for("css/style.css")      // -> "css/style.css"
    /// PageDepth::Nested.url_for("css/style.css")    // -> "../css/style.css"
    /// PageDepth::Nested.url_for("blog/index.html")  // -> "index.html"
    /// ```
    pub fn url_for(&self, path: &str) -> String {
        relative_url(self.dir(), path)
    }
}

/// Calculate relative URL from a directory to a file, both given relative
/// to the same root
///
/// # Examples
/// ```ignore
/// relative_url("/foo/bar/", "/css/style.css") // -> "../../css/style.css"
/// ```
pub fn relative_url(from: &str, to: &str) -> String {
    let from_parts: Vec<&str> = from.split('/').filter(|p| !p.is_empty()).collect();
    let to_parts: Vec<&str> = to.split('/').filter(|p| !p.is_empty()).collect();

    // Shared leading directories; the last segment of `to` is the file itself
    let mut common = 0;
    for (i, part) in from_parts.iter().enumerate() {
        if i + 1 < to_parts.len() && *part == to_parts[i] {
            common = i + 1;
        } else {
            break;
        }
    }

    let up_count = from_parts.len() - common;
    let mut result = "../".repeat(up_count);
    result.push_str(&to_parts[common..].join("/"));

    if result.is_empty() {
        "./".to_string()
    } else {
        result
    }
}

/// Encode one URL path segment, such as a post slug
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
