//! # Statement Sanitization
//!
//! Problem statements arrive as untrusted markdown that may embed raw HTML.
//! Everything handed to the markdown renderer goes through [`sanitize`]
//! first, and the renderer only accepts [`SafeContent`], so the unsanitized
//! string cannot reach it.
//!
//! Kept: headings, lists, `pre`/`code`, emphasis, tables, layout tags
//! (`div`, `span`, `p`, `br`), links and images.
//! Dropped: `script` and `style` elements with their content, event-handler
//! attributes, inline `style` attributes, and non-http(s)/mailto URLs.
//!
//! ```rust
//! use arena_core::sanitize::sanitize;
//!
//! let safe = sanitize("<script>alert(1)</script><p>hi</p>");
//! assert_eq!(safe.as_str(), "<p>hi</p>");
//! ```

use std::collections::HashSet;
use std::fmt;

use ammonia::Builder;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Elements removed together with everything inside them
const STRIPPED_WITH_CONTENT: [&str; 6] = ["script", "style", "iframe", "object", "embed", "template"];

/// Link schemes that survive sanitization
const ALLOWED_URL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

static CLEANER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();
    builder
        .clean_content_tags(STRIPPED_WITH_CONTENT.iter().copied().collect::<HashSet<_>>())
        .url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
        .link_rel(Some("noopener noreferrer"))
        .strip_comments(true);
    builder
});

/// Statement markup that has passed through the sanitizer.
///
/// Only [`sanitize`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SafeContent(String);

impl SafeContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for SafeContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip active markup from raw statement content.
///
/// Never fails: fragments the HTML parser cannot make sense of are dropped.
/// Sanitizing already-sanitized content returns it unchanged.
pub fn sanitize(raw: &str) -> SafeContent {
    let cleaned = CLEANER.clean(raw).to_string();
    SafeContent(restore_pre_newlines(&cleaned))
}

/// Re-add the newline the HTML parser drops after a `<pre>` start tag.
///
/// The parser ignores one newline directly after `<pre>`, so content that
/// starts with a newline must be serialized with an extra one or the next
/// parse eats it.
fn restore_pre_newlines(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    // Text never holds a raw '<' after serialization, so every '<' opens a tag
    while let Some(open) = rest.find('<') {
        let Some(len) = tag_len(&rest[open..]) else {
            break;
        };
        let end = open + len;
        let tag = &rest[open..end];
        out.push_str(&rest[..end]);
        rest = &rest[end..];
        if is_pre_start(tag) && rest.starts_with('\n') {
            out.push('\n');
        }
    }
    out.push_str(rest);
    out
}

/// Length of the tag at the start of `s`, up to and including its `>`
fn tag_len(s: &str) -> Option<usize> {
    let mut quoted = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '>' if !quoted => return Some(i + 1),
            _ => {}
        }
    }
    None
}

fn is_pre_start(tag: &str) -> bool {
    let name = tag[1..]
        .split(|c: char| c == '>' || c == '/' || c.is_ascii_whitespace())
        .next()
        .unwrap_or_default();
    name.eq_ignore_ascii_case("pre")
}
