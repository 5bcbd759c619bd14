//! Pattern checks applied to one document's text.
//!
//! Deliberately regex/substring based rather than DOM based: hand-written
//! sites are often malformed, and a tolerant scan degrades to "check not
//! found" instead of failing the run. Matching semantics: case-insensitive,
//! either quote style, whitespace-flexible where noted.

use crate::models::{FileFindings, ImageRef};
use regex::Regex;
use std::sync::LazyLock;

static DOCTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!doctype\s+html").expect("bad doctype regex"));
static HTML_LANG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<html[^>]*\slang="[^"]+"|<html[^>]*\slang='[^']+'"#)
        .expect("bad lang regex")
});
static VIEWPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta[^>]+name=["']viewport["']"#).expect("bad viewport regex"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>.*?</title>").expect("bad title regex"));
static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\s+([^>]+)>").expect("bad img regex"));
static ALT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)alt\s*=\s*"([^"]*)"|alt\s*=\s*'([^']*)'"#).expect("bad alt regex")
});
static SRC_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)src\s*=\s*"([^"]*)"|src\s*=\s*'([^']*)'"#).expect("bad src regex")
});

/// Literal marker for unfinished content.
const PLACEHOLDER: &str = "under construction";

/// Run every check against one document and produce its findings.
///
/// `path` is the display path (relative to the scanned directory); `text`
/// is the full document content, already decoded.
pub fn inspect_text(path: &str, text: &str) -> FileFindings {
    let lower = text.to_lowercase();
    FileFindings {
        path: path.to_string(),
        doctype: DOCTYPE_RE.is_match(&lower),
        html_lang: HTML_LANG_RE.is_match(text),
        viewport: VIEWPORT_RE.is_match(&lower),
        title: TITLE_RE.is_match(&lower),
        images: collect_images(text),
        figures: lower.matches("<figure").count(),
        figcaptions: lower.matches("<figcaption").count(),
        placeholder: lower.contains(PLACEHOLDER),
    }
}

/// Extract every `<img ...>` tag in document order.
///
/// `src` and `alt` are pulled out independently (either quote style); a tag
/// without a parsable src still counts, with an empty src string.
fn collect_images(text: &str) -> Vec<ImageRef> {
    let mut out = Vec::new();
    for cap in IMG_TAG_RE.captures_iter(text) {
        let attrs = cap.get(1).map(|m| m.as_str()).unwrap_or("");
        let src = attr_value(&SRC_ATTR_RE, attrs);
        let alt = attr_value(&ALT_ATTR_RE, attrs);
        let has_alt = !alt.trim().is_empty();
        out.push(ImageRef { src, alt, has_alt });
    }
    out
}

/// First match of a two-alternative (double/single quote) attribute regex.
fn attr_value(re: &Regex, attrs: &str) -> String {
    match re.captures(attrs) {
        Some(c) => c
            .get(1)
            .or_else(|| c.get(2))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        None => String::new(),
    }
}

// Note: `<figure` / `<figcaption` are raw substring counts, not structurally
// paired. A figcaption outside its figure still counts; accepted
// approximation.
