//! Shared data models for scan findings, the aggregated summary, and the
//! report container serialized by the JSON printer.

use serde::Serialize;

#[derive(Serialize, Clone)]
/// One detected `<img>` tag: extracted attributes plus the alt verdict.
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    /// True when the alt value, trimmed, is non-empty.
    pub has_alt: bool,
}

#[derive(Serialize)]
/// Per-document result of all pattern checks. Immutable once produced.
pub struct FileFindings {
    /// Path relative to the scanned directory.
    pub path: String,
    pub doctype: bool,
    pub html_lang: bool,
    pub viewport: bool,
    pub title: bool,
    /// One entry per `<img>` tag, in document order.
    pub images: Vec<ImageRef>,
    pub figures: usize,
    pub figcaptions: usize,
    pub placeholder: bool,
}

#[derive(Serialize)]
/// An aggregated alt-less image: which file, which src.
pub struct ImageIssue {
    pub file: String,
    pub src: String,
}

#[derive(Serialize, Default)]
/// Fold of all findings. Each list holds offending paths in scan order.
pub struct Summary {
    pub files: usize,
    pub missing_doctype: Vec<String>,
    pub missing_lang: Vec<String>,
    pub missing_viewport: Vec<String>,
    pub missing_title: Vec<String>,
    pub images_missing_alt: Vec<ImageIssue>,
    pub figures_missing_figcaptions: Vec<String>,
    pub placeholder_text: Vec<String>,
    /// Files whose bytes could not be read at all. Surfaced, never fatal.
    pub unreadable: Vec<String>,
}

impl Summary {
    /// Total issue count across every list, computed before any display cap.
    pub fn total_issues(&self) -> usize {
        self.missing_doctype.len()
            + self.missing_lang.len()
            + self.missing_viewport.len()
            + self.missing_title.len()
            + self.images_missing_alt.len()
            + self.figures_missing_figcaptions.len()
            + self.placeholder_text.len()
            + self.unreadable.len()
    }
}

#[derive(Serialize)]
/// Scan results container.
pub struct ScanResult {
    /// The scanned directory as given.
    pub dir: String,
    pub findings: Vec<FileFindings>,
    pub summary: Summary,
}
