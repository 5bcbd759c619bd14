//! Scan runner: discover target files, inspect each, fold into a summary.
//!
//! Produces a `ScanResult` with per-file findings and an aggregated
//! `Summary`. Inspection is embarrassingly parallel, so files run through
//! rayon; findings are re-sorted by path before aggregation so the report
//! stays deterministic.

use crate::checks::inspect_text;
use crate::models::{FileFindings, ImageIssue, ScanResult, Summary};
use glob::{glob, Pattern};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// List entries of `base_dir` matching the extension filter, sorted
/// lexicographically. Non-recursive: subdirectories are not descended.
pub fn discover(base_dir: &Path, extension: &str) -> Vec<PathBuf> {
    // Escape the base path and suffix so directory names carrying glob
    // metacharacters ("v[1]", "site[") are matched literally; only the
    // leading `*` is wildcard syntax.
    let pattern = format!(
        "{}{}*{}",
        Pattern::escape(&base_dir.to_string_lossy()),
        std::path::MAIN_SEPARATOR,
        Pattern::escape(extension),
    );
    let mut targets: Vec<PathBuf> = Vec::new();
    for entry in glob(&pattern).expect("bad glob pattern").flatten() {
        if entry.is_file() {
            targets.push(entry);
        }
    }
    targets.sort();
    targets
}

/// Read and inspect one file.
///
/// Invalid UTF-8 degrades via lossy substitution rather than failing the
/// run; `Err` is returned only when the bytes cannot be read at all.
pub fn inspect(path: &Path, base_dir: &Path) -> Result<FileFindings, String> {
    let rel = rel_path(path, base_dir);
    match fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            Ok(inspect_text(&rel, &text))
        }
        Err(_) => Err(rel),
    }
}

/// Fold findings into the summary. Each failed boolean check appends the
/// file's path; alt-less images append `{file, src}` pairs; a file with
/// strictly more figures than figcaptions is flagged (equal counts pass,
/// including 0/0).
pub fn aggregate(findings: &[FileFindings], unreadable: Vec<String>) -> Summary {
    let mut summary = Summary {
        files: findings.len(),
        unreadable,
        ..Summary::default()
    };
    for f in findings {
        if !f.doctype {
            summary.missing_doctype.push(f.path.clone());
        }
        if !f.html_lang {
            summary.missing_lang.push(f.path.clone());
        }
        if !f.viewport {
            summary.missing_viewport.push(f.path.clone());
        }
        if !f.title {
            summary.missing_title.push(f.path.clone());
        }
        for img in &f.images {
            if !img.has_alt {
                summary.images_missing_alt.push(ImageIssue {
                    file: f.path.clone(),
                    src: img.src.clone(),
                });
            }
        }
        if f.figures > f.figcaptions {
            summary.figures_missing_figcaptions.push(f.path.clone());
        }
        if f.placeholder {
            summary.placeholder_text.push(f.path.clone());
        }
    }
    summary
}

/// Run the full pipeline over `base_dir`.
///
/// An empty `findings` + `unreadable` pair means no matching files were
/// found; the caller decides how to report that (exit code 1 upstream).
pub fn run_scan(base_dir: &Path, extension: &str) -> ScanResult {
    let targets = discover(base_dir, extension);

    let per_file: Vec<Result<FileFindings, String>> = targets
        .par_iter()
        .map(|path| inspect(path, base_dir))
        .collect();

    let mut findings: Vec<FileFindings> = Vec::new();
    let mut unreadable: Vec<String> = Vec::new();
    for r in per_file {
        match r {
            Ok(f) => findings.push(f),
            Err(p) => unreadable.push(p),
        }
    }
    // Deterministic ordering regardless of inspection order
    findings.sort_by(|a, b| a.path.cmp(&b.path));
    unreadable.sort();

    let summary = aggregate(&findings, unreadable);
    ScanResult {
        dir: base_dir.to_string_lossy().to_string(),
        findings,
        summary,
    }
}

fn rel_path(path: &Path, base_dir: &Path) -> String {
    pathdiff::diff_paths(path, base_dir)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const GOOD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Home</title>
</head>
<body>
<figure><img src="a.png" alt="logo"><figcaption>Logo</figcaption></figure>
</body>
</html>"#;

    #[test]
    fn test_discover_sorted_and_non_recursive() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.html"), "x").unwrap();
        fs::write(root.join("a.html"), "x").unwrap();
        fs::write(root.join("notes.txt"), "x").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/c.html"), "x").unwrap();

        let found = discover(root, ".html");
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_discover_bracketed_dir_is_literal() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        // A character-class reading of "v[1]" would match sibling "v1"
        fs::create_dir(root.join("v[1]")).unwrap();
        fs::create_dir(root.join("v1")).unwrap();
        fs::write(root.join("v[1]").join("page.html"), "x").unwrap();
        fs::write(root.join("v1").join("decoy.html"), "x").unwrap();

        let found = discover(&root.join("v[1]"), ".html");
        assert_eq!(found, vec![root.join("v[1]").join("page.html")]);
    }

    #[test]
    fn test_discover_unbalanced_bracket_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("site[");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.html"), "x").unwrap();

        assert_eq!(discover(&root, ".html"), vec![root.join("a.html")]);
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = tempdir().unwrap();
        assert!(discover(dir.path(), ".html").is_empty());
    }

    #[test]
    fn test_run_scan_clean_file_has_no_issues() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), GOOD_PAGE).unwrap();

        let res = run_scan(dir.path(), ".html");
        assert_eq!(res.summary.files, 1);
        assert_eq!(res.summary.total_issues(), 0);
        let f = &res.findings[0];
        assert_eq!(f.path, "index.html");
        assert!(f.doctype && f.html_lang && f.viewport && f.title);
        assert_eq!(f.images.len(), 1);
        assert!(f.images[0].has_alt);
    }

    #[test]
    fn test_aggregate_flags_missing_alt_and_figures() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("page.html"),
            r#"<html><body>
<img src="a.png" alt="logo"><img src="b.png">
<figure></figure><figure></figure><figcaption>c</figcaption>
</body></html>"#,
        )
        .unwrap();

        let res = run_scan(dir.path(), ".html");
        let s = &res.summary;
        assert_eq!(s.images_missing_alt.len(), 1);
        assert_eq!(s.images_missing_alt[0].src, "b.png");
        assert_eq!(s.figures_missing_figcaptions, vec!["page.html"]);
        assert_eq!(s.missing_doctype, vec!["page.html"]);
        assert_eq!(s.missing_lang, vec!["page.html"]);
        assert_eq!(s.missing_viewport, vec!["page.html"]);
        assert_eq!(s.missing_title, vec!["page.html"]);
    }

    #[test]
    fn test_matched_figures_not_flagged() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("page.html"),
            "<figure><figcaption>a</figcaption></figure><figure><figcaption>b</figcaption></figure>",
        )
        .unwrap();
        let res = run_scan(dir.path(), ".html");
        assert!(res.summary.figures_missing_figcaptions.is_empty());
    }

    #[test]
    fn test_invalid_utf8_degrades_gracefully() {
        let dir = tempdir().unwrap();
        let mut bytes = b"<!doctype html><title>x</title>".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);
        fs::write(dir.path().join("weird.html"), bytes).unwrap();

        let res = run_scan(dir.path(), ".html");
        assert_eq!(res.summary.files, 1);
        assert!(res.summary.unreadable.is_empty());
        assert!(res.findings[0].doctype);
        assert!(res.findings[0].title);
    }

    #[test]
    fn test_placeholder_aggregation() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("wip.html"), "<p>Page Under Construction</p>").unwrap();
        fs::write(dir.path().join("done.html"), "<p>Done</p>").unwrap();

        let res = run_scan(dir.path(), ".html");
        assert_eq!(res.summary.placeholder_text, vec!["wip.html"]);
    }
}
