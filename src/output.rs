//! Output rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs. Rendering is done by pure
//! functions returning strings/values so the report is byte-stable across
//! runs and easy to snapshot in tests.

use crate::models::ScanResult;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

/// Display caps. Totals are always computed before truncation.
const LIST_CAP: usize = 20;
const IMAGE_LIST_CAP: usize = 50;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print scan results in the requested format.
pub fn print_report(res: &ScanResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(res)).unwrap()
        ),
        _ => print!("{}", render_human(res, use_colors(output))),
    }
}

/// Render the human report. Section order is fixed: header, per-check
/// lists, image list, figure list, placeholder list, unreadable list (only
/// when non-empty), per-file breakdown, final summary line.
pub fn render_human(res: &ScanResult, color: bool) -> String {
    let s = &res.summary;
    let mut out = String::new();

    let header = format!("Site smoke-test report for: {}", res.dir);
    if color {
        out.push_str(&format!("\n{}\n", header.bold()));
    } else {
        out.push_str(&format!("\n{}\n", header));
    }
    out.push_str(&format!("Files scanned: {}\n", s.files));

    out.push_str("\nChecks (present / issues):\n");
    push_list(&mut out, "Missing <!DOCTYPE html>", &s.missing_doctype, color);
    push_list(&mut out, "<html lang=\"...\"> missing", &s.missing_lang, color);
    push_list(&mut out, "Missing viewport meta", &s.missing_viewport, color);
    push_list(&mut out, "Missing <title>", &s.missing_title, color);

    if s.images_missing_alt.is_empty() {
        push_ok(&mut out, "Images with missing alt", color);
    } else {
        push_count(
            &mut out,
            "Images with missing alt",
            s.images_missing_alt.len(),
            color,
        );
        for img in s.images_missing_alt.iter().take(IMAGE_LIST_CAP) {
            out.push_str(&format!("    \u{2022} {} -> src={}\n", img.file, img.src));
        }
    }

    push_list(
        &mut out,
        "Figures missing figcaptions",
        &s.figures_missing_figcaptions,
        color,
    );
    push_list(
        &mut out,
        "\"Under Construction\" occurrences",
        &s.placeholder_text,
        color,
    );
    if !s.unreadable.is_empty() {
        push_list(&mut out, "Unreadable files", &s.unreadable, color);
    }

    out.push_str("\nDetailed per-file breakdown (counts):\n");
    for f in &res.findings {
        out.push_str(&format!(
            " - {}: doctype={}, lang={}, viewport={}, title={}, imgs={}, figs={}, figcaps={}, under_construction={}\n",
            f.path,
            yes_no(f.doctype),
            yes_no(f.html_lang),
            yes_no(f.viewport),
            yes_no(f.title),
            f.images.len(),
            f.figures,
            f.figcaptions,
            yes_no(f.placeholder),
        ));
    }

    out.push_str("\nSummary:\n");
    let issues = s.total_issues();
    if issues == 0 {
        let line = "No issues found by the smoke-check. Good job!";
        if color {
            out.push_str(&format!("{}\n", line.green().bold()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    } else {
        let line = format!(
            "Total issues found (rough count): {}. See above for details.",
            issues
        );
        if color {
            out.push_str(&format!("{}\n", line.yellow().bold()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }
    out
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

fn push_ok(out: &mut String, name: &str, color: bool) {
    if color {
        out.push_str(&format!(" - {}: {}\n", name, "OK".green()));
    } else {
        out.push_str(&format!(" - {}: OK\n", name));
    }
}

fn push_count(out: &mut String, name: &str, count: usize, color: bool) {
    if color {
        out.push_str(&format!(" - {}: {}\n", name, count.yellow()));
    } else {
        out.push_str(&format!(" - {}: {}\n", name, count));
    }
}

/// One `OK`-or-count line plus up to `LIST_CAP` bulleted paths.
fn push_list(out: &mut String, name: &str, items: &[String], color: bool) {
    if items.is_empty() {
        push_ok(out, name, color);
        return;
    }
    let label = format!("{} issue(s)", items.len());
    if color {
        out.push_str(&format!(" - {}: {}\n", name, label.yellow()));
    } else {
        out.push_str(&format!(" - {}: {}\n", name, label));
    }
    for item in items.iter().take(LIST_CAP) {
        out.push_str(&format!("    \u{2022} {}\n", item));
    }
}

/// Compose scan JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(res: &ScanResult) -> JsonVal {
    // Directly serialize ScanResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}
