//! Sitesmoke core library.
//!
//! This crate exposes programmatic APIs for smoke-checking a directory of
//! static HTML files: pattern-based heuristics for common accessibility and
//! metadata omissions, aggregated into a single textual or JSON report.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `checks`: Pattern checks applied to one document's text.
//! - `scan`: Discover / inspect / aggregate pipeline.
//! - `models`: Findings, summary, and report data structs.
//! - `output`: Human/JSON printers for scan results.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod scan;
pub mod utils;
