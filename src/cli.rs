//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sitesmoke",
    version,
    about = "Sitesmoke (static HTML smoke-check)",
    long_about = "Sitesmoke — a tiny, fast CLI to smoke-check static HTML files for common accessibility and metadata omissions.\n\nConfiguration precedence: CLI > sitesmoke.toml > defaults.",
    after_help = "Examples:\n  sitesmoke scan\n  sitesmoke scan --dir public\n  sitesmoke scan --dir site --ext .htm --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current sitesmoke version."
    )]
    Version,
    /// Scan HTML files and print a smoke-test report
    #[command(
        about = "Run the smoke-check",
        long_about = "Scan every matching file directly under the target directory (non-recursive) and print a report. Exit code is 0 when files were scanned (issues are informational) and 1 when no files matched.",
        after_help = "Examples:\n  sitesmoke scan --dir public\n  sitesmoke scan --output json"
    )]
    Scan {
        #[arg(long, help = "Directory to scan (default: current dir)")]
        dir: Option<String>,
        #[arg(long, help = "File suffix to include (default: .html)")]
        ext: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
