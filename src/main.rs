//! Sitesmoke CLI binary entry point.
//! Delegates to modules for scanning and prints the report.

mod checks;
mod cli;
mod config;
mod models;
mod output;
mod scan;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Scan { dir, ext, output } => {
            let eff =
                config::resolve_effective(dir.as_deref(), ext.as_deref(), output.as_deref());

            // Friendly note if no sitesmoke config was found; a config that
            // exists but fails to parse is called out instead of being
            // reported as missing
            let cfg_root = config::detect_config_root(&eff.dir);
            match config::find_config_file(&cfg_root) {
                Some(path) => {
                    if config::load_config(&cfg_root).is_none() {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!(
                                "Config file failed to parse, using defaults: {}",
                                path.to_string_lossy()
                            )
                        );
                    }
                }
                None => {
                    if eff.output != "json" {
                        eprintln!(
                            "{} {}",
                            utils::note_prefix(),
                            "No sitesmoke.toml found; using defaults."
                        );
                    }
                }
            }

            if !eff.dir.is_dir() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Target is not a directory: {} (pass --dir or configure sitesmoke.toml)",
                        eff.dir.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }

            let result = scan::run_scan(&eff.dir, &eff.extension);
            if result.summary.files == 0 && result.summary.unreadable.is_empty() {
                println!("No HTML files found in {}", eff.dir.to_string_lossy());
                std::process::exit(1);
            }
            output::print_report(&result, &eff.output);
            // Issues are informational; only the no-files case is non-zero
        }
    }
}
