// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands, one per tool:
// - check-links: scan Markdown/HTML files for broken internal links
// - gen-manifest: write updates/manifest.json from dated update notes
//
// Both take --root, which defaults to the current directory so the tools can
// be run from the repository root without any arguments.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "docsite-tools",
    version,
    about = "Link checker and update-notes manifest generator for a documentation site",
    long_about = "docsite-tools checks Markdown and HTML files for internal links that point at \
                  files which do not exist, and generates the JSON manifest of dated update notes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the repository for broken internal links
    ///
    /// Example: docsite-tools check-links --root . --skip-dir drafts
    CheckLinks {
        /// Repository root to scan
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Log every file and link decision to stderr
        #[arg(long, short)]
        verbose: bool,

        /// Output problems as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Extra directory name to skip (repeatable)
        ///
        /// Added to the built-in list: requirement, .git, .vscode,
        /// node_modules, __pycache__
        #[arg(long = "skip-dir", value_name = "NAME")]
        skip_dirs: Vec<String>,
    },

    /// Regenerate updates/manifest.json from updates/YYYY-MM-DD.md files
    GenManifest {
        /// Repository root containing the updates/ directory
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

impl Commands {
    /// Whether debug logging was requested for this invocation.
    pub fn verbose(&self) -> bool {
        matches!(self, Commands::CheckLinks { verbose: true, .. })
    }
}
