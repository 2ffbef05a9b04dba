// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Install logging (stderr; --verbose raises the level)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = broken links, 2 = error)
//
// Everything runs synchronously: both tools make a single pass over local
// files and finish.
// =============================================================================

mod checker; // src/checker/ - link extraction and resolution
mod cli; // src/cli.rs - command-line parsing
mod logging; // src/logging.rs - tracing subscriber setup
mod manifest; // src/manifest/ - updates manifest generation
mod walk; // src/walk/ - document discovery

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::PathBuf;
use tracing::info;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.command.verbose());

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = success / no broken links
//   Ok(1) = broken links found
//   Err = fatal error (exit code 2)
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::CheckLinks {
            root,
            verbose: _,
            json,
            skip_dirs,
        } => handle_check_links(root, json, skip_dirs),
        Commands::GenManifest { root } => handle_gen_manifest(root),
    }
}

fn handle_check_links(root: PathBuf, json: bool, skip_dirs: Vec<String>) -> Result<i32> {
    let config = checker::ScanConfig::new(root).with_skip_dirs(skip_dirs);
    let problems = checker::check_tree(&config)?;

    print_results(&problems, json)?;

    if problems.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn handle_gen_manifest(root: PathBuf) -> Result<i32> {
    let (out, manifest) = manifest::write_manifest(&root)?;
    info!(path = %out.display(), entries = manifest.notes.len(), "manifest written");
    println!("Wrote {} ({} entries)", out.display(), manifest.notes.len());
    Ok(0)
}

// Prints the problems either as text or JSON
fn print_results(problems: &[checker::Problem], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(problems)?);
        return Ok(());
    }

    if problems.is_empty() {
        println!("No broken internal links found.");
        return Ok(());
    }

    println!("Found {} potential problem(s):", problems.len());
    for problem in problems {
        println!("- {}", problem);
    }
    Ok(())
}
