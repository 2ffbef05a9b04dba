// src/manifest/generate.rs
// =============================================================================
// Builds and writes the updates manifest.
//
// Flow:
// 1. Make sure <root>/updates exists
// 2. Keep direct children named exactly YYYY-MM-DD.md
// 3. Sort names descending (ISO dates sort lexicographically = by date)
// 4. Write {"notes": ["updates/<name>", ...]} to updates/manifest.json
// =============================================================================

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// Directory (relative to the root) holding the update notes.
pub const UPDATES_DIR: &str = "updates";
/// Manifest file name inside `UPDATES_DIR`.
pub const MANIFEST_FILE: &str = "manifest.json";

static DATED_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}\.md$").expect("dated note pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Root-relative note paths, newest first
    pub notes: Vec<String>,
}

// Lists the dated notes in `updates_dir`
//
// Returns: the manifest, with paths written as "updates/<name>"
pub fn build_manifest(updates_dir: &Path) -> Result<Manifest> {
    let entries = fs::read_dir(updates_dir)
        .with_context(|| format!("failed to read {}", updates_dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read {}", updates_dir.display()))?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !DATED_NOTE.is_match(&name) || !entry.path().is_file() {
            debug!(%name, "not a dated note");
            continue;
        }
        names.push(name);
    }

    names.sort_unstable_by(|a, b| b.cmp(a));

    Ok(Manifest {
        notes: names
            .into_iter()
            .map(|name| format!("{}/{}", UPDATES_DIR, name))
            .collect(),
    })
}

/// Pretty JSON (two-space indent) followed by a newline.
pub fn render_manifest(manifest: &Manifest) -> Result<String> {
    let mut json = serde_json::to_string_pretty(manifest).context("failed to serialize manifest")?;
    json.push('\n');
    Ok(json)
}

// Regenerates <root>/updates/manifest.json
//
// Returns: the path written and the manifest it contains
// Errors: creating the directory or writing the file fails
pub fn write_manifest(root: &Path) -> Result<(PathBuf, Manifest)> {
    let updates_dir = root.join(UPDATES_DIR);
    fs::create_dir_all(&updates_dir)
        .with_context(|| format!("failed to create {}", updates_dir.display()))?;

    let manifest = build_manifest(&updates_dir)?;
    let out = updates_dir.join(MANIFEST_FILE);
    fs::write(&out, render_manifest(&manifest)?)
        .with_context(|| format!("failed to write {}", out.display()))?;

    Ok((out, manifest))
}
