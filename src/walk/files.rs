// src/walk/files.rs
// =============================================================================
// Document discovery with `walkdir`.
//
// How it works:
// 1. Walk the root depth-first, children sorted by file name
// 2. Prune any directory whose name is in the skip set (never descended)
// 3. Keep regular files with a Markdown/HTML extension; a symlink to a file
//    counts, but symlinked directories are not descended into
//
// Entries that cannot be read are logged and skipped; one unreadable
// directory should not hide problems everywhere else.
// =============================================================================

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Directory names never scanned: VCS metadata, editor and dependency
/// caches, and the requirements sources that are not part of the site.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "requirement",
    ".git",
    ".vscode",
    "node_modules",
    "__pycache__",
];

/// The two document formats we know how to pull links out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Markdown,
    Html,
}

impl DocKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" => Some(DocKind::Markdown),
            "html" => Some(DocKind::Html),
            _ => None,
        }
    }
}

pub fn default_skip_dirs() -> BTreeSet<String> {
    DEFAULT_SKIP_DIRS.iter().map(|name| name.to_string()).collect()
}

// Collects every Markdown/HTML file under `root`
//
// Returns: (absolute path, kind) pairs in walk order
pub fn collect_documents(root: &Path, skip_dirs: &BTreeSet<String>) -> Vec<(PathBuf, DocKind)> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        // depth 0 is the root itself, which is scanned whatever its name
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry, skip_dirs));

    let mut documents = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(kind) = DocKind::from_path(path) {
            debug!(file = %path.display(), ?kind, "document found");
            documents.push((path.to_path_buf(), kind));
        }
    }

    documents
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &BTreeSet<String>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| skip_dirs.contains(name))
}
