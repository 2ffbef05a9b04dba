// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts link targets from Markdown text
// - html: Extracts href/src references from HTML pages
// - resolve: Decides whether one href points at an existing local file
// - problem: The record produced for every link that does not resolve
//
// This file ties them together: `check_tree` walks the root, reads each
// document, extracts its links and collects the problems.
// =============================================================================

mod html;
mod markdown;
mod problem;
mod resolve;

pub use html::extract_html_links;
pub use markdown::extract_markdown_links;
pub use problem::Problem;
pub use resolve::Resolver;

use crate::walk::{self, DocKind};
use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What to scan and what to leave out.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub skip_dirs: BTreeSet<String>,
}

impl ScanConfig {
    /// Config for `root` with the built-in skip directories.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_dirs: walk::default_skip_dirs(),
        }
    }

    pub fn with_skip_dirs<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs.extend(extra.into_iter().map(Into::into));
        self
    }
}

// Scans every document under the configured root
//
// Returns: every Problem found, in walk order
// Errors: only when the root itself is unusable; per-file failures become
//         Problems and the scan carries on
pub fn check_tree(config: &ScanConfig) -> Result<Vec<Problem>> {
    let root = config
        .root
        .canonicalize()
        .with_context(|| format!("cannot open root directory {}", config.root.display()))?;
    if !root.is_dir() {
        bail!("root {} is not a directory", root.display());
    }

    let documents = walk::collect_documents(&root, &config.skip_dirs);
    info!(root = %root.display(), documents = documents.len(), "scanning");

    let resolver = Resolver::new(&root);
    let mut problems = Vec::new();

    for (path, kind) in &documents {
        let links = match read_links(path, *kind) {
            Ok(links) => links,
            Err(err) => {
                let file = path.strip_prefix(&root).unwrap_or(path);
                problems.push(Problem::parse_failure(file, &err));
                continue;
            }
        };
        debug!(file = %path.display(), links = links.len(), "links extracted");

        problems.extend(links.iter().filter_map(|href| resolver.check_href(path, href)));
    }

    info!(problems = problems.len(), "scan finished");
    Ok(problems)
}

fn read_links(path: &Path, kind: DocKind) -> std::io::Result<Vec<String>> {
    // Invalid UTF-8 is replaced, not rejected
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(match kind {
        DocKind::Markdown => extract_markdown_links(&text),
        DocKind::Html => extract_html_links(&text),
    })
}
