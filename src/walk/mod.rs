// src/walk/mod.rs
// =============================================================================
// This module finds the documents the link checker should scan.
//
// Features:
// - Recursive walk of the repository root, sorted by file name
// - Skip directories are pruned before they are descended into
// - Only .md and .html files (any case) are returned
// =============================================================================

mod files;

pub use files::{collect_documents, default_skip_dirs, DocKind};
