// src/manifest/mod.rs
// =============================================================================
// This module generates updates/manifest.json, the index of dated update
// notes the site's updates page reads.
//
// Currently implements:
// - Listing updates/YYYY-MM-DD.md files, newest first
// - Writing the manifest as pretty JSON with a trailing newline
//
// Rerunning with the same files produces the same bytes.
// =============================================================================

mod generate;

pub use generate::write_manifest;
