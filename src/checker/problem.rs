// src/checker/problem.rs
// =============================================================================
// The one record the link checker produces: a link that did not resolve.
//
// `file` is always relative to the scanned root, so the same value works for
// the text report and for --json output.
// =============================================================================

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Link text used when the whole file could not be read.
pub const PARSE_LINK: &str = "(parse)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// File containing the link, relative to the root
    pub file: PathBuf,
    /// The href exactly as written (trimmed)
    pub link: String,
    /// Why the link is considered broken
    pub reason: String,
}

impl Problem {
    pub fn new(
        file: impl Into<PathBuf>,
        link: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            link: link.into(),
            reason: reason.into(),
        }
    }

    pub fn parse_failure(file: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::new(file, PARSE_LINK, format!("failed to parse: {}", err))
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.file.display(), self.link, self.reason)
    }
}
