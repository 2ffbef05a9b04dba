// src/checker/resolve.rs
// =============================================================================
// This module decides whether a single href points at a local file that
// exists.
//
// Classification, in order:
// - empty, external (http/https/mailto/tel, protocol-relative), anchor-only
//   and data: links are ignored
// - viewer links (`?doc=/docs/x.md`) are checked against the doc parameter
// - root-absolute paths (`/docs/x.md`) are checked against the root
// - pure query strings (`?x=1`) are ignored
// - everything else is resolved against the referencing file's directory;
//   if that climbs out of the root the link is ignored
//
// Paths are normalized lexically. Nothing here touches the filesystem except
// the final existence check.
// =============================================================================

use super::problem::Problem;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use url::form_urlencoded;

const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "//", "mailto:", "tel:"];
const VIEWER_MARKER: &str = "?doc=";

/// Resolves hrefs found in files under `root` (an absolute, canonical path).
pub struct Resolver<'a> {
    root: &'a Path,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Checks one href written in `from_file`.
    ///
    /// Returns `Some(problem)` when the href looks local but does not resolve.
    pub fn check_href(&self, from_file: &Path, href: &str) -> Option<Problem> {
        let href = href.trim();

        if href.is_empty()
            || is_external(href)
            || href.starts_with('#')
            || href.starts_with("data:")
        {
            debug!(href, "ignored");
            return None;
        }

        if href.contains(VIEWER_MARKER) {
            let Some(doc) = viewer_doc_param(href) else {
                return Some(self.problem(from_file, href, "missing doc parameter".to_string()));
            };
            let target = root_relative(&doc);
            return self.missing(&target).then(|| {
                self.problem(from_file, href, format!("doc target not found: {}", display(&target)))
            });
        }

        if href.starts_with('/') {
            let target = root_relative(strip_fragment_and_query(href));
            return self.missing(&target).then(|| {
                self.problem(from_file, href, format!("target not found: {}", display(&target)))
            });
        }

        if href.starts_with('?') {
            debug!(href, "query-only link ignored");
            return None;
        }

        let base = self.relative_dir_of(from_file);
        let Some(target) = file_relative(&base, strip_fragment_and_query(href)) else {
            debug!(href, file = %from_file.display(), "resolves outside root, ignored");
            return None;
        };
        self.missing(&target).then(|| {
            self.problem(from_file, href, format!("target not found: {}", display(&target)))
        })
    }

    fn missing(&self, target: &Path) -> bool {
        !self.root.join(target).exists()
    }

    fn relative_dir_of(&self, file: &Path) -> PathBuf {
        file.parent()
            .and_then(|dir| dir.strip_prefix(self.root).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    fn problem(&self, from_file: &Path, href: &str, reason: String) -> Problem {
        let file = from_file.strip_prefix(self.root).unwrap_or(from_file);
        Problem::new(file, href, reason)
    }
}

fn is_external(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    EXTERNAL_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
}

/// First non-empty `doc` value of the query string, percent-decoded.
fn viewer_doc_param(href: &str) -> Option<String> {
    let (_, rest) = href.split_once('?')?;
    let query = rest.split('#').next().unwrap_or_default();
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == "doc" && !value.trim().is_empty())
        .map(|(_, value)| value.trim().to_string())
}

fn strip_fragment_and_query(href: &str) -> &str {
    href.split(['#', '?']).next().unwrap_or_default()
}

/// Interprets `link` as relative to the root. `..` stops at the root, the way
/// a browser treats `/../x` as `/x`.
fn root_relative(link: &str) -> PathBuf {
    let mut parts = Vec::new();
    push_segments(&mut parts, link, true);
    parts.iter().collect()
}

/// Resolves `link` against `base` (a directory relative to the root).
/// Returns `None` as soon as a `..` climbs above the root, even when later
/// segments would come back in (`../<root-name>/x` is ignored, not checked).
fn file_relative(base: &Path, link: &str) -> Option<PathBuf> {
    let mut parts: Vec<String> = base
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    push_segments(&mut parts, link, false).then(|| parts.iter().collect())
}

fn push_segments(parts: &mut Vec<String>, link: &str, clamp: bool) -> bool {
    for segment in link.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.pop().is_none() && !clamp {
                    return false;
                }
            }
            other => parts.push(other.to_string()),
        }
    }
    true
}

fn display(target: &Path) -> String {
    target
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        root: PathBuf,
    }

    impl Fixture {
        fn new(files: &[&str]) -> Self {
            let tmp = TempDir::new().expect("create temp dir");
            let root = tmp.path().canonicalize().expect("canonical root");
            for file in files {
                let path = root.join(file);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(&path, "x").unwrap();
            }
            Self { _tmp: tmp, root }
        }

        fn check(&self, from: &str, href: &str) -> Option<Problem> {
            Resolver::new(&self.root).check_href(&self.root.join(from), href)
        }
    }

    #[test]
    fn external_and_anchor_links_are_ignored() {
        let fx = Fixture::new(&[]);
        for href in [
            "http://example.com/a.md",
            "https://example.com",
            "HTTPS://EXAMPLE.COM",
            "//cdn.example.com/app.js",
            "mailto:someone@example.com",
            "tel:+123456",
            "#section",
            "data:image/png;base64,AAAA",
            "",
            "   ",
            "?page=2",
        ] {
            assert_eq!(fx.check("docs/index.md", href), None, "href {:?}", href);
        }
    }

    #[test]
    fn existing_relative_links_pass() {
        let fx = Fixture::new(&["docs/guide/intro.md", "docs/faq.md", "web/img/logo.png"]);
        assert_eq!(fx.check("docs/guide/intro.md", "../faq.md"), None);
        assert_eq!(fx.check("docs/guide/intro.md", "./intro.md#top"), None);
        assert_eq!(fx.check("docs/faq.md", "guide/intro.md"), None);
        assert_eq!(fx.check("docs/faq.md", "../web/img/logo.png"), None);
        assert_eq!(fx.check("docs/faq.md", "guide/"), None);
    }

    #[test]
    fn missing_relative_link_is_reported_relative_to_root() {
        let fx = Fixture::new(&["docs/faq.md"]);
        let problem = fx.check("docs/faq.md", "guide/missing.md#part").unwrap();
        assert_eq!(problem.file, PathBuf::from("docs/faq.md"));
        assert_eq!(problem.link, "guide/missing.md#part");
        assert_eq!(problem.reason, "target not found: docs/guide/missing.md");
    }

    #[test]
    fn root_absolute_links() {
        let fx = Fixture::new(&["docs/a.md", "README.md"]);
        assert_eq!(fx.check("README.md", "/docs/a.md"), None);
        assert_eq!(fx.check("README.md", "/docs/a.md#heading"), None);
        assert_eq!(fx.check("README.md", "/../docs/a.md"), None);

        let problem = fx.check("README.md", "/docs/missing.md").unwrap();
        assert_eq!(problem.reason, "target not found: docs/missing.md");
    }

    #[test]
    fn escaping_the_root_is_ignored() {
        let fx = Fixture::new(&["docs/a.md"]);
        assert_eq!(fx.check("docs/a.md", "../../outside.md"), None);
        assert_eq!(fx.check("docs/a.md", "../../../etc/passwd"), None);
    }

    #[test]
    fn climbing_out_and_back_in_is_still_ignored() {
        let fx = Fixture::new(&["docs/a.md"]);
        let root_name = fx.root.file_name().unwrap().to_string_lossy().into_owned();
        let href = format!("../../{}/docs/missing.md", root_name);
        assert_eq!(fx.check("docs/a.md", &href), None);
    }

    #[test]
    fn viewer_links() {
        let fx = Fixture::new(&["docs/a.md", "web/viewer/index.html"]);
        assert_eq!(fx.check("web/viewer/index.html", "?doc=/docs/a.md"), None);
        assert_eq!(fx.check("web/viewer/index.html", "/web/viewer/?doc=docs/a.md#intro"), None);
        assert_eq!(fx.check("web/viewer/index.html", "./?doc=%2Fdocs%2Fa.md&lang=en"), None);

        let problem = fx.check("web/viewer/index.html", "?doc=/docs/missing.md").unwrap();
        assert_eq!(problem.reason, "doc target not found: docs/missing.md");

        let problem = fx.check("web/viewer/index.html", "/web/viewer/?doc=").unwrap();
        assert_eq!(problem.reason, "missing doc parameter");
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let fx = Fixture::new(&["docs/Guide.md"]);
        // Skip on case-insensitive filesystems.
        if fx.root.join("docs/guide.md").exists() {
            return;
        }
        assert!(fx.check("docs/Guide.md", "guide.md").is_some());
    }

    #[test]
    fn segment_normalization() {
        assert_eq!(root_relative("/a/./b/../c.md"), PathBuf::from("a/c.md"));
        assert_eq!(root_relative("../../a.md"), PathBuf::from("a.md"));
        assert_eq!(file_relative(Path::new("a/b"), "../../c.md"), Some(PathBuf::from("c.md")));
        assert_eq!(file_relative(Path::new("a"), "../../c.md"), None);
    }
}
