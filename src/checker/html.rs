// src/checker/html.rs
// =============================================================================
// This module extracts link references from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which recovers from broken markup the way a
//   browser does, so a malformed page still yields whatever links it has
//
// Unlike a crawler we do not resolve anything here: hrefs are returned as
// written and the resolver decides what they point at.
//
// Parsing runs with scripting disabled so the contents of <noscript> are
// real elements rather than raw text; their links get checked too.
// =============================================================================

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use scraper::{Html, Selector};

// Tags whose `href` is a reference to another document or stylesheet
const HREF_SELECTOR: &str = "a[href], link[href]";

// Tags whose `src` loads a file
const SRC_SELECTOR: &str = "script[src], img[src], source[src]";

// Extracts every href/src reference from HTML content
//
// All `href` values come first (in document order), then all `src` values.
//
// Example:
//   html = "<a href='../faq.md'>FAQ</a><img src='logo.png'>"
//   result = ["../faq.md", "logo.png"]
pub fn extract_html_links(html: &str) -> Vec<String> {
    let document = parse_without_scripting(html);

    // Both selectors are constants and known to be valid
    let href_selector = Selector::parse(HREF_SELECTOR).unwrap();
    let src_selector = Selector::parse(SRC_SELECTOR).unwrap();

    let hrefs = document
        .select(&href_selector)
        .filter_map(|element| element.value().attr("href"));
    let srcs = document
        .select(&src_selector)
        .filter_map(|element| element.value().attr("src"));

    hrefs.chain(srcs).map(str::to_string).collect()
}

// Same as `Html::parse_document`, except <noscript> is parsed as markup
fn parse_without_scripting(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    html5ever::parse_document(Html::new_document(), opts).one(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hrefs_then_srcs() {
        let html = r#"
            <html><head>
              <link rel="stylesheet" href="../shared/site.css">
              <script src="app.js"></script>
            </head><body>
              <img src="img/logo.png">
              <a href="../docs/index.md">Docs</a>
            </body></html>
        "#;
        let links = extract_html_links(html);
        assert_eq!(
            links,
            vec!["../shared/site.css", "../docs/index.md", "app.js", "img/logo.png"]
        );
    }

    #[test]
    fn test_picture_source_tags() {
        let html = r#"<video><source src="clip.mp4"></video>"#;
        assert_eq!(extract_html_links(html), vec!["clip.mp4"]);
    }

    #[test]
    fn test_ignores_tags_without_attribute() {
        let html = r#"<a name="top">Top</a><script>var x = 1;</script><img alt="none">"#;
        assert!(extract_html_links(html).is_empty());
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = r#"<a href="?doc=/docs/a.md&amp;lang=en">A</a>"#;
        assert_eq!(extract_html_links(html), vec!["?doc=/docs/a.md&lang=en"]);
    }

    #[test]
    fn test_noscript_contents_are_extracted() {
        let html = r#"<html><body>
            <noscript><img src="missing.png"><a href="fallback.md">fallback</a></noscript>
            <a href="x.md">x</a>
        </body></html>"#;
        let links = extract_html_links(html);
        assert_eq!(links, vec!["fallback.md", "x.md", "missing.png"]);
    }

    #[test]
    fn test_malformed_markup_still_yields_links() {
        let html = r#"<div><p><a href="one.md">one<a href="two.md"</div></p><img src="x.png""#;
        let links = extract_html_links(html);
        assert!(links.contains(&"one.md".to_string()));
    }
}
