//! Social profile link extraction.

use crate::dom_utils;
use crate::options::ExtractorOptions;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Collect social profile links from the document's anchors.
///
/// Every anchor with a non-empty `href` is resolved against `base_url` and
/// accepted when its lowercase href contains one of the configured platform
/// domains; `javascript:` pseudo-links are rejected. Output is deduplicated
/// by resolved URL and preserves first-seen document order.
///
/// The visibility filter is intentionally not consulted here: social badges
/// are frequently rendered as icon-only or visually hidden markup that is
/// still a meaningful profile reference, so hidden anchors are reported too.
/// Template content is the exception — selector queries reach detached
/// `<template>` subtrees through the node arena, so those anchors are
/// filtered out explicitly.
pub(crate) fn extract_socials(
    document: &Html,
    base_url: &Url,
    options: &ExtractorOptions,
) -> Vec<String> {
    let anchor = Selector::parse("a").unwrap();
    let mut seen = HashSet::new();
    let mut socials = Vec::new();

    for a in document.select(&anchor) {
        if dom_utils::in_template(a) {
            continue;
        }
        let href = match a.value().attr("href") {
            Some(href) if !href.is_empty() => href,
            _ => continue,
        };
        let href_lower = href.to_lowercase();
        if href_lower.starts_with("javascript:") {
            continue;
        }
        if !options
            .social_domains
            .iter()
            .any(|domain| href_lower.contains(domain.as_str()))
        {
            continue;
        }

        // A href that fails resolution is kept verbatim rather than dropped.
        let resolved = match base_url.join(href) {
            Ok(url) => url.to_string(),
            Err(_) => href.to_string(),
        };
        if seen.insert(resolved.clone()) {
            socials.push(resolved);
        }
    }

    socials
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let base = Url::parse("https://example.com/about").unwrap();
        extract_socials(&document, &base, &ExtractorOptions::default())
    }

    #[test]
    fn relative_hrefs_resolve_against_the_base_url() {
        let socials = extract(r#"<a href="/go/linkedin.com/in/jane">profile</a>"#);
        assert_eq!(socials, vec!["https://example.com/go/linkedin.com/in/jane"]);
    }

    #[test]
    fn javascript_pseudo_links_are_rejected() {
        let socials = extract(r#"<a href="javascript:open('facebook.com')">fb</a>"#);
        assert!(socials.is_empty());
    }

    #[test]
    fn duplicates_collapse_in_first_seen_order() {
        let socials = extract(concat!(
            r#"<a href="https://linkedin.com/in/jane">a</a>"#,
            r#"<a href="https://facebook.com/jane">b</a>"#,
            r#"<a href="https://linkedin.com/in/jane">c</a>"#,
        ));
        assert_eq!(
            socials,
            vec![
                "https://linkedin.com/in/jane".to_string(),
                "https://facebook.com/jane".to_string(),
            ]
        );
    }

    #[test]
    fn hidden_anchors_are_still_reported() {
        let socials = extract(r#"<div hidden><a href="https://github.com/jane">gh</a></div>"#);
        assert_eq!(socials, vec!["https://github.com/jane"]);
    }

    #[test]
    fn template_anchors_are_never_reported() {
        let socials = extract(concat!(
            r#"<template><a href="https://linkedin.com/in/ghost">ghost</a></template>"#,
            r#"<a href="https://linkedin.com/in/jane">real</a>"#,
        ));
        assert_eq!(socials, vec!["https://linkedin.com/in/jane"]);
    }

    #[test]
    fn unconfigured_domains_are_ignored() {
        let socials = extract(r#"<a href="https://example.org/jane">site</a>"#);
        assert!(socials.is_empty());
    }
}
