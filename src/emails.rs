//! Email address extraction.

use crate::constants::REGEXPS;
use crate::dom_utils;
use scraper::{Html, Selector};
use std::collections::BTreeSet;

/// Harvest email addresses from `mailto:` anchors and visible text.
///
/// Anchor targets have the scheme and any `?subject=`-style query suffix
/// stripped, must match the email pattern from their start, and are dropped
/// when the anchor is hidden. Text matches come only from the visible
/// fragment stream. The union is returned in lexicographic order, a
/// deliberate normalization for stable output.
pub(crate) fn extract_emails(document: &Html) -> Vec<String> {
    let mut emails = BTreeSet::new();

    let anchor = Selector::parse("a").unwrap();
    for a in document.select(&anchor) {
        let href = a.value().attr("href").unwrap_or("");
        if !href.to_lowercase().starts_with("mailto:") {
            continue;
        }
        let addr = href
            .splitn(2, ':')
            .nth(1)
            .unwrap_or("")
            .split('?')
            .next()
            .unwrap_or("")
            .trim();
        if !REGEXPS.email_anchored.is_match(addr) {
            continue;
        }
        if dom_utils::is_hidden(a) {
            continue;
        }
        emails.insert(addr.to_string());
    }

    for fragment in dom_utils::visible_fragments(document) {
        for found in REGEXPS.email.find_iter(fragment.text) {
            emails.insert(found.as_str().to_string());
        }
    }

    emails.into_iter().collect()
}
