//! Phone number extraction and normalization.

use crate::constants::{MIN_PHONE_DIGITS, REGEXPS};
use crate::dialplan;
use crate::dom_utils;
use crate::options::ExtractorOptions;
use crate::report::PhoneCandidate;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Harvest phone candidates from `tel:` anchors and visible text.
///
/// Anchor targets have the scheme and query suffix stripped and are dropped
/// when the anchor is hidden. Text matching takes the first phone-shaped
/// run per visible fragment; a fragment holding several numbers yields only
/// the first, a known limitation of the heuristic. Text matches must keep
/// at least [`MIN_PHONE_DIGITS`] digits after separators are stripped.
/// Both sources share one seen-set keyed by the original matched string.
pub(crate) fn extract_phones(document: &Html, options: &ExtractorOptions) -> Vec<PhoneCandidate> {
    let mut seen = HashSet::new();
    let mut phones = Vec::new();

    let anchor = Selector::parse("a").unwrap();
    for a in document.select(&anchor) {
        let href = a.value().attr("href").unwrap_or("");
        if !href.to_lowercase().starts_with("tel:") {
            continue;
        }
        let raw = href
            .splitn(2, ':')
            .nth(1)
            .unwrap_or("")
            .split('?')
            .next()
            .unwrap_or("");
        if dom_utils::is_hidden(a) {
            continue;
        }
        if seen.insert(raw.to_string()) {
            phones.push(PhoneCandidate {
                original: raw.to_string(),
                normalized: normalize_phone(raw, &options.default_region),
            });
        }
    }

    for fragment in dom_utils::visible_fragments(document) {
        let found = match REGEXPS.phone.find(fragment.text) {
            Some(found) => found,
            None => continue,
        };
        let raw = found.as_str().trim();
        if digits_of(raw).len() < MIN_PHONE_DIGITS {
            continue;
        }
        if seen.insert(raw.to_string()) {
            phones.push(PhoneCandidate {
                original: raw.to_string(),
                normalized: normalize_phone(raw, &options.default_region),
            });
        }
    }

    phones
}

/// Normalize a raw candidate to E.164, degrading to digits-only.
///
/// A `+`-prefixed candidate is parsed region-agnostically, anything else
/// under `default_region`. When the parse succeeds and the number is length
/// plausible, the E.164 rendering is returned; every other outcome falls
/// back to the digits-only string. Never fails.
pub(crate) fn normalize_phone(raw: &str, default_region: &str) -> String {
    let trimmed = raw.trim();
    let parsed = if trimmed.starts_with('+') {
        dialplan::parse(trimmed, None)
    } else {
        dialplan::parse(trimmed, Some(default_region))
    };

    match parsed {
        Ok(number) if dialplan::is_possible(&number) => dialplan::format_e164(&number),
        _ => digits_of(trimmed),
    }
}

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
