//! Person-name candidate harvesting.
//!
//! The most judgment-heavy part of the engine. Four independent passes
//! propose raw candidates with a confidence from the table in
//! [`crate::constants::confidence`] and a reason label; candidates are then
//! deduplicated by whitespace-collapsed name, keeping the highest-confidence
//! instance, and returned in descending confidence order.

use crate::constants::{confidence, KEYWORD_TEXT_MAX_LEN, REGEXPS};
use crate::dom_utils;
use crate::options::ExtractorOptions;
use crate::report::NameCandidate;
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use std::cmp::Ordering;
use std::collections::HashSet;

pub(crate) fn extract_name_candidates(
    document: &Html,
    options: &ExtractorOptions,
) -> Vec<NameCandidate> {
    let mut candidates = Vec::new();

    collect_meta_author(document, &mut candidates);
    collect_title_first_part(document, &mut candidates);
    collect_headings(document, &mut candidates);
    collect_keyword_elements(document, options, &mut candidates);

    dedup_ranked(candidates)
}

/// `<meta name="author">`: the strongest single signal a page offers.
///
/// Selector queries reach detached `<template>` subtrees through the node
/// arena, so template-nested metas are skipped explicitly here and in the
/// title pass.
fn collect_meta_author(document: &Html, candidates: &mut Vec<NameCandidate>) {
    let selector = Selector::parse(r#"meta[name="author"]"#).unwrap();
    if let Some(meta) = document
        .select(&selector)
        .find(|meta| !dom_utils::in_template(*meta))
    {
        if let Some(content) = meta.value().attr("content") {
            if !content.is_empty() {
                push_candidate(
                    candidates,
                    content,
                    confidence::META_AUTHOR,
                    "meta[name=author]".to_string(),
                );
            }
        }
    }
}

/// Document title up to the first `|`/`-`/dash separator; titles usually
/// lead with the person or site name and append the tagline after it.
fn collect_title_first_part(document: &Html, candidates: &mut Vec<NameCandidate>) {
    let selector = Selector::parse("title").unwrap();
    if let Some(title) = document
        .select(&selector)
        .find(|title| !dom_utils::in_template(*title))
    {
        let text = dom_utils::flatten_text(title);
        if text.is_empty() {
            return;
        }
        if let Some(first) = REGEXPS.title_split.split(&text).next() {
            push_candidate(
                candidates,
                first,
                confidence::TITLE_FIRST_PART,
                "title (first part)".to_string(),
            );
        }
    }
}

/// Visible `h1`..`h4` headings, boosted when they sit next to a `mailto:`
/// or `tel:` anchor ("next to" meaning the heading's parent is the anchor's
/// containing element, or one is an ancestor of the other).
fn collect_headings(document: &Html, candidates: &mut Vec<NameCandidate>) {
    let contact_nodes = contact_node_ids(document);

    for tag in ["h1", "h2", "h3", "h4"] {
        let selector = Selector::parse(tag).unwrap();
        for heading in document.select(&selector) {
            if dom_utils::is_hidden(heading) {
                continue;
            }
            let text = dom_utils::flatten_text(heading);
            if text.is_empty() {
                continue;
            }
            let base = if tag == "h1" {
                confidence::HEADING_H1
            } else {
                confidence::HEADING_OTHER
            };
            if near_contact(document, heading, &contact_nodes) {
                push_candidate(
                    candidates,
                    &text,
                    (base + confidence::NEAR_CONTACT_BOOST).min(confidence::NEAR_CONTACT_CAP),
                    format!("{tag} near contact"),
                );
            } else {
                push_candidate(candidates, &text, base, tag.to_string());
            }
        }
    }
}

/// Containing elements of every `mailto:`/`tel:` anchor.
fn contact_node_ids(document: &Html) -> HashSet<NodeId> {
    let anchor = Selector::parse("a").unwrap();
    let mut contact_nodes = HashSet::new();
    for a in document.select(&anchor) {
        let href = a.value().attr("href").unwrap_or("").to_lowercase();
        if href.starts_with("mailto:") || href.starts_with("tel:") {
            if let Some(parent) = a.parent().and_then(ElementRef::wrap) {
                contact_nodes.insert(parent.id());
            }
        }
    }
    contact_nodes
}

fn near_contact(document: &Html, heading: ElementRef, contact_nodes: &HashSet<NodeId>) -> bool {
    let heading_parent = heading.parent().map(|p| p.id());
    for &contact_id in contact_nodes {
        if heading_parent == Some(contact_id) {
            return true;
        }
        if heading.ancestors().any(|node| node.id() == contact_id) {
            return true;
        }
        let contact = match document.tree.get(contact_id) {
            Some(node) => node,
            None => continue,
        };
        if contact.ancestors().any(|node| node.id() == heading.id()) {
            return true;
        }
    }
    false
}

/// Visible elements whose `class` or `id` contains a configured keyword and
/// whose flattened text is short enough to plausibly be a bare name.
fn collect_keyword_elements(
    document: &Html,
    options: &ExtractorOptions,
    candidates: &mut Vec<NameCandidate>,
) {
    let every = Selector::parse("*").unwrap();
    for keyword in &options.name_keywords {
        let needle = keyword.to_lowercase();
        for (attr, score) in [
            ("class", confidence::CLASS_KEYWORD),
            ("id", confidence::ID_KEYWORD),
        ] {
            for element in document.select(&every) {
                let value = match element.value().attr(attr) {
                    Some(value) => value,
                    None => continue,
                };
                if !value.to_lowercase().contains(&needle) {
                    continue;
                }
                if dom_utils::is_hidden(element) {
                    continue;
                }
                let text = dom_utils::flatten_text(element);
                if text.is_empty() || text.chars().count() >= KEYWORD_TEXT_MAX_LEN {
                    continue;
                }
                push_candidate(candidates, &text, score, format!("{attr} contains {keyword}"));
            }
        }
    }
}

fn push_candidate(
    candidates: &mut Vec<NameCandidate>,
    name: &str,
    confidence: f64,
    reason: String,
) {
    candidates.push(NameCandidate {
        name: name.trim().to_string(),
        confidence,
        reason,
    });
}

/// Stable-sort by descending confidence, then keep the first instance of
/// each whitespace-collapsed name. Empty names are dropped.
fn dedup_ranked(mut candidates: Vec<NameCandidate>) -> Vec<NameCandidate> {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    let mut seen = HashSet::new();
    candidates.retain(|candidate| {
        let normalized = candidate.name.split_whitespace().collect::<Vec<_>>().join(" ");
        !normalized.is_empty() && seen.insert(normalized)
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<NameCandidate> {
        extract_name_candidates(&Html::parse_document(html), &ExtractorOptions::default())
    }

    #[test]
    fn meta_author_wins_over_heading_for_the_same_name() {
        let candidates = extract(
            r#"<head><meta name="author" content="Jane Doe"></head><body><h1>Jane Doe</h1></body>"#,
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Jane Doe");
        assert_eq!(candidates[0].confidence, 0.9);
        assert_eq!(candidates[0].reason, "meta[name=author]");
    }

    #[test]
    fn title_contributes_its_first_segment_only() {
        let candidates = extract("<head><title>Jane Doe | Freelance Design</title></head>");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Jane Doe");
        assert_eq!(candidates[0].reason, "title (first part)");
        assert_eq!(candidates[0].confidence, 0.5);
    }

    #[test]
    fn heading_next_to_contact_anchor_is_boosted() {
        let candidates = extract(
            r#"<div><h2>Jane Doe</h2><a href="mailto:jane@example.com">mail</a></div>"#,
        );
        let jane = candidates.iter().find(|c| c.name == "Jane Doe").unwrap();
        assert_eq!(jane.confidence, 0.85);
        assert_eq!(jane.reason, "h2 near contact");
    }

    #[test]
    fn h1_boost_is_capped() {
        let candidates =
            extract(r#"<div><h1>Jane Doe</h1><a href="tel:+14155552671">call</a></div>"#);
        let jane = candidates.iter().find(|c| c.name == "Jane Doe").unwrap();
        assert_eq!(jane.confidence, 0.95);
        assert_eq!(jane.reason, "h1 near contact");
    }

    #[test]
    fn plain_headings_keep_base_confidence() {
        let candidates = extract("<h1>Jane Doe</h1><h3>Elsewhere</h3>");
        let jane = candidates.iter().find(|c| c.name == "Jane Doe").unwrap();
        assert_eq!(jane.confidence, 0.7);
        assert_eq!(jane.reason, "h1");
        let other = candidates.iter().find(|c| c.name == "Elsewhere").unwrap();
        assert_eq!(other.confidence, 0.6);
    }

    #[test]
    fn keyword_id_outranks_keyword_class() {
        let candidates = extract(concat!(
            r#"<span class="author-bio">John Roe</span>"#,
            r#"<span id="founder">John Roe</span>"#,
        ));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].confidence, 0.8);
        assert_eq!(candidates[0].reason, "id contains founder");
    }

    #[test]
    fn long_keyword_text_is_rejected() {
        let long_bio = "x".repeat(80);
        let html = format!(r#"<div class="contact-name">{long_bio}</div>"#);
        assert!(extract(&html).is_empty());
    }

    #[test]
    fn hidden_elements_never_contribute_names() {
        let candidates = extract(concat!(
            r#"<h1 hidden>Ghost</h1>"#,
            r#"<div class="name" style="display:none">Ghost</div>"#,
        ));
        assert!(candidates.is_empty());
    }

    #[test]
    fn template_meta_author_and_title_are_ignored() {
        let candidates = extract(concat!(
            r#"<body><template>"#,
            r#"<meta name="author" content="Ghost Author">"#,
            r#"<title>Ghost Title | Nowhere</title>"#,
            r#"</template><h1>Jane Doe</h1></body>"#,
        ));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Jane Doe");
        assert_eq!(candidates[0].reason, "h1");
    }

    #[test]
    fn whitespace_variants_collapse_to_one_candidate() {
        let candidates = extract("<h1>Jane  Doe</h1><h2>Jane Doe</h2>");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].confidence, 0.7);
    }

    #[test]
    fn output_is_sorted_by_descending_confidence() {
        let candidates = extract(concat!(
            r#"<head><title>Site Name - Home</title></head>"#,
            r#"<body><h1>Big Heading</h1><span id="person">Jane Doe</span></body>"#,
        ));
        let scores: Vec<f64> = candidates.iter().map(|c| c.confidence).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(scores, sorted);
    }
}
