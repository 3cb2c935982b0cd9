//! DOM helpers shared by the extractors: template stripping, the visibility
//! filter, and the visible-text stream.
//!
//! The parsed document is an arena tree whose parent links are non-owning
//! node ids, so ancestor walks never create reference cycles. All helpers
//! here are pure reads except the crate-internal template stripping, which
//! runs once at construction time before any extractor sees the tree.

use scraper::{ElementRef, Html};

/// Tags whose subtrees never contribute visible text.
const STRIPPED_CONTAINERS: [&str; 5] = ["script", "style", "noscript", "iframe", "template"];

/// A run of visible text paired with its immediate containing element.
#[derive(Debug, Clone, Copy)]
pub struct VisibleFragment<'a> {
    /// The element directly containing the text node
    pub element: ElementRef<'a>,

    /// Trimmed, non-empty text
    pub text: &'a str,
}

/// Detach every `<template>` subtree from the document.
///
/// Template content is inert markup and must never surface in any output,
/// including the class/id name heuristics. Detaching prunes the subtree
/// from root traversals such as [`visible_fragments`], but the nodes stay
/// in the backing arena and selector queries still find them — any
/// selection site that skips [`is_hidden`] must therefore also check
/// [`in_template`].
pub(crate) fn strip_templates(document: &mut Html) {
    let template_ids: Vec<_> = document
        .tree
        .root()
        .descendants()
        .filter(|node| {
            node.value()
                .as_element()
                .map_or(false, |el| el.name() == "template")
        })
        .map(|node| node.id())
        .collect();

    for id in template_ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Whether an element is visually or semantically suppressed.
///
/// True when the element itself or any ancestor carries the `hidden`
/// attribute, `aria-hidden="true"`, an inline style containing
/// `display:none` (after whitespace removal and lowercasing), or is a
/// `<template>`. Templates are detached up front, but the check is repeated
/// here so the filter stands on its own.
pub fn is_hidden(element: ElementRef) -> bool {
    std::iter::once(*element)
        .chain(element.ancestors())
        .filter_map(ElementRef::wrap)
        .any(element_is_suppressed)
}

/// Whether an element is a `<template>` or sits inside one.
///
/// Detached template subtrees keep their internal parent links, so this
/// holds even after [`strip_templates`] has run.
pub fn in_template(element: ElementRef) -> bool {
    std::iter::once(*element)
        .chain(element.ancestors())
        .filter_map(ElementRef::wrap)
        .any(|el| el.value().name() == "template")
}

fn element_is_suppressed(element: ElementRef) -> bool {
    let value = element.value();
    if value.name() == "template" {
        return true;
    }
    if value.attr("hidden").is_some() {
        return true;
    }
    if value.attr("aria-hidden") == Some("true") {
        return true;
    }
    if let Some(style) = value.attr("style") {
        let collapsed: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if collapsed.contains("display:none") {
            return true;
        }
    }
    false
}

/// Stream the document's visible text runs in document order.
///
/// Skips text inside `script`/`style`/`noscript`/`iframe`/`template`
/// subtrees, comment nodes, empty runs, and anything the visibility filter
/// rejects. Each call restarts the traversal from the root, so the stream
/// can be consumed any number of times with identical output.
pub fn visible_fragments(document: &Html) -> impl Iterator<Item = VisibleFragment<'_>> {
    document.tree.root().descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let element = node.parent().and_then(ElementRef::wrap)?;

        let tag = element.value().name();
        if tag == "script" || tag == "style" || tag == "template" {
            return None;
        }
        if inside_stripped_subtree(element) {
            return None;
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if is_hidden(element) {
            return None;
        }

        Some(VisibleFragment {
            element,
            text: trimmed,
        })
    })
}

fn inside_stripped_subtree(element: ElementRef) -> bool {
    std::iter::once(*element)
        .chain(element.ancestors())
        .filter_map(ElementRef::wrap)
        .any(|el| STRIPPED_CONTAINERS.contains(&el.value().name()))
}

/// Flatten an element's descendant text into one space-joined string,
/// trimming each run and dropping empty ones.
pub fn flatten_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    fn first<'a>(document: &'a Html, selector: &str) -> ElementRef<'a> {
        let selector = Selector::parse(selector).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn hidden_attribute_hides_element_and_descendants() {
        let document = Html::parse_document(r#"<div hidden><p>secret</p></div><p>shown</p>"#);
        assert!(is_hidden(first(&document, "div p")));
        let texts: Vec<_> = visible_fragments(&document).map(|f| f.text).collect();
        assert_eq!(texts, vec!["shown"]);
    }

    #[test]
    fn aria_hidden_must_be_exactly_true() {
        let document = Html::parse_document(
            r#"<span aria-hidden="true">a</span><span aria-hidden="false">b</span>"#,
        );
        let spans: Vec<_> = {
            let selector = Selector::parse("span").unwrap();
            document.select(&selector).collect()
        };
        assert!(is_hidden(spans[0]));
        assert!(!is_hidden(spans[1]));
    }

    #[test]
    fn inline_display_none_is_detected_despite_spacing_and_case() {
        let document = Html::parse_document(
            r#"<div style="DISPLAY : None ;"><p>gone</p></div><div style="display:block"><p>kept</p></div>"#,
        );
        let texts: Vec<_> = visible_fragments(&document).map(|f| f.text).collect();
        assert_eq!(texts, vec!["kept"]);
    }

    #[test]
    fn script_style_noscript_iframe_text_is_never_streamed() {
        let document = Html::parse_document(
            r#"<script>var x = "a@b.com";</script><style>.x{}</style><noscript>nojs</noscript><p>body text</p>"#,
        );
        let texts: Vec<_> = visible_fragments(&document).map(|f| f.text).collect();
        assert_eq!(texts, vec!["body text"]);
    }

    #[test]
    fn templates_are_detached_before_extraction() {
        let mut document =
            Html::parse_document(r#"<template><p class="name">Ghost</p></template><p>real</p>"#);
        strip_templates(&mut document);

        let texts: Vec<_> = visible_fragments(&document).map(|f| f.text).collect();
        assert_eq!(texts, vec!["real"]);

        // No element under the root still belongs to a template subtree.
        assert!(!document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .any(in_template));
    }

    #[test]
    fn detached_template_content_is_still_flagged_by_in_template() {
        // Selector queries walk the whole node arena, detached subtrees
        // included, so the guard has to hold for orphaned template content.
        let mut document =
            Html::parse_document(r#"<template><p class="name">Ghost</p></template><p>real</p>"#);
        strip_templates(&mut document);

        let selector = Selector::parse(".name").unwrap();
        if let Some(ghost) = document.select(&selector).next() {
            assert!(in_template(ghost));
            assert!(is_hidden(ghost));
        }
        let real = first(&document, "p:not(.name)");
        assert!(!in_template(real));
    }

    #[test]
    fn fragments_come_in_document_order_and_are_trimmed() {
        let document =
            Html::parse_document("<h1>  First </h1><p>Second</p><div>  \n  </div><p>Third</p>");
        let texts: Vec<_> = visible_fragments(&document).map(|f| f.text).collect();
        assert_eq!(texts, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn stream_is_restartable_with_identical_output() {
        let document = Html::parse_document("<p>a</p><p>b</p>");
        let once: Vec<_> = visible_fragments(&document).map(|f| f.text).collect();
        let twice: Vec<_> = visible_fragments(&document).map(|f| f.text).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn flatten_text_joins_runs_with_single_spaces() {
        let document = Html::parse_document("<div><b> Jane </b>\n<i>Doe</i></div>");
        assert_eq!(flatten_text(first(&document, "div")), "Jane Doe");
    }
}
