//! Main extractor struct tying the pipeline together.
//!
//! ## Example
//!
//! ```rust
//! use contactrs::ContactExtractor;
//!
//! let html = r#"
//!     <html>
//!     <head><meta name="author" content="Jane Doe"></head>
//!     <body>
//!         <h1>Jane Doe</h1>
//!         <a href="mailto:jane@example.com">Email me</a>
//!         <a href="https://linkedin.com/in/janedoe">LinkedIn</a>
//!     </body>
//!     </html>
//! "#;
//!
//! let extractor = ContactExtractor::new(html, "https://example.com/", None).unwrap();
//! let result = extractor.extract();
//!
//! assert_eq!(result.emails, vec!["jane@example.com".to_string()]);
//! assert_eq!(result.socials, vec!["https://linkedin.com/in/janedoe".to_string()]);
//! assert_eq!(result.name_candidates[0].name, "Jane Doe");
//! ```

use crate::constants::NO_CONTACT_NOTE;
use crate::dom_utils;
use crate::emails;
use crate::error::{ContactError, Result};
use crate::names;
use crate::options::ExtractorOptions;
use crate::phones;
use crate::report::CrawlResult;
use crate::socials;
use scraper::Html;
use url::Url;

/// Visibility-aware contact extractor for a single rendered HTML document.
///
/// Construction parses the document (malformed markup is recovered, never
/// an error) and detaches every `<template>` subtree. Extraction is a pure
/// computation over the resulting tree: running [`extract`](Self::extract)
/// twice yields identical results, and nothing is shared across documents,
/// so independent documents can be processed in parallel with one extractor
/// each.
pub struct ContactExtractor {
    /// Parsed document with template subtrees removed
    document: Html,

    /// Final resolved URL, the base for relative-link resolution
    final_url: Url,

    /// Injected configuration
    options: ExtractorOptions,
}

impl ContactExtractor {
    /// Create an extractor for one document.
    ///
    /// # Arguments
    /// * `html` - The rendered HTML text
    /// * `final_url` - The document's final URL after redirects; also the
    ///   base for resolving relative hrefs
    /// * `options` - Optional configuration overrides
    ///
    /// # Errors
    /// [`ContactError::InvalidUrl`] when `final_url` does not parse.
    pub fn new(html: &str, final_url: &str, options: Option<ExtractorOptions>) -> Result<Self> {
        let mut document = Html::parse_document(html);
        dom_utils::strip_templates(&mut document);

        let final_url =
            Url::parse(final_url).map_err(|_| ContactError::InvalidUrl(final_url.to_string()))?;

        Ok(Self {
            document,
            final_url,
            options: options.unwrap_or_default(),
        })
    }

    /// Run all extractors and assemble the result record.
    ///
    /// Always returns a record; an empty page produces empty sequences plus
    /// a diagnostic note rather than an error.
    pub fn extract(&self) -> CrawlResult {
        let socials = socials::extract_socials(&self.document, &self.final_url, &self.options);
        let emails = emails::extract_emails(&self.document);
        let phones = phones::extract_phones(&self.document, &self.options);
        let name_candidates = names::extract_name_candidates(&self.document, &self.options);

        let mut notes = Vec::new();
        if emails.is_empty() && phones.is_empty() && socials.is_empty() {
            notes.push(NO_CONTACT_NOTE.to_string());
        }

        CrawlResult {
            url: self.final_url.to_string(),
            socials,
            emails,
            phones,
            name_candidates,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_tolerates_malformed_markup() {
        let result = ContactExtractor::new(
            "<div><p>unclosed <b>tags<h1>stray",
            "https://example.com/",
            None,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = ContactExtractor::new("<p>hi</p>", "not a url", None);
        assert!(matches!(result, Err(ContactError::InvalidUrl(_))));
    }

    #[test]
    fn empty_page_gets_the_diagnostic_note() {
        let extractor =
            ContactExtractor::new("<p>nothing to see</p>", "https://example.com/", None).unwrap();
        let result = extractor.extract();
        assert!(result.emails.is_empty());
        assert!(result.phones.is_empty());
        assert!(result.socials.is_empty());
        assert_eq!(result.notes, vec![NO_CONTACT_NOTE.to_string()]);
    }

    #[test]
    fn pages_with_any_contact_item_get_no_note() {
        let extractor = ContactExtractor::new(
            r#"<a href="mailto:a@b.com">mail</a>"#,
            "https://example.com/",
            None,
        )
        .unwrap();
        assert!(extractor.extract().notes.is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let extractor = ContactExtractor::new(
            concat!(
                r#"<head><title>Jane Doe - Home</title></head>"#,
                r#"<body><a href="mailto:a@b.com">mail</a>"#,
                r#"<a href="https://github.com/jane">gh</a>"#,
                r#"<p>+14155552671</p></body>"#,
            ),
            "https://example.com/",
            None,
        )
        .unwrap();
        assert_eq!(extractor.extract(), extractor.extract());
    }
}
