//! # contactrs
//!
//! Heuristic extraction of human-contact information from a single rendered
//! HTML document: social profile links, email addresses, phone numbers, and
//! ranked person-name candidates. Structural and textual heuristics only —
//! no JavaScript execution, no machine learning.
//!
//! ## Overview
//!
//! The engine parses a page once, detaches `<template>` subtrees, and then
//! runs four extractors over the tree:
//!
//! - **Social links**: anchors whose href contains a configured platform
//!   domain, resolved against the page URL, first-seen order
//! - **Emails**: `mailto:` anchors plus pattern matches in visible text,
//!   returned lexicographically sorted
//! - **Phones**: `tel:` anchors plus the first phone-shaped token per
//!   visible text fragment, each normalized to E.164 when plausible and a
//!   digits-only fallback otherwise
//! - **Name candidates**: meta author, title, headings near contact
//!   anchors, and class/id keyword matches, each scored, deduplicated, and
//!   ranked by confidence
//!
//! Text extraction is visibility-aware: content under `hidden`,
//! `aria-hidden="true"`, inline `display:none`, or `<template>` is never
//! reported. Social links are the documented exception — a hidden anchor is
//! still a meaningful profile reference.
//!
//! ## Basic Usage
//!
//! ```rust
//! use contactrs::ContactExtractor;
//!
//! let html = r#"<a href="mailto:jane@example.com">Get in touch</a>"#;
//!
//! let extractor = ContactExtractor::new(html, "https://example.com/", None).unwrap();
//! let result = extractor.extract();
//! assert_eq!(result.emails, vec!["jane@example.com".to_string()]);
//! ```
//!
//! ## Fetching Pages
//!
//! The engine is pure; [`fetch`] supplies it with page text and the final
//! post-redirect URL:
//!
//! ```rust,no_run
//! use contactrs::{fetch, ContactExtractor};
//!
//! # async fn run() -> contactrs::Result<()> {
//! let client = fetch::default_client();
//! let (html, final_url) = fetch::fetch_html(&client, "https://example.com").await?;
//! let result = ContactExtractor::new(&html, &final_url, None)?.extract();
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Extraction never fails on malformed markup and never signals a
//! business-level "not found": an empty page produces an empty record with
//! a diagnostic note. The only construction error is an unparseable base
//! URL; the only runtime errors come from the fetch collaborator.

mod constants;
mod dialplan;
mod emails;
mod error;
mod extractor;
mod names;
mod options;
mod phones;
mod report;
mod socials;

pub mod dom_utils;
pub mod fetch;

// Public exports
pub use error::{ContactError, Result};
pub use extractor::ContactExtractor;
pub use options::{ExtractorOptions, ExtractorOptionsBuilder};
pub use report::{CrawlResult, NameCandidate, PhoneCandidate};
