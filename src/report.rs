//! Output data structures for a crawled document.
//!
//! [`CrawlResult`] is the single record emitted per page. It serializes to
//! the stable JSON shape consumed by downstream tooling:
//!
//! ```json
//! {
//!   "url": "...",
//!   "socials": ["..."],
//!   "emails": ["..."],
//!   "phones": [{"original": "...", "normalized": "..."}],
//!   "name_candidates": [{"name": "...", "confidence": 0.9, "reason": "..."}],
//!   "notes": ["..."]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A phone number as it appeared on the page, paired with its normalization.
///
/// `normalized` is an E.164 string when the number parsed as plausible,
/// otherwise a digits-only fallback. `original` is the matched text,
/// untouched, and is the deduplication key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneCandidate {
    /// Raw matched substring or `tel:` target
    pub original: String,

    /// E.164 form (`+<countrycode><nationalnumber>`) or digits-only fallback
    pub normalized: String,
}

/// A guess at the page's contact person, produced by one heuristic pass.
///
/// `confidence` is a heuristic score in `[0, 1]`, not a probability. When
/// several passes propose the same name, only the highest-confidence
/// instance survives deduplication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameCandidate {
    /// Trimmed candidate text
    pub name: String,

    /// Heuristic score in `[0, 1]`
    pub confidence: f64,

    /// Short label naming the pass that produced this candidate,
    /// e.g. `meta[name=author]` or `h1 near contact`
    pub reason: String,
}

/// The full extraction record for one document.
///
/// Always produced for a successfully parsed document; an empty page yields
/// empty sequences plus a diagnostic note, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrawlResult {
    /// Final resolved URL of the document (after redirects)
    pub url: String,

    /// Unique social profile links in first-seen document order
    pub socials: Vec<String>,

    /// Deduplicated email addresses in lexicographic order
    pub emails: Vec<String>,

    /// Unique phone candidates in first-seen document order
    pub phones: Vec<PhoneCandidate>,

    /// Name candidates, highest confidence first
    pub name_candidates: Vec<NameCandidate>,

    /// Diagnostic notes, e.g. when no contact item of any kind was found
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_with_stable_field_order() {
        let result = CrawlResult {
            url: "https://example.com/".to_string(),
            socials: vec![],
            emails: vec!["a@b.com".to_string()],
            phones: vec![PhoneCandidate {
                original: "+14155552671".to_string(),
                normalized: "+14155552671".to_string(),
            }],
            name_candidates: vec![NameCandidate {
                name: "Jane Doe".to_string(),
                confidence: 0.9,
                reason: "meta[name=author]".to_string(),
            }],
            notes: vec![],
        };

        let json = serde_json::to_string(&result).unwrap();
        let url_pos = json.find("\"url\"").unwrap();
        let socials_pos = json.find("\"socials\"").unwrap();
        let notes_pos = json.find("\"notes\"").unwrap();
        assert!(url_pos < socials_pos && socials_pos < notes_pos);

        let back: CrawlResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
