//! Shared regex patterns, default configuration values, and the confidence
//! table used by the name-candidate heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pre-compiled regular expressions used across the extractors
pub struct Regexps {
    /// Email-shaped token, matched anywhere in visible text
    pub email: Regex,

    /// Email pattern anchored at the start, used to validate `mailto:` targets
    pub email_anchored: Regex,

    /// Permissive phone-shaped token: optional `+` and country digits,
    /// optional parenthesized area code, then a digit run interspersed with
    /// spaces, hyphens, and dots, bounded by digits on both ends.
    pub phone: Regex,

    /// Title separators: `|`, `-`, en dash, em dash, plus trailing whitespace
    pub title_split: Regex,
}

pub static REGEXPS: Lazy<Regexps> = Lazy::new(|| Regexps {
    email: Regex::new(r"[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+").unwrap(),
    email_anchored: Regex::new(r"^[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+").unwrap(),
    phone: Regex::new(r"(?:\+\d{1,3}[\s\-.]*)?(?:\(?\d{2,4}\)?[\s\-.]*)?\d[\d\s\-.]{6,20}\d")
        .unwrap(),
    title_split: Regex::new(r"[|\-\x{2013}\x{2014}]\s*").unwrap(),
});

/// Social platform domains recognized by default, in match-priority order.
pub const DEFAULT_SOCIAL_DOMAINS: [&str; 10] = [
    "linkedin.com",
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "x.com",
    "youtube.com",
    "github.com",
    "behance.net",
    "t.me",
    "wa.me",
];

/// Class/id keywords that suggest an element names a person.
pub const DEFAULT_NAME_KEYWORDS: [&str; 6] =
    ["name", "author", "contact", "founder", "ceo", "person"];

/// Region assumed for phone numbers written without a `+` country prefix.
pub const DEFAULT_REGION: &str = "IN";

/// Minimum digit count for a text match to count as a phone candidate
pub const MIN_PHONE_DIGITS: usize = 7;

/// Keyword-matched elements with flattened text at or above this length are
/// rejected; anything longer is unlikely to be a bare person name.
pub const KEYWORD_TEXT_MAX_LEN: usize = 60;

/// Diagnostic note emitted when no contact item of any kind was found.
pub const NO_CONTACT_NOTE: &str =
    "no contact items found (page may be JS-heavy or require interaction)";

/// Confidence table for the name-candidate passes.
///
/// Every heuristic score lives here so the ranking surface can be audited
/// and tuned in one place instead of being scattered through the passes.
pub mod confidence {
    /// `<meta name="author">` content
    pub const META_AUTHOR: f64 = 0.9;

    /// First segment of the document title
    pub const TITLE_FIRST_PART: f64 = 0.5;

    /// `<h1>` heading text
    pub const HEADING_H1: f64 = 0.7;

    /// `<h2>`..`<h4>` heading text
    pub const HEADING_OTHER: f64 = 0.6;

    /// Added to a heading's base score when it sits next to a contact anchor
    pub const NEAR_CONTACT_BOOST: f64 = 0.25;

    /// Ceiling for the boosted heading score
    pub const NEAR_CONTACT_CAP: f64 = 0.95;

    /// Element whose `class` attribute contains a name keyword
    pub const CLASS_KEYWORD: f64 = 0.75;

    /// Element whose `id` attribute contains a name keyword
    pub const ID_KEYWORD: f64 = 0.8;
}
