//! Configuration options for the contact extractor.
//!
//! All tunable knobs of the engine are injected here rather than read from
//! module globals, so tests can run with alternate domain or keyword sets.
//!
//! ## Example
//!
//! ```rust
//! use contactrs::{ContactExtractor, ExtractorOptions};
//!
//! let html = r#"<a href="https://gitlab.com/janedoe">code</a>"#;
//!
//! let options = ExtractorOptions::builder()
//!     .social_domains(vec!["gitlab.com".to_string()])
//!     .default_region("US")
//!     .build();
//!
//! let extractor = ContactExtractor::new(html, "https://example.com/", Some(options)).unwrap();
//! let result = extractor.extract();
//! assert_eq!(result.socials, vec!["https://gitlab.com/janedoe".to_string()]);
//! ```

use crate::constants::{DEFAULT_NAME_KEYWORDS, DEFAULT_REGION, DEFAULT_SOCIAL_DOMAINS};

/// Configuration for a [`ContactExtractor`](crate::ContactExtractor).
///
/// The defaults reproduce the stock behavior; every field can be overridden
/// through [`ExtractorOptions::builder`].
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    /// Social platform domains accepted by the social-link extractor.
    ///
    /// An anchor href is accepted as a social link when its lowercase form
    /// contains any of these substrings; the first match in list order wins.
    pub social_domains: Vec<String>,

    /// Keywords matched against `class` and `id` attributes when harvesting
    /// name candidates.
    pub name_keywords: Vec<String>,

    /// Default region for phone numbers written without a `+` country prefix
    /// (ISO 3166-1 alpha-2, e.g. `"IN"` or `"US"`).
    pub default_region: String,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            social_domains: DEFAULT_SOCIAL_DOMAINS.iter().map(|s| s.to_string()).collect(),
            name_keywords: DEFAULT_NAME_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            default_region: DEFAULT_REGION.to_string(),
        }
    }
}

impl ExtractorOptions {
    /// Creates a new builder for ExtractorOptions
    pub fn builder() -> ExtractorOptionsBuilder {
        ExtractorOptionsBuilder::default()
    }
}

/// Builder for [`ExtractorOptions`].
#[derive(Default)]
pub struct ExtractorOptionsBuilder {
    social_domains: Option<Vec<String>>,
    name_keywords: Option<Vec<String>>,
    default_region: Option<String>,
}

impl ExtractorOptionsBuilder {
    /// Replace the social platform domain list
    pub fn social_domains(mut self, domains: Vec<String>) -> Self {
        self.social_domains = Some(domains);
        self
    }

    /// Replace the class/id name keyword list
    pub fn name_keywords(mut self, keywords: Vec<String>) -> Self {
        self.name_keywords = Some(keywords);
        self
    }

    /// Set the default phone region
    pub fn default_region(mut self, region: &str) -> Self {
        self.default_region = Some(region.to_string());
        self
    }

    /// Build the ExtractorOptions
    pub fn build(self) -> ExtractorOptions {
        let defaults = ExtractorOptions::default();
        ExtractorOptions {
            social_domains: self.social_domains.unwrap_or(defaults.social_domains),
            name_keywords: self.name_keywords.unwrap_or(defaults.name_keywords),
            default_region: self.default_region.unwrap_or(defaults.default_region),
        }
    }
}
