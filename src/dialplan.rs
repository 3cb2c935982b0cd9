//! Minimal phone-number grammar: parse a candidate into a country code plus
//! national number, judge length plausibility, and render E.164.
//!
//! This is deliberately not a full dialing-rules engine. The extractor only
//! needs a two-branch outcome per candidate: a structured number it can
//! format as E.164, or an error that sends the caller down the digits-only
//! fallback path. Unknown country prefixes and unknown regions are errors,
//! never panics.

use thiserror::Error;

/// ISO 3166-1 alpha-2 region to ITU calling code.
///
/// Covers the regions this tool is commonly pointed at; an unlisted region
/// simply routes candidates to the fallback normalization.
const REGION_CODES: &[(&str, u16)] = &[
    ("US", 1),
    ("CA", 1),
    ("RU", 7),
    ("EG", 20),
    ("ZA", 27),
    ("GR", 30),
    ("NL", 31),
    ("BE", 32),
    ("FR", 33),
    ("ES", 34),
    ("HU", 36),
    ("IT", 39),
    ("RO", 40),
    ("CH", 41),
    ("AT", 43),
    ("GB", 44),
    ("DK", 45),
    ("SE", 46),
    ("NO", 47),
    ("PL", 48),
    ("DE", 49),
    ("MX", 52),
    ("AR", 54),
    ("BR", 55),
    ("MY", 60),
    ("AU", 61),
    ("ID", 62),
    ("PH", 63),
    ("NZ", 64),
    ("SG", 65),
    ("TH", 66),
    ("JP", 81),
    ("KR", 82),
    ("VN", 84),
    ("CN", 86),
    ("TR", 90),
    ("IN", 91),
    ("PK", 92),
    ("LK", 94),
    ("NG", 234),
    ("KE", 254),
    ("PT", 351),
    ("IE", 353),
    ("FI", 358),
    ("UA", 380),
    ("CZ", 420),
    ("HK", 852),
    ("BD", 880),
    ("SA", 966),
    ("AE", 971),
    ("IL", 972),
    ("NP", 977),
];

/// Characters accepted as formatting noise between digits.
const SEPARATORS: [char; 5] = [' ', '-', '.', '(', ')'];

/// Maximum digit count of a full E.164 number (country code included).
const MAX_E164_DIGITS: usize = 15;

/// Plausible length range for a national significant number.
const NATIONAL_DIGITS: std::ops::RangeInclusive<usize> = 4..=14;

/// A number split into calling code and national significant number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialedNumber {
    pub country_code: u16,
    pub national: String,
}

/// Why a candidate could not be parsed into a [`DialedNumber`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DialplanError {
    /// Leading `+` but no known calling code prefix
    #[error("unrecognized country calling code")]
    UnknownPrefix,

    /// Default region not present in the calling-code table
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// Empty input or characters other than digits and separators
    #[error("input is not a dialable digit sequence")]
    InvalidDigits,
}

/// Parse a raw candidate into a structured number.
///
/// A leading `+` selects region-agnostic parsing: the longest known calling
/// code (3, 2, then 1 digits) is split off the front. Without a `+`, the
/// whole digit run becomes the national number under `default_region`'s
/// calling code; a single leading trunk `0` is dropped in that case, which
/// is how most national dialing plans write domestic numbers.
pub fn parse(raw: &str, default_region: Option<&str>) -> Result<DialedNumber, DialplanError> {
    let trimmed = raw.trim();
    let (has_plus, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let digits: String = rest.chars().filter(|c| !SEPARATORS.contains(c)).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(DialplanError::InvalidDigits);
    }

    if has_plus {
        for prefix_len in (1..=3).rev() {
            if digits.len() <= prefix_len {
                continue;
            }
            if let Ok(code) = digits[..prefix_len].parse::<u16>() {
                if REGION_CODES.iter().any(|(_, c)| *c == code) {
                    return Ok(DialedNumber {
                        country_code: code,
                        national: digits[prefix_len..].to_string(),
                    });
                }
            }
        }
        return Err(DialplanError::UnknownPrefix);
    }

    let region = default_region.ok_or(DialplanError::UnknownRegion(String::new()))?;
    let country_code = REGION_CODES
        .iter()
        .find(|(r, _)| r.eq_ignore_ascii_case(region))
        .map(|(_, code)| *code)
        .ok_or_else(|| DialplanError::UnknownRegion(region.to_string()))?;

    let national = digits.strip_prefix('0').unwrap_or(&digits).to_string();
    Ok(DialedNumber {
        country_code,
        national,
    })
}

/// Length plausibility only: is this shaped like a dialable number?
///
/// Possible, not valid: no per-region number plans are consulted.
pub fn is_possible(number: &DialedNumber) -> bool {
    let code_digits = number.country_code.to_string().len();
    NATIONAL_DIGITS.contains(&number.national.len())
        && code_digits + number.national.len() <= MAX_E164_DIGITS
}

/// Render as E.164: `+<countrycode><nationalnumber>`, no separators.
pub fn format_e164(number: &DialedNumber) -> String {
    format!("+{}{}", number.country_code, number.national)
}
