//! Recommendation input summary and output truncation.

use super::entities::CompanyRecord;
use crate::core::string::take_chars;

/// Hard cap on recommendation length, in characters.
pub const MAX_RECOMMENDATION_CHARS: usize = 1000;

/// A period must sit beyond this character index to be used as the cut point.
pub const MIN_SENTENCE_CUT: usize = 500;

/// Records included in the recommendation prompt.
pub const MAX_SUMMARIZED_COMPANIES: usize = 4;

/// Reported in place of a recommendation when synthesis fails.
pub const RECOMMENDATION_UNAVAILABLE: &str = "Unable to generate recommendations in given time";

/// Serialize up to four records as comma-separated JSON objects.
///
/// An empty slice yields an empty string.
pub fn summarize_companies(companies: &[CompanyRecord]) -> String {
    companies
        .iter()
        .take(MAX_SUMMARIZED_COMPANIES)
        .filter_map(|c| serde_json::to_string(c).ok())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bound a raw recommendation to [`MAX_RECOMMENDATION_CHARS`].
///
/// After the cut, if the last period lies beyond [`MIN_SENTENCE_CUT`]
/// characters the text ends at that period; otherwise the window is kept.
pub fn truncate_recommendation(raw: &str) -> String {
    let window = take_chars(raw, MAX_RECOMMENDATION_CHARS);
    if let Some(byte_idx) = window.rfind('.') {
        let char_idx = window[..byte_idx].chars().count();
        if char_idx > MIN_SENTENCE_CUT {
            return window[..=byte_idx].to_string();
        }
    }
    window.to_string()
}
