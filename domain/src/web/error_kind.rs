//! Classification of search/scrape service failures.
//!
//! The service reports failures only as text, so classification is a
//! case-insensitive substring match on the error description.

/// Phrases marking a temporary upstream gateway failure.
pub const TRANSIENT_MARKERS: &[&str] = &["502", "bad gateway"];

/// Phrases marking a response that could not be parsed.
pub const MALFORMED_MARKERS: &[&str] = &["json", "parse"];

/// Kind of a search/scrape service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// Temporary upstream problem, eligible for bounded retry
    Transient,
    /// Unparseable response, never retried
    Malformed,
    /// Anything else, never retried
    Other,
}

impl ServiceErrorKind {
    /// Classify a failure by its textual description.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if TRANSIENT_MARKERS.iter().any(|m| lower.contains(m)) {
            ServiceErrorKind::Transient
        } else if MALFORMED_MARKERS.iter().any(|m| lower.contains(m)) {
            ServiceErrorKind::Malformed
        } else {
            ServiceErrorKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_transient() {
        assert_eq!(
            ServiceErrorKind::classify("HTTP 502 from upstream"),
            ServiceErrorKind::Transient
        );
        assert_eq!(
            ServiceErrorKind::classify("Bad Gateway"),
            ServiceErrorKind::Transient
        );
    }

    #[test]
    fn test_classify_malformed() {
        assert_eq!(
            ServiceErrorKind::classify("invalid JSON at line 1"),
            ServiceErrorKind::Malformed
        );
        assert_eq!(
            ServiceErrorKind::classify("failed to parse body"),
            ServiceErrorKind::Malformed
        );
    }

    #[test]
    fn test_transient_wins_over_malformed() {
        // a 502 page that also failed to parse is still worth retrying
        assert_eq!(
            ServiceErrorKind::classify("502: could not parse json"),
            ServiceErrorKind::Transient
        );
    }

    #[test]
    fn test_classify_other() {
        let kind = ServiceErrorKind::classify("connection refused");
        assert_eq!(kind, ServiceErrorKind::Other);
    }
}
