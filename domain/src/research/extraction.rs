//! Tool-name extraction from free-text model output.
//!
//! The model is asked for one product name per line, but routinely adds
//! conversational preamble, numbering, bullets, or restates the query.
//! These functions clean that up without a second model round-trip.
//! All rules come from constant tables so they can be tested in isolation.
//!
//! | Function | Used for | Cap |
//! |----------|----------|-----|
//! | [`filter_tool_names`] | names extracted from articles | 5 |
//! | [`filter_fallback_names`] | names suggested directly by the model | 4 |

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Response meaning the model found nothing. Never returned as a tool name.
pub const NO_TOOLS_SENTINEL: &str = "No specific tools found";

/// Name researched when both extraction and fallback produced nothing.
pub const PLACEHOLDER_TOOL_NAME: &str = "Unknown";

pub const MAX_EXTRACTED_TOOLS: usize = 5;
pub const MAX_FALLBACK_TOOLS: usize = 4;
pub const MAX_NAME_LEN: usize = 50;

/// Lines starting with these are conversational preamble (case-sensitive).
pub const PREAMBLE_PREFIXES: &[&str] =
    &["Based on", "The article", "Note:", "Here are", "These are"];

/// Lines ending with these describe a category, not a product (case-sensitive).
pub const GENERIC_SUFFIXES: &[&str] = &["alternatives", "solutions", "options", "tools"];

/// Lines containing these (case-insensitive) are commentary, not names.
pub const DISALLOWED_SUBSTRINGS: &[&str] = &["alternative", "vs", "comparison", "article"];

static ORDINAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid ordinal regex"));
static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•]\s*").expect("valid bullet regex"));

/// Constant tables driving the line filter.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRules {
    pub max_len: usize,
    pub max_tools: usize,
    pub preamble_prefixes: &'static [&'static str],
    pub generic_suffixes: &'static [&'static str],
    pub disallowed_substrings: &'static [&'static str],
}

impl ExtractionRules {
    /// Strict rules for names pulled out of article content.
    pub const fn strict() -> Self {
        Self {
            max_len: MAX_NAME_LEN,
            max_tools: MAX_EXTRACTED_TOOLS,
            preamble_prefixes: PREAMBLE_PREFIXES,
            generic_suffixes: GENERIC_SUFFIXES,
            disallowed_substrings: DISALLOWED_SUBSTRINGS,
        }
    }

    /// Lighter rules for direct suggestions: only length and preamble checks.
    pub const fn lenient() -> Self {
        Self {
            max_len: MAX_NAME_LEN,
            max_tools: MAX_FALLBACK_TOOLS,
            preamble_prefixes: PREAMBLE_PREFIXES,
            generic_suffixes: &[],
            disallowed_substrings: &[],
        }
    }
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self::strict()
    }
}

/// Why a candidate line was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TooLong(usize),
    Sentinel,
    Preamble(&'static str),
    GenericSuffix(&'static str),
    Disallowed(&'static str),
    QueryToken,
}

/// Result of filtering an extraction response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// At least one usable name, deduplicated and capped
    Found(Vec<String>),
    /// Nothing usable; the caller must take the fallback path
    NoneFound,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        matches!(self, Extraction::NoneFound)
    }

    /// The names found, or an empty list for [`Extraction::NoneFound`].
    pub fn into_names(self) -> Vec<String> {
        match self {
            Extraction::Found(names) => names,
            Extraction::NoneFound => Vec::new(),
        }
    }
}

/// Remove one leading `"<digits>. "` marker, then one `"- "`/`"• "` marker.
pub fn strip_list_marker(line: &str) -> &str {
    let line = match ORDINAL_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    let line = match BULLET_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    line.trim()
}

/// Check a cleaned line against the rules.
///
/// `query_tokens` must already be lowercased (see `Query::tokens`).
pub fn rejection_reason(
    line: &str,
    query_tokens: &[String],
    rules: &ExtractionRules,
) -> Option<RejectReason> {
    let len = line.chars().count();
    if len > rules.max_len {
        return Some(RejectReason::TooLong(len));
    }

    let lower = line.to_lowercase();
    if lower.trim_end_matches('.') == NO_TOOLS_SENTINEL.to_lowercase() {
        return Some(RejectReason::Sentinel);
    }
    if let Some(p) = rules.preamble_prefixes.iter().copied().find(|p| line.starts_with(p)) {
        return Some(RejectReason::Preamble(p));
    }
    if let Some(s) = rules.generic_suffixes.iter().copied().find(|s| line.ends_with(s)) {
        return Some(RejectReason::GenericSuffix(s));
    }
    if let Some(d) = rules
        .disallowed_substrings
        .iter()
        .copied()
        .find(|d| lower.contains(d))
    {
        return Some(RejectReason::Disallowed(d));
    }
    if query_tokens.iter().any(|t| *t == lower) {
        return Some(RejectReason::QueryToken);
    }
    None
}

/// Extract candidate tool names from a model response.
///
/// Lines are trimmed, stripped of list markers, filtered by
/// [`rejection_reason`], deduplicated case-insensitively (first spelling
/// wins) and capped at `rules.max_tools`.
pub fn filter_tool_names(
    response: &str,
    query_tokens: &[String],
    rules: &ExtractionRules,
) -> Extraction {
    let mut seen = HashSet::new();
    let names: Vec<String> = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .filter(|line| rejection_reason(line, query_tokens, rules).is_none())
        .filter(|line| seen.insert(line.to_lowercase()))
        .take(rules.max_tools)
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        Extraction::NoneFound
    } else {
        Extraction::Found(names)
    }
}

/// Filter names suggested directly by the model (lenient rules, cap 4).
///
/// Query tokens are not checked here: a suggestion list is allowed to be
/// terse, and the sentinel is still rejected.
pub fn filter_fallback_names(response: &str) -> Vec<String> {
    filter_tool_names(response, &[], &ExtractionRules::lenient()).into_names()
}
