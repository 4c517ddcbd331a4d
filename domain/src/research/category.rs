//! Parsing of the category classification response.
//!
//! The model answers in a line-prefixed format:
//!
//! ```text
//! CATEGORY: team communication platforms
//! EXAMPLES: Microsoft Teams, Discord, Mattermost, Rocket.Chat, Zulip
//! EXCLUDE: chat app, messaging tool, collaboration platform
//! ```

use super::entities::CategoryInfo;

pub const CATEGORY_PREFIX: &str = "CATEGORY:";
pub const EXAMPLES_PREFIX: &str = "EXAMPLES:";
pub const EXCLUDE_PREFIX: &str = "EXCLUDE:";

/// Parse a classification response into a [`CategoryInfo`].
///
/// Lines are matched by prefix (case-insensitive), lists are split on
/// commas and trimmed. Missing fields are left empty; a later duplicate
/// field overwrites an earlier one.
pub fn parse_category_response(response: &str) -> CategoryInfo {
    let mut category = String::new();
    let mut examples = Vec::new();
    let mut exclude = Vec::new();

    for line in response.lines().map(str::trim) {
        if let Some(rest) = strip_prefix_ignore_case(line, CATEGORY_PREFIX) {
            category = rest.trim().to_string();
        } else if let Some(rest) = strip_prefix_ignore_case(line, EXAMPLES_PREFIX) {
            examples = split_list(rest);
        } else if let Some(rest) = strip_prefix_ignore_case(line, EXCLUDE_PREFIX) {
            exclude = split_list(rest);
        }
    }

    exclude.truncate(CategoryInfo::MAX_EXCLUDE_TERMS);
    CategoryInfo::new(category, examples, exclude)
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
