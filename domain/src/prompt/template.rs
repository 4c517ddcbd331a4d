//! Prompt templates for the research flow

use crate::core::string::take_chars;
use crate::research::entities::CategoryInfo;
use crate::research::extraction::NO_TOOLS_SENTINEL;

/// Article content included in the extraction prompt, in characters.
pub const EXTRACTION_CONTENT_CHARS: usize = 3000;

/// Company data included in the recommendation prompt, in characters.
pub const RECOMMENDATION_DATA_CHARS: usize = 2000;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    // ==================== Category Classification ====================

    pub fn category_system() -> &'static str {
        r#"You classify developer-tool research queries.
Answer in exactly three lines and nothing else:
CATEGORY: <short name of the kind of tools the user is looking for>
EXAMPLES: <up to 5 well-known tool names in that category, comma-separated>
EXCLUDE: <up to 5 generic terms that are NOT product names, comma-separated>"#
    }

    pub fn category_user(query: &str) -> String {
        format!(
            r#"Query: {}

Classify this query. Do not include the tool named in the query among the examples."#,
            query
        )
    }

    // ==================== Tool Extraction ====================

    pub fn extraction_system() -> String {
        format!(
            r#"You are a specialized tech tool extractor. Your job is to identify and extract ONLY specific product/service names from articles.
CRITICAL EXTRACTION RULES:
- Extract ONLY actual product names, brands, or service names
- Do NOT extract descriptions, explanations, or generic terms
- Do NOT extract the original tool being compared against
- Focus on tools developers can actually use or implement
- Return maximum 5 most relevant tools
- If no specific tools found, return "{}"

VALID EXTRACTION EXAMPLES:
"Vercel", "Netlify", "Railway"
"Claude", "Gemini", "Llama"
"ChromaDB", "Pinecone", "Weaviate"

INVALID EXTRACTIONS:
"Based on the content, here are alternatives..."
"AI language models" or "hosting platforms"
"The article discusses..." or "Note: While..."
Long phrases or sentences"#,
            NO_TOOLS_SENTINEL
        )
    }

    pub fn extraction_user(query: &str, content: &str, category: &CategoryInfo) -> String {
        let mut exclude: Vec<&str> = category.exclude_terms.iter().map(String::as_str).collect();
        exclude.extend(query.split_whitespace());

        format!(
            r#"Query: {}
Article Content: {}

Extract ONLY specific {} mentioned in this content.

EXAMPLES OF CORRECT FORMAT:
{}

STRICT RULES:
- Return ONLY product names, one per line
- No descriptions, explanations, or sentences
- Skip these generic terms: {}
- Maximum 5 tools
- One tool name per line
- No numbering, bullets, or formatting"#,
            query,
            take_chars(content, EXTRACTION_CONTENT_CHARS),
            category.category,
            category.examples.join("\n"),
            exclude.join(", ")
        )
    }

    // ==================== Fallback Suggestions ====================

    pub fn fallback_system() -> &'static str {
        r#"You are a senior software engineer who knows the developer tools landscape well.
Suggest only real, well-known products. Return one product name per line, with no numbering, bullets, descriptions, or commentary."#
    }

    pub fn fallback_user(query: &str) -> String {
        format!(
            r#"Developer Query: {}

List 4-5 real, well-known alternatives or options for this query.
One product name per line, nothing else."#,
            query
        )
    }

    // ==================== Tool Analysis ====================

    pub fn analysis_system() -> &'static str {
        r#"You are analyzing developer tools and programming technologies.
Focus on extracting information relevant to programmers and software developers.
Pay special attention to programming languages, frameworks, APIs, SDKs, and development workflows."#
    }

    pub fn analysis_user(tool_name: &str, content: &str) -> String {
        format!(
            r#"Company/Tool: {}
Website Content: {}

Analyze this content from a developer's perspective and provide:
- pricing_model: One of "Free", "Paid", "Enterprise", or "Unknown"
- is_open_source: true if open source, false if proprietary, null if unclear
- tech_stack: List of programming languages, frameworks, databases, APIs, or technologies supported/used
- description: Brief 1-sentence description focusing on what this tool does for developers
- api_available: true if REST API, GraphQL, SDK, or programmatic access is mentioned
- language_support: List of programming languages explicitly supported (e.g., Python, JavaScript, Go, etc.)
- integration_capabilities: List of tools/platforms it integrates with (e.g., GitHub, VS Code, Docker, AWS, etc.)

Focus on developer-relevant features like APIs, SDKs, language support, integrations, and development workflows."#,
            tool_name, content
        )
    }

    // ==================== Recommendation ====================

    pub fn recommendation_system() -> &'static str {
        r#"You are a senior software engineer providing quick, concise tech recommendations.
Keep responses brief and actionable - maximum 3-4 sentences total."#
    }

    pub fn recommendation_user(query: &str, company_data: &str) -> String {
        format!(
            r#"Developer Query: {}
Tools/Technologies Analyzed: {}

Provide a brief recommendation (3-4 sentences max) covering:
- Which tool is best and why
- Key cost/pricing consideration
- Main technical advantage

Be concise and direct - no long explanations needed."#,
            query,
            take_chars(company_data, RECOMMENDATION_DATA_CHARS)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_user_contains_query() {
        let prompt = PromptTemplate::category_user("alternatives to Slack");
        assert!(prompt.contains("alternatives to Slack"));
    }

    #[test]
    fn test_extraction_system_names_sentinel() {
        assert!(PromptTemplate::extraction_system().contains(NO_TOOLS_SENTINEL));
    }

    #[test]
    fn test_extraction_user_format() {
        let category = CategoryInfo::new(
            "team communication platforms",
            ["Discord", "Zulip"],
            ["chat app"],
        );
        let prompt =
            PromptTemplate::extraction_user("alternatives to Slack", "Discord is great", &category);

        assert!(prompt.contains("Extract ONLY specific team communication platforms"));
        assert!(prompt.contains("Discord\nZulip"));
        assert!(prompt.contains("Skip these generic terms: chat app, alternatives, to, Slack"));
        assert!(prompt.contains("Article Content: Discord is great"));
    }

    #[test]
    fn test_extraction_user_bounds_content() {
        let content = "z".repeat(EXTRACTION_CONTENT_CHARS + 500);
        let prompt =
            PromptTemplate::extraction_user("q", &content, &CategoryInfo::generic());
        assert!(prompt.contains(&"z".repeat(EXTRACTION_CONTENT_CHARS)));
        assert!(!prompt.contains(&"z".repeat(EXTRACTION_CONTENT_CHARS + 1)));
    }

    #[test]
    fn test_recommendation_user_bounds_data() {
        let data = "d".repeat(RECOMMENDATION_DATA_CHARS * 2);
        let prompt = PromptTemplate::recommendation_user("q", &data);
        assert!(!prompt.contains(&"d".repeat(RECOMMENDATION_DATA_CHARS + 1)));
    }

    #[test]
    fn test_analysis_user_lists_fields() {
        let prompt = PromptTemplate::analysis_user("Zulip", "Zulip is a chat app");
        assert!(prompt.contains("Company/Tool: Zulip"));
        assert!(prompt.contains("integration_capabilities"));
    }
}
