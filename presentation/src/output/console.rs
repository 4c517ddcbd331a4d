//! Console output formatter for research results

use colored::Colorize;
use toolscout_domain::{CompanyRecord, ResearchState};

const MAX_TECH_STACK: usize = 5;
const MAX_LANGUAGES: usize = 5;
const MAX_INTEGRATIONS: usize = 4;

/// Formats research results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete research result
    pub fn format(state: &ResearchState) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n",
            "Results for:".cyan().bold(),
            state.query
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if state.companies.is_empty() {
            output.push_str(&format!("\n{}\n", "No tools could be researched.".dimmed()));
        }

        for (i, company) in state.companies.iter().enumerate() {
            output.push_str(&Self::company(i + 1, company));
        }

        if !state.analysis.is_empty() {
            output.push_str(&Self::recommendation(&state.analysis));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(state: &ResearchState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    fn company(index: usize, company: &CompanyRecord) -> String {
        let mut output = format!("\n{}\n", format!("{}. {}", index, company.name).yellow().bold());

        output.push_str(&Self::field("Website", &company.website));
        output.push_str(&Self::field("Pricing", company.pricing_model.as_str()));
        output.push_str(&Self::field(
            "Open Source",
            Self::tri_state(company.is_open_source, "Yes", "No"),
        ));

        if !company.tech_stack.is_empty() {
            output.push_str(&Self::field(
                "Tech Stack",
                &Self::joined(&company.tech_stack, MAX_TECH_STACK),
            ));
        }
        if !company.language_support.is_empty() {
            output.push_str(&Self::field(
                "Language Support",
                &Self::joined(&company.language_support, MAX_LANGUAGES),
            ));
        }
        if let Some(api) = company.api_available {
            let status = if api {
                "Available".green().to_string()
            } else {
                "Not Available".red().to_string()
            };
            output.push_str(&Self::field("API", &status));
        }
        if !company.integration_capabilities.is_empty() {
            output.push_str(&Self::field(
                "Integrations",
                &Self::joined(&company.integration_capabilities, MAX_INTEGRATIONS),
            ));
        }
        if !company.description.is_empty() {
            output.push_str(&Self::field("Description", &company.description));
        }

        output
    }

    fn recommendation(analysis: &str) -> String {
        format!(
            "\n{}\n{}\n{}\n",
            "Developer Recommendations:".cyan().bold(),
            "-".repeat(40),
            analysis
        )
    }

    fn field(label: &str, value: &str) -> String {
        format!("   {} {}\n", format!("{}:", label).dimmed(), value)
    }

    fn tri_state(value: Option<bool>, yes: &'static str, no: &'static str) -> &'static str {
        match value {
            Some(true) => yes,
            Some(false) => no,
            None => "Unknown",
        }
    }

    fn joined(items: &[String], max: usize) -> String {
        items
            .iter()
            .take(max)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolscout_domain::{PricingModel, Query};

    fn plain() {
        colored::control::set_override(false);
    }

    fn state() -> ResearchState {
        let mut state = ResearchState::new(Query::new("alternatives to Slack"));
        state.extracted_tools = vec!["Mattermost".to_string()];
        state.companies = vec![CompanyRecord {
            name: "Mattermost".to_string(),
            website: "https://mattermost.com".to_string(),
            pricing_model: PricingModel::Free,
            is_open_source: Some(true),
            tech_stack: ["Go", "React", "PostgreSQL", "MySQL", "Docker", "Kubernetes"]
                .map(String::from)
                .to_vec(),
            api_available: Some(true),
            integration_capabilities: ["GitHub", "Jira", "GitLab", "Jenkins", "Zoom"]
                .map(String::from)
                .to_vec(),
            ..Default::default()
        }];
        state.analysis = "Mattermost is the best self-hosted pick.".to_string();
        state
    }

    #[test]
    fn test_format_full() {
        plain();
        let output = ConsoleFormatter::format(&state());

        assert!(output.contains("Results for: alternatives to Slack"));
        assert!(output.contains("1. Mattermost"));
        assert!(output.contains("Pricing: Free"));
        assert!(output.contains("Open Source: Yes"));
        assert!(output.contains("Tech Stack: Go, React, PostgreSQL, MySQL, Docker\n"));
        assert!(output.contains("Integrations: GitHub, Jira, GitLab, Jenkins\n"));
        assert!(output.contains("API: Available"));
        assert!(!output.contains("Description:"));
        assert!(output.contains("Developer Recommendations:"));
        assert!(output.contains("best self-hosted pick"));
    }

    #[test]
    fn test_unknown_fields() {
        plain();
        let mut state = ResearchState::new(Query::new("q"));
        state.companies = vec![CompanyRecord::seeded("Zulip", "https://zulip.com", "Chat")];

        let output = ConsoleFormatter::format(&state);

        assert!(output.contains("Open Source: Unknown"));
        assert!(output.contains("Pricing: Unknown"));
        assert!(!output.contains("API:"));
        assert!(output.contains("Description: Chat"));
    }

    #[test]
    fn test_no_companies() {
        plain();
        let output = ConsoleFormatter::format(&ResearchState::new(Query::new("q")));
        assert!(output.contains("No tools could be researched."));
        assert!(!output.contains("Developer Recommendations"));
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&state());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["query"], "alternatives to Slack");
        assert_eq!(value["companies"][0]["pricing_model"], "Free");
        assert_eq!(value["extracted_tools"][0], "Mattermost");
    }
}
