//! Research subdomain: entities, pipeline state, and the pure text
//! processing used by each pipeline stage.

pub mod category;
pub mod entities;
pub mod extraction;
pub mod recommendation;
pub mod state;

pub use category::parse_category_response;
pub use entities::{CategoryInfo, CompanyAnalysis, CompanyRecord, PricingModel};
pub use extraction::{
    Extraction, ExtractionRules, NO_TOOLS_SENTINEL, PLACEHOLDER_TOOL_NAME, RejectReason,
    filter_fallback_names, filter_tool_names, rejection_reason, strip_list_marker,
};
pub use recommendation::{RECOMMENDATION_UNAVAILABLE, summarize_companies, truncate_recommendation};
pub use state::{ResearchState, Stage, StateUpdate};
