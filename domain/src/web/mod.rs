//! Web search/scrape subdomain.
//!
//! Value objects returned by the search service and the classification
//! of its failures into retryable and non-retryable kinds.

pub mod error_kind;
pub mod value_objects;

pub use error_kind::ServiceErrorKind;
pub use value_objects::{Document, ResultSet, SearchHit};
