//! Outcome of a "one call, default on failure" operation.

use serde::{Deserialize, Serialize};

/// A value paired with whether it is a real answer or a substituted default.
///
/// Components that must never fail (category classification, fallback
/// suggestion, recommendation synthesis) return this instead of a `Result`
/// so callers can tell a degraded value apart without error control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub value: T,
    pub degraded: bool,
}

impl<T> Outcome<T> {
    /// A value obtained from the external service.
    pub fn fresh(value: T) -> Self {
        Self {
            value,
            degraded: false,
        }
    }

    /// A built-in default used after a failure.
    pub fn degraded(value: T) -> Self {
        Self {
            value,
            degraded: true,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
