//! The persisted-row schema a [`crate::Store`] upserts (specification §6).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use vcp_core::Signal;

/// One row per detected pattern. Primary key is `(ticker, pattern, as_of)`;
/// writes are upserts with last-writer-wins on non-key columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSignal {
    pub ticker: String,
    pub pattern: String,
    pub as_of: DateTime<Utc>,
    pub confidence: f64,
    pub rs: Option<f64>,
    pub price: Option<f64>,
    pub meta: Value,
}

impl PersistedSignal {
    /// Builds the persisted row for `signal`, detected at wall-clock time
    /// `as_of`. `rs` (relative strength) is sourced externally; the core
    /// never computes it, so callers pass whatever they have, or `None`.
    pub fn from_signal(signal: &Signal, as_of: DateTime<Utc>, rs: Option<f64>) -> Self {
        let contractions = signal.contractions.as_ref().map_or(0, |c| c.len());
        Self {
            ticker: signal.symbol.to_uppercase(),
            pattern: "VCP".to_string(),
            as_of,
            confidence: signal.confidence_score.unwrap_or(0.0),
            rs,
            price: signal.pivot_price,
            meta: json!({ "contractions": contractions }),
        }
    }
}
