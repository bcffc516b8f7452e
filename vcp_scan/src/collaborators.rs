//! Collaborator contracts the scan driver depends on (specification §6).
//!
//! Ingestion, persistence, and the symbol universe are out of scope for
//! `vcp_core` itself; the driver calls through these trait objects so
//! callers can plug in HTTP clients, SQL stores, and CSV-backed universes
//! without the driver or the detector knowing anything about any of them.

use crate::error::Result;
use crate::persisted::PersistedSignal;
use vcp_core::PriceFrame;

/// `symbol -> PriceFrame?`. `Ok(None)` and `Err` are both treated as a skip
/// by the scan driver, never a fatal error; implementations must not mutate
/// a frame after handing it back.
pub trait Fetcher: Sync {
    fn fetch(&self, symbol: &str) -> Result<Option<PriceFrame>>;
}

/// Idempotent upsert sink keyed by `(ticker, pattern, as_of)`. Row order
/// within a batch is not observable to callers.
pub trait Store: Sync {
    fn upsert(&self, rows: &[PersistedSignal]) -> Result<()>;
}

/// A finite, ordered sequence of ticker symbols to scan.
pub trait Universe {
    fn symbols(&self) -> Vec<String>;
}

impl Universe for Vec<String> {
    fn symbols(&self) -> Vec<String> {
        self.clone()
    }
}

impl Universe for &[String] {
    fn symbols(&self) -> Vec<String> {
        self.to_vec()
    }
}
