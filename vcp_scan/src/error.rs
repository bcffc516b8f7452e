//! Error types for the vcp_scan crate.

use thiserror::Error;

/// Errors a [`crate::Store`] or [`crate::Fetcher`] may raise.
///
/// Per the scan driver's failure semantics, a fetch error is never
/// propagated out of [`crate::ScanDriver::scan`]. It is logged and the
/// symbol is skipped. This type exists so collaborator implementations
/// have something concrete to return.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
