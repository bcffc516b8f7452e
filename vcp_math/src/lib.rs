//! # VCP Math
//!
//! Numeric primitives shared by volatility-contraction pattern detection:
//! moving averages, rolling window extrema, and simple linear regression.
//! These are the building blocks the detection pipeline composes; none of
//! them know anything about OHLCV bars or VCP-specific thresholds.

use thiserror::Error;

pub mod extrema;
pub mod moving_averages;
pub mod regression;
pub mod series;

/// Errors that can occur in trading-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trading math operations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
