//! # VCP Core
//!
//! `vcp_core` detects Volatility Contraction Pattern (VCP) setups in daily
//! OHLCV time series, following the qualitative criteria popularized by
//! Minervini and O'Neil.
//!
//! The detector is a pure function of `(DetectorConfig, PriceFrame, symbol)`:
//! it performs no I/O, holds no shared state, and always returns a [`Signal`]
//! rather than an error. A negative [`Signal`] carries diagnostic notes
//! explaining which stage rejected the frame; a positive one carries a pivot
//! price, the ordered contractions that make up the base, and a confidence
//! score.
//!
//! ## Usage Example
//!
//! ```
//! use vcp_core::{DetectorConfig, VcpDetector};
//! use vcp_core::testing::synthetic_vcp_frame;
//!
//! let frame = synthetic_vcp_frame();
//! let detector = VcpDetector::new(DetectorConfig {
//!     check_trend_template: false,
//!     ..Default::default()
//! });
//! let signal = detector.detect(&frame, "EXAMPLE");
//! println!("detected: {}", signal.detected);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod detector;
mod pipeline;
pub mod testing;

pub use detector::VcpDetector;

/// Errors raised while constructing or working with core data types.
///
/// Detection itself never surfaces these: every rejection at detection time
/// is reported through [`Signal::notes`] instead. These are only raised by
/// fallible constructors like [`PriceFrame::new`].
#[derive(Error, Debug)]
pub enum VcpError {
    #[error("Invalid frame data: {0}")]
    InvalidFrame(String),
}

/// A single daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// An ordered sequence of daily bars, ascending by date, with no duplicate
/// dates and with `low <= min(open, close) <= max(open, close) <= high` for
/// every bar. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFrame {
    bars: Vec<Bar>,
}

impl PriceFrame {
    /// Builds a frame from bars, checking the structural invariants.
    ///
    /// This is a narrower check than the detector's frame validator: it only
    /// guards against malformed input (out-of-order dates, duplicate dates,
    /// bars whose high/low don't bound open/close). Business-level floors
    /// like minimum length, minimum price, and minimum volume are the
    /// detector's `Signal`-producing frame validator stage, not a
    /// constructor error.
    pub fn new(bars: Vec<Bar>) -> Result<Self, VcpError> {
        for window in bars.windows(2) {
            if window[1].date <= window[0].date {
                return Err(VcpError::InvalidFrame(format!(
                    "dates must be strictly ascending with no duplicates, found {} followed by {}",
                    window[0].date, window[1].date
                )));
            }
        }

        for bar in &bars {
            let lower = bar.open.min(bar.close);
            let upper = bar.open.max(bar.close);
            if !(bar.low <= lower && lower <= upper && upper <= bar.high) {
                return Err(VcpError::InvalidFrame(format!(
                    "bar on {} violates low <= min(open,close) <= max(open,close) <= high",
                    bar.date
                )));
            }
        }

        Ok(Self { bars })
    }

    /// Bars in ascending date order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }
}

/// The two-case kind of a [`SwingPoint`], modeled as a discriminated union
/// rather than a boolean so that future pattern detectors (e.g. Cup &
/// Handle) reusing swing extraction can match on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingKind {
    High,
    Low,
}

/// A local extremum in the price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    pub kind: SwingKind,
    pub date: NaiveDate,
    pub price: f64,
    pub index: usize,
}

/// A measured pullback from a swing high to a subsequent swing low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contraction {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub high_price: f64,
    pub low_price: f64,
    pub percent_drop: f64,
    pub avg_volume: f64,
    pub duration_days: i64,
}

/// The detector's output for a single symbol.
///
/// Always has `symbol`, `detected`, and `notes`. When `detected` is `true`,
/// the optional fields are populated; when `false`, they are `None` and
/// `notes` explains why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub detected: bool,
    pub notes: Vec<String>,
    pub pivot_price: Option<f64>,
    pub contractions: Option<Vec<Contraction>>,
    pub confidence_score: Option<f64>,
    pub trend_strength: Option<f64>,
    pub volume_dry_up: Option<bool>,
    pub final_contraction_tightness: Option<f64>,
    pub breakout_detected: Option<bool>,
    pub signal_date: Option<NaiveDate>,
}

impl Signal {
    fn negative(symbol: &str, notes: Vec<String>) -> Self {
        Self {
            symbol: symbol.to_string(),
            detected: false,
            notes,
            pivot_price: None,
            contractions: None,
            confidence_score: None,
            trend_strength: None,
            volume_dry_up: None,
            final_contraction_tightness: None,
            breakout_detected: None,
            signal_date: None,
        }
    }
}

/// Recognized detector options, with the defaults from the specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub min_price: f64,
    pub min_volume: u64,
    pub min_contractions: usize,
    pub max_contractions: usize,
    pub max_base_depth: f64,
    pub final_contraction_max: f64,
    pub breakout_volume_multiplier: f64,
    pub check_trend_template: bool,
    pub swing_window: usize,
    pub recent_period_days: usize,
    pub decreasing_ratio_threshold: f64,
    pub trend_template_required: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_price: 10.0,
            min_volume: 500_000,
            min_contractions: 2,
            max_contractions: 6,
            max_base_depth: 0.35,
            final_contraction_max: 0.10,
            breakout_volume_multiplier: 1.5,
            check_trend_template: true,
            swing_window: 5,
            recent_period_days: 60,
            decreasing_ratio_threshold: 0.6,
            trend_template_required: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(y: i32, m: u32, d: u32, o: f64, h: f64, l: f64, c: f64, v: u64) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            open: o,
            high: h,
            low: l,
            close: c,
            volume: v,
        }
    }

    #[test]
    fn accepts_well_formed_ascending_bars() {
        let bars = vec![
            bar(2024, 1, 1, 10.0, 11.0, 9.0, 10.5, 1000),
            bar(2024, 1, 2, 10.5, 12.0, 10.0, 11.5, 1200),
        ];
        assert!(PriceFrame::new(bars).is_ok());
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let bars = vec![
            bar(2024, 1, 2, 10.0, 11.0, 9.0, 10.5, 1000),
            bar(2024, 1, 1, 10.5, 12.0, 10.0, 11.5, 1200),
        ];
        assert!(PriceFrame::new(bars).is_err());
    }

    #[test]
    fn rejects_duplicate_dates() {
        let bars = vec![
            bar(2024, 1, 1, 10.0, 11.0, 9.0, 10.5, 1000),
            bar(2024, 1, 1, 10.5, 12.0, 10.0, 11.5, 1200),
        ];
        assert!(PriceFrame::new(bars).is_err());
    }

    #[test]
    fn rejects_high_below_close() {
        let bars = vec![bar(2024, 1, 1, 10.0, 10.2, 9.0, 11.0, 1000)];
        assert!(PriceFrame::new(bars).is_err());
    }

    #[test]
    fn default_config_matches_specification() {
        let config = DetectorConfig::default();
        assert_eq!(config.min_price, 10.0);
        assert_eq!(config.min_volume, 500_000);
        assert_eq!(config.min_contractions, 2);
        assert_eq!(config.max_contractions, 6);
        assert_eq!(config.trend_template_required, 6);
        assert!(config.check_trend_template);
    }
}
