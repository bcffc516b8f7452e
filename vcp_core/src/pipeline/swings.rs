//! Swing extractor (specification §4.3)
//!
//! Scans the interior of the frame for local extrema over a symmetric
//! window. A swing high and swing low may both occur at the same index.
//! Output lists are date-ordered (equivalently, index-ordered, since the
//! frame is ascending by date).

use crate::{Bar, PriceFrame, SwingKind, SwingPoint};
use vcp_math::extrema::{is_window_maximum, is_window_minimum};

/// Finds swing highs and swing lows using a `window`-bar lookback/lookahead.
///
/// Only indices in `[window, n - window - 1]` are considered, since a
/// smaller index range wouldn't have a full window on both sides.
pub fn extract_swings(frame: &PriceFrame, window: usize) -> (Vec<SwingPoint>, Vec<SwingPoint>) {
    let bars = frame.bars();
    let n = bars.len();

    let mut swing_highs = Vec::new();
    let mut swing_lows = Vec::new();

    if window == 0 || n <= 2 * window {
        return (swing_highs, swing_lows);
    }

    let highs: Vec<f64> = bars.iter().map(|b: &Bar| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b: &Bar| b.low).collect();

    for i in window..(n - window) {
        if is_window_maximum(&highs, i, window) {
            swing_highs.push(SwingPoint {
                kind: SwingKind::High,
                date: bars[i].date,
                price: highs[i],
                index: i,
            });
        }
        if is_window_minimum(&lows, i, window) {
            swing_lows.push(SwingPoint {
                kind: SwingKind::Low,
                date: bars[i].date,
                price: lows[i],
                index: i,
            });
        }
    }

    (swing_highs, swing_lows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::synthetic_vcp_frame;

    #[test]
    fn finds_swings_in_synthetic_vcp_frame() {
        let frame = synthetic_vcp_frame();
        let (highs, lows) = extract_swings(&frame, 5);
        assert!(!highs.is_empty());
        assert!(!lows.is_empty());
        // Output must be index-ordered.
        for pair in highs.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
        for pair in lows.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
    }

    #[test]
    fn short_frame_yields_no_swings() {
        let frame = crate::testing::flat_frame(9, 100.0, 1_000_000);
        let (highs, lows) = extract_swings(&frame, 5);
        assert!(highs.is_empty());
        assert!(lows.is_empty());
    }
}
