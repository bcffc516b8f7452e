//! Whole-series moving average helpers
//!
//! The streaming indicators in [`crate::moving_averages`] track a single
//! current value. Trend-template style checks need the moving average at
//! an arbitrary historical point (e.g. "the 200-day average 20 bars ago"),
//! so this module replays the streaming indicator across a slice and keeps
//! every intermediate value.

use crate::moving_averages::SimpleMovingAverage;

/// Computes the simple moving average at every index of `values`.
///
/// The result has the same length as `values`. Index `i` holds `None` until
/// at least `period` values have been seen (i.e. for `i < period - 1`),
/// then holds the SMA of `values[i - period + 1 ..= i]`.
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    let mut sma = match SimpleMovingAverage::new(period) {
        Ok(sma) => sma,
        Err(_) => return vec![None; values.len()],
    };

    values
        .iter()
        .map(|&v| {
            let _ = sma.update(v);
            sma.value().ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_none_until_period_reached() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let series = sma_series(&values, 3);
        assert_eq!(series[0], None);
        assert_eq!(series[1], None);
        assert_eq!(series[2], Some(2.0)); // (1+2+3)/3
        assert_eq!(series[3], Some(3.0)); // (2+3+4)/3
        assert_eq!(series[4], Some(4.0)); // (3+4+5)/3
    }

    #[test]
    fn zero_period_yields_all_none() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(sma_series(&values, 0), vec![None, None, None]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(sma_series(&[], 20).is_empty());
    }
}
