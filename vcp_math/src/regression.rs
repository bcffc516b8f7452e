//! Simple least-squares trend line
//!
//! Used to detect whether a short series (e.g. average volume per
//! contraction) is trending up or down, without pulling in a full
//! statistics dependency for a single slope.

use crate::{MathError, Result};

/// Fits `y = a + b*x` to `ys` against `x = 0, 1, 2, ...` and returns `b`.
pub fn slope(ys: &[f64]) -> Result<f64> {
    let n = ys.len();
    if n < 2 {
        return Err(MathError::InsufficientData(
            "Need at least 2 points to fit a trend line".to_string(),
        ));
    }

    let n_f = n as f64;
    let sum_x: f64 = (0..n).map(|i| i as f64).sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = ys.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();
    let sum_xx: f64 = (0..n).map(|i| (i as f64).powi(2)).sum();

    let denominator = n_f * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(MathError::CalculationError(
            "Degenerate x values, cannot fit a trend line".to_string(),
        ));
    }

    Ok((n_f * sum_xy - sum_x * sum_y) / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_upward_trend() {
        let ys = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = slope(&ys).unwrap();
        assert!((b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn detects_downward_trend() {
        let ys = [5.0, 4.0, 3.0, 2.0, 1.0];
        let b = slope(&ys).unwrap();
        assert!((b + 1.0).abs() < 1e-9);
    }

    #[test]
    fn flat_series_has_zero_slope() {
        let ys = [3.0, 3.0, 3.0];
        assert!((slope(&ys).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn too_few_points_is_an_error() {
        assert!(slope(&[1.0]).is_err());
    }
}
