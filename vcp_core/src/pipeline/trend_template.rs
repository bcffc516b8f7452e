//! Trend template gate (specification §4.2)
//!
//! Minervini's 8-criterion filter on moving averages and 52-week extremes.
//! Always computes `trend_strength = k/8` regardless of admission; the
//! detector uses that value independent of whether the gate is bypassed.

use crate::{DetectorConfig, PriceFrame};
use vcp_math::series::sma_series;

const MONTH_LOOKBACK_BARS: usize = 20;
const FIFTY_TWO_WEEK_BARS: usize = 252;
const SIX_MONTH_BARS: usize = 126;

pub struct TrendTemplateResult {
    pub admitted: bool,
    pub trend_strength: f64,
    pub criteria_passed: usize,
}

/// Evaluates the 8 trend-template criteria and reports how many passed.
///
/// Admission is `criteria_passed >= config.trend_template_required`, but the
/// caller decides whether admission gates the pipeline (it is bypassed when
/// `config.check_trend_template` is `false`).
pub fn evaluate(frame: &PriceFrame, config: &DetectorConfig) -> TrendTemplateResult {
    let closes: Vec<f64> = frame.bars().iter().map(|b| b.close).collect();
    let n = closes.len();

    let ma50 = sma_series(&closes, 50);
    let ma150 = sma_series(&closes, 150);
    let ma200 = sma_series(&closes, 200);

    let close = closes[n - 1];
    let ma50_today = ma50[n - 1];
    let ma150_today = ma150[n - 1];
    let ma200_today = ma200[n - 1];

    let window_start = n.saturating_sub(FIFTY_TWO_WEEK_BARS);
    let window = &frame.bars()[window_start..];
    let high_52w = window.iter().fold(f64::MIN, |acc, b| acc.max(b.high));
    let low_52w = window.iter().fold(f64::MAX, |acc, b| acc.min(b.low));

    let mut criteria = [false; 8];

    if let (Some(ma150_v), Some(ma200_v)) = (ma150_today, ma200_today) {
        criteria[0] = close > ma150_v && close > ma200_v;
        criteria[1] = ma150_v > ma200_v;
    }

    let ma200_20d_ago = if n > MONTH_LOOKBACK_BARS {
        ma200[n - 1 - MONTH_LOOKBACK_BARS]
    } else {
        ma200_today
    };
    if let (Some(today), Some(prior)) = (ma200_today, ma200_20d_ago) {
        criteria[2] = today > prior;
    }

    if let (Some(ma50_v), Some(ma150_v), Some(ma200_v)) = (ma50_today, ma150_today, ma200_today) {
        criteria[3] = ma50_v > ma150_v && ma50_v > ma200_v;
    }

    if let Some(ma50_v) = ma50_today {
        criteria[4] = close > ma50_v;
    }

    if low_52w > 0.0 {
        criteria[5] = (close - low_52w) / low_52w >= 0.30;
    }

    if high_52w > 0.0 {
        criteria[6] = (high_52w - close) / high_52w <= 0.25;
    }

    criteria[7] = if n >= SIX_MONTH_BARS {
        let price_6m_ago = closes[n - SIX_MONTH_BARS];
        price_6m_ago > 0.0 && (close - price_6m_ago) / price_6m_ago > 0.10
    } else {
        true
    };

    let criteria_passed = criteria.iter().filter(|&&pass| pass).count();
    let trend_strength = criteria_passed as f64 / criteria.len() as f64;

    TrendTemplateResult {
        admitted: criteria_passed >= config.trend_template_required,
        trend_strength,
        criteria_passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::synthetic_vcp_frame;

    #[test]
    fn uptrending_frame_passes_most_criteria() {
        let frame = synthetic_vcp_frame();
        let config = DetectorConfig::default();
        let result = evaluate(&frame, &config);
        assert!(result.criteria_passed >= 6);
        assert!(result.admitted);
        assert!((result.trend_strength - result.criteria_passed as f64 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn short_frame_still_returns_a_score() {
        let frame = crate::testing::flat_frame(60, 100.0, 1_000_000);
        let config = DetectorConfig::default();
        let result = evaluate(&frame, &config);
        assert!(result.trend_strength >= 0.0 && result.trend_strength <= 1.0);
    }
}
