//! Pivot price and auxiliary metrics (specification §4.6)

use crate::{Contraction, PriceFrame};

const SHORT_MA_PERIOD: usize = 20;
const MEDIUM_MA_PERIOD: usize = 50;
const RECENT_TREND_LOOKBACK: usize = 10;
const VOLUME_COMPARISON_WINDOW: usize = 10;
const OLDER_VOLUME_WINDOW: usize = 30;

/// Highest contraction high plus 1%, or `last_close * 1.05` if `contractions`
/// is empty (shouldn't happen once the pattern validator has run, but kept
/// as a guarded fallback rather than a divide/index panic).
pub fn pivot_price(frame: &PriceFrame, contractions: &[Contraction]) -> f64 {
    match contractions.iter().map(|c| c.high_price).fold(None, |acc, h| {
        Some(acc.map_or(h, |m: f64| m.max(h)))
    }) {
        Some(max_high) => max_high * 1.01,
        None => frame.last().map_or(0.0, |b| b.close) * 1.05,
    }
}

/// Independent 0-1 trend strength score based on short moving averages and
/// recent volume, distinct from the trend-template score (used even when
/// the trend template gate is bypassed).
pub fn trend_strength(frame: &PriceFrame) -> f64 {
    let bars = frame.bars();
    let n = bars.len();
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let mut score = 0.0;

    if n >= SHORT_MA_PERIOD {
        let ma20 = mean(&closes[n - SHORT_MA_PERIOD..]);
        if closes[n - 1] > ma20 {
            score += 0.3;
        }
    }
    if n >= MEDIUM_MA_PERIOD {
        let ma50 = mean(&closes[n - MEDIUM_MA_PERIOD..]);
        if closes[n - 1] > ma50 {
            score += 0.3;
        }
    }
    if n > RECENT_TREND_LOOKBACK && closes[n - 1] > closes[n - 1 - RECENT_TREND_LOOKBACK] {
        score += 0.2;
    }
    if n >= OLDER_VOLUME_WINDOW {
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume as f64).collect();
        let recent = mean(&volumes[n - VOLUME_COMPARISON_WINDOW..]);
        let older = mean(&volumes[n - OLDER_VOLUME_WINDOW..n - VOLUME_COMPARISON_WINDOW]);
        if recent > older {
            score += 0.2;
        }
    }

    score.clamp(0.0, 1.0)
}

/// `true` if the latest contraction's average volume is at least 20% below
/// the prior contraction's.
pub fn volume_dry_up(contractions: &[Contraction]) -> bool {
    if contractions.len() < 2 {
        return false;
    }
    let previous = contractions[contractions.len() - 2].avg_volume;
    let recent = contractions[contractions.len() - 1].avg_volume;
    if previous <= 0.0 {
        return false;
    }
    (previous - recent) / previous > 0.20
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
