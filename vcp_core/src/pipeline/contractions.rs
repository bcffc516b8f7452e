//! Contraction assembler (specification §4.4)
//!
//! Restricts attention to the recent window, then pairs each swing high
//! with the *minimum-price* swing low that occurs strictly after it within
//! that window, not necessarily the nearest one. This permits overlapping
//! contractions and lets the same low anchor more than one high; that
//! matches the reference behavior this module is ported from and is
//! preserved deliberately rather than "fixed" (see DESIGN.md).

use crate::{Contraction, DetectorConfig, PriceFrame, SwingPoint};

/// Builds contractions from swing points already restricted to the frame
/// they were extracted from. Returns contractions sorted by `start_date`.
pub fn assemble_contractions(
    frame: &PriceFrame,
    swing_highs: &[SwingPoint],
    swing_lows: &[SwingPoint],
    config: &DetectorConfig,
) -> Vec<Contraction> {
    let recent_period = config.recent_period_days.min(frame.len() / 2);
    let base_start = frame.len().saturating_sub(recent_period);

    let recent_highs: Vec<&SwingPoint> =
        swing_highs.iter().filter(|h| h.index >= base_start).collect();
    let recent_lows: Vec<&SwingPoint> =
        swing_lows.iter().filter(|l| l.index >= base_start).collect();

    if recent_highs.len() < 2 || recent_lows.len() < 2 {
        return Vec::new();
    }

    let bars = frame.bars();
    let mut contractions = Vec::new();

    for high in &recent_highs {
        if high.price <= 0.0 {
            continue; // guard against a degenerate divisor below
        }

        let mut chosen: Option<&SwingPoint> = None;
        for low in &recent_lows {
            if low.date <= high.date {
                continue;
            }
            chosen = match chosen {
                None => Some(low),
                Some(current) if low.price < current.price => Some(low),
                Some(current) => Some(current),
            };
        }

        let Some(low) = chosen else { continue };

        let percent_drop = (high.price - low.price) / high.price;
        let duration_days = (low.date - high.date).num_days();
        let avg_volume = bars[high.index..=low.index]
            .iter()
            .map(|b| b.volume as f64)
            .sum::<f64>()
            / (low.index - high.index + 1) as f64;

        contractions.push(Contraction {
            start_date: high.date,
            end_date: low.date,
            high_price: high.price,
            low_price: low.price,
            percent_drop,
            avg_volume,
            duration_days,
        });
    }

    contractions.sort_by_key(|c| c.start_date);
    contractions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::synthetic_vcp_frame;
    use crate::pipeline::swings::extract_swings;

    #[test]
    fn assembles_contractions_from_synthetic_frame() {
        let frame = synthetic_vcp_frame();
        let config = DetectorConfig::default();
        let (highs, lows) = extract_swings(&frame, config.swing_window);
        let contractions = assemble_contractions(&frame, &highs, &lows, &config);
        assert!(!contractions.is_empty());
        for c in &contractions {
            assert!(c.end_date > c.start_date);
            assert!(c.high_price > c.low_price);
            assert!(c.percent_drop > 0.0 && c.percent_drop < 1.0);
        }
        for pair in contractions.windows(2) {
            assert!(pair[0].start_date <= pair[1].start_date);
        }
    }

    #[test]
    fn insufficient_recent_swings_yields_empty() {
        let frame = crate::testing::flat_frame(60, 100.0, 1_000_000);
        let config = DetectorConfig::default();
        let (highs, lows) = extract_swings(&frame, config.swing_window);
        let contractions = assemble_contractions(&frame, &highs, &lows, &config);
        assert!(contractions.is_empty());
    }
}
