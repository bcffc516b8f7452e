//! Detector orchestration (specification §4.9 state machine, minus the
//! scan-driver fan-out, which is a collaborator in `vcp_scan`).
//!
//! `VcpDetector::detect` is a pure function: `Start -> ValidateFrame ->
//! TrendGate -> ExtractSwings -> AssembleContractions -> ValidatePattern ->
//! ComputeMetrics -> ScoreConfidence -> CheckBreakout -> Emit`. Any
//! fail/insufficient/invalid edge short-circuits to a negative `Signal`
//! carrying the notes accumulated so far; the accumulator is a plain
//! `Vec<String>` threaded through the stages and only turned into the
//! immutable `Signal` at the end, per the design notes on mutable
//! intermediate state.

use crate::pipeline::{breakout, confidence, contractions, metrics, pattern, swings, trend_template};
use crate::{DetectorConfig, PriceFrame, Signal};

/// Stateless VCP detector. Cheap to construct; safe to share across threads
/// (it holds only a `DetectorConfig` copy) and to call repeatedly. The
/// same `(config, frame, symbol)` always yields the same `Signal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VcpDetector {
    config: DetectorConfig,
}

impl VcpDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Runs the full detection pipeline against `frame` for `symbol`.
    pub fn detect(&self, frame: &PriceFrame, symbol: &str) -> Signal {
        let config = &self.config;

        if let Err(note) = crate::pipeline::validator::validate_frame(frame, config) {
            return Signal::negative(symbol, vec![note]);
        }

        if config.check_trend_template {
            let result = trend_template::evaluate(frame, config);
            if !result.admitted {
                return Signal::negative(
                    symbol,
                    vec![format!(
                        "Trend Template: {}/8 criteria passed",
                        result.criteria_passed
                    )],
                );
            }
        }

        let (swing_highs, swing_lows) = swings::extract_swings(frame, config.swing_window);
        if swing_highs.len() < config.min_contractions || swing_lows.len() < config.min_contractions
        {
            return Signal::negative(
                symbol,
                vec!["Insufficient swing points for pattern analysis".to_string()],
            );
        }

        let raw_contractions =
            contractions::assemble_contractions(frame, &swing_highs, &swing_lows, config);
        if raw_contractions.len() < config.min_contractions {
            return Signal::negative(
                symbol,
                vec![format!(
                    "Only {} contractions found, need {}",
                    raw_contractions.len(),
                    config.min_contractions
                )],
            );
        }

        let validated = match pattern::validate_pattern(raw_contractions, config) {
            Ok(validated) => validated,
            Err(note) => return Signal::negative(symbol, vec![note]),
        };

        let mut notes = Vec::new();
        if validated.volume_not_decreasing {
            notes.push("Volume not decreasing through pattern".to_string());
        }

        let contractions = validated.contractions;
        let pivot_price = metrics::pivot_price(frame, &contractions);
        let trend_strength = metrics::trend_strength(frame);
        let volume_dry_up = metrics::volume_dry_up(&contractions);
        let final_contraction_tightness = contractions
            .last()
            .expect("pattern validator guarantees at least min_contractions entries")
            .percent_drop;

        let confidence_score = confidence::score(
            trend_strength,
            contractions.len(),
            volume_dry_up,
            final_contraction_tightness,
        );

        let breakout_detected = breakout::check_breakout(frame, pivot_price, config);

        notes.push(format!("VCP detected with {} contractions", contractions.len()));

        Signal {
            symbol: symbol.to_string(),
            detected: true,
            notes,
            pivot_price: Some(pivot_price),
            contractions: Some(contractions),
            confidence_score: Some(confidence_score),
            trend_strength: Some(trend_strength),
            volume_dry_up: Some(volume_dry_up),
            final_contraction_tightness: Some(final_contraction_tightness),
            breakout_detected: Some(breakout_detected),
            signal_date: frame.last().map(|b| b.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{breakout_frame, synthetic_vcp_frame, tight_vcp_frame, wide_final_pullback_frame};

    #[test]
    fn detects_a_tight_synthetic_vcp() {
        let frame = tight_vcp_frame();
        let detector = VcpDetector::new(DetectorConfig {
            check_trend_template: false,
            ..Default::default()
        });
        let signal = detector.detect(&frame, "TEST");
        assert!(signal.detected, "notes: {:?}", signal.notes);
        assert_eq!(signal.contractions.as_ref().unwrap().len(), 3);
        let tightness = signal.final_contraction_tightness.unwrap();
        assert!((tightness - 0.05).abs() < 0.01);
        assert!(signal.volume_dry_up.unwrap());
        assert!(signal.confidence_score.unwrap() >= 70.0);
        let pivot = signal.pivot_price.unwrap();
        let max_high = signal
            .contractions
            .as_ref()
            .unwrap()
            .iter()
            .map(|c| c.high_price)
            .fold(f64::MIN, f64::max);
        assert!((pivot - max_high * 1.01).abs() < 1e-6);
    }

    #[test]
    fn rejects_a_too_wide_final_contraction() {
        let frame = wide_final_pullback_frame();
        let detector = VcpDetector::new(DetectorConfig {
            check_trend_template: false,
            ..Default::default()
        });
        let signal = detector.detect(&frame, "TEST");
        assert!(!signal.detected);
        let joined = signal.notes.join(" ");
        assert!(joined.contains("Final contraction"));
    }

    #[test]
    fn rejects_insufficient_data() {
        let frame = crate::testing::flat_frame(40, 50.0, 1_000_000);
        let detector = VcpDetector::new(DetectorConfig::default());
        let signal = detector.detect(&frame, "TEST");
        assert!(!signal.detected);
        assert!(signal.notes[0].contains("60"));
    }

    #[test]
    fn detects_breakout_after_tight_base() {
        let frame = breakout_frame();
        let detector = VcpDetector::new(DetectorConfig {
            check_trend_template: false,
            ..Default::default()
        });
        let signal = detector.detect(&frame, "TEST");
        assert!(signal.detected, "notes: {:?}", signal.notes);
        assert_eq!(signal.breakout_detected, Some(true));
    }

    #[test]
    fn is_deterministic_across_repeated_calls() {
        let frame = synthetic_vcp_frame();
        let detector = VcpDetector::new(DetectorConfig {
            check_trend_template: false,
            ..Default::default()
        });
        let first = detector.detect(&frame, "TEST");
        let second = detector.detect(&frame, "TEST");
        assert_eq!(first, second);
    }

    #[test]
    fn negative_signal_never_carries_pivot_or_contractions() {
        let frame = crate::testing::flat_frame(40, 50.0, 1_000_000);
        let detector = VcpDetector::new(DetectorConfig::default());
        let signal = detector.detect(&frame, "TEST");
        assert!(!signal.notes.is_empty());
        assert!(signal.pivot_price.is_none());
        assert!(signal.contractions.is_none());
    }
}
