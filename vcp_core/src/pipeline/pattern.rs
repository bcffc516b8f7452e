//! Pattern validator (specification §4.5)
//!
//! Validates an assembled contraction list as a group: count, monotonic
//! decrease in magnitude, final-contraction tightness, base depth, and
//! (non-fatal) volume trend.

use crate::{Contraction, DetectorConfig};
use vcp_math::regression::slope;

pub struct PatternValidation {
    pub contractions: Vec<Contraction>,
    pub volume_not_decreasing: bool,
}

/// Validates `contractions` as a group, trimming to `max_contractions` (most
/// recent) first. Returns `Err(note)` on the first failing check, or
/// `Ok(PatternValidation)` with the (possibly trimmed) contractions and a
/// flag noting a non-fatal rising volume trend.
pub fn validate_pattern(
    contractions: Vec<Contraction>,
    config: &DetectorConfig,
) -> Result<PatternValidation, String> {
    if contractions.len() < config.min_contractions {
        return Err(format!(
            "Only {} contractions found, need {}",
            contractions.len(),
            config.min_contractions
        ));
    }

    let contractions = if contractions.len() > config.max_contractions {
        contractions[contractions.len() - config.max_contractions..].to_vec()
    } else {
        contractions
    };

    let pairs = contractions.len() - 1;
    if pairs > 0 {
        let decreasing = contractions
            .windows(2)
            .filter(|w| w[1].percent_drop <= w[0].percent_drop)
            .count();
        if (decreasing as f64 / pairs as f64) < config.decreasing_ratio_threshold {
            return Err("Contractions not sufficiently decreasing".to_string());
        }
    }

    let final_contraction = contractions.last().expect("count gate checked above");
    if final_contraction.percent_drop > config.final_contraction_max {
        return Err(format!(
            "Final contraction {:.1}% too wide",
            final_contraction.percent_drop * 100.0
        ));
    }

    let max_high = contractions
        .iter()
        .fold(f64::MIN, |acc, c| acc.max(c.high_price));
    let min_low = contractions
        .iter()
        .fold(f64::MAX, |acc, c| acc.min(c.low_price));
    let base_depth = (max_high - min_low) / max_high;
    if base_depth > config.max_base_depth {
        return Err(format!("Base too deep: {:.1}%", base_depth * 100.0));
    }

    let volume_not_decreasing = if contractions.len() >= 3 {
        let volumes: Vec<f64> = contractions.iter().map(|c| c.avg_volume).collect();
        slope(&volumes).map(|s| s > 0.0).unwrap_or(false)
    } else {
        false
    };

    Ok(PatternValidation {
        contractions,
        volume_not_decreasing,
    })
}
