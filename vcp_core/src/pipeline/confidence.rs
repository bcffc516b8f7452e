//! Confidence scorer (specification §4.7)
//!
//! Additive rubric clamped to `[0, 100]`. "Volatility compressed" is
//! unconditionally credited once the pattern validator has passed. See
//! DESIGN.md for why that's preserved as specified rather than tied to an
//! explicit compression measurement.

const TREND_STRENGTH_WEIGHT: f64 = 30.0;
const VOLATILITY_COMPRESSED_POINTS: f64 = 15.0;

pub fn score(
    trend_strength: f64,
    num_contractions: usize,
    volume_dry_up: bool,
    final_contraction_tightness: f64,
) -> f64 {
    let mut score = trend_strength * TREND_STRENGTH_WEIGHT;

    score += if (3..=4).contains(&num_contractions) {
        20.0
    } else if (2..=5).contains(&num_contractions) {
        10.0
    } else {
        0.0
    };

    if volume_dry_up {
        score += 20.0;
    }

    score += VOLATILITY_COMPRESSED_POINTS;

    score += if final_contraction_tightness <= 0.05 {
        15.0
    } else if final_contraction_tightness <= 0.08 {
        10.0
    } else if final_contraction_tightness <= 0.10 {
        5.0
    } else {
        0.0
    };

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_setup_scores_near_maximum() {
        let s = score(1.0, 3, true, 0.05);
        assert!((s - 100.0).abs() < 1e-9);
    }

    #[test]
    fn score_never_exceeds_one_hundred() {
        let s = score(1.0, 3, true, 0.01);
        assert!(s <= 100.0);
    }

    #[test]
    fn weak_setup_scores_low() {
        let s = score(0.0, 6, false, 0.30);
        assert!(s < 20.0);
    }

    #[test]
    fn contraction_count_bucket_boundaries() {
        assert!(score(0.0, 3, false, 0.30) > score(0.0, 2, false, 0.30));
        assert!(score(0.0, 2, false, 0.30) > score(0.0, 6, false, 0.30));
    }
}
