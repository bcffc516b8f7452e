//! Frame validator (specification §4.1)
//!
//! Rejects a frame outright if it is too short or its most recent price or
//! volume falls below the configured floor. Pure function of frame and
//! config; never mutates the frame.

use crate::{DetectorConfig, PriceFrame};

const MIN_BARS: usize = 60;
const TRAILING_VOLUME_WINDOW: usize = 50;

/// Checks the frame against the minimum-length, price, and volume floors.
///
/// Returns `Ok(())` if the frame passes, or `Err(note)` with a
/// human-readable rejection reason naming which condition failed.
pub fn validate_frame(frame: &PriceFrame, config: &DetectorConfig) -> Result<(), String> {
    if frame.len() < MIN_BARS {
        return Err(format!(
            "Insufficient data points (need {}+ days, have {})",
            MIN_BARS,
            frame.len()
        ));
    }

    let last_close = frame.last().expect("length checked above").close;
    if last_close < config.min_price {
        return Err(format!(
            "Price {:.2} below minimum {:.2}",
            last_close, config.min_price
        ));
    }

    let window_start = frame.len().saturating_sub(TRAILING_VOLUME_WINDOW);
    let trailing = &frame.bars()[window_start..];
    let avg_volume =
        trailing.iter().map(|b| b.volume as f64).sum::<f64>() / trailing.len() as f64;

    if avg_volume < config.min_volume as f64 {
        return Err(format!(
            "Volume {:.0} below minimum {}",
            avg_volume, config.min_volume
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::flat_frame;

    #[test]
    fn rejects_frames_shorter_than_sixty_bars() {
        let frame = flat_frame(59, 100.0, 1_000_000);
        let config = DetectorConfig::default();
        let err = validate_frame(&frame, &config).unwrap_err();
        assert!(err.contains("60"));
    }

    #[test]
    fn accepts_frames_of_exactly_sixty_bars() {
        let frame = flat_frame(60, 100.0, 1_000_000);
        let config = DetectorConfig::default();
        assert!(validate_frame(&frame, &config).is_ok());
    }

    #[test]
    fn rejects_price_below_floor() {
        let frame = flat_frame(60, 5.0, 1_000_000);
        let config = DetectorConfig::default();
        let err = validate_frame(&frame, &config).unwrap_err();
        assert!(err.contains("Price"));
    }

    #[test]
    fn rejects_volume_below_floor() {
        let frame = flat_frame(60, 100.0, 1_000);
        let config = DetectorConfig::default();
        let err = validate_frame(&frame, &config).unwrap_err();
        assert!(err.contains("Volume"));
    }
}
