//! Breakout checker (specification §4.8)

use crate::{DetectorConfig, PriceFrame};

const TRAILING_VOLUME_WINDOW: usize = 50;

/// `true` if the last close is above the pivot and the last volume exceeds
/// the trailing average volume by `breakout_volume_multiplier`.
pub fn check_breakout(frame: &PriceFrame, pivot_price: f64, config: &DetectorConfig) -> bool {
    let bars = frame.bars();
    let Some(last) = bars.last() else { return false };

    let window_start = bars.len().saturating_sub(TRAILING_VOLUME_WINDOW);
    let window = &bars[window_start..];
    let avg_volume =
        window.iter().map(|b| b.volume as f64).sum::<f64>() / window.len() as f64;

    let price_breakout = last.close > pivot_price;
    let volume_surge = last.volume as f64 > avg_volume * config.breakout_volume_multiplier;

    price_breakout && volume_surge
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::flat_frame;

    #[test]
    fn no_breakout_on_flat_data() {
        let frame = flat_frame(60, 100.0, 1_000_000);
        let config = DetectorConfig::default();
        assert!(!check_breakout(&frame, 100.0, &config));
    }

    #[test]
    fn detects_breakout_with_price_and_volume_surge() {
        let mut frame = flat_frame(60, 100.0, 1_000_000);
        {
            let bars = frame.bars().to_vec();
            let mut last = *bars.last().unwrap();
            last.close = 110.0;
            last.high = 111.0;
            last.volume = 3_000_000;
            let mut bars = bars;
            *bars.last_mut().unwrap() = last;
            frame = crate::PriceFrame::new(bars).unwrap();
        }
        let config = DetectorConfig::default();
        assert!(check_breakout(&frame, 105.0, &config));
    }
}
