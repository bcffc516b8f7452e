//! Synthetic price-series fixtures shared by the pipeline stage tests.
//!
//! These build deterministic frames by linear interpolation between
//! hand-picked waypoints rather than a random walk, so every fixture's
//! contraction depths, swing locations, and volume profile are exact and
//! reproducible across runs. The stage tests assert on these numbers
//! directly.

use crate::{Bar, PriceFrame};
use chrono::{Duration, NaiveDate};

const WAVE_LEG: usize = 10;
const TAIL_LEN: usize = 9;

fn date_seq(num_bars: usize) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 3).expect("valid calendar date");
    (0..num_bars).map(|i| start + Duration::days(i as i64)).collect()
}

fn bar_at(date: NaiveDate, close: f64, volume: u64) -> Bar {
    Bar {
        date,
        open: close,
        high: close * 1.001,
        low: close * 0.999,
        close,
        volume,
    }
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    (1..=steps)
        .map(|s| start + (end - start) * (s as f64 / steps as f64))
        .collect()
}

/// A flat-ish frame: a negligible monotonic drift keeps every bar's high and
/// low strictly ordered relative to its neighbors so no spurious swing
/// points appear, while the price stays within a cent of `price` and the
/// volume stays exactly `volume` throughout.
pub fn flat_frame(num_bars: usize, price: f64, volume: u64) -> PriceFrame {
    let dates = date_seq(num_bars);
    let bars = dates
        .into_iter()
        .enumerate()
        .map(|(i, date)| bar_at(date, price + i as f64 * 1e-6, volume))
        .collect();
    PriceFrame::new(bars).expect("flat fixture must satisfy frame invariants")
}

/// Builds an uptrend of `uptrend_days` bars from `start_price` to
/// `uptrend_end_price`, followed by one rally/pullback wave per entry in
/// `depths` (tapering `wave_volumes` across waves to simulate volume
/// dry-up), and a `tail_end_price` consolidation tail.
fn wave_frame(
    uptrend_days: usize,
    start_price: f64,
    uptrend_end_price: f64,
    depths: &[f64],
    wave_volumes: &[u64],
    uptrend_volume: u64,
    tail_end_price: f64,
    tail_volume: u64,
) -> PriceFrame {
    assert_eq!(depths.len(), wave_volumes.len());

    let mut closes = vec![start_price];
    let mut volumes = vec![uptrend_volume];
    closes.extend(linspace(start_price, uptrend_end_price, uptrend_days - 1));
    volumes.extend(std::iter::repeat(uptrend_volume).take(uptrend_days - 1));

    let mut price = uptrend_end_price;
    for (&depth, &volume) in depths.iter().zip(wave_volumes) {
        let rally = depth * 1.3;
        let peak = price * (1.0 + rally);
        closes.extend(linspace(price, peak, WAVE_LEG));
        volumes.extend(std::iter::repeat(volume).take(WAVE_LEG));

        let trough = peak * (1.0 - depth);
        closes.extend(linspace(peak, trough, WAVE_LEG));
        volumes.extend(std::iter::repeat(volume).take(WAVE_LEG));

        price = trough;
    }

    closes.extend(linspace(price, tail_end_price, TAIL_LEN));
    volumes.extend(std::iter::repeat(tail_volume).take(TAIL_LEN));

    let bars = date_seq(closes.len())
        .into_iter()
        .zip(closes)
        .zip(volumes)
        .map(|((date, close), volume)| bar_at(date, close, volume))
        .collect();
    PriceFrame::new(bars).expect("wave fixture must satisfy frame invariants")
}

/// A long uptrend (enough history for the 150/200-day moving averages and
/// the 252-day lookback) ending in a three-wave VCP base. Used by tests
/// that only assert loose, qualitative properties rather than exact
/// contraction counts.
pub fn synthetic_vcp_frame() -> PriceFrame {
    wave_frame(
        200,
        50.0,
        150.0,
        &[0.12, 0.08, 0.05],
        &[2_000_000, 1_500_000, 900_000],
        1_000_000,
        158.0,
        900_000,
    )
}

/// A short frame with exactly three cleanly decreasing, volume-drying-up
/// contractions, trend-template gate aside. The trend-template check must
/// be disabled by the caller's [`crate::DetectorConfig`] since 100
/// uptrend bars isn't enough history for the 150/200-day criteria.
pub fn tight_vcp_frame() -> PriceFrame {
    wave_frame(
        100,
        50.0,
        100.0,
        &[0.12, 0.08, 0.05],
        &[2_000_000, 1_500_000, 900_000],
        2_000_000,
        104.5,
        900_000,
    )
}

/// Like [`tight_vcp_frame`], but the final contraction is as wide as the
/// first two, well past `final_contraction_max`.
pub fn wide_final_pullback_frame() -> PriceFrame {
    wave_frame(
        100,
        50.0,
        100.0,
        &[0.30, 0.25, 0.20],
        &[2_000_000, 1_500_000, 900_000],
        2_000_000,
        97.0,
        900_000,
    )
}

/// A tight VCP base whose final bar breaks out above the pivot on a volume
/// surge: same waves as [`tight_vcp_frame`], but the tail rallies through
/// the pivot and the closing bar's volume is bumped well past 1.5x the
/// trailing average.
pub fn breakout_frame() -> PriceFrame {
    let frame = wave_frame(
        100,
        50.0,
        100.0,
        &[0.12, 0.08, 0.05],
        &[2_000_000, 1_500_000, 900_000],
        2_000_000,
        120.0,
        900_000,
    );
    let mut bars = frame.bars().to_vec();
    let mut last = *bars.last().expect("wave_frame never returns an empty frame");
    last.volume = 5_000_000;
    *bars.last_mut().unwrap() = last;
    PriceFrame::new(bars).expect("breakout fixture must satisfy frame invariants")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_frame_has_requested_length_and_volume() {
        let frame = flat_frame(60, 42.0, 750_000);
        assert_eq!(frame.len(), 60);
        assert!(frame.bars().iter().all(|b| b.volume == 750_000));
    }

    #[test]
    fn wave_fixtures_satisfy_frame_invariants() {
        for frame in [synthetic_vcp_frame(), tight_vcp_frame(), wide_final_pullback_frame(), breakout_frame()] {
            assert!(frame.len() >= 60);
            for bar in frame.bars() {
                assert!(bar.low <= bar.open.min(bar.close));
                assert!(bar.open.max(bar.close) <= bar.high);
            }
        }
    }
}
