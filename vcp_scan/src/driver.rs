//! Scan driver (specification §4.9, §5)
//!
//! Iterates a universe, fetches a frame per symbol, runs the detector with
//! bounded concurrency, and returns detected signals sorted by descending
//! confidence (ties broken by symbol ascending). A single symbol's fetch
//! failure is logged and skipped; it never aborts the scan. The detector
//! itself is pure and stateless, so symbols can be processed in any order
//! or in parallel with no coordination beyond the concurrency bound.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use vcp_core::{DetectorConfig, Signal, VcpDetector};

use crate::collaborators::{Fetcher, Universe};

/// Wall-clock bookkeeping around one [`ScanDriver::scan_with_summary`] pass
/// (specification §14). `success_count` and `failed_count` are independent
/// counters over the same symbol set: a symbol that was fetched but simply
/// didn't pattern-match counts toward neither.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total_symbols: usize,
    pub success_count: usize,
    pub failed_count: usize,
}

/// Options controlling a single scan pass.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub detector_config: DetectorConfig,
    pub max_concurrency: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            detector_config: DetectorConfig::default(),
            max_concurrency: 8,
        }
    }
}

/// Drives a detection scan across a universe of symbols.
pub struct ScanDriver {
    options: ScanOptions,
}

impl ScanDriver {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scans every symbol in `universe`, using `fetcher` to obtain each
    /// frame. `cancelled` is checked before each fetch; once it flips to
    /// `true`, remaining symbols are skipped, while any detection already
    /// in flight still runs to completion (it is CPU-bound and never
    /// blocks). Returns detected signals sorted by descending confidence,
    /// ties broken by symbol ascending.
    pub fn scan(
        &self,
        universe: &dyn Universe,
        fetcher: &dyn Fetcher,
        cancelled: &AtomicBool,
    ) -> Vec<Signal> {
        let (signals, _failed) = self.run(universe, fetcher, cancelled);
        signals
    }

    /// Like [`Self::scan`], but additionally returns a [`ScanRunSummary`]
    /// bookkeeping how many symbols were attempted, detected, or skipped
    /// due to a fetch failure or missing frame.
    pub fn scan_with_summary(
        &self,
        universe: &dyn Universe,
        fetcher: &dyn Fetcher,
        cancelled: &AtomicBool,
    ) -> (Vec<Signal>, ScanRunSummary) {
        let started_at = Utc::now();
        let total_symbols = universe.symbols().len();
        let (signals, failed_count) = self.run(universe, fetcher, cancelled);
        let finished_at = Utc::now();

        let summary = ScanRunSummary {
            started_at,
            finished_at,
            total_symbols,
            success_count: signals.len(),
            failed_count,
        };
        tracing::info!(
            total_symbols = summary.total_symbols,
            success_count = summary.success_count,
            failed_count = summary.failed_count,
            "scan pass finished"
        );
        (signals, summary)
    }

    /// Runs the detector across every symbol in `universe`, returning
    /// detected signals (sorted by descending confidence, ties broken by
    /// symbol ascending) and a count of symbols skipped due to a fetch
    /// failure or missing frame. `cancelled` is checked before each fetch;
    /// once it flips to `true`, remaining symbols are skipped, while any
    /// detection already in flight still runs to completion (it is
    /// CPU-bound and never blocks).
    fn run(
        &self,
        universe: &dyn Universe,
        fetcher: &dyn Fetcher,
        cancelled: &AtomicBool,
    ) -> (Vec<Signal>, usize) {
        let detector = VcpDetector::new(self.options.detector_config);
        let symbols = universe.symbols();

        let detect_one = |symbol: String| -> Outcome {
            if cancelled.load(AtomicOrdering::Relaxed) {
                return Outcome::Skipped;
            }
            match fetcher.fetch(&symbol) {
                Ok(Some(frame)) => Outcome::Signal(detector.detect(&frame, &symbol)),
                Ok(None) => {
                    tracing::warn!(symbol = %symbol, "fetcher returned no data, skipping");
                    Outcome::Failed
                }
                Err(err) => {
                    tracing::warn!(symbol = %symbol, error = %err, "fetch failed, skipping");
                    Outcome::Failed
                }
            }
        };

        let outcomes: Vec<Outcome> = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.max_concurrency.max(1))
            .build()
        {
            Ok(pool) => pool.install(|| symbols.into_par_iter().map(detect_one).collect()),
            Err(_) => symbols.into_iter().map(detect_one).collect(),
        };

        let failed_count = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, Outcome::Failed))
            .count();

        let mut signals: Vec<Signal> = outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                Outcome::Signal(signal) if signal.detected => Some(signal),
                _ => None,
            })
            .collect();

        signals.sort_by(|a, b| {
            b.confidence_score
                .partial_cmp(&a.confidence_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        (signals, failed_count)
    }
}

/// A per-symbol outcome of one scan attempt, distinguished so
/// [`ScanDriver::run`] can both filter detected signals and count failures.
enum Outcome {
    Signal(Signal),
    Failed,
    Skipped,
}
