// This program explores the VCP detection pipeline across the workspace crates.
use vcp_core::testing::tight_vcp_frame;
use vcp_core::{DetectorConfig, VcpDetector};
use vcp_scan::{PersistedSignal, ScanDriver, ScanOptions};

fn main() {
    println!("Exploring the VCP workspace\n");

    println!("=== vcp_core: detecting a single symbol ===");
    let frame = tight_vcp_frame();
    let detector = VcpDetector::new(DetectorConfig {
        check_trend_template: false,
        ..Default::default()
    });
    let signal = detector.detect(&frame, "DEMO");
    println!(
        "DEMO detected={} confidence={:?} contractions={:?}",
        signal.detected,
        signal.confidence_score,
        signal.contractions.as_ref().map(|c| c.len())
    );

    println!("\n=== vcp_scan: a driver with no real fetcher configured ===");
    let driver = ScanDriver::new(ScanOptions::default());
    println!("driver constructed: {driver:p}", driver = &driver);

    if signal.detected {
        let row = PersistedSignal::from_signal(&signal, chrono::Utc::now(), None);
        println!("would upsert: {row:?}");
    }

    println!("\nDone exploring");
}
