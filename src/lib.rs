//! # VCP
//!
//! Umbrella crate for the Volatility Contraction Pattern workspace:
//! [`vcp_core`] is the detection pipeline, [`vcp_math`] its numeric
//! primitives, and [`vcp_scan`] the multi-symbol scan driver built on top.
//!
//! Most consumers only need `vcp_core`; this crate exists so a single
//! dependency pulls in the whole stack.
//!
//! ## Usage Example
//!
//! ```
//! use vcp::vcp_core::{DetectorConfig, VcpDetector};
//! use vcp::vcp_core::testing::tight_vcp_frame;
//!
//! let frame = tight_vcp_frame();
//! let detector = VcpDetector::new(DetectorConfig {
//!     check_trend_template: false,
//!     ..Default::default()
//! });
//! let signal = detector.detect(&frame, "EXAMPLE");
//! assert!(signal.detected);
//! ```

pub use vcp_core;
pub use vcp_math;
pub use vcp_scan;
