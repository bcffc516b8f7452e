//! The VCP detection pipeline, one module per stage
//!
//! Each stage is a small pure function taking `&PriceFrame`/`&DetectorConfig`
//! (plus whatever the previous stage produced) and either advancing the
//! pipeline or pushing a rejection note. [`crate::detector::VcpDetector`]
//! wires the stages together.

pub mod breakout;
pub mod confidence;
pub mod contractions;
pub mod metrics;
pub mod pattern;
pub mod swings;
pub mod trend_template;
pub mod validator;
