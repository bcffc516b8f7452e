//! JSON-lines-backed [`Fetcher`] (specification §13).
//!
//! Stands in for a real vendor HTTP client: reads `{symbol, frame}` records
//! from a file once at construction and serves `fetch` from that map. A
//! symbol absent from the file yields `Ok(None)`, matching the "missing
//! frame is logged and skipped" contract the driver relies on.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use vcp_core::PriceFrame;

use crate::collaborators::Fetcher;
use crate::error::{Result, ScanError};

#[derive(Deserialize)]
struct FetchRecord {
    symbol: String,
    frame: PriceFrame,
}

pub struct JsonLinesFetcher {
    frames: HashMap<String, PriceFrame>,
}

impl JsonLinesFetcher {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| ScanError::Fetch(format!("could not open fetch source: {e}")))?;
        let mut frames = HashMap::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| ScanError::Fetch(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            let record: FetchRecord =
                serde_json::from_str(&line).map_err(|e| ScanError::Fetch(e.to_string()))?;
            frames.insert(record.symbol, record.frame);
        }
        Ok(Self { frames })
    }
}

impl Fetcher for JsonLinesFetcher {
    fn fetch(&self, symbol: &str) -> Result<Option<PriceFrame>> {
        Ok(self.frames.get(symbol).cloned())
    }
}
