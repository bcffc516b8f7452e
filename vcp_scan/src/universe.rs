//! File-backed [`Universe`] (specification §15).

use std::fs::File;
use std::path::Path;

use crate::collaborators::Universe;
use crate::error::{Result, ScanError};

/// The universe used when no configured source is available.
pub const FALLBACK_UNIVERSE: &[&str] = &["AAPL", "MSFT", "NVDA", "AMZN", "TSLA"];

/// A ticker list loaded from a CSV file, one symbol per cell, blank cells
/// and surrounding whitespace ignored. Order is preserved as read; symbols
/// are not deduplicated or re-sorted.
pub struct FileUniverse {
    symbols: Vec<String>,
}

impl FileUniverse {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| ScanError::Fetch(format!("could not open universe file: {e}")))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut symbols = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ScanError::Fetch(e.to_string()))?;
            for cell in record.iter() {
                let symbol = cell.trim();
                if !symbol.is_empty() {
                    symbols.push(symbol.to_string());
                }
            }
        }
        Ok(Self { symbols })
    }

    /// The small built-in universe used when no file is configured.
    pub fn fallback() -> Self {
        Self {
            symbols: FALLBACK_UNIVERSE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Universe for FileUniverse {
    fn symbols(&self) -> Vec<String> {
        self.symbols.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_symbols_trimming_whitespace_and_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, " AAPL ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "MSFT,NVDA").unwrap();

        let universe = FileUniverse::load(file.path()).unwrap();
        assert_eq!(
            universe.symbols(),
            vec!["AAPL".to_string(), "MSFT".to_string(), "NVDA".to_string()]
        );
    }

    #[test]
    fn fallback_universe_is_the_documented_small_list() {
        let universe = FileUniverse::fallback();
        assert_eq!(universe.symbols(), vec!["AAPL", "MSFT", "NVDA", "AMZN", "TSLA"]);
    }

    #[test]
    fn missing_file_is_a_scan_error_not_a_panic() {
        let result = FileUniverse::load("/nonexistent/path/universe.csv");
        assert!(result.is_err());
    }
}
