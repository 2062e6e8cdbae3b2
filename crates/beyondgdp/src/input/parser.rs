//! Delimited text parser with delimiter detection.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{DataTable, SourceMetadata};
use crate::error::{BeyondGdpError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Lines inspected when auto-detecting the delimiter.
const SNIFF_LINES: usize = 10;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Reads delimited files with a header row into a [`DataTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| BeyondGdpError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse in-memory text, detecting the delimiter unless one is configured.
    pub fn parse_str(&self, text: &str) -> Result<DataTable> {
        let bytes = text.as_bytes();
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };
        self.parse_bytes(bytes, delimiter)
    }

    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(BeyondGdpError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            // Short rows are padded, long rows truncated.
            row.resize(expected_cols, String::new());
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(BeyondGdpError::EmptyData("No data rows found".to_string()));
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the delimiter that splits the first lines most consistently.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();

    if lines.is_empty() {
        return Err(BeyondGdpError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        let variance = counts
            .iter()
            .map(|&c| (c as f64 - mean).powi(2))
            .sum::<f64>()
            / counts.len() as f64;

        // Consistent counts win; tabs get a small edge since they rarely occur in values.
        let score = if counts.iter().all(|&c| c == first_count) {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, ignoring quoted sections.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
