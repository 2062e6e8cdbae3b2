//! Turns a raw [`DataTable`] into a cleaned [`Dataset`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::parser::{Parser, ParserConfig};
use super::source::{DataTable, SourceMetadata};
use crate::config::{ColumnMapping, DatasetConfig};
use crate::dataset::{Dataset, Observation};
use crate::error::{BeyondGdpError, Result};

/// Counts from one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Data rows read from the table.
    pub rows_read: usize,
    /// Rows skipped because their value was missing.
    pub rows_dropped: usize,
}

impl LoadReport {
    pub fn rows_kept(&self) -> usize {
        self.rows_read - self.rows_dropped
    }
}

/// Column positions resolved against a header row.
struct ColumnIndices {
    country: usize,
    indicator: usize,
    year: usize,
    value: usize,
}

/// Loads long-format indicator files (one observation per row).
pub struct DatasetLoader {
    columns: ColumnMapping,
    parser: Parser,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self::from_config(&DatasetConfig::default())
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        let parser = Parser::with_config(ParserConfig {
            delimiter: config.delimiter.map(|d| d as u8),
            ..ParserConfig::default()
        });
        Self {
            columns: config.columns.clone(),
            parser,
        }
    }

    /// Read and clean a file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata, LoadReport)> {
        let path = path.as_ref();
        let (table, source) = self.parser.parse_file(path)?;
        let (dataset, report) = self.load_table(&table)?;

        tracing::info!(
            file = %source.file,
            rows = report.rows_kept(),
            dropped = report.rows_dropped,
            countries = dataset.countries().len(),
            indicators = dataset.indicators().len(),
            "dataset loaded"
        );

        Ok((dataset, source, report))
    }

    /// Clean in-memory text.
    pub fn load_str(&self, text: &str) -> Result<(Dataset, LoadReport)> {
        let table = self.parser.parse_str(text)?;
        self.load_table(&table)
    }

    /// Convert parsed rows into observations.
    ///
    /// Rows with a missing value are dropped. Years must be integral
    /// (`2010` or `2010.0`); any other unparseable year or value is an error.
    pub fn load_table(&self, table: &DataTable) -> Result<(Dataset, LoadReport)> {
        let idx = self.resolve_columns(table)?;
        let mut observations = Vec::with_capacity(table.row_count());
        let mut report = LoadReport {
            rows_read: table.row_count(),
            rows_dropped: 0,
        };

        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = row_idx + 1;
            let raw_value = row[idx.value].as_str();
            if DataTable::is_null_value(raw_value) {
                report.rows_dropped += 1;
                continue;
            }

            let year = parse_year(&row[idx.year]).ok_or_else(|| BeyondGdpError::Parse {
                row: row_num,
                column: idx.year,
                message: format!("'{}' is not an integer year", row[idx.year]),
            })?;

            let value: f64 = raw_value
                .trim()
                .parse()
                .map_err(|_| BeyondGdpError::Parse {
                    row: row_num,
                    column: idx.value,
                    message: format!("'{}' is not a number", raw_value),
                })?;

            observations.push(Observation {
                country: row[idx.country].clone(),
                indicator: row[idx.indicator].clone(),
                year,
                value,
            });
        }

        if report.rows_dropped > 0 {
            tracing::debug!(dropped = report.rows_dropped, "skipped rows without a value");
        }

        Ok((Dataset::new(observations), report))
    }

    fn resolve_columns(&self, table: &DataTable) -> Result<ColumnIndices> {
        let find = |name: &str| {
            table
                .column_index(name.trim())
                .ok_or_else(|| BeyondGdpError::MissingColumn(name.to_string()))
        };

        Ok(ColumnIndices {
            country: find(self.columns.country.as_str())?,
            indicator: find(self.columns.indicator.as_str())?,
            year: find(self.columns.year.as_str())?,
            value: find(self.columns.value.as_str())?,
        })
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `2010` or `2010.0`, rejecting fractional years.
fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    let float: f64 = trimmed.parse().ok()?;
    if float.fract() == 0.0 && float >= i32::MIN as f64 && float <= i32::MAX as f64 {
        Some(float as i32)
    } else {
        None
    }
}
