//! A single (country, indicator, year, value) record.

use serde::{Deserialize, Serialize};

/// One indicator value for one country in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Canonical country name as written in the dataset.
    pub country: String,
    /// Canonical indicator name as written in the dataset.
    pub indicator: String,
    pub year: i32,
    pub value: f64,
}

impl Observation {
    pub fn new(
        country: impl Into<String>,
        indicator: impl Into<String>,
        year: i32,
        value: f64,
    ) -> Self {
        Self {
            country: country.into(),
            indicator: indicator.into(),
            year,
            value,
        }
    }
}
