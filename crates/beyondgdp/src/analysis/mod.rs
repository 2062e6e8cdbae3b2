//! Analytics behind the thematic pages.

mod international;

pub use international::{
    InternationalSnapshot, InvestmentSplit, Quadrant, QuadrantChart, QuadrantPoint, ScatterPoint,
    SnapshotRow,
};

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::Theme;
use crate::dataset::{Dataset, Observation};

/// An observation with its value rescaled to `[0, 1]` within its indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedObservation {
    pub country: String,
    pub indicator: String,
    pub year: i32,
    pub value: f64,
    pub normalized: f64,
}

/// Min-max normalize each indicator separately, keeping input order.
///
/// An indicator whose values are all equal normalizes to 0.
pub fn normalize_min_max<'a, I>(rows: I) -> Vec<NormalizedObservation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let rows: Vec<&Observation> = rows.into_iter().collect();

    let mut bounds: HashMap<&str, (f64, f64)> = HashMap::new();
    for row in &rows {
        let entry = bounds
            .entry(row.indicator.as_str())
            .or_insert((f64::INFINITY, f64::NEG_INFINITY));
        entry.0 = entry.0.min(row.value);
        entry.1 = entry.1.max(row.value);
    }

    rows.iter()
        .map(|row| {
            let (min, max) = bounds[row.indicator.as_str()];
            let normalized = if max != min {
                (row.value - min) / (max - min)
            } else {
                0.0
            };
            NormalizedObservation {
                country: row.country.clone(),
                indicator: row.indicator.clone(),
                year: row.year,
                value: row.value,
                normalized,
            }
        })
        .collect()
}

/// Lower-triangular Pearson correlation matrix between indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Row and column labels, in the order requested.
    pub indicators: Vec<String>,
    /// `values[i][j]` for `j <= i`; `None` above the diagonal or when undefined.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Look up a coefficient by label, in either argument order.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.indicators.iter().position(|x| x == a)?;
        let j = self.indicators.iter().position(|x| x == b)?;
        let (row, col) = if i >= j { (i, j) } else { (j, i) };
        self.values[row][col]
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

/// Correlate indicators year by year.
///
/// Rows are pivoted to year × indicator; each pair is correlated over the
/// years where both have a value. Indicators with no row are left out.
/// Coefficients are rounded to two decimals.
pub fn correlation_matrix<'a, I>(rows: I, indicators: &[&str]) -> CorrelationMatrix
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut pivot: IndexMap<&str, HashMap<i32, f64>> = IndexMap::new();
    for name in indicators {
        pivot.insert(name, HashMap::new());
    }
    for row in rows {
        if let Some(series) = pivot.get_mut(row.indicator.as_str()) {
            series.insert(row.year, row.value);
        }
    }
    pivot.retain(|_, series| !series.is_empty());

    let series: Vec<&HashMap<i32, f64>> = pivot.values().collect();
    let values = (0..series.len())
        .map(|i| {
            (0..series.len())
                .map(|j| {
                    if j > i {
                        None
                    } else {
                        pearson(series[i], series[j]).map(round2)
                    }
                })
                .collect()
        })
        .collect();

    CorrelationMatrix {
        indicators: pivot.keys().map(|k| k.to_string()).collect(),
        values,
    }
}

/// Pearson coefficient over shared years; `None` with fewer than two or zero variance.
fn pearson(a: &HashMap<i32, f64>, b: &HashMap<i32, f64>) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .filter_map(|(year, x)| b.get(year).map(|y| (*x, *y)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        cov += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
        var_y += (y - mean_y).powi(2);
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some((cov / denom).clamp(-1.0, 1.0))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Most recent year present.
pub fn latest_year<'a, I>(rows: I) -> Option<i32>
where
    I: IntoIterator<Item = &'a Observation>,
{
    rows.into_iter().map(|o| o.year).max()
}

/// Time span and latest value of one indicator for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorCoverage {
    pub indicator: String,
    pub first_year: i32,
    pub last_year: i32,
    pub points: usize,
    pub latest_value: f64,
}

/// Everything a thematic page shows for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeProfile {
    pub country: String,
    pub theme: Theme,
    /// Theme indicators with at least one value, in catalog order.
    pub coverage: Vec<IndicatorCoverage>,
    pub correlations: CorrelationMatrix,
    pub normalized: Vec<NormalizedObservation>,
}

impl ThemeProfile {
    pub fn build(dataset: &Dataset, country: &str, theme: Theme) -> ThemeProfile {
        let names = theme.indicator_names();
        let rows: Vec<&Observation> = dataset
            .for_country(country)
            .filter(|o| names.contains(&o.indicator.as_str()))
            .collect();

        let coverage = names
            .iter()
            .filter_map(|name| coverage_of(&rows, name))
            .collect();

        ThemeProfile {
            country: country.to_string(),
            theme,
            coverage,
            correlations: correlation_matrix(rows.iter().copied(), &names),
            normalized: normalize_min_max(rows.iter().copied()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coverage.is_empty()
    }
}

fn coverage_of(rows: &[&Observation], indicator: &str) -> Option<IndicatorCoverage> {
    let series: Vec<&&Observation> = rows.iter().filter(|o| o.indicator == indicator).collect();
    let first = series.iter().min_by_key(|o| o.year)?;
    let last = series.iter().max_by_key(|o| o.year)?;

    Some(IndicatorCoverage {
        indicator: indicator.to_string(),
        first_year: first.year,
        last_year: last.year,
        points: series.len(),
        latest_value: last.value,
    })
}
