//! Cross-country panels: several countries side by side in one year.

use serde::Serialize;

use super::latest_year;
use crate::catalog::names::{CAPITAL_FORMATION, GDP_PER_CAPITA};
use crate::catalog::Theme;
use crate::dataset::{Dataset, Observation};

/// One country's theme indicators in the snapshot year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRow {
    pub country: String,
    /// Aligned with [`InternationalSnapshot::indicators`].
    pub values: Vec<Option<f64>>,
}

/// Country × indicator pivot of one theme at one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternationalSnapshot {
    pub theme: Theme,
    pub year: i32,
    pub indicators: Vec<String>,
    /// One row per requested country, in request order.
    pub rows: Vec<SnapshotRow>,
}

/// A country placed on a GDP per capita × indicator plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub country: String,
    pub gdp_per_capita: f64,
    pub value: f64,
}

/// GDP per capita split into its invested share and the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentSplit {
    pub country: String,
    pub gdp_per_capita: f64,
    pub investment: f64,
    pub remainder: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    HighGdpHighInequality,
    LowGdpHighInequality,
    HighGdpLowInequality,
    LowGdpLowInequality,
}

impl Quadrant {
    /// Values on a median count as high.
    fn classify(gdp: f64, value: f64, gdp_median: f64, value_median: f64) -> Quadrant {
        match (gdp >= gdp_median, value >= value_median) {
            (true, true) => Quadrant::HighGdpHighInequality,
            (false, true) => Quadrant::LowGdpHighInequality,
            (true, false) => Quadrant::HighGdpLowInequality,
            (false, false) => Quadrant::LowGdpLowInequality,
        }
    }

    /// French chart annotation.
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::HighGdpHighInequality => "Haut PIB - fortes inégalités",
            Quadrant::LowGdpHighInequality => "Bas PIB - fortes inégalités",
            Quadrant::HighGdpLowInequality => "Haut PIB - faibles inégalités",
            Quadrant::LowGdpLowInequality => "Bas PIB - faibles inégalités",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantPoint {
    pub country: String,
    pub gdp_per_capita: f64,
    pub value: f64,
    pub quadrant: Quadrant,
}

/// Countries split on the median GDP per capita and the median of one indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantChart {
    pub indicator: String,
    pub gdp_median: f64,
    pub value_median: f64,
    pub points: Vec<QuadrantPoint>,
}

impl InternationalSnapshot {
    /// Pivot `countries` × theme indicators at `year`.
    ///
    /// Without a year, the latest year in which any of these countries has a
    /// theme value is used; `None` when they have none at all. Repeated
    /// countries are kept once. A duplicated cell keeps its last row.
    pub fn build(
        dataset: &Dataset,
        theme: Theme,
        countries: &[&str],
        year: Option<i32>,
    ) -> Option<InternationalSnapshot> {
        let names = theme.indicator_names();
        let rows: Vec<&Observation> = dataset
            .observations()
            .iter()
            .filter(|o| {
                countries.contains(&o.country.as_str()) && names.contains(&o.indicator.as_str())
            })
            .collect();

        let year = match year {
            Some(year) => year,
            None => latest_year(rows.iter().copied())?,
        };

        let mut snapshot_rows: Vec<SnapshotRow> = Vec::new();
        for country in countries {
            if snapshot_rows.iter().any(|r| r.country == *country) {
                continue;
            }
            let values = names
                .iter()
                .map(|name| {
                    rows.iter()
                        .rev()
                        .find(|o| o.year == year && o.country == *country && o.indicator == *name)
                        .map(|o| o.value)
                })
                .collect();
            snapshot_rows.push(SnapshotRow {
                country: country.to_string(),
                values,
            });
        }

        Some(InternationalSnapshot {
            theme,
            year,
            indicators: names.iter().map(|n| n.to_string()).collect(),
            rows: snapshot_rows,
        })
    }

    pub fn value(&self, country: &str, indicator: &str) -> Option<f64> {
        let col = self.indicators.iter().position(|i| i == indicator)?;
        self.rows
            .iter()
            .find(|r| r.country == country)
            .and_then(|r| r.values[col])
    }

    /// Countries with both GDP per capita and `indicator`, in row order.
    pub fn against_gdp(&self, indicator: &str) -> Vec<ScatterPoint> {
        self.rows
            .iter()
            .filter_map(|row| {
                Some(ScatterPoint {
                    country: row.country.clone(),
                    gdp_per_capita: self.value(&row.country, GDP_PER_CAPITA)?,
                    value: self.value(&row.country, indicator)?,
                })
            })
            .collect()
    }

    /// `investment = gdp × capital formation / 100`, for countries with both.
    ///
    /// Empty unless the theme carries gross capital formation.
    pub fn investment_split(&self) -> Vec<InvestmentSplit> {
        self.against_gdp(CAPITAL_FORMATION)
            .into_iter()
            .map(|p| {
                let investment = p.gdp_per_capita * p.value / 100.0;
                InvestmentSplit {
                    country: p.country,
                    gdp_per_capita: p.gdp_per_capita,
                    investment,
                    remainder: p.gdp_per_capita - investment,
                }
            })
            .collect()
    }

    /// Classify countries around both medians. `None` when no country has both values.
    pub fn quadrants(&self, indicator: &str) -> Option<QuadrantChart> {
        let points = self.against_gdp(indicator);
        let gdp_median = median(points.iter().map(|p| p.gdp_per_capita).collect())?;
        let value_median = median(points.iter().map(|p| p.value).collect())?;

        Some(QuadrantChart {
            indicator: indicator.to_string(),
            gdp_median,
            value_median,
            points: points
                .into_iter()
                .map(|p| QuadrantPoint {
                    quadrant: Quadrant::classify(p.gdp_per_capita, p.value, gdp_median, value_median),
                    country: p.country,
                    gdp_per_capita: p.gdp_per_capita,
                    value: p.value,
                })
                .collect(),
        })
    }
}

/// Middle value; the mean of the two middle values for an even count.
fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
