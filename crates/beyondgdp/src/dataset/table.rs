//! The observation set every page and query works from.

use indexmap::IndexSet;

use super::observation::Observation;

/// An ordered, read-only collection of observations.
///
/// Distinct countries and indicators are cached in first-appearance order
/// when the dataset is built. Query resolution relies on that order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    observations: Vec<Observation>,
    countries: Vec<String>,
    indicators: Vec<String>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        let mut countries = IndexSet::new();
        let mut indicators = IndexSet::new();
        for obs in &observations {
            if !countries.contains(obs.country.as_str()) {
                countries.insert(obs.country.clone());
            }
            if !indicators.contains(obs.indicator.as_str()) {
                indicators.insert(obs.indicator.clone());
            }
        }

        Self {
            observations,
            countries: countries.into_iter().collect(),
            indicators: indicators.into_iter().collect(),
        }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Distinct country names, in the order they first appear.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Distinct indicator names, in the order they first appear.
    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    /// Earliest and latest year present.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.observations.iter().map(|o| o.year).min()?;
        let max = self.observations.iter().map(|o| o.year).max()?;
        Some((min, max))
    }

    /// A new dataset holding only rows for the given indicators.
    pub fn retain_indicators(&self, names: &[&str]) -> Dataset {
        Dataset::new(
            self.observations
                .iter()
                .filter(|o| names.contains(&o.indicator.as_str()))
                .cloned()
                .collect(),
        )
    }

    /// Rows for one country, in dataset order.
    pub fn for_country<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a Observation> {
        self.observations.iter().filter(move |o| o.country == country)
    }

    /// Rows for one indicator in one year, in dataset order.
    pub fn at<'a>(&'a self, indicator: &'a str, year: i32) -> impl Iterator<Item = &'a Observation> {
        self.observations
            .iter()
            .filter(move |o| o.year == year && o.indicator == indicator)
    }

    /// Number of rows carrying the given indicator.
    pub fn count_indicator(&self, indicator: &str) -> usize {
        self.observations
            .iter()
            .filter(|o| o.indicator == indicator)
            .count()
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}
