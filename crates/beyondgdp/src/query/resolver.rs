//! Question dispatch: parsed facts in, one [`QueryResult`] out.

use std::collections::BTreeMap;

use super::extractor::{Directive, ParsedQuery};
use super::result::{ChartPoint, ChartSpec, Clarification, ComparisonSeries, QueryResult};
use crate::config::ChartConfig;
use crate::dataset::{Dataset, Observation};

/// Resolves free-text questions against a dataset.
///
/// Resolution is a pure function of the dataset and the question. The
/// resolver only borrows the dataset, so any number of them can share one.
pub struct QueryResolver<'a> {
    dataset: &'a Dataset,
    chart: ChartConfig,
}

impl<'a> QueryResolver<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            chart: ChartConfig::default(),
        }
    }

    pub fn with_chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }

    /// Answer a question.
    ///
    /// Checked in order: blank question, missing year, missing indicator,
    /// then named countries, then a minimum or maximum ranking.
    pub fn resolve(&self, question: &str) -> QueryResult {
        if question.trim().is_empty() {
            return QueryResult::ClarificationNeeded(Clarification::EmptyQuestion);
        }

        match ParsedQuery::parse(question, self.dataset) {
            Ok(parsed) => {
                tracing::debug!(
                    normalized = %parsed.normalized,
                    year = parsed.year,
                    indicator = %parsed.indicator,
                    countries = ?parsed.countries,
                    directive = ?parsed.directive,
                    "parsed question"
                );
                self.dispatch(&parsed)
            }
            Err(clarification) => {
                tracing::debug!(reason = clarification.code(), "question needs clarification");
                QueryResult::ClarificationNeeded(clarification)
            }
        }
    }

    /// Shape the result for already extracted facts.
    pub fn dispatch(&self, parsed: &ParsedQuery) -> QueryResult {
        if !parsed.countries.is_empty() {
            return self.by_country(parsed);
        }

        match parsed.directive {
            Some(directive) => self.ranked(parsed, directive),
            None => QueryResult::ClarificationNeeded(Clarification::Unresolved),
        }
    }

    fn by_country(&self, parsed: &ParsedQuery) -> QueryResult {
        let rows: Vec<&Observation> = self
            .dataset
            .at(&parsed.indicator, parsed.year)
            .filter(|o| parsed.countries.contains(&o.country))
            .collect();

        if rows.is_empty() {
            return QueryResult::ClarificationNeeded(Clarification::NoData);
        }

        if parsed.countries.len() == 1 {
            return match rows.as_slice() {
                [single] => QueryResult::SingleFact((*single).clone()),
                _ => QueryResult::Table(rows.into_iter().cloned().collect()),
            };
        }

        QueryResult::ComparisonSeries(self.comparison(&parsed.indicator, parsed.year, rows))
    }

    fn ranked(&self, parsed: &ParsedQuery, directive: Directive) -> QueryResult {
        let mut rows: Vec<&Observation> = self.dataset.at(&parsed.indicator, parsed.year).collect();

        // Stable sort: ties keep dataset order.
        match directive {
            Directive::Minimum => rows.sort_by(|a, b| a.value.total_cmp(&b.value)),
            Directive::Maximum => rows.sort_by(|a, b| b.value.total_cmp(&a.value)),
        }

        match rows.first() {
            Some(best) => QueryResult::SingleFact((*best).clone()),
            None => QueryResult::ClarificationNeeded(Clarification::NoData),
        }
    }

    fn comparison(&self, indicator: &str, year: i32, rows: Vec<&Observation>) -> ComparisonSeries {
        let mut by_country: BTreeMap<&str, &Observation> = BTreeMap::new();
        for row in rows {
            if by_country.insert(row.country.as_str(), row).is_some() {
                tracing::warn!(country = %row.country, year, "duplicate observation, keeping the last one");
            }
        }

        let table: Vec<Observation> = by_country.into_values().cloned().collect();

        let max = table.iter().map(|o| o.value).fold(f64::NEG_INFINITY, f64::max);
        let size_max = self.chart.size_max;

        let points = table
            .iter()
            .map(|o| ChartPoint {
                country: o.country.clone(),
                value: o.value,
                size: if max > 0.0 {
                    (o.value / max * size_max).max(0.0)
                } else {
                    0.0
                },
            })
            .collect();

        ComparisonSeries {
            indicator: indicator.to_string(),
            year,
            table,
            chart: ChartSpec {
                title: format!("{} en {}", indicator, year),
                size_max,
                points,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names::{GDP_PER_CAPITA, GINI};

    fn gdp_dataset() -> Dataset {
        Dataset::new(vec![
            Observation::new("France", GDP_PER_CAPITA, 2010, 40000.0),
            Observation::new("Germany", GDP_PER_CAPITA, 2010, 42000.0),
        ])
    }

    #[test]
    fn test_blank_question() {
        let ds = gdp_dataset();
        assert_eq!(
            QueryResolver::new(&ds).resolve("   \n"),
            QueryResult::ClarificationNeeded(Clarification::EmptyQuestion)
        );
    }

    #[test]
    fn test_comparison_sizes_scale_to_largest_value() {
        let ds = gdp_dataset();
        let result = QueryResolver::new(&ds).resolve("PIB France et Germany en 2010");

        let QueryResult::ComparisonSeries(series) = result else {
            panic!("expected a comparison");
        };
        assert_eq!(series.chart.title, "GDP per capita (current US$) en 2010");
        assert_eq!(series.chart.points[1].country, "Germany");
        assert_eq!(series.chart.points[1].size, 40.0);
        assert!((series.chart.points[0].size - 40.0 * 40000.0 / 42000.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_size_max() {
        let ds = gdp_dataset();
        let resolver = QueryResolver::new(&ds).with_chart(ChartConfig { size_max: 10.0 });
        let QueryResult::ComparisonSeries(series) = resolver.resolve("gdp france germany 2010") else {
            panic!("expected a comparison");
        };
        assert_eq!(series.chart.size_max, 10.0);
        assert_eq!(series.chart.points[1].size, 10.0);
    }

    #[test]
    fn test_negative_values_get_degenerate_markers() {
        let ds = Dataset::new(vec![
            Observation::new("Japan", "Inflation, consumer prices (annual %)", 2010, -0.7),
            Observation::new("Chile", "Inflation, consumer prices (annual %)", 2010, 1.4),
        ]);
        let QueryResult::ComparisonSeries(series) =
            QueryResolver::new(&ds).resolve("inflation japon et chili en 2010")
        else {
            panic!("expected a comparison");
        };
        // Rows are ordered by country name.
        assert_eq!(series.table[0].country, "Chile");
        assert_eq!(series.chart.points[1].size, 0.0);
    }

    #[test]
    fn test_duplicate_rows_for_one_country_become_a_table() {
        let ds = Dataset::new(vec![
            Observation::new("France", GINI, 2010, 33.7),
            Observation::new("France", GINI, 2010, 33.9),
        ]);
        let result = QueryResolver::new(&ds).resolve("gini france 2010");
        assert!(matches!(result, QueryResult::Table(ref rows) if rows.len() == 2));
    }

    #[test]
    fn test_maximum_ties_keep_dataset_order() {
        let ds = Dataset::new(vec![
            Observation::new("Norway", GINI, 2020, 27.7),
            Observation::new("Brazil", GINI, 2020, 52.9),
            Observation::new("Colombia", GINI, 2020, 52.9),
        ]);
        let result = QueryResolver::new(&ds).resolve("Gini le plus élevé en 2020");
        assert_eq!(result, QueryResult::SingleFact(ds.observations()[1].clone()));
    }

    #[test]
    fn test_ranking_without_rows_is_no_data() {
        let ds = gdp_dataset();
        assert_eq!(
            QueryResolver::new(&ds).resolve("pib maximum en 1990"),
            QueryResult::ClarificationNeeded(Clarification::NoData)
        );
    }

    #[test]
    fn test_year_and_indicator_alone_is_unresolved() {
        let ds = gdp_dataset();
        assert_eq!(
            QueryResolver::new(&ds).resolve("pib en 2010"),
            QueryResult::ClarificationNeeded(Clarification::Unresolved)
        );
    }
}
