//! Main Dashboard struct and public API.

use serde::Serialize;

use crate::analysis::{InternationalSnapshot, ThemeProfile};
use crate::catalog::{Indicator, Theme};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::input::{DatasetLoader, LoadReport, SourceMetadata};
use crate::query::{QueryResolver, QueryResult};

/// Row count of one catalog indicator in the loaded data.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorRows {
    #[serde(flatten)]
    pub indicator: Indicator,
    pub rows: usize,
}

/// A theme with the row count of each of its indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeCoverage {
    pub theme: Theme,
    pub label: &'static str,
    pub indicators: Vec<IndicatorRows>,
}

/// A loaded dataset and the settings used to query it.
pub struct Dashboard {
    config: Config,
    dataset: Dataset,
    source: Option<SourceMetadata>,
    report: LoadReport,
}

impl Dashboard {
    /// Load the file named by `config.dataset.path`.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        let loader = DatasetLoader::from_config(&config.dataset);
        let (dataset, source, report) = loader.load(&config.dataset.path)?;

        Ok(Self {
            config,
            dataset,
            source: Some(source),
            report,
        })
    }

    /// Wrap an already built dataset.
    pub fn from_dataset(dataset: Dataset, config: Config) -> Self {
        let report = LoadReport {
            rows_read: dataset.len(),
            rows_dropped: 0,
        };
        Self {
            config,
            dataset,
            source: None,
            report,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// File metadata, when the dataset came from disk.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    pub fn resolver(&self) -> QueryResolver<'_> {
        QueryResolver::new(&self.dataset).with_chart(self.config.chart.clone())
    }

    /// Answer a free-text question.
    pub fn ask(&self, question: &str) -> QueryResult {
        self.resolver().resolve(question)
    }

    /// Coverage, correlations and normalized series for one country.
    pub fn profile(&self, country: &str, theme: Theme) -> ThemeProfile {
        ThemeProfile::build(&self.dataset, country, theme)
    }

    /// Theme indicators for several countries at one year, the latest by default.
    pub fn snapshot(
        &self,
        theme: Theme,
        countries: &[&str],
        year: Option<i32>,
    ) -> Option<InternationalSnapshot> {
        InternationalSnapshot::build(&self.dataset, theme, countries, year)
    }

    /// Every theme with the row counts of its indicators.
    pub fn theme_coverage(&self) -> Vec<ThemeCoverage> {
        Theme::all()
            .iter()
            .map(|theme| ThemeCoverage {
                theme: *theme,
                label: theme.label(),
                indicators: theme
                    .indicators()
                    .iter()
                    .map(|indicator| IndicatorRows {
                        indicator: *indicator,
                        rows: self.dataset.count_indicator(indicator.name),
                    })
                    .collect(),
            })
            .collect()
    }
}
