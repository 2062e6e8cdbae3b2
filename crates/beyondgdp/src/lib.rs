//! Beyond GDP: a development-indicator dashboard and its question resolver.
//!
//! The dataset is a long-format table of World Bank indicators, one
//! `(country, indicator, year, value)` observation per row. On top of it the
//! crate offers thematic analytics (normalized series, correlations) and a
//! keyword-driven resolver that turns French or English free text into a
//! filter and a typed answer.
//!
//! # Core Principles
//!
//! - **Deterministic**: the same dataset and question always give the same answer
//! - **Never fails on questions**: unanswerable input becomes a clarification
//! - **Read-only**: the dataset is loaded once and never modified
//!
//! # Example
//!
//! ```no_run
//! use beyondgdp::{Config, Dashboard, QueryResult};
//!
//! let dashboard = Dashboard::open(Config::load().unwrap()).unwrap();
//!
//! match dashboard.ask("Quel est le PIB de la France en 2010 ?") {
//!     QueryResult::SingleFact(obs) => println!("{}: {}", obs.country, obs.value),
//!     other => println!("{}", other.headline()),
//! }
//! ```

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod input;
pub mod query;

mod dashboard;

pub use analysis::{
    CorrelationMatrix, IndicatorCoverage, InternationalSnapshot, NormalizedObservation, ThemeProfile,
};
pub use catalog::{Indicator, Theme};
pub use config::{ChartConfig, ColumnMapping, Config, DatasetConfig};
pub use dashboard::{Dashboard, IndicatorRows, ThemeCoverage};
pub use dataset::{Dataset, Observation};
pub use error::{BeyondGdpError, Result};
pub use input::{DataTable, DatasetLoader, LoadReport, SourceMetadata};
pub use query::{ChartPoint, ChartSpec, Clarification, ComparisonSeries, QueryResolver, QueryResult};
