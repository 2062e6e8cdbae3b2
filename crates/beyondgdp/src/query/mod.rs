//! Keyword-driven question resolution.
//!
//! A question goes through three steps:
//!
//! 1. [`normalize_question`] lowercases it and rewrites French country names
//!    into canonical dataset names.
//! 2. [`ParsedQuery::parse`] extracts countries, the year, the indicator and
//!    an optional ranking directive.
//! 3. [`QueryResolver`] filters the dataset and shapes a [`QueryResult`].
//!
//! Matching is literal substring containment against fixed tables. There is
//! no tokenizer and no stemming.

pub mod aliases;
mod extractor;
mod normalizer;
mod resolver;
mod result;

pub use extractor::{extract_countries, extract_indicators, extract_year, Directive, ParsedQuery};
pub use normalizer::normalize_question;
pub use resolver::QueryResolver;
pub use result::{format_value, ChartPoint, ChartSpec, Clarification, ComparisonSeries, QueryResult};
