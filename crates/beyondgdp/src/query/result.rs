//! What a resolved question looks like to the presentation layer.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::dataset::Observation;

/// Why a question could not be answered, and what to ask the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clarification {
    /// The question was blank.
    EmptyQuestion,
    /// No `19xx`/`20xx` year was found.
    MissingYear,
    /// No indicator alias or indicator word matched.
    MissingIndicator,
    /// The filter matched no rows.
    NoData,
    /// A year and an indicator, but neither a country nor a ranking.
    Unresolved,
}

impl Clarification {
    /// Stable machine-readable name.
    pub fn code(&self) -> &'static str {
        match self {
            Clarification::EmptyQuestion => "empty_question",
            Clarification::MissingYear => "missing_year",
            Clarification::MissingIndicator => "missing_indicator",
            Clarification::NoData => "no_data",
            Clarification::Unresolved => "unresolved",
        }
    }

    /// Prompt shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Clarification::EmptyQuestion => "Veuillez entrer une question.",
            Clarification::MissingYear => "Veuillez préciser une année (ex : 2010).",
            Clarification::MissingIndicator => "Quel indicateur souhaitez-vous analyser ?",
            Clarification::NoData => "Aucune donnée trouvée.",
            Clarification::Unresolved => {
                "Je comprends la question, mais j’ai besoin d’un pays, d’une année ou d’un indicateur."
            }
        }
    }
}

impl std::fmt::Display for Clarification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Clarification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Clarification", 2)?;
        state.serialize_field("reason", self.code())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

/// One marker of a comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub country: String,
    pub value: f64,
    /// Marker size, proportional to `value`; zero for zero or negative values.
    pub size: f64,
}

/// A one-year, one-indicator scatter of several countries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    /// Size given to the largest value.
    pub size_max: f64,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    /// A chart needs at least two points to say anything.
    pub fn is_plottable(&self) -> bool {
        self.points.len() > 1
    }
}

/// Several countries compared on one indicator in one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSeries {
    pub indicator: String,
    pub year: i32,
    /// One row per country, ordered by country name.
    pub table: Vec<Observation>,
    pub chart: ChartSpec,
}

/// The outcome of resolving a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum QueryResult {
    ClarificationNeeded(Clarification),
    SingleFact(Observation),
    Table(Vec<Observation>),
    ComparisonSeries(ComparisonSeries),
}

impl QueryResult {
    pub fn is_clarification(&self) -> bool {
        matches!(self, QueryResult::ClarificationNeeded(_))
    }

    /// Observations to show as a table, if any.
    pub fn rows(&self) -> &[Observation] {
        match self {
            QueryResult::ClarificationNeeded(_) => &[],
            QueryResult::SingleFact(obs) => std::slice::from_ref(obs),
            QueryResult::Table(rows) => rows,
            QueryResult::ComparisonSeries(series) => &series.table,
        }
    }

    /// The sentence printed above the result.
    pub fn headline(&self) -> String {
        match self {
            QueryResult::ClarificationNeeded(c) => c.message().to_string(),
            QueryResult::SingleFact(obs) => format!(
                "En {}, la valeur de {} pour {} est {}.",
                obs.year,
                obs.indicator,
                obs.country,
                format_value(obs.value)
            ),
            QueryResult::Table(_) => "Voici les données correspondant à votre requête :".to_string(),
            QueryResult::ComparisonSeries(_) => "Voici la comparaison demandée :".to_string(),
        }
    }
}

/// Two decimals with comma thousands separators: `40000.0` → `40,000.00`.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
