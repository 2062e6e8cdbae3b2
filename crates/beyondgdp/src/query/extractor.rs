//! Entity extraction from a normalized question.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::aliases::INDICATOR_ALIASES;
use super::normalizer::normalize_question;
use super::result::Clarification;
use crate::dataset::Dataset;

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(19|20)\d{2}").unwrap());
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$").unwrap());

const MINIMUM_PHRASES: &[&str] = &["plus faible", "plus bas", "minimum", "lowest"];
const MAXIMUM_PHRASES: &[&str] = &["plus élevé", "maximum", "plus haut", "highest"];

/// Ranking intent, used only when no country was named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directive {
    Minimum,
    Maximum,
}

impl Directive {
    /// Minimum phrases are checked before maximum phrases.
    pub fn detect(text: &str) -> Option<Directive> {
        if MINIMUM_PHRASES.iter().any(|p| text.contains(p)) {
            Some(Directive::Minimum)
        } else if MAXIMUM_PHRASES.iter().any(|p| text.contains(p)) {
            Some(Directive::Maximum)
        } else {
            None
        }
    }
}

/// Facts extracted from one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuery {
    /// Lowercased question after country alias rewriting.
    pub normalized: String,
    /// Matched countries, in dataset listing order.
    pub countries: Vec<String>,
    pub year: i32,
    /// The indicator the query is answered with.
    pub indicator: String,
    /// Every distinct indicator that matched, `indicator` first.
    pub indicator_matches: Vec<String>,
    pub directive: Option<Directive>,
}

impl ParsedQuery {
    /// Extract countries, year, indicator and directive from `question`.
    ///
    /// A missing year is reported before a missing indicator.
    pub fn parse(question: &str, dataset: &Dataset) -> Result<ParsedQuery, Clarification> {
        let normalized = normalize_question(question);
        let countries = extract_countries(&normalized, dataset);

        let year = extract_year(&normalized).ok_or(Clarification::MissingYear)?;

        let indicator_matches = extract_indicators(&normalized, dataset);
        let indicator = indicator_matches
            .first()
            .cloned()
            .ok_or(Clarification::MissingIndicator)?;

        let directive = Directive::detect(&normalized);

        Ok(ParsedQuery {
            normalized,
            countries,
            year,
            indicator,
            indicator_matches,
            directive,
        })
    }
}

/// First `19xx` or `20xx` run of digits, anywhere in the text.
pub fn extract_year(text: &str) -> Option<i32> {
    let digits = YEAR_PATTERN.find(text)?;
    digits
        .as_str()
        .chars()
        .try_fold(0i32, |year, c| Some(year * 10 + digit_value(c)? as i32))
}

/// Value of any Unicode decimal digit.
///
/// Decimal digits come in contiguous runs starting at zero, so the value is
/// the distance to the start of the run, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut zero = c as u32;
    while let Some(prev) = zero.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        zero -= 1;
    }
    Some((c as u32 - zero) % 10)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Every dataset country whose lowercase name occurs in the text.
pub fn extract_countries(text: &str, dataset: &Dataset) -> Vec<String> {
    dataset
        .countries()
        .iter()
        .filter(|c| text.contains(c.to_lowercase().as_str()))
        .cloned()
        .collect()
}

/// Indicators named by the text, deduplicated in first-match order.
///
/// The alias table is tried first. Only when it yields nothing are the
/// dataset's own indicator names scanned, matching any of their
/// whitespace-separated words as a plain substring.
pub fn extract_indicators(text: &str, dataset: &Dataset) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for (alias, name) in INDICATOR_ALIASES {
        if text.contains(alias) {
            push_unique(&mut found, name);
        }
    }

    if found.is_empty() {
        for name in dataset.indicators() {
            let lower = name.to_lowercase();
            if lower.split_whitespace().any(|word| text.contains(word)) {
                push_unique(&mut found, name);
            }
        }
    }

    found
}

fn push_unique(found: &mut Vec<String>, name: &str) {
    if !found.iter().any(|f| f == name) {
        found.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names::{GDP_PER_CAPITA, GINI, LIFE_EXPECTANCY};
    use crate::dataset::Observation;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Observation::new("Germany", GDP_PER_CAPITA, 2010, 42000.0),
            Observation::new("France", GDP_PER_CAPITA, 2010, 40000.0),
            Observation::new("France", "Forest area (sq. km)", 2010, 170000.0),
        ])
    }

    #[test]
    fn test_extract_year_takes_first_match() {
        assert_eq!(extract_year("entre 1990 et 2010"), Some(1990));
        assert_eq!(extract_year("en l'an 2099"), Some(2099));
        assert_eq!(extract_year("en 1850 ou 2100"), None);
        assert_eq!(extract_year("no digits"), None);
    }

    #[test]
    fn test_extract_year_ignores_word_boundaries() {
        assert_eq!(extract_year("ref 120105"), Some(2010));
    }

    #[test]
    fn test_extract_year_reads_unicode_digits() {
        assert_eq!(extract_year("pib france 20٢٠"), Some(2020));
        assert_eq!(extract_year("gini 19९९"), Some(1999));
        assert_eq!(extract_year("pib 20２３"), Some(2023));
        // The century prefix must be ASCII.
        assert_eq!(extract_year("pib ٢٠٢٠"), None);
        assert_eq!(digit_value('٧'), Some(7));
        assert_eq!(digit_value('x'), None);
    }

    #[test]
    fn test_countries_follow_dataset_order() {
        let ds = dataset();
        assert_eq!(
            extract_countries("france puis germany", &ds),
            vec!["Germany", "France"]
        );
    }

    #[test]
    fn test_alias_hits_are_deduplicated() {
        let ds = dataset();
        // "pib", "pib par habitant" and "gdp" all point at the same series.
        let found = extract_indicators("pib par habitant (gdp)", &ds);
        assert_eq!(found, vec![GDP_PER_CAPITA]);
    }

    #[test]
    fn test_alias_order_decides_the_first_indicator() {
        let ds = dataset();
        let found = extract_indicators("gini et espérance de vie", &ds);
        assert_eq!(found, vec![LIFE_EXPECTANCY, GINI]);
    }

    #[test]
    fn test_falls_back_to_dataset_indicator_words() {
        let ds = dataset();
        let found = extract_indicators("surface forest en 2010", &ds);
        assert_eq!(found, vec!["Forest area (sq. km)"]);
    }

    #[test]
    fn test_fallback_skipped_when_an_alias_matched() {
        let ds = dataset();
        let found = extract_indicators("pib et forest", &ds);
        assert_eq!(found, vec![GDP_PER_CAPITA]);
    }

    #[test]
    fn test_directive_detection() {
        assert_eq!(Directive::detect("le plus faible"), Some(Directive::Minimum));
        assert_eq!(Directive::detect("les plus élevées"), Some(Directive::Maximum));
        assert_eq!(Directive::detect("highest gdp"), Some(Directive::Maximum));
        assert_eq!(Directive::detect("minimum et maximum"), Some(Directive::Minimum));
        assert_eq!(Directive::detect("en france"), None);
    }

    #[test]
    fn test_parse_requires_year_before_indicator() {
        let ds = dataset();
        assert_eq!(
            ParsedQuery::parse("bonjour", &ds).unwrap_err(),
            Clarification::MissingYear
        );
        assert_eq!(
            ParsedQuery::parse("bonjour 2010", &ds).unwrap_err(),
            Clarification::MissingIndicator
        );
    }

    #[test]
    fn test_parse_collects_everything() {
        let ds = dataset();
        let parsed = ParsedQuery::parse("PIB de l'Allemagne en 2010", &ds).unwrap();
        assert_eq!(parsed.countries, vec!["Germany"]);
        assert_eq!(parsed.year, 2010);
        assert_eq!(parsed.indicator, GDP_PER_CAPITA);
        assert_eq!(parsed.directive, None);
    }
}
