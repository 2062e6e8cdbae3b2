//! End-to-end question resolution tests.

use beyondgdp::catalog::names::{GDP_PER_CAPITA, GINI, LIFE_EXPECTANCY};
use beyondgdp::query::{normalize_question, ParsedQuery};
use beyondgdp::{Clarification, Dataset, Observation, QueryResolver, QueryResult};

/// France and Germany GDP per capita in 2010.
fn gdp_2010() -> Dataset {
    Dataset::new(vec![
        Observation::new("France", GDP_PER_CAPITA, 2010, 40000.0),
        Observation::new("Germany", GDP_PER_CAPITA, 2010, 42000.0),
    ])
}

fn multi_indicator() -> Dataset {
    Dataset::new(vec![
        Observation::new("France", GDP_PER_CAPITA, 2010, 40000.0),
        Observation::new("Germany", GDP_PER_CAPITA, 2010, 42000.0),
        Observation::new("Spain", GDP_PER_CAPITA, 2010, 30000.0),
        Observation::new("France", GDP_PER_CAPITA, 2015, 36000.0),
        Observation::new("France", LIFE_EXPECTANCY, 2010, 81.7),
        Observation::new("Germany", LIFE_EXPECTANCY, 2010, 80.0),
        Observation::new("Sweden", GINI, 2020, 30.0),
        Observation::new("South Africa", GINI, 2020, 55.0),
    ])
}

fn clarification(result: &QueryResult) -> Option<Clarification> {
    match result {
        QueryResult::ClarificationNeeded(c) => Some(*c),
        _ => None,
    }
}

// =============================================================================
// Single facts and comparisons
// =============================================================================

#[test]
fn test_single_country_query() {
    let ds = gdp_2010();
    let result = QueryResolver::new(&ds).resolve("PIB par habitant en France en 2010");

    assert_eq!(
        result,
        QueryResult::SingleFact(Observation::new("France", GDP_PER_CAPITA, 2010, 40000.0))
    );
    assert_eq!(
        result.headline(),
        "En 2010, la valeur de GDP per capita (current US$) pour France est 40,000.00."
    );
}

#[test]
fn test_multi_country_query() {
    let ds = gdp_2010();
    let result = QueryResolver::new(&ds).resolve("Comparaison PIB entre France et Germany en 2010");

    let QueryResult::ComparisonSeries(series) = result else {
        panic!("expected a comparison");
    };
    assert_eq!(series.indicator, GDP_PER_CAPITA);
    assert_eq!(series.year, 2010);
    assert_eq!(series.table, ds.observations().to_vec());
    assert!(series.chart.is_plottable());
    assert_eq!(series.chart.points.len(), 2);
}

#[test]
fn test_french_country_names_resolve() {
    let ds = multi_indicator();
    let result = QueryResolver::new(&ds).resolve("Espérance de vie en Allemagne en 2010 ?");
    assert_eq!(
        result,
        QueryResult::SingleFact(Observation::new("Germany", LIFE_EXPECTANCY, 2010, 80.0))
    );
}

#[test]
fn test_year_selects_the_row() {
    let ds = multi_indicator();
    let result = QueryResolver::new(&ds).resolve("pib de la france en 2015");
    assert!(matches!(result, QueryResult::SingleFact(ref o) if o.value == 36000.0));
}

#[test]
fn test_year_in_arabic_indic_digits() {
    let ds = multi_indicator();
    let result = QueryResolver::new(&ds).resolve("pib france 20١٥");
    assert_eq!(
        result,
        QueryResult::SingleFact(Observation::new("France", GDP_PER_CAPITA, 2015, 36000.0))
    );
}

#[test]
fn test_comparison_skips_countries_without_rows() {
    let ds = multi_indicator();
    // Sweden has no GDP row: the comparison holds the other two.
    let result = QueryResolver::new(&ds).resolve("pib france, espagne et suède en 2010");

    let QueryResult::ComparisonSeries(series) = result else {
        panic!("expected a comparison");
    };
    let countries: Vec<&str> = series.table.iter().map(|o| o.country.as_str()).collect();
    assert_eq!(countries, vec!["France", "Spain"]);
}

#[test]
fn test_two_countries_with_one_row_is_not_plottable() {
    let ds = multi_indicator();
    let result = QueryResolver::new(&ds).resolve("pib france et suède en 2010");

    let QueryResult::ComparisonSeries(series) = result else {
        panic!("expected a comparison");
    };
    assert_eq!(series.table.len(), 1);
    assert!(!series.chart.is_plottable());
}

// =============================================================================
// Rankings
// =============================================================================

#[test]
fn test_minimum_directive() {
    let ds = multi_indicator();
    let result = QueryResolver::new(&ds).resolve("Quel pays a le Gini le plus faible en 2020 ?");
    assert_eq!(
        result,
        QueryResult::SingleFact(Observation::new("Sweden", GINI, 2020, 30.0))
    );
}

#[test]
fn test_maximum_directive() {
    let ds = multi_indicator();
    let result = QueryResolver::new(&ds).resolve("Gini le plus élevé en 2020");
    assert_eq!(
        result,
        QueryResult::SingleFact(Observation::new("South Africa", GINI, 2020, 55.0))
    );
}

#[test]
fn test_english_directive() {
    let ds = multi_indicator();
    let result = QueryResolver::new(&ds).resolve("highest gdp in 2010");
    assert!(matches!(result, QueryResult::SingleFact(ref o) if o.country == "Germany"));
}

#[test]
fn test_named_country_wins_over_directive() {
    let ds = multi_indicator();
    let result = QueryResolver::new(&ds).resolve("pib le plus faible de la france en 2010");
    assert!(matches!(result, QueryResult::SingleFact(ref o) if o.country == "France"));
}

// =============================================================================
// Clarifications
// =============================================================================

#[test]
fn test_missing_year() {
    let ds = gdp_2010();
    let result = QueryResolver::new(&ds).resolve("PIB de la France");
    assert_eq!(clarification(&result), Some(Clarification::MissingYear));
    assert_eq!(result.headline(), "Veuillez préciser une année (ex : 2010).");
}

#[test]
fn test_missing_indicator() {
    let ds = gdp_2010();
    let result = QueryResolver::new(&ds).resolve("France en 2010");
    assert_eq!(clarification(&result), Some(Clarification::MissingIndicator));
}

#[test]
fn test_empty_filter_is_no_data() {
    let ds = gdp_2010();
    let result = QueryResolver::new(&ds).resolve("PIB de la France en 1999");
    assert_eq!(clarification(&result), Some(Clarification::NoData));
    assert!(result.rows().is_empty());
}

#[test]
fn test_year_outside_range_is_missing() {
    let ds = gdp_2010();
    let result = QueryResolver::new(&ds).resolve("PIB de la France en 2150");
    assert_eq!(clarification(&result), Some(Clarification::MissingYear));
}

#[test]
fn test_resolution_is_idempotent() {
    let ds = multi_indicator();
    let resolver = QueryResolver::new(&ds);
    for question in [
        "pib france allemagne 2010",
        "Gini le plus faible en 2020",
        "pib en 2010",
        "",
    ] {
        assert_eq!(resolver.resolve(question), resolver.resolve(question), "{question}");
    }
}

// =============================================================================
// Alias substring hazards (current behavior, kept as is)
// =============================================================================

#[test]
fn test_shorter_alias_rewrites_inside_longer_one() {
    // "saoudite" is applied before "arabie saoudite", leaving "arabie" behind.
    assert_eq!(
        normalize_question("pib en arabie saoudite en 2015"),
        "pib en arabie saudi arabia en 2015"
    );

    let ds = Dataset::new(vec![Observation::new("Saudi Arabia", GDP_PER_CAPITA, 2015, 20600.0)]);
    let result = QueryResolver::new(&ds).resolve("pib en arabie saoudite en 2015");
    assert!(matches!(result, QueryResult::SingleFact(ref o) if o.country == "Saudi Arabia"));
}

#[test]
fn test_country_name_inside_another_word() {
    let ds = Dataset::new(vec![
        Observation::new("Mali", GDP_PER_CAPITA, 2015, 780.0),
        Observation::new("Somalia", GDP_PER_CAPITA, 2015, 420.0),
    ]);
    // "somalie" has no alias, but it contains "mali".
    let result = QueryResolver::new(&ds).resolve("pib somalie 2015");
    assert_eq!(
        result,
        QueryResult::SingleFact(Observation::new("Mali", GDP_PER_CAPITA, 2015, 780.0))
    );
}

#[test]
fn test_country_name_inside_another_name() {
    let ds = Dataset::new(vec![
        Observation::new("Niger", GDP_PER_CAPITA, 2015, 480.0),
        Observation::new("Nigeria", GDP_PER_CAPITA, 2015, 2680.0),
    ]);
    let parsed = ParsedQuery::parse("pib nigeria 2015", &ds).unwrap();
    assert_eq!(parsed.countries, vec!["Niger", "Nigeria"]);

    let result = QueryResolver::new(&ds).resolve("pib nigeria 2015");
    assert!(matches!(result, QueryResult::ComparisonSeries(_)));
}

#[test]
fn test_common_word_alias_matches_unrelated_question() {
    // "vie" is an alias for life expectancy, and it sits inside "vietnam".
    let ds = Dataset::new(vec![
        Observation::new("Viet Nam", LIFE_EXPECTANCY, 2010, 74.0),
        Observation::new("Viet Nam", GDP_PER_CAPITA, 2010, 1680.0),
    ]);
    let parsed = ParsedQuery::parse("population du vietnam en 2010", &ds).unwrap();
    assert_eq!(parsed.indicator, LIFE_EXPECTANCY);
}
