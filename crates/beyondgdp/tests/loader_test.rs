//! Loading indicator files from disk.

use std::io::Write;
use tempfile::NamedTempFile;

use beyondgdp::{BeyondGdpError, Config, Dashboard, DatasetLoader, QueryResult};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const DASHBOARD_CSV: &str = "Country Name,Country Code,Indicator Name,Indicator Code,Year,Value\n\
    France,FRA,GDP per capita (current US$),NY.GDP.PCAP.CD,2010,40638.33\n\
    Germany,DEU,GDP per capita (current US$),NY.GDP.PCAP.CD,2010,41572.46\n\
    France,FRA,Gini index,SI.POV.GINI,2010,33.7\n\
    Germany,DEU,Gini index,SI.POV.GINI,2010,\n\
    France,FRA,\"Inflation, consumer prices (annual %)\",FP.CPI.TOTL.ZG,2010,1.53\n";

#[test]
fn test_load_dashboard_export() {
    let file = create_test_file(DASHBOARD_CSV, ".csv");
    let (dataset, source, report) = DatasetLoader::new().load(file.path()).expect("Load failed");

    assert_eq!(source.format, "csv");
    assert_eq!(source.row_count, 5);
    assert_eq!(source.column_count, 6);
    assert!(source.hash.starts_with("sha256:"));

    assert_eq!(report.rows_read, 5);
    assert_eq!(report.rows_dropped, 1);
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.countries(), ["France", "Germany"]);
    assert_eq!(
        dataset.indicators()[2],
        "Inflation, consumer prices (annual %)"
    );
}

#[test]
fn test_load_tsv_auto_detect() {
    let content = "Country Name\tIndicator Name\tYear\tValue\n\
                   Chile\tGini index\t2020\t44.9\n\
                   Peru\tGini index\t2020\t43.8\n";
    let file = create_test_file(content, ".tsv");
    let (dataset, source, _) = DatasetLoader::new().load(file.path()).expect("Load failed");

    assert_eq!(source.format, "tsv");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.year_range(), Some((2020, 2020)));
}

#[test]
fn test_same_content_same_hash() {
    let a = create_test_file(DASHBOARD_CSV, ".csv");
    let b = create_test_file(DASHBOARD_CSV, ".csv");
    let loader = DatasetLoader::new();

    let (_, source_a, _) = loader.load(a.path()).unwrap();
    let (_, source_b, _) = loader.load(b.path()).unwrap();
    assert_eq!(source_a.hash, source_b.hash);
}

#[test]
fn test_header_only_file_is_empty_data() {
    let file = create_test_file("Country Name,Indicator Name,Year,Value\n", ".csv");
    let err = DatasetLoader::new().load(file.path()).unwrap_err();
    assert!(matches!(err, BeyondGdpError::EmptyData(_)));
}

#[test]
fn test_unparseable_value_is_an_error() {
    let content = "Country Name,Indicator Name,Year,Value\n\
                   France,Gini index,2010,33.7\n\
                   France,Gini index,2011,high\n";
    let file = create_test_file(content, ".csv");
    let err = DatasetLoader::new().load(file.path()).unwrap_err();
    assert!(matches!(err, BeyondGdpError::Parse { row: 2, column: 3, .. }));
}

#[test]
fn test_dashboard_from_config_file() {
    let data = create_test_file(
        "pays;indicateur;annee;valeur\nFrance;Gini index;2010;33,7\n",
        ".csv",
    );
    let config_text = format!(
        "[dataset]\npath = {:?}\ndelimiter = \";\"\n\n[dataset.columns]\ncountry = \"pays\"\nindicator = \"indicateur\"\nyear = \"annee\"\nvalue = \"valeur\"\n",
        data.path()
    );
    let config_file = create_test_file(&config_text, ".toml");

    let config = Config::from_file(config_file.path()).expect("Config failed");
    // Decimal commas are not numbers.
    assert!(matches!(
        Dashboard::open(config),
        Err(BeyondGdpError::Parse { row: 1, column: 3, .. })
    ));
}

#[test]
fn test_dashboard_answers_from_file() {
    let file = create_test_file(DASHBOARD_CSV, ".csv");
    let mut config = Config::default();
    config.dataset.path = file.path().to_path_buf();

    let dashboard = Dashboard::open(config).expect("Open failed");
    let result = dashboard.ask("Quel est le PIB de la France en 2010 ?");
    assert!(matches!(result, QueryResult::SingleFact(ref o) if o.value == 40638.33));

    // The dropped Gini row leaves only France.
    let result = dashboard.ask("gini france allemagne 2010");
    let QueryResult::ComparisonSeries(series) = result else {
        panic!("expected a comparison");
    };
    assert_eq!(series.table.len(), 1);
}
