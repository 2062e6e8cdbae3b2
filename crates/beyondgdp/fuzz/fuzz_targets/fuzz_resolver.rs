//! Fuzz target for question resolution.
//!
//! Any byte string, read as text, must resolve to some result without
//! panicking, and resolving it twice must give the same result.

#![no_main]

use beyondgdp::catalog::names::{GDP_PER_CAPITA, GINI};
use beyondgdp::{Dataset, Observation, QueryResolver};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn dataset() -> &'static Dataset {
    static DATASET: OnceLock<Dataset> = OnceLock::new();
    DATASET.get_or_init(|| {
        Dataset::new(vec![
            Observation::new("France", GDP_PER_CAPITA, 2010, 40000.0),
            Observation::new("Germany", GDP_PER_CAPITA, 2010, 42000.0),
            Observation::new("Mali", GDP_PER_CAPITA, 2010, -1.0),
            Observation::new("Sweden", GINI, 2020, 30.0),
            Observation::new("South Africa", GINI, 2020, 55.0),
        ])
    })
}

fuzz_target!(|data: &[u8]| {
    let question = String::from_utf8_lossy(data);
    let resolver = QueryResolver::new(dataset());

    let first = resolver.resolve(&question);
    let _ = first.headline();
    assert_eq!(first, resolver.resolve(&question));
});
