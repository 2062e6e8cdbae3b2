//! Fuzz target for dataset loading.
//!
//! Malformed files must come back as errors, never as panics.

#![no_main]

use beyondgdp::DatasetLoader;
use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let loader = DatasetLoader::new();

    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let _ = loader.load(temp_file.path());
        }
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = loader.load_str(text);
    }
});
