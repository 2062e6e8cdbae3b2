//! CLI command implementations.

pub mod ask;
pub mod compare;
pub mod indicators;
pub mod profile;

use std::path::Path;

use beyondgdp::{Config, Dashboard};

/// Resolve the configuration and load the dataset every command works on.
pub fn open_dashboard(
    config_path: Option<&Path>,
    data_path: Option<&Path>,
) -> Result<Dashboard, Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    if let Some(path) = data_path {
        config.dataset.path = path.to_path_buf();
    }

    if !config.dataset.path.exists() {
        return Err(format!(
            "Data file not found: {}\nPass --data or set dataset.path in beyondgdp.toml.",
            config.dataset.path.display()
        )
        .into());
    }

    Ok(Dashboard::open(config)?)
}
