//! Init command implementation

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::info;

use quick_actions::config::Config;

/// Write a default config file (global path unless `config_path` is given)
pub fn init_command(
    out: &mut impl Write,
    config_path: Option<&Path>,
    store_path: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    let mut config = Config::default();
    config.store.path = store_path;
    config.save_to_file(&config_path)?;

    info!("Wrote default config to {}", config_path.display());
    writeln!(out, "Created: {}", config_path.display())?;
    Ok(())
}
