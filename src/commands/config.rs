use std::path::Path;

use anyhow::Result;
use apptcal_core::config::SchedulerConfig;
use owo_colors::OwoColorize;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        anyhow::bail!("Config file already exists at {}", config_path.display());
    }

    SchedulerConfig::create_default_config(config_path)?;
    println!("{}", format!("Created {}", config_path.display()).green());
    Ok(())
}
