use anyhow::{bail, Result};

use carousel_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    if !init {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let path = AppConfig::config_path();
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    AppConfig::default().save()?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
