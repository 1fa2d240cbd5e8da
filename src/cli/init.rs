use anyhow::Result;
use std::path::PathBuf;

use crate::Config;

pub fn run(path: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&path)?;
    let target = path.join("formfix.toml");
    if target.exists() {
        anyhow::bail!("'{}' already exists", target.display());
    }

    let config = toml::to_string_pretty(&Config::default())?;
    std::fs::write(&target, config)?;

    tracing::info!("Wrote default config to {:?}", target);
    tracing::info!("Run 'formfix apply --page page.json' to try it out");

    Ok(())
}
