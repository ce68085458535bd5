use anyhow::{Result, bail};
use gdpr_config::Config;
use std::path::Path;

use crate::cli::ConfigCommands;

pub fn handle(cmd: ConfigCommands, path: &Path) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(path),
        ConfigCommands::Init { force } => init(path, force),
    }
}

fn show(path: &Path) -> Result<()> {
    let config = if path.exists() {
        Config::load_from(path)?
    } else {
        Config::default()
    };

    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("Config already exists: {} (use --force to overwrite)", path.display());
    }

    Config::default().save(path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
