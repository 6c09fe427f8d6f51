use super::config::ReputeConfig;
use std::path::Path;

/// Write a default configuration file
pub fn execute(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!(
            "Config file '{}' already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }

    ReputeConfig::create_default(path)?;
    println!("📝 Created: {}", path.display());
    Ok(())
}
