use std::path::Path;

use anyhow::Result;

use termfolio_core::AppConfig;

/// Write the default config so users have a file to edit.
pub fn run(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.map_or_else(AppConfig::config_path, Path::to_path_buf);

    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Pass --force to overwrite it.");
        return Ok(());
    }

    AppConfig::default().save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    println!("\nUseful keys to start with:");
    println!("  [motion] smooth_time_ms, reduced_motion");
    println!("  [ui.theme] name (see `termfolio themes`)");
    println!("  [general] content_path (your own portfolio TOML)");

    Ok(())
}
