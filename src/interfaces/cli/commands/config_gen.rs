//! Generate config command

use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

/// Print a sample configuration, or write it to `output_path`.
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let sample = StaticConfig::sample_toml()?;

    let Some(path) = output_path else {
        print!("{}", sample);
        return Ok(());
    };

    if !force && Path::new(&path).exists() {
        return Err(CliError::CommandError(format!(
            "{} already exists (use --force to overwrite)",
            path
        )));
    }

    if let Some(parent) = Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::CommandError(format!("Unable to create {}: {}", parent.display(), e))
            })?;
        }
    }

    fs::write(&path, sample).map_err(|e| {
        CliError::CommandError(format!("Unable to write configuration file: {}", e))
    })?;

    println!(
        "{} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    );
    Ok(())
}
