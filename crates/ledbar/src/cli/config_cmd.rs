//! `config` subcommand — show configuration and file paths.

use super::{Config, ConfigOutput, Result};

pub(super) fn cmd_config(json: bool) -> Result<()> {
    let path = Config::path();
    let exists = path.as_ref().is_some_and(|p| p.exists());
    let (config, warnings) = Config::load_with_warnings();
    for w in &warnings {
        log::warn!("{w}");
    }
    let problems = config.validate();

    if json {
        let output = ConfigOutput {
            config_file: path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: exists,
            settings: config,
            problems,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return Ok(());
    }

    match &path {
        Some(p) => println!(
            "{:<19}{}{}",
            "Config file",
            p.display(),
            if exists { "" } else { " (not created yet)" }
        ),
        None => println!("{:<19}<no config directory on this platform>", "Config file"),
    }
    println!("{:<19}{}", "I2C bus", config.i2c_bus);
    println!("{:<19}{:#04x}", "I2C address", config.i2c_address);
    println!("{:<19}{}", "Default color", config.default_color);
    println!("{:<19}{} ms", "Debug interval", config.debug_interval_ms);
    for p in &problems {
        println!("{:<19}{p}", "Problem");
    }
    Ok(())
}
