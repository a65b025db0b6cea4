//! Application configuration — TOML-based, platform-aware paths.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::parse_color;

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str =
    "# ledbar configuration — changes made outside the tool may be overwritten.\n\n";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// I2C bus number the bar is attached to. Default: 6.
    #[serde(default = "default_i2c_bus")]
    pub i2c_bus: u8,

    /// 7-bit I2C address of the bar controller. Default: 0x10.
    #[serde(default = "default_i2c_address")]
    pub i2c_address: u8,

    /// Fill color used when a command passes no color (hex or name).
    /// Default: "#FFFFFF".
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Console visualizer sampling interval in milliseconds. Default: 250.
    #[serde(default = "default_debug_interval_ms")]
    pub debug_interval_ms: u64,
}

fn default_i2c_bus() -> u8 {
    6
}
fn default_i2c_address() -> u8 {
    0x10
}
fn default_color() -> String {
    "#FFFFFF".into()
}
fn default_debug_interval_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Config {
            i2c_bus: default_i2c_bus(),
            i2c_address: default_i2c_address(),
            default_color: default_color(),
            debug_interval_ms: default_debug_interval_ms(),
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ledbar"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Load config from the default platform path, returning the config
    /// and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => (
                Config::default(),
                vec!["no config directory on this platform; using defaults".into()],
            ),
        }
    }

    /// Load config from an arbitrary path.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return (Config::default(), Vec::new()),
        };
        match toml::from_str(&contents) {
            Ok(config) => (config, Vec::new()),
            Err(e) => (
                Config::default(),
                vec![format!(
                    "could not parse {}: {e}; using defaults",
                    path.display()
                )],
            ),
        }
    }

    /// Save config to an arbitrary path atomically (write to temp file,
    /// then rename).
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        let contents = format!("{CONFIG_HEADER}{serialized}");
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &contents)?;
        match std::fs::rename(&tmp, path) {
            Ok(()) => Ok(()),
            Err(_) => {
                // Rename can fail across filesystems; fall back to direct write + cleanup
                let result = std::fs::write(path, &contents);
                let _ = std::fs::remove_file(&tmp);
                result
            }
        }
    }

    /// Save config to the default platform path.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory",
            ));
        };
        self.save_to(&path)
    }

    /// Validate field contents; returns one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Err(e) = parse_color(&self.default_color) {
            problems.push(format!("default_color: {e}"));
        }
        if self.i2c_address > 0x7F {
            problems.push(format!(
                "i2c_address {:#04x} is not a 7-bit address",
                self.i2c_address
            ));
        }
        if self.debug_interval_ms == 0 {
            problems.push("debug_interval_ms must be at least 1".into());
        }
        problems
    }
}
