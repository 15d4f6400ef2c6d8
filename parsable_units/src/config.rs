//! Formatting options.
//!
//! The only option is literal-wrap mode, which writes unit text as a quoted unit
//! literal (`u"m/s"`) instead of a bare expression. It comes from the
//! `PARSABLE_UNITS_LITERAL` environment variable, read afresh on every formatting
//! call, or from a `parsable_units.toml` file:
//!
//! ```toml
//! [format]
//! literal_wrap = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable holding the literal-wrap flag.
pub const LITERAL_ENV_VAR: &str = "PARSABLE_UNITS_LITERAL";

/// Options fixed for the duration of one formatting call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub literal_wrap: bool,
}

impl FormatOptions {
    /// Options with literal-wrap mode on.
    pub const fn literal() -> Self {
        Self { literal_wrap: true }
    }

    /// Reads `PARSABLE_UNITS_LITERAL` from the environment.
    pub fn from_env() -> Self {
        let raw = std::env::var(LITERAL_ENV_VAR).ok();
        Self {
            literal_wrap: parse_flag(raw.as_deref()),
        }
    }
}

/// Parses a boolean flag: `true`/`false` in any case, surrounding whitespace ignored.
/// Anything else, including an unset variable, is `false`.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(|s| s.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Contents of a `parsable_units.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub format: FormatSettings,
}

/// The `[format]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatSettings {
    /// Overrides the environment variable when present.
    #[serde(default)]
    pub literal_wrap: Option<bool>,
}

impl FormatConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(FormatConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `parsable_units.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    pub fn from_default_location() -> ConfigResult<Self> {
        let search_paths = [
            PathBuf::from("parsable_units.toml"),
            PathBuf::from("../parsable_units.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Effective options: the file's setting if it has one, the environment otherwise.
    pub fn options(&self) -> FormatOptions {
        match self.format.literal_wrap {
            Some(literal_wrap) => FormatOptions { literal_wrap },
            None => FormatOptions::from_env(),
        }
    }
}
