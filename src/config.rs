//! Configuration management with layered loading
//!
//! Settings hold the inputs used by `primer demo` and the defaults of the
//! other commands.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/primer/primer.toml`
//! 3. Explicit config file (`--config <FILE>`)
//! 4. Environment variables: `PRIMER_*` prefix, `__` for nested keys,
//!    `,` between list items (e.g. `PRIMER_SAMPLE_DATA=1.5,2,3`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};

const ENV_PREFIX: &str = "PRIMER";
const LIST_KEYS: [&str; 3] = ["sample_data", "reverse_data", "palindromes"];

/// Circle used by the demonstration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CircleSettings {
    pub radius: f64,
    pub color: String,
    pub filled: bool,
}

impl Default for CircleSettings {
    fn default() -> Self {
        Self {
            radius: 5.0,
            color: "red".into(),
            filled: true,
        }
    }
}

/// Rectangle used by the demonstration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RectangleSettings {
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub filled: bool,
}

impl Default for RectangleSettings {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 6.0,
            color: "blue".into(),
            filled: false,
        }
    }
}

/// Unified configuration for primer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Input of the integer square root demo
    pub isqrt_input: i64,
    /// Series terms for the pi approximation (also the default of `primer pi`)
    pub pi_iterations: i64,
    /// Input of the factorial demo
    pub factorial_input: u32,
    /// Values for the statistics demo
    pub sample_data: Vec<f64>,
    /// Values for the in-place reversal demo
    pub reverse_data: Vec<i32>,
    /// Candidates for the palindrome demo
    pub palindromes: Vec<String>,
    /// Text for the vowel count demo
    pub vowel_text: String,
    pub circle: CircleSettings,
    pub rectangle: RectangleSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            isqrt_input: 50,
            pi_iterations: 1_000_000,
            factorial_input: 10,
            sample_data: vec![12.5, 15.3, 18.7, 22.1, 14.9, 16.8, 20.3],
            reverse_data: vec![1, 2, 3, 4, 5],
            palindromes: vec![
                "racecar".into(),
                "hello".into(),
                "A man, a plan, a canal: Panama".into(),
            ],
            vowel_text: "Hello World Programming".into(),
            circle: CircleSettings::default(),
            rectangle: RectangleSettings::default(),
        }
    }
}

/// Get the XDG config directory for primer.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "primer").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("primer.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        Self::load_layers(global_config_path().as_deref(), config_file)
    }

    /// Load settings from explicit layers.
    ///
    /// A missing `global` file is skipped; a missing `local` file is an error.
    /// `PRIMER_*` environment variables are applied last.
    pub fn load_layers(global: Option<&Path>, local: Option<&Path>) -> ApplicationResult<Self> {
        let defaults = Self::default().to_toml()?;
        let mut builder =
            Config::builder().add_source(File::from_str(&defaults, FileFormat::Toml));

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("load_layers: global={}", global_path.display());
                builder = builder.add_source(
                    File::from(global_path)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        if let Some(local_path) = local {
            if !local_path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            debug!("load_layers: local={}", local_path.display());
            builder = builder.add_source(File::from(local_path).format(FileFormat::Toml));
        }

        builder = builder.add_source(Self::env_source());
        for key in LIST_KEYS {
            if let Some(items) = Self::env_list(key) {
                debug!("load_layers: {}={:?} from environment", key, items);
                builder = builder.set_override(key, items).map_err(config_err)?;
            }
        }

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Scalars stay strings until deserialization, so `PRIMER_VOWEL_TEXT=True`
    /// is kept verbatim; numeric and boolean fields convert from the string.
    fn env_source() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    /// `PRIMER_<KEY>` split on `,`. A single item still yields a list.
    fn env_list(key: &str) -> Option<Vec<String>> {
        let raw = std::env::var(format!("{}_{}", ENV_PREFIX, key.to_uppercase())).ok()?;
        Some(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Render the settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("render settings: {}", e),
        })
    }
}
