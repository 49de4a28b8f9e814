//! Layered configuration for the CLI.
//!
//! Configuration resolves from, in order of increasing precedence:
//! - Bundled defaults (`arpeggio_default.toml` shipped with the crate)
//! - User config in the home directory (`~/.config/arpeggio/arpeggio.toml`)
//! - User config in the current directory (`./arpeggio.toml`)
//! - `ARPEGGIO`-prefixed environment variables (`__` as the level separator)
//!
//! The Anthropic API key is deliberately not part of this configuration; it
//! comes from the `ANTHROPIC_API_KEY` environment variable only.

use arpeggio_error::{ArpeggioResult, ConfigError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Generation backend settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Model identifier passed to the backend
    pub model: String,

    /// Token limit applied when a request does not specify one
    pub max_tokens: u32,

    /// Sampling temperature applied when a request does not specify one
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-5-sonnet-20240620".to_string(),
            max_tokens: 4096,
            temperature: 0.0,
        }
    }
}

/// Prompt template settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Directory holding TOML template files
    pub template_dir: PathBuf,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
        }
    }
}

/// Top-level Arpeggio configuration.
///
/// # Example
///
/// ```toml
/// [generation]
/// model = "claude-3-5-sonnet-20240620"
/// max_tokens = 4096
/// temperature = 0.0
///
/// [prompts]
/// template_dir = "templates"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ArpeggioConfig {
    /// Generation backend settings
    pub generation: GenerationConfig,

    /// Prompt template settings
    pub prompts: PromptConfig,
}

impl ArpeggioConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ArpeggioResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Load configuration with precedence: environment > current dir > home
    /// dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when absent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use arpeggio::ArpeggioConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ArpeggioConfig::load()?;
    /// println!("model: {}", config.generation.model);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> ArpeggioResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../arpeggio_default.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/arpeggio/arpeggio.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional)
        builder = builder.add_source(File::with_name("arpeggio").required(false));

        // Environment variables take highest precedence
        builder = builder.add_source(
            Environment::with_prefix("ARPEGGIO")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}
