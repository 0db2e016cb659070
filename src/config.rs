use crate::registry::{SelectorRegistry, SiteSelector};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct VinoConfig {
    /// Extra site selectors, consulted before the built-in ones
    #[serde(default)]
    pub sites: Vec<SiteSelector>,
    /// Wine pairing configuration
    #[serde(default)]
    pub pairing: PairingConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for VinoConfig {
    fn default() -> Self {
        Self {
            sites: Vec::new(),
            pairing: PairingConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the pairing providers
#[derive(Debug, Deserialize, Clone)]
pub struct PairingConfig {
    /// Remote pairing endpoint; only the local table is used when unset
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Whether to fall back to the local table when the remote endpoint fails
    #[serde(default = "default_local_fallback")]
    pub local_fallback: bool,
    /// Number of attempts per provider before moving on
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Delay between attempts in milliseconds, multiplied by the attempt number
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            local_fallback: default_local_fallback(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_local_fallback() -> bool {
    true
}

fn default_retry_attempts() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

impl VinoConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_VINO__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_VINO__PAIRING__ENDPOINT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Site registry with configured sites ahead of the built-in ones
    pub fn registry(&self) -> SelectorRegistry {
        SelectorRegistry::with_overrides(&self.sites)
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<VinoConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_VINO__PAIRING__ENDPOINT
        .add_source(
            Environment::with_prefix("RECIPE_VINO")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Parse configuration from a TOML string
pub fn from_toml(toml: &str) -> Result<VinoConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize()
}
