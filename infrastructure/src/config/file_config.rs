//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use concierge_application::PipelineConfig;
use concierge_domain::{BatchSize, RankingPolicy};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("pipeline.display_cap cannot be 0")]
    ZeroDisplayCap,

    #[error("pipeline.batch_size cannot be 0")]
    ZeroBatchSize,

    #[error("pipeline.description_concurrency cannot be 0")]
    ZeroConcurrency,

    #[error("{0} cannot be 0 seconds")]
    InvalidTimeout(&'static str),

    #[error("places.max_pages cannot be 0")]
    ZeroMaxPages,

    #[error("invalid server.bind address: {0}")]
    InvalidBindAddress(String),

    #[error("missing secret: {0}")]
    MissingSecret(&'static str),
}

/// Raw webhook server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address
    pub bind: String,
    /// Overrides the port of `bind` (hosting platforms set `PORT`)
    pub port: Option<u16>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
            port: None,
        }
    }
}

impl FileServerConfig {
    /// Resolve the listen address, applying the `port` override
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        let mut addr: SocketAddr = self
            .bind
            .parse()
            .map_err(|_| ConfigValidationError::InvalidBindAddress(self.bind.clone()))?;
        if let Some(port) = self.port {
            addr.set_port(port);
        }
        Ok(addr)
    }
}

/// Raw pipeline configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Search radius in meters
    pub radius_meters: u32,
    /// Search result language
    pub language: String,
    /// Spots shown per request
    pub display_cap: usize,
    /// Messages per delivery call
    pub batch_size: usize,
    /// `collaborator_order` or `popularity`
    pub ranking: RankingPolicy,
    /// Descriptions generated at the same time
    pub description_concurrency: usize,
    /// Per-description timeout; unset waits indefinitely
    pub description_timeout_seconds: Option<u64>,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        let defaults = PipelineConfig::default();
        Self {
            radius_meters: defaults.radius_meters,
            language: defaults.language,
            display_cap: defaults.display_cap,
            batch_size: defaults.batch_size.get(),
            ranking: defaults.ranking,
            description_concurrency: defaults.description_concurrency,
            description_timeout_seconds: defaults.description_timeout.map(|d| d.as_secs()),
        }
    }
}

impl FilePipelineConfig {
    /// Convert to the application's pipeline parameters
    pub fn to_pipeline_config(&self) -> Result<PipelineConfig, ConfigValidationError> {
        let batch_size =
            BatchSize::new(self.batch_size).map_err(|_| ConfigValidationError::ZeroBatchSize)?;
        if self.display_cap == 0 {
            return Err(ConfigValidationError::ZeroDisplayCap);
        }
        if self.description_concurrency == 0 {
            return Err(ConfigValidationError::ZeroConcurrency);
        }
        if let Some(0) = self.description_timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout(
                "pipeline.description_timeout_seconds",
            ));
        }

        Ok(PipelineConfig::default()
            .with_radius_meters(self.radius_meters)
            .with_language(self.language.clone())
            .with_display_cap(self.display_cap)
            .with_batch_size(batch_size)
            .with_ranking(self.ranking)
            .with_description_concurrency(self.description_concurrency)
            .with_description_timeout(self.description_timeout_seconds.map(Duration::from_secs)))
    }
}

/// Raw place search configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePlacesConfig {
    /// Google Maps Platform key (also read from `GOOGLE_API_KEY`)
    pub api_key: Option<String>,
    /// Nearby Search endpoint
    pub endpoint: String,
    /// Pages fetched per search (20 results each)
    pub max_pages: usize,
    /// Wait before requesting a follow-up page
    pub page_delay_ms: u64,
    /// HTTP timeout per page request
    pub timeout_seconds: u64,
}

impl Default for FilePlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://maps.googleapis.com/maps/api/place/nearbysearch/json".to_string(),
            max_pages: 3,
            page_delay_ms: 2000,
            timeout_seconds: 10,
        }
    }
}

/// Raw description generator configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// OpenAI key (also read from `OPENAI_API_KEY`)
    pub api_key: Option<String>,
    /// Chat Completions endpoint
    pub endpoint: String,
    /// Model name
    pub model: String,
    /// Upper bound on generated tokens
    pub max_tokens: Option<u32>,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: Some(200),
        }
    }
}

/// Raw LINE Messaging API configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLineConfig {
    /// Channel access token (also read from `LINE_CHANNEL_ACCESS_TOKEN`)
    pub channel_access_token: Option<String>,
    /// API base URL
    pub api_base: String,
    /// HTTP timeout per delivery call
    pub timeout_seconds: u64,
}

impl Default for FileLineConfig {
    fn default() -> Self {
        Self {
            channel_access_token: None,
            api_base: "https://api.line.me".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Webhook server settings
    pub server: FileServerConfig,
    /// Search, description and delivery limits
    pub pipeline: FilePipelineConfig,
    /// Place search adapter settings
    pub places: FilePlacesConfig,
    /// Description generator adapter settings
    pub generator: FileGeneratorConfig,
    /// Messaging channel adapter settings
    pub line: FileLineConfig,
}

impl FileConfig {
    /// Validate the configuration
    ///
    /// Secrets are not checked here; see [`require_secret`].
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.server.socket_addr()?;
        self.pipeline.to_pipeline_config()?;

        if self.places.max_pages == 0 {
            return Err(ConfigValidationError::ZeroMaxPages);
        }
        if self.places.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout("places.timeout_seconds"));
        }
        if self.line.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout("line.timeout_seconds"));
        }

        Ok(())
    }

    /// Names of the secrets that are not set
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        [
            ("places.api_key", &self.places.api_key),
            ("generator.api_key", &self.generator.api_key),
            ("line.channel_access_token", &self.line.channel_access_token),
        ]
        .into_iter()
        .filter(|(_, value)| require_secret("", value).is_err())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Return a secret's value, treating blank strings as unset
pub fn require_secret<'a>(
    name: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, ConfigValidationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigValidationError::MissingSecret(name))
}
