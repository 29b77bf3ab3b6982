//! Configuration file loading for spot-concierge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Secret variables `LINE_CHANNEL_ACCESS_TOKEN`, `GOOGLE_API_KEY`, `OPENAI_API_KEY`, and `PORT`
//! 2. `SPOT_CONCIERGE_*` environment variables (`__` separates sections)
//! 3. `--config <path>` specified file
//! 4. Project root: `./concierge.toml` or `./.concierge.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/spot-concierge/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeneratorConfig, FileLineConfig, FilePipelineConfig,
    FilePlacesConfig, FileServerConfig, require_secret,
};
pub use loader::ConfigLoader;
