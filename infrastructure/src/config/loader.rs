//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["concierge.toml", ".concierge.toml"];

/// Prefix for structured environment overrides, e.g. `SPOT_CONCIERGE_PIPELINE__DISPLAY_CAP`
const ENV_PREFIX: &str = "SPOT_CONCIERGE_";

/// Plain environment variables mapped onto config keys
const ENV_ALIASES: [(&str, &str); 4] = [
    ("LINE_CHANNEL_ACCESS_TOKEN", "line.channel_access_token"),
    ("GOOGLE_API_KEY", "places.api_key"),
    ("OPENAI_API_KEY", "generator.api_key"),
    ("PORT", "server.port"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Plain secret variables and `PORT`
    /// 2. `SPOT_CONCIERGE_*` variables
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./concierge.toml` or `./.concierge.toml`
    /// 5. XDG config: `$XDG_CONFIG_HOME/spot-concierge/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }

        let mut figment = Self::file_figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        );
        figment = Self::merge_env(figment);
        figment.extract().map_err(Box::new)
    }

    /// Load defaults plus environment only (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Self::merge_env(Self::file_figment(None, None, None))
            .extract()
            .map_err(Box::new)
    }

    /// Defaults overlaid with whichever of the given files exist
    fn file_figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment
    }

    fn merge_env(mut figment: Figment) -> Figment {
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        for (var, key) in ENV_ALIASES {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }
        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/spot-concierge/config.toml if set,
    /// otherwise falls back to ~/.config/spot-concierge/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("spot-concierge").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        let aliases: Vec<_> = ENV_ALIASES.iter().map(|(var, _)| *var).collect();
        println!("  [     ] Env:     {}", aliases.join(", "));
        println!("  [     ] Env:     {ENV_PREFIX}<SECTION>__<KEY>");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./concierge.toml or ./.concierge.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_domain::RankingPolicy;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_files() {
        let config: FileConfig = ConfigLoader::file_figment(None, None, None).extract().unwrap();
        assert_eq!(config.pipeline.display_cap, 10);
        assert_eq!(config.pipeline.batch_size, 5);
        assert!(config.places.api_key.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("spot-concierge"));
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        let project = write_toml("[pipeline]\ndisplay_cap = 3\nbatch_size = 2\n");
        let explicit = write_toml("[pipeline]\ndisplay_cap = 7\nranking = \"popularity\"\n");

        let config: FileConfig =
            ConfigLoader::file_figment(None, Some(project.path()), Some(explicit.path()))
                .extract()
                .unwrap();

        assert_eq!(config.pipeline.display_cap, 7);
        assert_eq!(config.pipeline.batch_size, 2);
        assert_eq!(config.pipeline.ranking, RankingPolicy::Popularity);
        assert_eq!(config.pipeline.radius_meters, 10_000);
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let missing = Path::new("/nonexistent/concierge.toml");
        let config: FileConfig = ConfigLoader::file_figment(Some(missing), Some(missing), None)
            .extract()
            .unwrap();
        assert_eq!(config.pipeline.display_cap, 10);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/explicit.toml");
        let err = ConfigLoader::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let file = write_toml("[pipeline]\ndisplay_cap = \"many\"\n");
        let result: Result<FileConfig, _> =
            ConfigLoader::file_figment(None, None, Some(file.path())).extract();
        assert!(result.is_err());
    }
}
