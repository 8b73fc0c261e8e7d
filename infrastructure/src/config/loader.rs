//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILENAMES: [&str; 2] = ["tokenscope.toml", ".tokenscope.toml"];
const ENV_PREFIX: &str = "TOKENSCOPE_";

/// Files that take part in a load, lowest priority first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub explicit: Option<PathBuf>,
}

impl ConfigSources {
    /// Discover the global and project files that exist right now
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            global: ConfigLoader::global_config_path().filter(|p| p.exists()),
            project: ConfigLoader::project_config_path(),
            explicit: explicit.map(Path::to_path_buf),
        }
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TOKENSCOPE_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./tokenscope.toml` or `./.tokenscope.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/tokenscope/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(&ConfigSources::discover(config_path))
    }

    /// Load configuration from an explicit set of sources
    pub fn load_from(sources: &ConfigSources) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(sources).extract().map_err(Box::new)
    }

    /// Build the merged figment without extracting it
    pub fn figment(sources: &ConfigSources) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global) = &sources.global {
            figment = figment.merge(Toml::file(global));
        }
        if let Some(project) = &sources.project {
            figment = figment.merge(Toml::file(project));
        }
        // A missing explicit file is an error, not a silent fallback
        if let Some(explicit) = &sources.explicit {
            figment = figment.merge(Toml::file_exact(explicit));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/tokenscope/config.toml` if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tokenscope").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<7}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND  ] Project:  {}", path.display());
        } else {
            println!("  [       ] Project:  ./tokenscope.toml or ./.tokenscope.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{:<7}] Global:   {}", mark, path.display());
        }

        println!("  [       ] Env:      {}*", ENV_PREFIX);
        println!("  [       ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokenscope_domain::AnalysisMode;

    fn write_toml(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.service.timeout_secs, 10);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tokenscope"));
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_toml(
            &dir,
            "project.toml",
            r#"
[service]
base_url = "http://project.local/rest"
timeout_secs = 4

[dispatch]
initial_mode = "search"
"#,
        );
        let explicit = write_toml(
            &dir,
            "explicit.toml",
            r#"
[service]
base_url = "http://explicit.local/rest"
"#,
        );

        let sources = ConfigSources {
            global: None,
            project: Some(project),
            explicit: Some(explicit),
        };
        let config = ConfigLoader::load_from(&sources).unwrap();

        assert_eq!(config.service.base_url, "http://explicit.local/rest");
        // Values only set in the lower layer survive
        assert_eq!(config.service.timeout_secs, 4);
        assert_eq!(config.dispatch.initial_mode, AnalysisMode::Search);
        assert_eq!(config.service.tokenize_path, "tokenizer/tokenize");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let sources = ConfigSources {
            explicit: Some(dir.path().join("nope.toml")),
            ..Default::default()
        };
        assert!(ConfigLoader::load_from(&sources).is_err());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = write_toml(
            &dir,
            "bad.toml",
            r#"
[dispatch]
initial_mode = "turbo"
"#,
        );
        let sources = ConfigSources {
            explicit: Some(explicit),
            ..Default::default()
        };
        assert!(ConfigLoader::load_from(&sources).is_err());
    }
}
