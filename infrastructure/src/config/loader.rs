//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["guess-the-breed.toml", ".guess-the-breed.toml"];

/// Prefix of environment variable overrides, e.g. `GUESS_BREED_API__BASE_URL`
pub const ENV_PREFIX: &str = "GUESS_BREED_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GUESS_BREED_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./guess-the-breed.toml` or `./.guess-the-breed.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/guess-the-breed/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Path::new("."),
            config_path,
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Merge defaults and config files, without environment overrides
    pub fn figment(
        global_path: Option<&Path>,
        project_dir: &Path,
        config_path: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(path) = Self::find_project_config(project_dir) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/guess-the-breed/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("guess-the-breed").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::find_project_config(Path::new("."))
    }

    fn find_project_config(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Render a configuration as TOML (for --show-config)
    pub fn render(config: &FileConfig) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(config)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
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
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("guess-the-breed"));
    }

    #[test]
    fn test_figment_without_files_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config: FileConfig = ConfigLoader::figment(None, dir.path(), None)
            .extract()
            .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_project_file_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(&global, "[api]\ntimeout_seconds = 30\n\n[quiz]\nseed = 1\n").unwrap();
        fs::write(dir.path().join("guess-the-breed.toml"), "[quiz]\nseed = 2\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(Some(global.as_path()), dir.path(), None)
            .extract()
            .unwrap();

        assert_eq!(config.quiz.seed, Some(2));
        assert_eq!(config.api.timeout_seconds, 30);
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".guess-the-breed.toml"), "[quiz]\nrounds = 3\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(None, dir.path(), None)
            .extract()
            .unwrap();

        assert_eq!(config.quiz.rounds, Some(3));
    }

    #[test]
    fn test_explicit_file_has_highest_file_priority() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("guess-the-breed.toml"), "[output]\ncolor = false\n").unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[output]\ncolor = true\nshow_progress = false\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(None, dir.path(), Some(explicit.as_path()))
            .extract()
            .unwrap();

        assert!(config.output.color);
        assert!(!config.output.show_progress);
    }

    #[test]
    fn test_env_overrides_config_files() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "guess-the-breed.toml",
                "[api]\nbase_url = \"http://project.test\"\n\n[quiz]\nseed = 1\nrounds = 3\n",
            )?;
            jail.create_file("custom.toml", "[quiz]\nseed = 2\n")?;
            jail.set_env("GUESS_BREED_API__BASE_URL", "http://env.test");
            jail.set_env("GUESS_BREED_QUIZ__SEED", "5");

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;

            assert_eq!(config.api.base_url, "http://env.test");
            assert_eq!(config.quiz.seed, Some(5));
            assert_eq!(config.quiz.rounds, Some(3));
            Ok(())
        });
    }

    #[test]
    fn test_render_round_trips_through_toml() {
        let mut config = FileConfig::default();
        config.quiz.seed = Some(9);
        let rendered = ConfigLoader::render(&config).unwrap();
        assert!(rendered.contains("[api]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_render_reports_unrepresentable_values() {
        // TOML integers are signed 64-bit
        let mut config = FileConfig::default();
        config.quiz.seed = Some(u64::MAX);
        assert!(ConfigLoader::render(&config).is_err());
    }
}
