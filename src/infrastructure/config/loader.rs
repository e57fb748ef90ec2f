//! Environment file resolution and loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::error::{ConfigError, ConfigUnavailableCause};
use crate::domain::models::config::{Config, Environment};

/// Environment variable holding the project root
pub const BASE_DIR_ENV: &str = "SRS_ROOT";

/// Location of the environment files, relative to the project root
pub const CONFIG_SUBPATH: &str = "app/config";

/// Resolves an environment to its YAML file and loads it
///
/// Files live at `<base_dir>/app/config/<env>.yml` unless the loader is
/// pinned to a single file with [`for_file`](Self::for_file).
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
    pinned_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            pinned_file: None,
        }
    }

    /// Loader that reads `path` whatever the environment
    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: PathBuf::from("."),
            pinned_file: Some(path.into()),
        }
    }

    /// Loader rooted at `$SRS_ROOT`, or the working directory when unset
    pub fn from_env() -> Self {
        match env::var_os(BASE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => {
                warn!(
                    variable = BASE_DIR_ENV,
                    "project root not set, resolving config relative to the working directory"
                );
                Self::new(".")
            }
        }
    }

    /// Project root the config directory is resolved from
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the environment files
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.join(CONFIG_SUBPATH)
    }

    /// Path of the file backing `environment`
    pub fn config_path(&self, environment: Environment) -> PathBuf {
        match &self.pinned_file {
            Some(path) => path.clone(),
            None => self.config_dir().join(environment.file_name()),
        }
    }

    /// Load the config for `environment` from its resolved path
    pub fn load(&self, environment: Environment) -> Result<Config, ConfigError> {
        Self::load_from_file(environment, self.config_path(environment))
    }

    /// Load a config for `environment` from an explicit file
    pub fn load_from_file(
        environment: Environment,
        path: impl AsRef<Path>,
    ) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!(%environment, path = %path.display(), "loading config");

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Unavailable {
            environment,
            cause: ConfigUnavailableCause::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let config = Config::from_yaml_str(environment, &contents).map_err(|source| {
            ConfigError::Unavailable {
                environment,
                cause: ConfigUnavailableCause::Parse {
                    path: path.to_path_buf(),
                    source,
                },
            }
        })?;

        info!(
            %environment,
            path = %path.display(),
            debug = config.debug,
            "config loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_config_path_layout() {
        let loader = ConfigLoader::new("/srv/srs");
        assert_eq!(
            loader.config_path(Environment::Prod),
            PathBuf::from("/srv/srs/app/config/prod.yml")
        );
        assert_eq!(loader.config_dir(), PathBuf::from("/srv/srs/app/config"));
    }

    #[test]
    fn test_pinned_file_ignores_environment() {
        let loader = ConfigLoader::for_file("/tmp/custom.yml");
        for env in Environment::ALL {
            assert_eq!(loader.config_path(env), PathBuf::from("/tmp/custom.yml"));
        }
    }

    #[test]
    fn test_from_env_uses_base_dir_variable() {
        temp_env::with_var(BASE_DIR_ENV, Some("/opt/srs"), || {
            let loader = ConfigLoader::from_env();
            assert_eq!(loader.base_dir(), Path::new("/opt/srs"));
        });
    }

    #[test]
    fn test_from_env_falls_back_to_working_directory() {
        temp_env::with_var_unset(BASE_DIR_ENV, || {
            assert_eq!(ConfigLoader::from_env().base_dir(), Path::new("."));
        });
        temp_env::with_var(BASE_DIR_ENV, Some(""), || {
            assert_eq!(ConfigLoader::from_env().base_dir(), Path::new("."));
        });
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "connection_string: \"host=db;\"\ndatabase: mydb\ndebug: true").unwrap();
        file.flush().unwrap();

        let config = ConfigLoader::load_from_file(Environment::Test, file.path()).unwrap();
        assert_eq!(config.complete_connection_string(), "host=db;mydb");
        assert!(config.debug);
        assert_eq!(config.environment, Environment::Test);
    }

    #[test]
    fn test_missing_file_is_read_failure() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(dir.path());

        let err = loader.load(Environment::Dev).unwrap_err();
        assert_eq!(err.environment(), Some(Environment::Dev));
        let cause = err.cause().expect("unavailable error carries a cause");
        assert!(cause.is_read());
        assert_eq!(cause.path(), dir.path().join("app/config/dev.yml"));
    }

    #[test]
    fn test_malformed_file_is_parse_failure() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "database: {{unterminated").unwrap();
        file.flush().unwrap();

        let err = ConfigLoader::load_from_file(Environment::Prod, file.path()).unwrap_err();
        assert_eq!(err.environment(), Some(Environment::Prod));
        assert!(err.cause().is_some_and(ConfigUnavailableCause::is_parse));
    }
}
