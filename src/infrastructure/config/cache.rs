//! Write-once config cache.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::loader::ConfigLoader;
use crate::domain::error::ConfigError;
use crate::domain::models::config::{Config, Environment};
use crate::domain::models::jwt::JwtConfig;

/// Write-once holder of the application config
///
/// The first successful [`get`](Self::get) loads the file for the selected
/// environment; every later call returns that same config, whatever the
/// selector says by then. Failed loads are not cached.
#[derive(Debug)]
pub struct ConfigCache {
    loader: ConfigLoader,
    state: Mutex<CacheState>,
}

#[derive(Debug)]
struct CacheState {
    environment: Environment,
    config: Option<Arc<Config>>,
}

impl ConfigCache {
    /// Empty cache that will load `environment` through `loader`
    pub fn new(loader: ConfigLoader, environment: Environment) -> Self {
        Self {
            loader,
            state: Mutex::new(CacheState {
                environment,
                config: None,
            }),
        }
    }

    /// Cache that already holds `config`
    pub fn preloaded(loader: ConfigLoader, config: Config) -> Self {
        Self {
            loader,
            state: Mutex::new(CacheState {
                environment: config.environment,
                config: Some(Arc::new(config)),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // State is only ever replaced whole, so a poisoned lock is still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select the environment for the next load
    ///
    /// Ignored by [`get`](Self::get) once a config has been loaded.
    pub fn set_environment(&self, environment: Environment) {
        let mut state = self.lock();
        if let Some(config) = &state.config {
            warn!(
                requested = %environment,
                loaded = %config.environment,
                "config already loaded, environment change has no effect"
            );
        }
        state.environment = environment;
    }

    /// Currently selected environment
    pub fn environment(&self) -> Environment {
        self.lock().environment
    }

    /// Whether a config has been loaded
    pub fn is_loaded(&self) -> bool {
        self.lock().config.is_some()
    }

    /// The application config, loading it on first use
    pub fn get(&self) -> Result<Arc<Config>, ConfigError> {
        let mut state = self.lock();
        if let Some(config) = &state.config {
            return Ok(Arc::clone(config));
        }

        debug!(environment = %state.environment, "config not cached yet");
        let config = Arc::new(self.loader.load(state.environment)?);
        state.config = Some(Arc::clone(&config));
        Ok(config)
    }

    /// JWT middleware parameters for `claims`, loading the config if needed
    pub fn jwt_config<C>(&self, claims: C) -> Result<JwtConfig<C>, ConfigError> {
        Ok(self.get()?.jwt_config(claims))
    }

    /// Loader used on first access
    pub fn loader(&self) -> &ConfigLoader {
        &self.loader
    }
}
