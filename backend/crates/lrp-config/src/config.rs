use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, ServerConfig, StoreBackend, StoreConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. `LRP_CONFIG_DIR` env var, else `./.lrp/`
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load `config.toml` if it exists, else use defaults
    /// 4. Apply `LRP_*` (and `PORT`) environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: LRP_CONFIG_DIR env var > ./.lrp/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.store.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Absolute path of the SQLite database file.
    pub fn sqlite_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.store.sqlite_path))
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        match self.store.backend {
            StoreBackend::Sqlite => {
                info!("  store: sqlite ({})", self.store.sqlite_path);
            }
            StoreBackend::Firestore => {
                let firestore = &self.store.firestore;
                info!(
                    "  store: firestore (project={}, database={}, url={}, auth={})",
                    firestore.project_id.as_deref().unwrap_or("<unset>"),
                    firestore.database,
                    firestore.base_url,
                    firestore.auth_mode()
                );
            }
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("<stdout>")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("LRP_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("LRP_SERVER_PORT", &mut self.server.port);
        // Container platforms hand the listen port over as plain PORT
        Self::apply_env_parse("PORT", &mut self.server.port);

        // Store
        Self::apply_env_parse("LRP_STORE_BACKEND", &mut self.store.backend);
        Self::apply_env_string("LRP_SQLITE_PATH", &mut self.store.sqlite_path);

        let firestore = &mut self.store.firestore;
        Self::apply_env_option_string("GOOGLE_CLOUD_PROJECT", &mut firestore.project_id);
        Self::apply_env_option_string("LRP_FIRESTORE_PROJECT_ID", &mut firestore.project_id);
        Self::apply_env_string("LRP_FIRESTORE_DATABASE", &mut firestore.database);
        Self::apply_env_string("LRP_FIRESTORE_BASE_URL", &mut firestore.base_url);
        Self::apply_env_option_string("LRP_FIRESTORE_ACCESS_TOKEN", &mut firestore.access_token);
        Self::apply_env_bool(
            "LRP_FIRESTORE_USE_METADATA_SERVER",
            &mut firestore.use_metadata_server,
        );
        if let Ok(host) = std::env::var("FIRESTORE_EMULATOR_HOST")
            && !host.is_empty()
        {
            firestore.base_url = format!("http://{}", host);
            firestore.use_metadata_server = false;
        }

        // Logging
        Self::apply_env_parse("LRP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LRP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LRP_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
