mod config;
mod error;
mod firestore_config;
mod log_level;
mod logging_config;
mod server_config;
mod store_backend;
mod store_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use firestore_config::FirestoreConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_backend::StoreBackend;
pub use store_config::StoreConfig;

const CONFIG_DIR_ENV: &str = "LRP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".lrp";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SQLITE_FILENAME: &str = "requisitions.db";
const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_FIRESTORE_DATABASE: &str = "(default)";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
