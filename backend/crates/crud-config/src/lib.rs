mod config;
mod cookie_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use cookie_config::CookieConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "CRUD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".crud";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
const MIN_MIN_PASSWORD_LENGTH: usize = 1;
const MAX_MIN_PASSWORD_LENGTH: usize = 128;

const DEFAULT_USERNAME_COOKIE_MAX_AGE_SECS: u64 = 15;
const DEFAULT_THEME_COOKIE_MAX_AGE_SECS: u64 = 3600;
const DEFAULT_LAST_VISITED_COOKIE_MAX_AGE_SECS: u64 = 3600;
const DEFAULT_THEME: &str = "light";
const MAX_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;
