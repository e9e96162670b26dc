use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, CookieConfig, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub cookies: CookieConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. CRUD_CONFIG_DIR env var, else ./.crud/
    /// 2. Create the config directory if missing
    /// 3. Parse config.toml if present, else defaults
    /// 4. Apply CRUD_* environment variable overrides
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

    /// Priority: CRUD_CONFIG_DIR env var > ./.crud/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate every section. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.validation.validate()?;
        self.cookies.validate()?;
        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  validation: min_password_length={}",
            self.validation.min_password_length
        );
        info!(
            "  cookies: username={}s, theme={}s, last_visited={}s, default_theme={}",
            self.cookies.username_max_age_secs,
            self.cookies.theme_max_age_secs,
            self.cookies.last_visited_max_age_secs,
            self.cookies.default_theme
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CRUD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CRUD_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("CRUD_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "CRUD_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("CRUD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("CRUD_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("CRUD_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("CRUD_LOG_COLORED", &mut self.logging.colored);

        // Validation
        Self::apply_env_parse(
            "CRUD_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );

        // Cookies
        Self::apply_env_parse(
            "CRUD_COOKIE_USERNAME_MAX_AGE_SECS",
            &mut self.cookies.username_max_age_secs,
        );
        Self::apply_env_parse(
            "CRUD_COOKIE_THEME_MAX_AGE_SECS",
            &mut self.cookies.theme_max_age_secs,
        );
        Self::apply_env_parse(
            "CRUD_COOKIE_LAST_VISITED_MAX_AGE_SECS",
            &mut self.cookies.last_visited_max_age_secs,
        );
        Self::apply_env_string("CRUD_DEFAULT_THEME", &mut self.cookies.default_theme);
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

    /// Unparseable values are ignored.
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
