use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LAST_VISITED_COOKIE_MAX_AGE_SECS, DEFAULT_THEME,
    DEFAULT_THEME_COOKIE_MAX_AGE_SECS, DEFAULT_USERNAME_COOKIE_MAX_AGE_SECS,
    MAX_COOKIE_MAX_AGE_SECS,
};

use serde::Deserialize;

/// Lifetimes of the demo cookies, in seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    pub username_max_age_secs: u64,
    pub theme_max_age_secs: u64,
    pub last_visited_max_age_secs: u64,
    /// Theme reported when no theme cookie is present
    pub default_theme: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            username_max_age_secs: DEFAULT_USERNAME_COOKIE_MAX_AGE_SECS,
            theme_max_age_secs: DEFAULT_THEME_COOKIE_MAX_AGE_SECS,
            last_visited_max_age_secs: DEFAULT_LAST_VISITED_COOKIE_MAX_AGE_SECS,
            default_theme: String::from(DEFAULT_THEME),
        }
    }
}

impl CookieConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("cookies.username_max_age_secs", self.username_max_age_secs),
            ("cookies.theme_max_age_secs", self.theme_max_age_secs),
            (
                "cookies.last_visited_max_age_secs",
                self.last_visited_max_age_secs,
            ),
        ] {
            if value == 0 || value > MAX_COOKIE_MAX_AGE_SECS {
                return Err(ConfigError::cookies(format!(
                    "{} must be 1-{}, got {}",
                    name, MAX_COOKIE_MAX_AGE_SECS, value
                )));
            }
        }

        if self.default_theme.trim().is_empty() {
            return Err(ConfigError::cookies("cookies.default_theme cannot be empty"));
        }

        Ok(())
    }
}
