use crate::app_config::AppConfig;
use crate::{ConfigError, TextEncoding};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("MILINDA_LOG_LEVEL", "info");
    let database_path = PathBuf::from(or_default("MILINDA_DATABASE_PATH", "dharma_wisdom.db"));
    let text_path = PathBuf::from(or_default("MILINDA_TEXT_PATH", "milinda.txt"));

    let text_encoding = or_default("MILINDA_TEXT_ENCODING", "utf-8")
        .parse::<TextEncoding>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "MILINDA_TEXT_ENCODING".to_string(),
            reason,
        })?;

    let top_words = parse_usize("MILINDA_TOP_WORDS", "10")?;
    if top_words == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MILINDA_TOP_WORDS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let db_acquire_timeout_secs = parse_u64("MILINDA_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        log_level,
        database_path,
        text_path,
        text_encoding,
        top_words,
        db_acquire_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
