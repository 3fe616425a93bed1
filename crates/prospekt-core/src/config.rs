use crate::app_config::{
    AppConfig, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_PATH, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SOURCE_URL, DEFAULT_USER_AGENT,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; with nothing set the result equals
/// [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let source_url = or_default("PROSPEKT_SOURCE_URL", DEFAULT_SOURCE_URL);
    if source_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PROSPEKT_SOURCE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let output_path = PathBuf::from(or_default("PROSPEKT_OUTPUT_PATH", DEFAULT_OUTPUT_PATH));
    let request_timeout_secs =
        parse_u64("PROSPEKT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PROSPEKT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("PROSPEKT_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("PROSPEKT_LOG_LEVEL", DEFAULT_LOG_LEVEL);

    Ok(AppConfig {
        source_url: source_url.trim().to_string(),
        output_path,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
