pub mod app_config;
pub mod brochure;
pub mod config;

use thiserror::Error;

pub use app_config::AppConfig;
pub use brochure::{
    capture_timestamp, BrochureRecord, MissingMarker, DATE_FORMAT, EMPTY, TIMESTAMP_FORMAT,
    UNKNOWN,
};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
