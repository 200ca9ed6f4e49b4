pub mod app_config;
pub mod config;
pub mod encoding;
pub mod quotes;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use encoding::TextEncoding;
pub use quotes::{Author, Quote, QuoteEntry};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
