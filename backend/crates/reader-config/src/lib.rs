mod config;
mod database_config;
mod email_config;
mod error;
mod log_level;
mod logging_config;
mod signup_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use email_config::EmailConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use signup_config::SignupConfig;

const CONFIG_DIR_ENV: &str = "READER_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".reader";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "reader.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_EMAIL_FROM_ADDRESS: &str = "no-reply@reader.local";
