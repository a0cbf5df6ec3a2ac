use env_logger::{Builder, Env};
use log::LevelFilter;

use super::config_loader::LogConfig;

pub fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>().map_err(|_| format!("Invalid log level: {}", s))
}

/// Builds an env_logger from the configured level. `RUST_LOG`, when set, wins.
pub fn build_logger(config: &LogConfig, debug: bool) -> Result<Builder, String> {
    let level = if debug { LevelFilter::Debug } else { parse_level(&config.level)? };
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder.format_timestamp_millis();
    Ok(builder)
}

pub fn init_logging(config: &LogConfig, debug: bool) -> Result<(), String> {
    build_logger(config, debug)?
        .try_init()
        .map_err(|e| format!("Failed to initialise logger: {}", e))
}
