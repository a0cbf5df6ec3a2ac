use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::p4conv_common_rs::codec::core::dispatcher::{PassthroughPolicy, ValueEncoder};
use crate::p4conv_common_rs::codec::debug::debug_logger::HexFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecSection { pub passthrough: PassthroughPolicy }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig { pub hex_prefix: bool, pub uppercase: bool }
impl Default for OutputConfig { fn default() -> Self { Self { hex_prefix: true, uppercase: false } } }
impl OutputConfig { pub fn hex_format(&self) -> HexFormat { HexFormat { prefix: self.hex_prefix, uppercase: self.uppercase } } }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig { pub level: String }
impl Default for LogConfig { fn default() -> Self { Self { level: "warn".into() } } }

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub codec: CodecSection,
    pub output: OutputConfig,
    pub logging: LogConfig,
}
impl CodecConfig {
    pub fn encoder(&self) -> ValueEncoder { ValueEncoder::new().with_policy(self.codec.passthrough) }
}

pub struct ConfigLoader { config_paths: Vec<PathBuf>, env_prefix: String }
impl ConfigLoader {
    pub fn new() -> Self { Self { config_paths: vec![PathBuf::from("p4conv.json"), PathBuf::from("p4conv.toml")], env_prefix: "P4CONV_".into() } }
    pub fn with_paths(paths: Vec<PathBuf>) -> Self { Self { config_paths: paths, env_prefix: "P4CONV_".into() } }
    pub fn with_env_prefix(mut self, prefix: String) -> Self { self.env_prefix = prefix; self }

    /// 最初に見つかった設定ファイルを読み込み、環境変数で上書きして検証する
    pub fn load(&self) -> Result<CodecConfig, String> {
        let mut config = CodecConfig::default();
        for path in &self.config_paths {
            if path.exists() {
                config = self.load_from_file(path)?;
                break;
            }
        }
        config = self.apply_env_overrides(config)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    pub fn load_from_file(&self, path: &Path) -> Result<CodecConfig, String> {
        let content = fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| format!("Failed to parse JSON config: {}", e)),
            Some("toml") => toml::from_str(&content).map_err(|e| format!("Failed to parse TOML config: {}", e)),
            _ => Err("Unsupported config file format".into()),
        }
    }

    fn apply_env_overrides(&self, mut config: CodecConfig) -> Result<CodecConfig, String> {
        if let Ok(policy) = env::var(format!("{}PASSTHROUGH", self.env_prefix)) { config.codec.passthrough = policy.parse()?; }
        if let Ok(level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) { config.logging.level = level; }
        if let Ok(prefix) = env::var(format!("{}HEX_PREFIX", self.env_prefix)) { config.output.hex_prefix = prefix.parse().map_err(|_| "Invalid hex prefix flag in environment variable")?; }
        if let Ok(upper) = env::var(format!("{}UPPERCASE", self.env_prefix)) { config.output.uppercase = upper.parse().map_err(|_| "Invalid uppercase flag in environment variable")?; }
        Ok(config)
    }

    fn validate_config(&self, config: &CodecConfig) -> Result<(), String> {
        match config.logging.level.to_lowercase().as_str() { "off"|"trace"|"debug"|"info"|"warn"|"error" => {}, _ => return Err("Invalid log level. Must be one of: off, trace, debug, info, warn, error".into()) }
        Ok(())
    }

    pub fn save_config(&self, config: &CodecConfig, path: &Path) -> Result<(), String> {
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(config).map_err(|e| format!("Failed to serialize config to JSON: {}", e))?,
            Some("toml") => toml::to_string_pretty(config).map_err(|e| format!("Failed to serialize config to TOML: {}", e))?,
            _ => return Err("Unsupported config file format for saving".into()),
        };
        fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }
}
impl Default for ConfigLoader { fn default() -> Self { Self::new() } }
