use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "unitconv.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    // Used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Explicit path if given, else `unitconv.toml` when present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load_from_file(fallback)
                } else {
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::empty();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_str() {
        let config = Config::load_from_str(
            r#"
[logging]
level = "debug"

[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::load_from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Json);

        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        assert!(Config::load_from_str("[output]\nformat = \"yaml\"\n").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(Config::load_from_file("/nonexistent/unitconv.toml").is_err());
    }

    #[test]
    fn test_discover_explicit_path() {
        let path = std::env::temp_dir().join(format!("unitconv-test-{}.toml", std::process::id()));
        std::fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();
        let config = Config::discover(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.logging.level, "info");
    }
}
