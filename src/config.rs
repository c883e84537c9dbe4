use std::path::Path;

use eyre::WrapErr as _;
use serde::{Deserialize, Serialize};

use periph_cg_anem::CgAnemConfig;
use periph_util::ResultExt as _;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config file: {0}")]
    Read(String),

    #[error("unable to parse config: {0}")]
    Parse(String),
}

type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriphConfig {
    /// tracing filter directive, `RUST_LOG` takes precedence
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub cg_anem: Vec<CgAnemConfig>,
}

impl PeriphConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err_str(ConfigError::Parse)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err_str(ConfigError::Read)?;
        Self::from_json(&json)
    }

    pub fn log_directive(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(crate::logging::DEFAULT_DIRECTIVE)
    }
}

/// Load the config at `path` and set up logging from it
pub fn init_from_path(path: impl AsRef<Path>) -> eyre::Result<PeriphConfig> {
    let path = path.as_ref();
    let config = PeriphConfig::from_path(path)
        .wrap_err_with(|| format!("failed to load config from {}", path.display()))?;

    crate::logging::init_with_directive(config.log_directive());
    tracing::info!("loaded config with {} cg_anem sensor(s)", config.cg_anem.len());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;

    const CONFIG: &str = r#"{
        "log_level": "debug",
        "cg_anem": [
            {
                "temperature": { "name": "Duct Temperature" },
                "wind_speed": { "name": "Duct Air Speed" }
            },
            { "address": 18, "update_interval_ms": 10000 }
        ]
    }"#;

    #[test]
    fn test_parse_config() {
        let config = PeriphConfig::from_json(CONFIG).unwrap();

        assert_eq!(config.log_directive(), "debug");
        assert_eq!(config.cg_anem.len(), 2);
        assert_eq!(config.cg_anem[0].address, 0x11);
        assert!(config.cg_anem[0].temperature.is_some());
        assert_eq!(config.cg_anem[1].address, 0x12);
        assert_eq!(config.cg_anem[1].update_interval_ms, 10_000);
    }

    #[test]
    fn test_empty_config() {
        let config = PeriphConfig::from_json("{}").unwrap();
        assert_eq!(config, PeriphConfig::default());
        assert_eq!(config.log_directive(), "info");
    }

    #[test]
    fn test_bad_config() {
        let result = PeriphConfig::from_json(r#"{ "cg_anem": [{ "address": "eleven" }] }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let config = init_from_path(file.path()).unwrap();
        assert_eq!(config.cg_anem.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = init_from_path(dir.path().join("missing.json"));

        let error = result.unwrap_err();
        assert!(error.to_string().starts_with("failed to load config from"));
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::Read(_))
        ));
    }
}
