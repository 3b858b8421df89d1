use serde::{Deserialize, Serialize};

use super::report::OutputFormat;
use super::rva::Rva;
use crate::error::ConfigError;

/// RVA hooked when no configuration exists yet.
pub const DEFAULT_RVA: Rva = Rva(0x1d236e8);

/// Upper bound on configured hook targets.
pub const MAX_RVAS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub hook: HookConfig,

    #[serde(default)]
    pub ingest: IngestConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|p| p.join("textsift").join("config.toml"))
    }

    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::config_path()
            && path.exists()
        {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }
        Ok(Self::default())
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;

        let path = Self::config_path().ok_or_else(|| {
            ConfigError::PathError("could not determine config directory".to_string())
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Reject configs the hook side cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hook.rvas.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one RVA is required".to_string(),
            ));
        }
        if self.hook.rvas.len() > MAX_RVAS {
            return Err(ConfigError::ValidationError(format!(
                "at most {} RVAs are supported, got {}",
                MAX_RVAS,
                self.hook.rvas.len()
            )));
        }
        Ok(())
    }
}

/// Capture-side hook settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookConfig {
    /// Target `set_Text` addresses.
    #[serde(default = "default_rvas")]
    pub rvas: Vec<Rva>,

    /// When true the hook only dumps metadata and captures no text.
    #[serde(default)]
    pub dump_mode: bool,
}

fn default_rvas() -> Vec<Rva> {
    vec![DEFAULT_RVA]
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            rvas: default_rvas(),
            dump_mode: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    #[serde(default = "default_dedup")]
    pub dedup: bool,
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

fn default_dedup() -> bool {
    true
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            dedup: default_dedup(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.hook.rvas, vec![DEFAULT_RVA]);
        assert!(!config.hook.dump_mode);
        assert!(config.ingest.dedup);
        assert_eq!(config.output.default_format, OutputFormat::Text);
    }

    #[test]
    fn test_config_path() {
        let path = Config::config_path();
        assert!(path.is_some());
    }

    #[test]
    fn test_validate_rejects_empty_rva_list() {
        let mut config = Config::default();
        config.hook.rvas.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_rvas() {
        let mut config = Config::default();
        config.hook.rvas = (0..=MAX_RVAS as u64).map(Rva).collect();
        assert!(config.validate().is_err());

        config.hook.rvas.pop();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = Config::default();
        config.hook.dump_mode = true;
        config.hook.rvas.push(Rva(0xdeadbeef));

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.hook.rvas, config.hook.rvas);
        assert!(parsed.hook.dump_mode);
    }
}
