use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub dialogue: DialogueDefaults,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ModelConfig {
    /// Where the model parameter file lives.
    #[serde(default = "ModelConfig::default_path")]
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl ModelConfig {
    fn default_path() -> PathBuf {
        Config::config_dir().map_or_else(|| PathBuf::from("model.json"), |d| d.join("model.json"))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DialogueDefaults {
    /// Carry slots given in earlier turns forward until all four are known.
    #[serde(default = "DialogueDefaults::default_carry_slots")]
    pub carry_slots: bool,
}

impl Default for DialogueDefaults {
    fn default() -> Self {
        Self {
            carry_slots: Self::default_carry_slots(),
        }
    }
}

impl DialogueDefaults {
    const fn default_carry_slots() -> bool {
        true
    }
}

impl Config {
    /// The directory settings live in, when a home directory exists.
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join("casita"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'casita init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Load the config file, or fall back to defaults when it is absent.
    pub fn load_or_default() -> anyhow::Result<Self> {
        match Self::config_dir() {
            Some(dir) if dir.join("config.json").exists() => Self::load(),
            _ => {
                info!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(&config_path, template)?;

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.dialogue.carry_slots);
        assert!(config.model.path.ends_with("model.json"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "test failure should panic with context")]
    fn test_partial_config_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "model": { "path": "/tmp/m.json" } }"#)
                .expect("partial config should deserialize");

        assert_eq!(config.model.path, PathBuf::from("/tmp/m.json"));
        assert!(config.dialogue.carry_slots);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "test failure should panic with context")]
    fn test_template_round_trips() {
        let template = serde_json::to_string_pretty(&Config::default())
            .expect("default config should serialize");
        let parsed: Config =
            serde_json::from_str(&template).expect("template should deserialize");
        assert_eq!(parsed.dialogue.carry_slots, Config::default().dialogue.carry_slots);
    }
}
