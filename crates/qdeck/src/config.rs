use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "qdeck";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `qdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# qdeck configuration - https://github.com/qdeck-app/qdeck\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn default_theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    pub fn default_date_format(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.date_format.as_deref())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.date_format" => {
                match value {
                    "full" | "short" => {}
                    _ => anyhow::bail!(
                        "Invalid date format: {value}. Must be 'full' or 'short'."
                    ),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .date_format = Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.date_format"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_theme() {
        let mut config = Config::default();
        config.set("defaults.theme", "light").unwrap();
        assert_eq!(config.default_theme(), Some("light"));

        assert!(config.set("defaults.theme", "sepia").is_err());
        assert_eq!(config.default_theme(), Some("light"));
    }

    #[test]
    fn test_set_date_format() {
        let mut config = Config::default();
        config.set("defaults.date_format", "short").unwrap();
        assert_eq!(config.default_date_format(), Some("short"));

        assert!(config.set("defaults.date_format", "iso").is_err());
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = Config::default();
        let err = config.set("defaults.font", "mono").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "defaults:\n  theme: light\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_theme(), Some("light"));
        assert_eq!(config.default_date_format(), None);
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }
}
