//! Configuration for lore graph settings.
//!
//! Load order: TOML file → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level lore configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub ids: IdConfig,
}

/// Node-id generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    /// Length of generated base-36 node ids.
    pub length: usize,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            length: crate::id::DEFAULT_LENGTH,
        }
    }
}

impl IdConfig {
    /// Generate a node id of the configured length.
    pub fn generate(&self) -> String {
        crate::id::generate_with_length(self.length)
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl CoreConfig {
    /// Load config from a TOML file, with env var overrides.
    /// Falls back to defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("LORE_ID_LENGTH", &mut config.ids.length);

        if config.ids.length == 0 {
            anyhow::bail!("ids.length must be at least 1");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoreConfig::default();
        assert_eq!(config.ids.length, crate::id::DEFAULT_LENGTH);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[ids]
length = 10
"#;
        let config: CoreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ids.length, 10);
    }

    #[test]
    fn test_config_load_nonexistent() {
        let config = CoreConfig::load(Path::new("/nonexistent/lore.toml")).unwrap();
        assert_eq!(config.ids.length, crate::id::DEFAULT_LENGTH);
    }

    #[test]
    fn test_config_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lore.toml");
        std::fs::write(
            &path,
            r#"
[ids]
length = 8
"#,
        )
        .unwrap();

        let config = CoreConfig::load(&path).unwrap();
        assert_eq!(config.ids.length, 8);
    }

    #[test]
    fn test_configured_id_generation() {
        let config = IdConfig { length: 9 };
        assert_eq!(config.generate().len(), 9);
    }

    #[test]
    fn test_config_rejects_zero_length() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lore.toml");
        std::fs::write(
            &path,
            r#"
[ids]
length = 0
"#,
        )
        .unwrap();

        assert!(CoreConfig::load(&path).is_err());
    }
}
