use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domains::social_links::state::DEFAULT_WHATSAPP_PREFIX;
use crate::infra::theme::ThemeMode;

const APP_DIR: &str = "storefront-admin";
const CONFIG_FILE: &str = "config.json";

pub const ENV_SERVER_URL: &str = "STOREFRONT_SERVER_URL";
pub const ENV_API_TOKEN: &str = "STOREFRONT_API_TOKEN";
pub const ENV_THEME: &str = "STOREFRONT_THEME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub api_token: Option<String>,
    pub whatsapp_prefix: String,
    pub request_timeout_secs: u64,
    pub notification_ttl_secs: u64,
    pub theme: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".to_string(),
            api_token: None,
            whatsapp_prefix: DEFAULT_WHATSAPP_PREFIX.to_string(),
            request_timeout_secs: 30,
            notification_ttl_secs: 5,
            theme: ThemeMode::Light,
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default config file, then apply environment overrides.
    ///
    /// A missing or unreadable file falls back to defaults.
    pub fn load() -> Self {
        let mut config = Self::default_path()
            .map(|path| Self::load_file(&path))
            .unwrap_or_default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// File contents only, without environment overrides
    pub fn load_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|err| {
            log::warn!("Ignoring config file {}: {}", path.display(), err);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.set_connection(lookup(ENV_SERVER_URL), lookup(ENV_API_TOKEN));
        if let Some(theme) = lookup(ENV_THEME) {
            match theme.parse() {
                Ok(mode) => self.theme = mode,
                Err(err) => log::warn!("Ignoring {}: {}", ENV_THEME, err),
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }

    /// Replace the server and token; an empty token clears it.
    pub fn set_connection(
        &mut self,
        server_url: Option<String>,
        api_token: Option<String>,
    ) {
        if let Some(server_url) = server_url {
            self.server_url = server_url;
        }
        if let Some(token) = api_token {
            self.api_token = Some(token).filter(|t| !t.is_empty());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"server_url": "https://api.tienda.mx"}"#)
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server_url, "https://api.tienda.mx");
        assert_eq!(config.whatsapp_prefix, "+52");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            theme: ThemeMode::Dark,
            whatsapp_prefix: "+1".into(),
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn saved_connection_keeps_other_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"whatsapp_prefix": "+1", "api_token": "old"}"#)
            .unwrap();

        let mut config = Config::load_file(&path);
        config.set_connection(Some("https://api.tienda.mx".into()), Some("".into()));
        config.save_to(&path).unwrap();

        let stored = Config::load_from(&path).unwrap();
        assert_eq!(stored.server_url, "https://api.tienda.mx");
        assert_eq!(stored.api_token, None);
        assert_eq!(stored.whatsapp_prefix, "+1");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Config::load_file(&dir.path().join("absent.json")),
            Config::default()
        );
    }

    #[test]
    fn environment_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_SERVER_URL, "https://staging.tienda.mx"),
            (ENV_API_TOKEN, ""),
            (ENV_THEME, "DARK"),
        ]);
        let mut config = Config {
            api_token: Some("stale".into()),
            ..Config::default()
        };

        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server_url, "https://staging.tienda.mx");
        assert_eq!(config.api_token, None);
        assert_eq!(config.theme, ThemeMode::Dark);
    }
}
