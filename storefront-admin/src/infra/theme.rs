//! Theme shared with the host application.
//!
//! The views only read it; switching between light and dark happens outside
//! and arrives as a new `Arc<ThemeConfig>`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
}

/// Colours the renderer applies to the admin views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub danger: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#f5f5f7",
    surface: "#ffffff",
    text: "#1d1d1f",
    accent: "#0a66c2",
    success: "#1a7f37",
    danger: "#c62828",
};

const DARK: Palette = Palette {
    background: "#121212",
    surface: "#1e1e1e",
    text: "#e8e8e8",
    accent: "#5aa9ff",
    success: "#4cc38a",
    danger: "#ff6b6b",
};

impl ThemeConfig {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn palette(&self) -> Palette {
        match self.mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }
}
