//! Configuration handling for the signup form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Route the login link navigates to when nothing else is configured
pub const DEFAULT_LOGIN_ROUTE: &str = "/auth/login";

/// User configuration for the signup form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Locale of the message catalog to load
    pub locale: Option<String>,
    /// Target of the "sign in" link
    pub login_route: Option<String>,
    /// Directory holding `<locale>.json` catalogs
    pub locales_dir: Option<PathBuf>,
}

impl SignupConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "meetfranz", "franz-signup")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path().as_deref(), |name| std::env::var(name).ok())
    }

    fn load_from(path: Option<&Path>, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path.filter(|path| path.exists()) {
            let content = fs::read_to_string(path)?;
            config = serde_json::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
        }

        config.apply_env(var);
        Ok(config)
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(locale) = var("FRANZ_LOCALE").filter(|v| !v.is_empty()) {
            self.locale = Some(locale);
        }
        if let Some(route) = var("FRANZ_LOGIN_ROUTE").filter(|v| !v.is_empty()) {
            self.login_route = Some(route);
        }
    }

    pub fn login_route(&self) -> &str {
        self.login_route.as_deref().unwrap_or(DEFAULT_LOGIN_ROUTE)
    }

    /// Catalog directory, defaulting to `locales/` in the config dir
    pub fn locales_dir(&self) -> Option<PathBuf> {
        self.locales_dir.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.config_dir().join("locales"))
        })
    }
}
