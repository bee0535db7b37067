//! Message catalogs loaded from JSON

use super::messages::MessageDescriptor;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Resolves message descriptors to display text
#[cfg_attr(test, mockall::automock)]
pub trait Localizer {
    fn format_message(&self, descriptor: &MessageDescriptor) -> String;
}

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Flat `id -> text` catalog for a single locale.
///
/// The default catalog is empty and renders every descriptor's default text.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: Option<String>,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog from already parsed entries
    pub fn from_entries(locale: &str, entries: HashMap<String, String>) -> Self {
        Self {
            locale: Some(locale.to_string()),
            entries,
        }
    }

    /// Load `<dir>/<locale>.json`
    pub fn load(dir: &Path, locale: &str) -> Result<Self, CatalogError> {
        let path = dir.join(format!("{locale}.json"));
        let content = fs::read_to_string(&path).map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;
        tracing::debug!("Loaded {} messages for locale {locale}", entries.len());
        Ok(Self::from_entries(locale, entries))
    }

    /// Load a catalog, falling back to default messages when it is unavailable
    pub fn load_or_default(dir: &Path, locale: &str) -> Self {
        match Self::load(dir, locale) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!("Using default messages: {err}");
                Self::default()
            }
        }
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

impl Localizer for Catalog {
    fn format_message(&self, descriptor: &MessageDescriptor) -> String {
        match self.entries.get(descriptor.id) {
            Some(text) => text.clone(),
            None => descriptor.default_message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::messages;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_catalog_uses_default_messages() {
        let catalog = Catalog::default();
        assert_eq!(catalog.format_message(&messages::HEADLINE), "Sign up");
        assert!(catalog.locale().is_none());
    }

    #[test]
    fn test_entries_override_defaults() {
        let catalog = Catalog::from_entries(
            "de",
            HashMap::from([("signup.headline".to_string(), "Registrieren".to_string())]),
        );
        assert_eq!(catalog.format_message(&messages::HEADLINE), "Registrieren");
        assert_eq!(
            catalog.format_message(&messages::PASSWORD_LABEL),
            "Password"
        );
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("de.json"),
            r#"{"signup.submit.label": "Konto erstellen"}"#,
        )
        .unwrap();

        let catalog = Catalog::load(dir.path(), "de").unwrap();
        assert_eq!(catalog.locale(), Some("de"));
        assert_eq!(
            catalog.format_message(&messages::SUBMIT_BUTTON_LABEL),
            "Konto erstellen"
        );
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path(), "fr").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fr.json"), "not json").unwrap();
        let err = Catalog::load(dir.path(), "fr").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load_or_default(dir.path(), "fr");
        assert!(catalog.locale().is_none());
        assert_eq!(catalog.format_message(&messages::TERMS), "Terms of service");
    }
}
