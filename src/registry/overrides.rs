//! Per-extension overrides of the platform's default application choice
//!
//! Overrides are keyed by extension rather than by type identifier: legacy
//! extensions like `.doc` are routinely resolved to the wrong identifier, and
//! overriding that identifier would also hijack unrelated extensions that
//! share it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::error::RegistryError;

const TEXT_EDITOR: &str = "com.apple.TextEdit";

/// Ordered mapping from lowercase extension (no leading dot) to an
/// application identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlerOverrides {
    entries: BTreeMap<String, String>,
}

impl HandlerOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides shipped with the crate.
    ///
    /// Text files bundled with DOS games use extensions that the host usually
    /// hands to a word processor or nothing at all, so send them to a plain
    /// text editor.
    pub fn builtin() -> Self {
        let mut overrides = Self::new();
        for extension in [
            "txt", "doc", "diz", "nfo", "1st", "me", "now", "faq", "ini", "cfg", "log",
        ] {
            overrides
                .entries
                .insert(extension.to_string(), TEXT_EDITOR.to_string());
        }
        overrides
    }

    /// Build from an already-parsed map, normalising every key
    pub fn from_map<I, K, V>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut overrides = Self::new();
        for (extension, application) in entries {
            overrides.insert(extension.as_ref(), application)?;
        }
        Ok(overrides)
    }

    /// Load overrides from a JSON or YAML document, chosen by file extension
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let content =
            fs::read_to_string(path).map_err(|source| RegistryError::OverridesUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let raw: BTreeMap<String, String> = match format.as_deref() {
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                RegistryError::OverridesMalformed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
                RegistryError::OverridesMalformed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })?,
            _ => {
                return Err(RegistryError::UnsupportedOverridesFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        tracing::debug!(
            "Loaded {} handler overrides from {}",
            raw.len(),
            path.display()
        );
        Self::from_map(raw)
    }

    /// Add or replace an override. Leading dots and case are ignored.
    pub fn insert(
        &mut self,
        extension: &str,
        application: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let key = normalize_extension(extension)?;
        let application = application.into();
        if application.trim().is_empty() {
            return Err(RegistryError::InvalidOverride {
                extension: extension.to_string(),
                reason: "application identifier is empty".to_string(),
            });
        }
        self.entries.insert(key, application);
        Ok(())
    }

    /// Look up an extension, case-insensitively
    pub fn get(&self, extension: &str) -> Option<&str> {
        let key = extension.trim_start_matches('.').to_lowercase();
        self.entries.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(ext, app)| (ext.as_str(), app.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_extension(extension: &str) -> Result<String, RegistryError> {
    let key = extension.trim().trim_start_matches('.').to_lowercase();

    if key.is_empty() {
        return Err(RegistryError::InvalidOverride {
            extension: extension.to_string(),
            reason: "extension is empty".to_string(),
        });
    }
    if key.contains('/') || key.contains('\\') || key.contains('.') {
        return Err(RegistryError::InvalidOverride {
            extension: extension.to_string(),
            reason: "extension must be a single path component without dots".to_string(),
        });
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_insert_normalizes_key() {
        let mut overrides = HandlerOverrides::new();
        overrides.insert(".TXT", "org.example.Editor").unwrap();

        assert_eq!(overrides.get("txt"), Some("org.example.Editor"));
        assert_eq!(overrides.get("TxT"), Some("org.example.Editor"));
        assert_eq!(overrides.get(".txt"), Some("org.example.Editor"));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let mut overrides = HandlerOverrides::new();
        assert!(overrides.insert("", "org.example.Editor").is_err());
        assert!(overrides.insert("a/b", "org.example.Editor").is_err());
        assert!(overrides.insert("tar.gz", "org.example.Editor").is_err());
        assert!(overrides.insert("txt", "  ").is_err());
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_builtin_covers_game_text_files() {
        let overrides = HandlerOverrides::builtin();
        assert_eq!(overrides.get("diz"), Some(TEXT_EDITOR));
        assert_eq!(overrides.get("doc"), Some(TEXT_EDITOR));
        assert_eq!(overrides.get("exe"), None);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"NFO": "org.example.Viewer", "ans": "org.example.Ansi"}}"#).unwrap();

        let overrides = HandlerOverrides::from_file(file.path()).unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("nfo"), Some("org.example.Viewer"));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "txt: org.example.Editor").unwrap();
        writeln!(file, ".Diz: org.example.Editor").unwrap();

        let overrides = HandlerOverrides::from_file(file.path()).unwrap();
        assert_eq!(overrides.get("diz"), Some("org.example.Editor"));
    }

    #[test]
    fn test_unsupported_format() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let result = HandlerOverrides::from_file(file.path());
        assert!(matches!(
            result,
            Err(RegistryError::UnsupportedOverridesFormat { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let result = HandlerOverrides::from_file(file.path());
        assert!(matches!(result, Err(RegistryError::OverridesMalformed { .. })));
    }
}
