//! Application settings

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wwn_decode::AnnotateConfig;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Annotation options (`extract-only`, `tag`)
    #[serde(flatten)]
    pub annotate: AnnotateConfig,
    /// IEEE registry CSV to load on top of the built-in vendors
    pub oui_registry: Option<PathBuf>,
}

impl Settings {
    /// Get the XDG config directory for wwnanno
    /// Uses $XDG_CONFIG_HOME/wwnanno on Linux/macOS, falls back to ~/.config/wwnanno
    fn config_dir() -> Option<PathBuf> {
        // First try XDG_CONFIG_HOME environment variable
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config);
            if path.is_absolute() {
                return Some(path.join("wwnanno"));
            }
        }

        // Fall back to ~/.config/wwnanno (XDG default)
        dirs::home_dir().map(|h| h.join(".config").join("wwnanno"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from the user config directory, defaults if absent or unreadable
    pub fn load() -> Self {
        Self::settings_path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Load settings from an explicit file, reporting any problem
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings in {}", path.display()))
    }

    /// Apply command line overrides
    pub fn with_overrides(
        mut self,
        extract_only: bool,
        tag: Option<String>,
        oui_registry: Option<PathBuf>,
    ) -> Self {
        if extract_only {
            self.annotate.extract_only = true;
        }
        if let Some(tag) = tag {
            self.annotate.tag = tag;
        }
        if oui_registry.is_some() {
            self.oui_registry = oui_registry;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.annotate, AnnotateConfig::default());
        assert_eq!(settings.oui_registry, None);
    }

    #[test]
    fn test_parse_flat_keys() {
        let settings: Settings = serde_json::from_str(
            r#"{"extract-only": true, "tag": " #", "oui-registry": "/usr/share/ieee/oui.csv"}"#,
        )
        .unwrap();
        assert!(settings.annotate.extract_only);
        assert_eq!(settings.annotate.tag, " #");
        assert_eq!(
            settings.oui_registry,
            Some(PathBuf::from("/usr/share/ieee/oui.csv"))
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"extract-only": true}"#).unwrap();
        assert!(settings.annotate.extract_only);
        assert_eq!(settings.annotate.tag, "   #");
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(
            true,
            Some(";".into()),
            Some(PathBuf::from("oui.csv")),
        );
        assert!(settings.annotate.extract_only);
        assert_eq!(settings.annotate.tag, ";");
        assert_eq!(settings.oui_registry, Some(PathBuf::from("oui.csv")));
    }

    #[test]
    fn test_absent_overrides_keep_file_values() {
        let file = Settings {
            annotate: AnnotateConfig {
                extract_only: true,
                tag: " |".into(),
            },
            oui_registry: Some(PathBuf::from("oui.csv")),
        };
        assert_eq!(file.clone().with_overrides(false, None, None), file);
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(Settings::load_from(Path::new("/nonexistent/settings.json")).is_err());
    }
}
