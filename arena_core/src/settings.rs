//! # Workspace Settings
//!
//! Injected configuration for the workspace: the language registry, the
//! default theme, static editor flags and the initial split. Stored as TOML;
//! every section is optional and falls back to the built-in defaults.
//!
//! ```toml
//! [layout]
//! initial_left_percent = 45.0
//!
//! [editor]
//! default_theme = "github_dark"
//! font_size = 14
//!
//! [[languages]]
//! display_name = "Python"
//! value = "python"
//! extension = "py"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editor::{EditorFeatures, EditorTheme, LanguageRegistry, DEFAULT_LANGUAGES};
use crate::errors::{WorkspaceError, WorkspaceResult};
use crate::split_pane::{is_valid_percent, DEFAULT_LEFT_PERCENT};

/// Conventional settings file name
pub const SETTINGS_FILE_NAME: &str = "arena.toml";

/// Panel layout settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub initial_left_percent: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            initial_left_percent: DEFAULT_LEFT_PERCENT,
        }
    }
}

/// Editor settings: default theme plus static feature flags
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub default_theme: EditorTheme,
    #[serde(flatten)]
    pub features: EditorFeatures,
}

/// Complete settings document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    pub layout: LayoutSettings,
    pub editor: EditorSettings,
    pub languages: LanguageRegistry,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            editor: EditorSettings::default(),
            languages: DEFAULT_LANGUAGES.clone(),
        }
    }
}

impl WorkspaceSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> WorkspaceResult<Self> {
        let settings: WorkspaceSettings =
            toml::from_str(text).map_err(|e| WorkspaceError::serialization(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to TOML text
    pub fn to_toml_string(&self) -> WorkspaceResult<String> {
        toml::to_string_pretty(self).map_err(|e| WorkspaceError::serialization(e.to_string()))
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> WorkspaceResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| WorkspaceError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            languages = settings.languages.len(),
            "loaded workspace settings"
        );
        Ok(settings)
    }

    /// Load settings from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> WorkspaceResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check values serde cannot express as types
    pub fn validate(&self) -> WorkspaceResult<()> {
        if !is_valid_percent(self.layout.initial_left_percent) {
            return Err(WorkspaceError::invalid_setting(
                "layout.initial_left_percent",
                self.layout.initial_left_percent.to_string(),
                "Must be strictly between 10 and 90",
            ));
        }
        if self.editor.features.font_size == 0 {
            return Err(WorkspaceError::invalid_setting(
                "editor.font_size",
                "0",
                "Font size must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = WorkspaceSettings::from_toml_str("").unwrap();
        assert_eq!(settings, WorkspaceSettings::default());
        assert_eq!(settings.languages.len(), 4);
    }

    #[test]
    fn test_custom_languages_and_theme() {
        let text = r#"
            [editor]
            default_theme = "github_dark"
            font_size = 14

            [[languages]]
            display_name = "Python"
            value = "python"
            extension = "py"

            [[languages]]
            languageName = "Rust"
            value = "rust"
        "#;
        let settings = WorkspaceSettings::from_toml_str(text).unwrap();
        assert_eq!(settings.editor.default_theme, EditorTheme::GithubDark);
        assert_eq!(settings.editor.features.font_size, 14);
        assert!(settings.editor.features.show_line_numbers);
        assert_eq!(settings.languages.len(), 2);
        assert!(settings.languages.contains("rust"));
        assert_eq!(settings.layout.initial_left_percent, 50.0);
    }

    #[test]
    fn test_empty_language_list_rejected() {
        let err = WorkspaceSettings::from_toml_str("languages = []").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_out_of_range_split_rejected() {
        let err = WorkspaceSettings::from_toml_str("[layout]\ninitial_left_percent = 95.0").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTING");
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = WorkspaceSettings::default();
        let text = settings.to_toml_string().unwrap();
        let roundtrip = WorkspaceSettings::from_toml_str(&text).unwrap();
        assert_eq!(roundtrip, settings);
    }

    #[test]
    fn test_load_missing_file() {
        let err = WorkspaceSettings::load(Path::new("/definitely/not/here/arena.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "[layout]\ninitial_left_percent = 40.0\n").unwrap();
        let settings = WorkspaceSettings::load(&path).unwrap();
        assert_eq!(settings.layout.initial_left_percent, 40.0);
    }
}
