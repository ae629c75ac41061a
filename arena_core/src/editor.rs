//! # Editor Configuration
//!
//! Language and theme selection for the code editor, held apart from the
//! editor widget. The widget reads [`EditorConfig`] on every render; nothing
//! here pushes into it.
//!
//! Languages come from an injected [`LanguageRegistry`]; a [`LanguageId`] can
//! only be obtained by looking a value up in a registry, so the selected
//! language is always one the registry knows about. Themes are the closed set
//! in [`EditorTheme`].

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{WorkspaceError, WorkspaceResult};

/// Built-in registry used when settings do not provide one
pub static DEFAULT_LANGUAGES: Lazy<LanguageRegistry> = Lazy::new(|| LanguageRegistry {
    options: vec![
        LanguageOption::new("JavaScript", "javascript").with_extension("js"),
        LanguageOption::new("C++", "c_cpp").with_extension("cpp"),
        LanguageOption::new("Java", "java").with_extension("java"),
        LanguageOption::new("Python", "python").with_extension("py"),
    ],
});

/// One selectable language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageOption {
    /// Label shown in the language picker
    #[serde(alias = "languageName")]
    pub display_name: String,
    /// Editor mode identifier (e.g. "python", "c_cpp")
    pub value: String,
    /// File extension used to pick a syntax grammar
    #[serde(default)]
    pub extension: Option<String>,
}

impl LanguageOption {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
            extension: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Grammar hint for the highlighter; falls back to the value itself
    pub fn syntax(&self) -> &str {
        self.extension.as_deref().unwrap_or(&self.value)
    }
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Ordered, non-empty list of selectable languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageRegistry {
    options: Vec<LanguageOption>,
}

impl LanguageRegistry {
    /// Build a registry, rejecting empty lists and duplicate values
    pub fn new(options: Vec<LanguageOption>) -> WorkspaceResult<Self> {
        if options.is_empty() {
            return Err(WorkspaceError::invalid_setting(
                "languages",
                "[]",
                "Registry must contain at least one language",
            ));
        }
        for (i, option) in options.iter().enumerate() {
            if option.value.trim().is_empty() {
                return Err(WorkspaceError::invalid_setting(
                    "languages.value",
                    &option.display_name,
                    "Language value must not be empty",
                ));
            }
            if options[..i].iter().any(|earlier| earlier.value == option.value) {
                return Err(WorkspaceError::invalid_setting(
                    "languages.value",
                    &option.value,
                    "Duplicate language value",
                ));
            }
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[LanguageOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    pub fn get(&self, value: &str) -> Option<&LanguageOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Validate a value against the registry
    pub fn resolve(&self, value: &str) -> WorkspaceResult<LanguageId> {
        self.get(value)
            .map(|o| LanguageId(o.value.clone()))
            .ok_or_else(|| WorkspaceError::unknown_language(value))
    }

    /// First entry, the default selection.
    ///
    /// Every constructor rejects empty lists, so there is always one.
    pub fn first(&self) -> LanguageId {
        LanguageId(self.options[0].value.clone())
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        DEFAULT_LANGUAGES.clone()
    }
}

impl<'de> Deserialize<'de> for LanguageRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let options = Vec::<LanguageOption>::deserialize(deserializer)?;
        LanguageRegistry::new(options).map_err(serde::de::Error::custom)
    }
}

/// A language value known to be present in a registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageId(String);

impl LanguageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Editor color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorTheme {
    #[default]
    Monokai,
    Github,
    GithubDark,
}

impl EditorTheme {
    /// All themes for UI selection
    pub const ALL: [EditorTheme; 3] = [EditorTheme::Monokai, EditorTheme::Github, EditorTheme::GithubDark];

    /// Identifier used in settings files
    pub fn id(&self) -> &'static str {
        match self {
            EditorTheme::Monokai => "monokai",
            EditorTheme::Github => "github",
            EditorTheme::GithubDark => "github_dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EditorTheme::Monokai => "Monokai",
            EditorTheme::Github => "Github",
            EditorTheme::GithubDark => "Github Dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        !matches!(self, EditorTheme::Github)
    }
}

impl fmt::Display for EditorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EditorTheme {
    type Err = WorkspaceError;

    /// Accepts either the identifier or the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        EditorTheme::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s) || t.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WorkspaceError::unknown_theme(s))
    }
}

/// Static editor flags; configuration, not workspace state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorFeatures {
    pub basic_autocompletion: bool,
    pub live_autocompletion: bool,
    pub show_line_numbers: bool,
    pub font_size: u16,
}

impl Default for EditorFeatures {
    fn default() -> Self {
        Self {
            basic_autocompletion: true,
            live_autocompletion: true,
            show_line_numbers: true,
            font_size: 16,
        }
    }
}

/// What the editor widget is configured with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorConfig {
    pub language: LanguageId,
    pub theme: EditorTheme,
}

/// Selected language and theme, validated against the registries
#[derive(Debug, Clone)]
pub struct EditorConfigState {
    registry: LanguageRegistry,
    config: EditorConfig,
}

impl EditorConfigState {
    /// Start on the registry's first language.
    pub fn new(registry: LanguageRegistry, theme: EditorTheme) -> Self {
        let language = registry.first();
        Self {
            registry,
            config: EditorConfig { language, theme },
        }
    }

    /// Select a language by registry value; unknown values leave the prior one
    pub fn set_language(&mut self, value: &str) -> WorkspaceResult<()> {
        self.config.language = self.registry.resolve(value)?;
        Ok(())
    }

    /// Select a theme by identifier or display name; unknown values leave the prior one
    pub fn set_theme(&mut self, value: &str) -> WorkspaceResult<()> {
        self.config.theme = value.parse()?;
        Ok(())
    }

    pub fn current(&self) -> &EditorConfig {
        &self.config
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Registry entry for the selected language
    pub fn language_option(&self) -> Option<&LanguageOption> {
        self.registry.get(self.config.language.as_str())
    }
}

impl Default for EditorConfigState {
    fn default() -> Self {
        Self::new(LanguageRegistry::default(), EditorTheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = EditorConfigState::default();
        assert_eq!(state.current().language.as_str(), "javascript");
        assert_eq!(state.current().theme, EditorTheme::Monokai);
    }

    #[test]
    fn test_set_known_language() {
        let mut state = EditorConfigState::default();
        state.set_language("python").unwrap();
        assert_eq!(state.current().language.as_str(), "python");
        assert_eq!(state.language_option().map(|o| o.syntax()), Some("py"));
    }

    #[test]
    fn test_unknown_language_keeps_prior() {
        let mut state = EditorConfigState::default();
        state.set_language("java").unwrap();
        let err = state.set_language("cobol").unwrap_err();
        assert_eq!(err, WorkspaceError::unknown_language("cobol"));
        assert_eq!(state.current().language.as_str(), "java");
    }

    #[test]
    fn test_set_theme_by_id_and_name() {
        let mut state = EditorConfigState::default();
        state.set_theme("github_dark").unwrap();
        assert_eq!(state.current().theme, EditorTheme::GithubDark);
        state.set_theme("Github").unwrap();
        assert_eq!(state.current().theme, EditorTheme::Github);
        assert!(state.set_theme("solarized").is_err());
        assert_eq!(state.current().theme, EditorTheme::Github);
    }

    #[test]
    fn test_registry_rejects_empty_and_duplicates() {
        assert!(LanguageRegistry::new(vec![]).is_err());
        let dup = vec![LanguageOption::new("Python", "python"), LanguageOption::new("Py3", "python")];
        let err = LanguageRegistry::new(dup).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTING");
    }

    #[test]
    fn test_builtin_registry_passes_validation() {
        let builtin = DEFAULT_LANGUAGES.options().to_vec();
        let validated = LanguageRegistry::new(builtin).unwrap();
        assert_eq!(validated, LanguageRegistry::default());
        assert_eq!(validated.first().as_str(), "javascript");
        assert!(DEFAULT_LANGUAGES.contains(DEFAULT_LANGUAGES.first().as_str()));
    }

    #[test]
    fn test_registry_accepts_language_name_alias() {
        let json = r#"[{"languageName": "Python", "value": "python"}]"#;
        let registry: LanguageRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.options()[0].display_name, "Python");
        assert_eq!(registry.options()[0].syntax(), "python");
    }

    #[test]
    fn test_empty_registry_json_rejected() {
        assert!(serde_json::from_str::<LanguageRegistry>("[]").is_err());
    }

    #[test]
    fn test_custom_registry_first_entry_is_default() {
        let registry = LanguageRegistry::new(vec![
            LanguageOption::new("Rust", "rust").with_extension("rs"),
            LanguageOption::new("Go", "golang").with_extension("go"),
        ])
        .unwrap();
        let mut state = EditorConfigState::new(registry, EditorTheme::Github);
        assert_eq!(state.current().language.as_str(), "rust");
        assert!(state.set_language("python").is_err());
        assert_eq!(state.current().language.as_str(), "rust");
    }

    #[test]
    fn test_editor_features_defaults() {
        let features = EditorFeatures::default();
        assert!(features.basic_autocompletion && features.live_autocompletion);
        assert!(features.show_line_numbers);
        assert_eq!(features.font_size, 16);
    }
}
