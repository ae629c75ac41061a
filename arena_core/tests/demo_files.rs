//! The files under demos/ must stay loadable.

use std::path::Path;

use arena_core::{load_problem, EditorTheme, Workspace, WorkspaceSettings};

const DEMO_SETTINGS: &str = include_str!("../../demos/arena.toml");

#[test]
fn demo_settings_parse() {
    let settings = WorkspaceSettings::from_toml_str(DEMO_SETTINGS).unwrap();
    assert_eq!(settings.layout.initial_left_percent, 45.0);
    assert_eq!(settings.editor.default_theme, EditorTheme::GithubDark);
    assert_eq!(settings.editor.features.font_size, 14);
    assert_eq!(settings.languages.options()[0].value, "python");
}

#[test]
fn demo_problem_mounts_sanitized() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/valid_parentheses.json");
    let problem = load_problem(&path).unwrap();
    let settings = WorkspaceSettings::from_toml_str(DEMO_SETTINGS).unwrap();
    let ws = Workspace::new(&settings, problem);

    assert_eq!(ws.editor_config().language.as_str(), "python");
    assert!(ws.starter_code().contains("def is_valid"));
    assert!(!ws.statement().as_str().contains("<script"));
    assert!(!ws.statement().as_str().contains("pwned"));
    assert!(ws.statement().as_str().contains("<em>Brackets must close in the correct order.</em>"));
    assert_eq!(ws.snapshot().widths.left_percent, 45.0);
}
