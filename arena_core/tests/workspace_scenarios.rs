//! End-to-end workspace scenarios driven through the composer.

use arena_core::editor::{LanguageOption, LanguageRegistry};
use arena_core::settings::WorkspaceSettings;
use arena_core::split_pane::PointerEvent;
use arena_core::{Problem, Tab, Workspace, WorkspaceEvent};

fn move_to(x: f64) -> WorkspaceEvent {
    WorkspaceEvent::Pointer(PointerEvent::Move {
        x,
        container_width: 1000.0,
    })
}

#[test]
fn default_mount_shows_statement_at_midpoint() {
    let ws = Workspace::default();
    let view = ws.snapshot();
    assert_eq!(view.active_tab, Tab::Statement);
    assert_eq!(view.widths.left_percent, 50.0);
    assert_eq!(view.widths.right_percent, 50.0);
}

#[test]
fn drag_resizes_until_pointer_up() {
    let mut ws = Workspace::default();
    ws.dispatch(WorkspaceEvent::Pointer(PointerEvent::Down));
    ws.dispatch(move_to(300.0));
    assert_eq!(ws.snapshot().widths.left_percent, 30.0);

    ws.dispatch(WorkspaceEvent::Pointer(PointerEvent::Up));
    ws.dispatch(move_to(800.0));
    assert_eq!(ws.snapshot().widths.left_percent, 30.0);
    assert_eq!(ws.snapshot().widths.right_percent, 70.0);
}

#[test]
fn out_of_bounds_move_is_rejected() {
    let mut ws = Workspace::default();
    ws.dispatch(WorkspaceEvent::Pointer(PointerEvent::Down));
    ws.dispatch(move_to(50.0));
    assert_eq!(ws.snapshot().widths.left_percent, 50.0);
    assert!(ws.snapshot().dragging);
}

#[test]
fn language_selection_is_validated_against_registry() {
    let mut settings = WorkspaceSettings::default();
    settings.languages = LanguageRegistry::new(vec![
        LanguageOption::new("JavaScript", "javascript"),
        LanguageOption::new("Python", "python"),
    ])
    .unwrap();
    let mut ws = Workspace::new(&settings, Problem::sample());

    ws.dispatch(WorkspaceEvent::SelectLanguage("python".to_string()));
    assert_eq!(ws.editor_config().language.as_str(), "python");

    ws.dispatch(WorkspaceEvent::SelectLanguage("cobol".to_string()));
    assert_eq!(ws.editor_config().language.as_str(), "python");
}

#[test]
fn statement_is_sanitized_before_render() {
    let problem = Problem::new("Hi", "<script>alert(1)</script><p>hi</p>");
    let ws = Workspace::new(&WorkspaceSettings::default(), problem);
    let statement = ws.statement().as_str();
    assert!(!statement.contains("<script"));
    assert!(!statement.contains("alert"));
    assert!(statement.contains("<p>hi</p>"));
}

#[test]
fn tabs_and_editor_are_independent_of_the_split() {
    let mut ws = Workspace::default();
    ws.dispatch(WorkspaceEvent::Pointer(PointerEvent::Down));
    ws.dispatch(move_to(650.0));
    ws.dispatch(WorkspaceEvent::SelectTab(Tab::Submissions));
    ws.dispatch(WorkspaceEvent::SelectTheme("Github Dark".to_string()));
    ws.dispatch(move_to(700.0));
    ws.dispatch(WorkspaceEvent::Pointer(PointerEvent::Up));

    let view = ws.snapshot();
    assert_eq!(view.widths.left_percent, 70.0);
    assert_eq!(view.active_tab, Tab::Submissions);
    assert_eq!(view.editor.theme.id(), "github_dark");
}

#[test]
fn escape_cancel_restores_pre_gesture_width() {
    let mut ws = Workspace::default();
    ws.dispatch(WorkspaceEvent::Pointer(PointerEvent::Down));
    ws.dispatch(move_to(250.0));
    ws.dispatch(WorkspaceEvent::Pointer(PointerEvent::Cancel));
    assert_eq!(ws.snapshot().widths.left_percent, 50.0);
    assert!(!ws.snapshot().dragging);
}
