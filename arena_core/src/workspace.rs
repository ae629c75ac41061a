//! # Workspace Composer
//!
//! Owns every piece of workspace state (the split pane, the tab selector,
//! the editor configuration and the sanitized statement) and is the only
//! thing that mutates them. Front-ends translate their input into
//! [`WorkspaceEvent`]s, call [`Workspace::dispatch`], and render from
//! [`Workspace::snapshot`].
//!
//! ## Example
//!
//! ```rust
//! use arena_core::problem::Problem;
//! use arena_core::settings::WorkspaceSettings;
//! use arena_core::split_pane::PointerEvent;
//! use arena_core::tabs::Tab;
//! use arena_core::workspace::{Workspace, WorkspaceEvent};
//!
//! let mut ws = Workspace::new(&WorkspaceSettings::default(), Problem::sample());
//! ws.dispatch(WorkspaceEvent::Pointer(PointerEvent::Down));
//! ws.dispatch(WorkspaceEvent::Pointer(PointerEvent::Move { x: 300.0, container_width: 1000.0 }));
//! ws.dispatch(WorkspaceEvent::SelectTab(Tab::Editorial));
//!
//! let view = ws.snapshot();
//! assert_eq!(view.widths.left_percent, 30.0);
//! assert_eq!(view.active_tab, Tab::Editorial);
//! ```

use serde::Serialize;

use crate::editor::{EditorConfig, EditorConfigState, EditorFeatures, LanguageOption, LanguageRegistry};
use crate::problem::Problem;
use crate::sanitize::{sanitize, SafeContent};
use crate::settings::WorkspaceSettings;
use crate::split_pane::{DragOutcome, PanelWidths, PointerEvent, SplitPane};
use crate::tabs::{Tab, TabSelector};

/// Discrete inputs to the workspace, processed in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceEvent {
    Pointer(PointerEvent),
    SelectTab(Tab),
    SelectLanguage(String),
    SelectTheme(String),
    LoadProblem(Problem),
    Submit,
    Run,
}

/// User-initiated triggers handed to the host; no payload contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserAction {
    Submit,
    Run,
}

/// Read-only view of the workspace for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub widths: PanelWidths,
    pub dragging: bool,
    pub active_tab: Tab,
    pub editor: EditorConfig,
    pub features: EditorFeatures,
}

/// The layout composer
#[derive(Debug, Clone)]
pub struct Workspace {
    problem: Problem,
    statement: SafeContent,
    tabs: TabSelector,
    split: SplitPane,
    editor: EditorConfigState,
    features: EditorFeatures,
}

impl Workspace {
    /// Mount a workspace for `problem` using injected settings
    pub fn new(settings: &WorkspaceSettings, problem: Problem) -> Self {
        let statement = sanitize(&problem.statement);
        Self {
            problem,
            statement,
            tabs: TabSelector::new(),
            split: SplitPane::new(settings.layout.initial_left_percent),
            editor: EditorConfigState::new(settings.languages.clone(), settings.editor.default_theme),
            features: settings.editor.features,
        }
    }

    /// Apply one event. Returns the user action to forward, if any.
    ///
    /// Rejected proposals and selections leave state as it was.
    pub fn dispatch(&mut self, event: WorkspaceEvent) -> Option<UserAction> {
        match event {
            WorkspaceEvent::Pointer(pointer) => {
                match self.split.handle(pointer) {
                    DragOutcome::Started => tracing::trace!("divider drag started"),
                    DragOutcome::Ended => tracing::trace!("divider drag ended"),
                    DragOutcome::Cancelled => tracing::trace!("divider drag cancelled"),
                    DragOutcome::Committed(_) | DragOutcome::Rejected | DragOutcome::Ignored => {}
                }
                None
            }
            WorkspaceEvent::SelectTab(tab) => {
                if self.tabs.select(tab) {
                    tracing::debug!(tab = tab.id(), "tab selected");
                }
                None
            }
            WorkspaceEvent::SelectLanguage(value) => {
                match self.editor.set_language(&value) {
                    Ok(()) => tracing::debug!(language = %value, "language selected"),
                    Err(e) => tracing::debug!(error = %e, "language selection rejected"),
                }
                None
            }
            WorkspaceEvent::SelectTheme(value) => {
                match self.editor.set_theme(&value) {
                    Ok(()) => tracing::debug!(theme = %value, "theme selected"),
                    Err(e) => tracing::debug!(error = %e, "theme selection rejected"),
                }
                None
            }
            WorkspaceEvent::LoadProblem(problem) => {
                self.load_problem(problem);
                None
            }
            WorkspaceEvent::Submit => {
                tracing::info!(language = %self.editor.current().language, "submit requested");
                Some(UserAction::Submit)
            }
            WorkspaceEvent::Run => {
                tracing::info!(language = %self.editor.current().language, "run requested");
                Some(UserAction::Run)
            }
        }
    }

    /// Replace the problem, re-sanitizing only when the statement changed
    fn load_problem(&mut self, problem: Problem) {
        if problem.statement != self.problem.statement {
            self.statement = sanitize(&problem.statement);
        }
        tracing::info!(title = %problem.title, "problem loaded into workspace");
        self.problem = problem;
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            widths: PanelWidths::from(&self.split),
            dragging: self.split.is_dragging(),
            active_tab: self.tabs.current(),
            editor: self.editor.current().clone(),
            features: self.features,
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// The only statement form the renderer receives
    pub fn statement(&self) -> &SafeContent {
        &self.statement
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.current()
    }

    pub fn split(&self) -> &SplitPane {
        &self.split
    }

    pub fn editor_config(&self) -> &EditorConfig {
        self.editor.current()
    }

    pub fn language_option(&self) -> Option<&LanguageOption> {
        self.editor.language_option()
    }

    pub fn languages(&self) -> &LanguageRegistry {
        self.editor.registry()
    }

    pub fn features(&self) -> EditorFeatures {
        self.features
    }

    /// Starter code for the selected language
    pub fn starter_code(&self) -> &str {
        self.problem.starter_code_for(self.editor.current().language.as_str())
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(&WorkspaceSettings::default(), Problem::sample())
    }
}
