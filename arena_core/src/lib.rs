//! # arena_core - Problem Workspace State Engine
//!
//! `arena_core` is the toolkit-independent heart of Arena, the split-screen
//! problem-solving workspace: a sanitized problem statement on the left, a
//! code editor on the right, and a draggable divider between them.
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: one [`Workspace`] owns every piece of mutable state
//! - **Message passing**: each input is a discrete [`WorkspaceEvent`]
//! - **Reject, don't clamp**: invalid widths and selections keep the last good value
//! - **Safe by type**: the renderer only ever sees [`SafeContent`]
//!
//! ## Quick Start
//!
//! ```rust
//! use arena_core::{Workspace, WorkspaceEvent};
//!
//! let mut ws = Workspace::default();
//! ws.dispatch(WorkspaceEvent::SelectLanguage("python".into()));
//! assert_eq!(ws.editor_config().language.as_str(), "python");
//! ```
//!
//! ## Modules
//!
//! - [`sanitize`] - Strips active markup from problem statements
//! - [`tabs`] - Description panel tab selection
//! - [`split_pane`] - Divider drag state machine and panel widths
//! - [`editor`] - Language/theme registries and editor configuration
//! - [`workspace`] - The composer that owns and dispatches to all of the above
//! - [`settings`] - TOML workspace settings
//! - [`problem`] - Problem documents
//! - [`file_io`] - Problem file loading
//! - [`errors`] - Structured error types

pub mod editor;
pub mod errors;
pub mod file_io;
pub mod problem;
pub mod sanitize;
pub mod settings;
pub mod split_pane;
pub mod tabs;
pub mod workspace;

// Re-export commonly used types at crate root for convenience
pub use editor::{EditorConfig, EditorFeatures, EditorTheme, LanguageOption, LanguageRegistry};
pub use errors::{WorkspaceError, WorkspaceResult};
pub use file_io::load_problem;
pub use problem::Problem;
pub use sanitize::{sanitize, SafeContent};
pub use settings::WorkspaceSettings;
pub use split_pane::{DragOutcome, PointerEvent, SplitPane};
pub use tabs::{Tab, TabSelector};
pub use workspace::{LayoutSnapshot, UserAction, Workspace, WorkspaceEvent};
