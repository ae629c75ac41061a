//! UI module for Arena GUI
//!
//! # Panel Structure
//! - `description_panel` - Left panel: tab bar plus the active tab's pane
//! - `editor_panel` - Right panel: action toolbar plus the code editor
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/divider` - Draggable divider between the two panels

// Top-level panels
pub mod description_panel;
pub mod editor_panel;
pub mod status_bar;

// Description panel children
pub mod tab_bar;

// Shared components
pub mod shared;
