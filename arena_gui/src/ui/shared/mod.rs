//! Shared UI components
//!
//! Contains:
//! - `divider` - Draggable vertical divider between the panels

pub mod divider;
