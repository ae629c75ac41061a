//! # Split Pane Controller
//!
//! Turns a pointer drag over the divider into the width ratio of the two
//! workspace panels.
//!
//! ## Gesture
//!
//! ```text
//!            Down (on divider)
//!   Idle ─────────────────────────▶ Dragging ──┐ Move: propose x/width*100
//!    ▲                                 │  ▲    │       commit iff 10 < p < 90
//!    │   Up / Leave / Cancel           │  └────┘
//!    └─────────────────────────────────┘
//! ```
//!
//! Proposals outside the open interval (10, 90) are rejected and the previous
//! width stays; nothing is clamped to the boundary. The right panel's width is
//! always derived as `100 - left`.
//!
//! ## Example
//!
//! ```rust
//! use arena_core::split_pane::{DragOutcome, PointerEvent, SplitPane};
//!
//! let mut pane = SplitPane::default();
//! pane.handle(PointerEvent::Down);
//! assert_eq!(
//!     pane.handle(PointerEvent::Move { x: 300.0, container_width: 1000.0 }),
//!     DragOutcome::Committed(30.0)
//! );
//! pane.handle(PointerEvent::Up);
//! assert_eq!(pane.right_percent(), 70.0);
//! ```

use serde::{Deserialize, Serialize};

/// Proposals at or below this percentage are rejected
pub const MIN_PANEL_PERCENT: f64 = 10.0;

/// Proposals at or above this percentage are rejected
pub const MAX_PANEL_PERCENT: f64 = 90.0;

/// Left panel width at mount
pub const DEFAULT_LEFT_PERCENT: f64 = 50.0;

/// Convert a pointer position into a left-panel percentage.
///
/// Returns NaN for a non-positive container width, which every bound check
/// rejects.
pub fn ratio_percent(x: f64, container_width: f64) -> f64 {
    if container_width <= 0.0 {
        return f64::NAN;
    }
    x * 100.0 / container_width
}

/// True if `percent` lies strictly inside the allowed panel range
pub fn is_valid_percent(percent: f64) -> bool {
    percent.is_finite() && percent > MIN_PANEL_PERCENT && percent < MAX_PANEL_PERCENT
}

/// Pointer input delivered to the controller, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed over the divider
    Down,
    /// Pointer moved anywhere in the window
    Move { x: f64, container_width: f64 },
    /// Primary button released anywhere
    Up,
    /// Pointer left the window
    Leave,
    /// Gesture abandoned (Escape); restores the width from pointer-down
    Cancel,
}

/// What a single pointer event did to the layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// A drag session began
    Started,
    /// A new left width was stored
    Committed(f64),
    /// The proposal was out of range; width unchanged
    Rejected,
    /// Event has no meaning in the current state
    Ignored,
    /// The session ended, keeping the current width
    Ended,
    /// The session ended and the pre-gesture width was restored
    Cancelled,
}

/// Drag session state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Left width when the gesture started
        origin_percent: f64,
    },
}

/// Owner of the panel ratio and the drag session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPane {
    left_percent: f64,
    state: DragState,
}

impl Default for SplitPane {
    fn default() -> Self {
        Self {
            left_percent: DEFAULT_LEFT_PERCENT,
            state: DragState::Idle,
        }
    }
}

impl SplitPane {
    /// Create a pane with an initial left width.
    ///
    /// An out-of-range initial value falls back to the midpoint.
    pub fn new(initial_left_percent: f64) -> Self {
        let left_percent = if is_valid_percent(initial_left_percent) {
            initial_left_percent
        } else {
            DEFAULT_LEFT_PERCENT
        };
        Self {
            left_percent,
            state: DragState::Idle,
        }
    }

    pub fn left_percent(&self) -> f64 {
        self.left_percent
    }

    pub fn right_percent(&self) -> f64 {
        100.0 - self.left_percent
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Dispatch one pointer event to the state machine
    pub fn handle(&mut self, event: PointerEvent) -> DragOutcome {
        match event {
            PointerEvent::Down => self.start_drag(),
            PointerEvent::Move { x, container_width } => self.drag_to(x, container_width),
            PointerEvent::Up | PointerEvent::Leave => self.stop_drag(),
            PointerEvent::Cancel => self.cancel(),
        }
    }

    /// Begin a session. A second pointer-down mid-gesture is ignored.
    pub fn start_drag(&mut self) -> DragOutcome {
        if self.is_dragging() {
            return DragOutcome::Ignored;
        }
        self.state = DragState::Dragging {
            origin_percent: self.left_percent,
        };
        DragOutcome::Started
    }

    /// Propose a new width from a pointer position
    pub fn drag_to(&mut self, x: f64, container_width: f64) -> DragOutcome {
        if !self.is_dragging() {
            return DragOutcome::Ignored;
        }
        self.propose(ratio_percent(x, container_width))
    }

    /// End the session, keeping the width. No-op when idle.
    pub fn stop_drag(&mut self) -> DragOutcome {
        if !self.is_dragging() {
            return DragOutcome::Ignored;
        }
        self.state = DragState::Idle;
        DragOutcome::Ended
    }

    /// End the session and restore the width recorded at pointer-down
    pub fn cancel(&mut self) -> DragOutcome {
        match self.state {
            DragState::Idle => DragOutcome::Ignored,
            DragState::Dragging { origin_percent } => {
                self.left_percent = origin_percent;
                self.state = DragState::Idle;
                DragOutcome::Cancelled
            }
        }
    }

    fn propose(&mut self, percent: f64) -> DragOutcome {
        if is_valid_percent(percent) {
            self.left_percent = percent;
            DragOutcome::Committed(percent)
        } else {
            DragOutcome::Rejected
        }
    }
}

/// Serializable view of the split, handed to the panel containers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelWidths {
    pub left_percent: f64,
    pub right_percent: f64,
}

impl From<&SplitPane> for PanelWidths {
    fn from(pane: &SplitPane) -> Self {
        PanelWidths {
            left_percent: pane.left_percent(),
            right_percent: pane.right_percent(),
        }
    }
}
