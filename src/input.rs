//! Input model: modifier keys, mouse buttons, wheel deltas, and the session state machine.
//!
//! `InputState` is a single-variant value, so at most one of drag, rotate or
//! pan can be active. Each active variant carries everything needed to handle
//! the next pointer move and to finish the session on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::rotate::RotationSession;
use crate::snap::SnapMemory;
use crate::wall::WallId;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether any modifier is held.
    #[must_use]
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// The one active interaction session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No session; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A wall is following the pointer.
    Dragging {
        /// Id of the wall being dragged.
        id: WallId,
        /// Snap from the previous pointer move, if any.
        snap: Option<SnapMemory>,
    },
    /// A wall is being rotated around its center.
    Rotating {
        /// Id of the wall being rotated.
        id: WallId,
        /// Pointer and wall angles captured at pointer-down.
        session: RotationSession,
    },
    /// The view is being panned.
    Panning {
        /// View-space position of the previous pointer event.
        last_view: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Id of the wall owned by the active session, if any.
    #[must_use]
    pub fn wall_id(&self) -> Option<&str> {
        match self {
            Self::Dragging { id, .. } | Self::Rotating { id, .. } => Some(id),
            Self::Idle | Self::Panning { .. } => None,
        }
    }
}
