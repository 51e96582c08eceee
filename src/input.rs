//! Input model: modes, modifier keys, pointer targets, and the gesture state.
//!
//! `Mode` decides how pointer input is read (navigating and arranging objects
//! vs. editing their content). `Target` is what a physical pointer event
//! landed on. `UiState` is the selection/hover state the renderer draws, and
//! `InputState` is the active gesture carried between pointer-down and
//! pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{ObjectId, Rect};
use crate::hit::ResizeDirection;
use crate::viewport::Point;

/// How pointer input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Select, move, and resize objects (default).
    #[default]
    Select,
    /// Create text objects and edit their content.
    Text,
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
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

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// What a pointer event landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The body of a scene object.
    Object(ObjectId),
    /// One of the selected object's resize handles.
    Handle(ResizeDirection),
    /// Empty canvas.
    Background,
}

impl Target {
    /// Parse the host's string form: `"object:<id>"`, `"handle:<direction>"`,
    /// or `"background"`. Unknown strings resolve to `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == "background" {
            return Some(Self::Background);
        }
        if let Some(id) = raw.strip_prefix("object:") {
            return (!id.is_empty()).then(|| Self::Object(id.to_string()));
        }
        raw.strip_prefix("handle:")
            .and_then(ResizeDirection::parse)
            .map(Self::Handle)
    }
}

/// Selection and hover state visible to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Current interaction mode.
    pub mode: Mode,
    /// The id of the currently selected object, if any.
    pub selected_id: Option<ObjectId>,
    /// The id of the object under the pointer, if any.
    pub hovered_id: Option<ObjectId>,
}

/// Internal state for the gesture state machine.
///
/// At most one gesture is active. Each active variant carries the context
/// needed to recompute the object's rect from the pointer position alone, so
/// updates never accumulate rounding drift.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an object across the scene.
    DraggingObject {
        /// Id of the object being dragged.
        id: ObjectId,
        /// Object rect when the drag started.
        initial_rect: Rect,
        /// Scene-space pointer position when the drag started.
        initial_cursor: Point,
    },
    /// The user is resizing the selected object by one of its eight handles.
    ResizingObject {
        /// Id of the object being resized.
        id: ObjectId,
        /// Which side/corner handle is being dragged.
        direction: ResizeDirection,
        /// Object rect when the resize started.
        initial_rect: Rect,
        /// Scene-space pointer position when the resize started.
        initial_cursor: Point,
        /// Scene-space pointer position at the latest update.
        current_cursor: Point,
    },
}

impl InputState {
    /// Whether a gesture is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The object the active gesture manipulates.
    #[must_use]
    pub fn target_id(&self) -> Option<&ObjectId> {
        match self {
            Self::Idle => None,
            Self::DraggingObject { id, .. } | Self::ResizingObject { id, .. } => Some(id),
        }
    }
}
