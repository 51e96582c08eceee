//! Drag-move gesture.
//!
//! `Idle -> DraggingObject` on pointer-down over an object in select mode,
//! `DraggingObject -> DraggingObject` on every pointer move while still in
//! select mode, and back to `Idle` on any pointer-up. Each move recomputes
//! the position from the rect and cursor captured at the start, so only
//! `x`/`y` change and width/height are never touched.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use tracing::debug;

use crate::doc::{ObjectId, PartialRect, Rect};
use crate::engine::Scene;
use crate::input::{InputState, Mode};
use crate::viewport::Point;

/// Position of a dragged rect given the cursor travel since the drag began.
#[must_use]
pub fn dragged_position(initial_rect: &Rect, initial_cursor: Point, current_cursor: Point) -> Point {
    initial_rect.origin() + (current_cursor - initial_cursor)
}

/// Start dragging `id`. Returns false (no-op) unless the scene is idle, in
/// select mode, and the object exists.
pub fn begin_drag(scene: &mut Scene, id: &str, cursor_screen: Point) -> bool {
    if scene.input.is_active() {
        debug!(%id, "drag begin ignored: gesture already active");
        return false;
    }
    if scene.ui.mode != Mode::Select {
        debug!(%id, mode = ?scene.ui.mode, "drag begin ignored: not in select mode");
        return false;
    }
    let Some(obj) = scene.store.get(id) else {
        debug!(%id, "drag begin ignored: unknown object");
        return false;
    };

    let initial_cursor = scene.viewport.screen_to_scene(cursor_screen);
    scene.input = InputState::DraggingObject { id: obj.id.clone(), initial_rect: obj.rect, initial_cursor };
    debug!(%id, x = initial_cursor.x, y = initial_cursor.y, "drag begin");
    true
}

/// Move the dragged object to follow the cursor. Returns the id of the
/// object written, or `None` when no drag is in progress. Moves only apply in
/// select mode; a drag that outlives a switch to text mode holds still until
/// pointer-up.
pub fn update_drag(scene: &mut Scene, cursor_screen: Point) -> Option<ObjectId> {
    let InputState::DraggingObject { id, initial_rect, initial_cursor } = &scene.input else {
        return None;
    };
    if scene.ui.mode != Mode::Select {
        debug!(%id, mode = ?scene.ui.mode, "drag move ignored: not in select mode");
        return None;
    }

    let current = scene.viewport.screen_to_scene(cursor_screen);
    let pos = dragged_position(initial_rect, *initial_cursor, current);
    let id = id.clone();
    scene.store.upsert_rect(&id, &PartialRect::position(pos.x, pos.y)).then_some(id)
}

/// Finish the drag. Returns false if no drag was in progress.
pub fn end_drag(scene: &mut Scene) -> bool {
    let InputState::DraggingObject { id, .. } = &scene.input else {
        return false;
    };
    debug!(%id, "drag end");
    scene.input = InputState::Idle;
    true
}
