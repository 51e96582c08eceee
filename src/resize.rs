//! Eight-handle resize gesture.
//!
//! The new rect is always derived from the rect and cursor captured when the
//! handle was grabbed plus the total cursor travel. A side handle moves only
//! its own edge; a corner moves the two edges that meet there; the opposite
//! edges stay put. Dragging an edge past its opposite edge yields a negative
//! width or height, which is kept as-is.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use tracing::debug;

use crate::doc::{ObjectId, PartialRect, Rect};
use crate::engine::Scene;
use crate::hit::ResizeDirection;
use crate::input::InputState;
use crate::viewport::Point;

/// Apply a cursor delta to `initial` for the given handle.
#[must_use]
pub fn resize_rect(initial: &Rect, direction: ResizeDirection, delta: Point) -> Rect {
    let Rect { mut x, mut y, mut width, mut height } = *initial;
    let moves_top = matches!(direction, ResizeDirection::Top | ResizeDirection::TopLeft | ResizeDirection::TopRight);
    let moves_bottom =
        matches!(direction, ResizeDirection::Bottom | ResizeDirection::BottomLeft | ResizeDirection::BottomRight);
    let moves_left = matches!(direction, ResizeDirection::Left | ResizeDirection::TopLeft | ResizeDirection::BottomLeft);
    let moves_right =
        matches!(direction, ResizeDirection::Right | ResizeDirection::TopRight | ResizeDirection::BottomRight);

    if moves_top {
        y = initial.y + delta.y;
        height = initial.height - delta.y;
    }
    if moves_bottom {
        height = initial.height + delta.y;
    }
    if moves_left {
        x = initial.x + delta.x;
        width = initial.width - delta.x;
    }
    if moves_right {
        width = initial.width + delta.x;
    }
    Rect { x, y, width, height }
}

/// Grab `direction` on the selected object. Returns false (no-op) if a
/// gesture is already active or nothing is selected.
pub fn begin_resize(scene: &mut Scene, direction: ResizeDirection, cursor_screen: Point) -> bool {
    if scene.input.is_active() {
        debug!(?direction, "resize begin ignored: gesture already active");
        return false;
    }
    let Some(obj) = scene.ui.selected_id.as_deref().and_then(|id| scene.store.get(id)) else {
        debug!(?direction, "resize begin ignored: no selection");
        return false;
    };

    let cursor = scene.viewport.screen_to_scene(cursor_screen);
    debug!(id = %obj.id, ?direction, "resize begin");
    scene.input = InputState::ResizingObject {
        id: obj.id.clone(),
        direction,
        initial_rect: obj.rect,
        initial_cursor: cursor,
        current_cursor: cursor,
    };
    true
}

/// Track the cursor and write the recomputed rect. Returns the id written,
/// or `None` when no resize is in progress.
pub fn update_resize(scene: &mut Scene, cursor_screen: Point) -> Option<ObjectId> {
    let cursor = scene.viewport.screen_to_scene(cursor_screen);
    let InputState::ResizingObject { current_cursor, .. } = &mut scene.input else {
        return None;
    };
    *current_cursor = cursor;
    commit(scene)
}

/// Commit the last computed rect and return to idle. Returns the id written,
/// or `None` when no resize was in progress or its object is gone.
pub fn end_resize(scene: &mut Scene) -> Option<ObjectId> {
    if !matches!(scene.input, InputState::ResizingObject { .. }) {
        return None;
    }
    let written = commit(scene);
    debug!(id = ?written, "resize end");
    scene.input = InputState::Idle;
    written
}

fn commit(scene: &mut Scene) -> Option<ObjectId> {
    let InputState::ResizingObject { id, direction, initial_rect, initial_cursor, current_cursor } = &scene.input else {
        return None;
    };
    let rect = resize_rect(initial_rect, *direction, *current_cursor - *initial_cursor);
    let id = id.clone();
    scene.store.upsert_rect(&id, &PartialRect::full(rect)).then_some(id)
}
