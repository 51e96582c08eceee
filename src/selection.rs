//! Mode switching and the click / hover / double-click rules.
//!
//! These are the individual handlers that [`crate::dispatch`] runs in order
//! for one physical event. Object handlers report whether they consumed the
//! event so the background handler after them can be skipped.
//!
//! The background handlers rely on `hovered_id`: when an object handler ran
//! first for the same event, the pointer is over that object and the
//! background must not deselect or create.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use tracing::debug;

use crate::doc::{ObjectId, ObjectKind};
use crate::engine::Scene;
use crate::factory;
use crate::input::Mode;
use crate::viewport::Point;

/// Whether later handlers for the same event still run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Switch modes. Switching clears the selection; choosing the current mode
/// does nothing. Returns whether anything changed.
pub fn set_mode(scene: &mut Scene, next: Mode) -> bool {
    if scene.ui.mode == next {
        return false;
    }
    debug!(from = ?scene.ui.mode, to = ?next, "mode change");
    scene.ui.mode = next;
    scene.ui.selected_id = None;
    true
}

/// Click on an object body. In select mode this selects it and consumes the
/// event.
pub fn click_object(scene: &mut Scene, id: &str) -> Propagation {
    if scene.ui.mode != Mode::Select || !scene.store.contains(id) {
        return Propagation::Continue;
    }
    scene.ui.selected_id = Some(id.to_string());
    Propagation::Stop
}

/// Click on the canvas. In select mode this clears the selection unless the
/// pointer is over an object. Returns whether anything changed.
pub fn click_background(scene: &mut Scene) -> bool {
    if scene.ui.mode != Mode::Select || scene.ui.hovered_id.is_some() {
        return false;
    }
    scene.ui.selected_id.take().is_some()
}

/// Pointer entered an object (or the selection outline of one).
pub fn pointer_enter(scene: &mut Scene, id: &str) -> bool {
    if scene.ui.hovered_id.as_deref() == Some(id) {
        return false;
    }
    scene.ui.hovered_id = Some(id.to_string());
    true
}

/// Pointer left an object. Only clears hover if it still points at `id`, so a
/// late leave from a sibling cannot wipe a newer enter.
pub fn pointer_leave(scene: &mut Scene, id: &str) -> bool {
    if scene.ui.hovered_id.as_deref() != Some(id) {
        return false;
    }
    scene.ui.hovered_id = None;
    true
}

/// Set hover from the target of a click, so hosts that hit-test instead of
/// sending enter/leave still get the hover guards. Unknown ids hover nothing.
pub fn hover_target(scene: &mut Scene, id: Option<&str>) -> bool {
    let next = id.filter(|id| scene.store.contains(id)).map(str::to_string);
    if scene.ui.hovered_id == next {
        return false;
    }
    scene.ui.hovered_id = next;
    true
}

/// Double-click on an object. In select mode, a text object switches the
/// editor into text mode; the returned id is the object whose editing surface
/// the host should focus.
pub fn double_click_object(scene: &mut Scene, id: &str) -> Option<ObjectId> {
    if scene.ui.mode != Mode::Select {
        return None;
    }
    let obj = scene.store.get(id)?;
    match obj.kind {
        ObjectKind::Text => {
            let id = obj.id.clone();
            set_mode(scene, Mode::Text);
            Some(id)
        }
    }
}

/// Double-click on the canvas. In text mode over empty space this creates a
/// text object at the clicked point and returns its id.
pub fn double_click_background(scene: &mut Scene, cursor_screen: Point) -> Option<ObjectId> {
    if scene.ui.mode != Mode::Text || scene.ui.hovered_id.is_some() {
        return None;
    }
    let at = scene.viewport.screen_to_scene(cursor_screen);
    Some(factory::create_object(&mut scene.store, ObjectKind::Text, at, &scene.config))
}
