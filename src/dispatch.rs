//! Ordered delivery of physical input events.
//!
//! One physical event can reach several handlers: the handler on the object
//! under the pointer, then the canvas background. [`route`] expands an
//! [`InputEvent`] into that ordered list of [`Action`]s, object handlers
//! first. The engine runs them in order and stops early when an object
//! handler consumes the event.
//!
//! Clicks and double-clicks first set hover from their own target, so the
//! background handler's hover guard holds even when the host never sends
//! enter/leave events.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use crate::engine::{Action, Scene};
use crate::input::{InputState, Modifiers, Target, WheelDelta};
use crate::viewport::Point;

/// A raw input event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { target: Target, point: Point, modifiers: Modifiers },
    PointerMove { point: Point },
    PointerUp { point: Point },
    /// Pointer entered an object body or the selection outline.
    PointerEnter { target: Target },
    /// Pointer left an object body or the selection outline.
    PointerLeave { target: Target },
    Click { target: Target },
    DoubleClick { target: Target, point: Point },
    Wheel(WheelDelta),
    SurfaceResized { width: f64, height: f64 },
}

/// Expand `event` into the handlers it reaches, in delivery order.
#[must_use]
pub fn route(scene: &Scene, event: &InputEvent) -> Vec<Action> {
    match event {
        InputEvent::PointerDown { target, point, .. } => match target {
            Target::Object(id) => vec![Action::BeginDrag { id: id.clone(), cursor: *point }],
            Target::Handle(direction) => vec![Action::BeginResize { direction: *direction, cursor: *point }],
            Target::Background => Vec::new(),
        },
        InputEvent::PointerMove { point } => match scene.input {
            InputState::Idle => Vec::new(),
            InputState::DraggingObject { .. } => vec![Action::UpdateDrag(*point)],
            InputState::ResizingObject { .. } => vec![Action::UpdateResize(*point)],
        },
        InputEvent::PointerUp { .. } => match scene.input {
            InputState::Idle => Vec::new(),
            InputState::DraggingObject { .. } => vec![Action::EndDrag],
            InputState::ResizingObject { .. } => vec![Action::EndResize],
        },
        InputEvent::PointerEnter { target } => {
            hover_id(scene, target).map_or_else(Vec::new, |id| vec![Action::PointerEnter(id)])
        }
        InputEvent::PointerLeave { target } => {
            hover_id(scene, target).map_or_else(Vec::new, |id| vec![Action::PointerLeave(id)])
        }
        InputEvent::Click { target } => {
            let mut actions = vec![Action::HoverTarget(hover_id(scene, target))];
            match target {
                Target::Object(id) => actions.extend([Action::ClickObject(id.clone()), Action::ClickBackground]),
                Target::Handle(_) | Target::Background => actions.push(Action::ClickBackground),
            }
            actions
        }
        InputEvent::DoubleClick { target, point } => {
            let mut actions = vec![Action::HoverTarget(hover_id(scene, target))];
            match target {
                Target::Object(id) => {
                    actions.extend([Action::DoubleClickObject(id.clone()), Action::DoubleClickBackground(*point)]);
                }
                Target::Handle(_) | Target::Background => actions.push(Action::DoubleClickBackground(*point)),
            }
            actions
        }
        InputEvent::Wheel(delta) => vec![Action::Pan(*delta)],
        InputEvent::SurfaceResized { width, height } => {
            vec![Action::ResizeSurface { width: *width, height: *height }]
        }
    }
}

/// The object a hover event refers to. The selection outline and its handles
/// hover as the selected object.
fn hover_id(scene: &Scene, target: &Target) -> Option<String> {
    match target {
        Target::Object(id) => Some(id.clone()),
        Target::Handle(_) => scene.ui.selected_id.clone(),
        Target::Background => None,
    }
}
