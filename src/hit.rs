#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::CORNER_HIT_HALF_PX;
use crate::doc::{Rect, SceneStore};
use crate::input::Target;
use crate::viewport::{Point, Viewport};

/// One of the eight resize handles on the selection outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    /// All handles, sides first then corners.
    #[cfg(test)]
    pub(crate) const ALL: [ResizeDirection; 8] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Parse a snake_case handle name (`"top"`, `"bottom_right"`, ...).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top_left" => Some(Self::TopLeft),
            "top_right" => Some(Self::TopRight),
            "bottom_left" => Some(Self::BottomLeft),
            "bottom_right" => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Whether this handle is a corner.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn is_corner(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight)
    }

    /// CSS cursor shown while hovering this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Top | Self::Bottom => "ns-resize",
            Self::Left | Self::Right => "ew-resize",
            Self::TopLeft | Self::BottomRight => "nwse-resize",
            Self::TopRight | Self::BottomLeft => "nesw-resize",
        }
    }
}

/// Resolve a screen point to the target a pointer event there would land on.
///
/// The selected object's handles are checked first (they are drawn above
/// everything): corners before sides, later-drawn handles before earlier
/// ones. Then object bodies, topmost first. Handles follow the raw rect, so an
/// inverted rect keeps its handles on the edges they were dragged to.
#[must_use]
pub fn hit_test(
    screen_pt: Point,
    store: &SceneStore,
    viewport: &Viewport,
    selected_id: Option<&str>,
    side_slop_px: f64,
) -> Target {
    if let Some(selected) = selected_id.and_then(|id| store.get(id)) {
        let screen_rect = to_screen(&selected.rect, viewport);
        if let Some(direction) = handle_at(screen_pt, &screen_rect, side_slop_px) {
            return Target::Handle(direction);
        }
    }

    let scene_pt = viewport.screen_to_scene(screen_pt);
    store
        .ordered()
        .into_iter()
        .rev()
        .find(|obj| obj.rect.contains(scene_pt))
        .map_or(Target::Background, |obj| Target::Object(obj.id.clone()))
}

/// Which handle of `rect` (in screen space) lies under `p`, if any.
#[must_use]
pub fn handle_at(p: Point, rect: &Rect, side_slop_px: f64) -> Option<ResizeDirection> {
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    let corners = [
        (ResizeDirection::BottomRight, right, bottom),
        (ResizeDirection::BottomLeft, left, bottom),
        (ResizeDirection::TopRight, right, top),
        (ResizeDirection::TopLeft, left, top),
    ];
    for (direction, cx, cy) in corners {
        if (p.x - cx).abs() <= CORNER_HIT_HALF_PX && (p.y - cy).abs() <= CORNER_HIT_HALF_PX {
            return Some(direction);
        }
    }

    let sides = [
        (ResizeDirection::Bottom, near_horizontal(p, bottom, left, right, side_slop_px)),
        (ResizeDirection::Right, near_vertical(p, right, top, bottom, side_slop_px)),
        (ResizeDirection::Left, near_vertical(p, left, top, bottom, side_slop_px)),
        (ResizeDirection::Top, near_horizontal(p, top, left, right, side_slop_px)),
    ];
    sides.into_iter().find(|(_, hit)| *hit).map(|(direction, _)| direction)
}

fn to_screen(rect: &Rect, viewport: &Viewport) -> Rect {
    let origin = viewport.scene_to_screen(rect.origin());
    Rect::new(origin.x, origin.y, rect.width, rect.height)
}

fn near_horizontal(p: Point, y: f64, x1: f64, x2: f64, slop: f64) -> bool {
    (p.y - y).abs() <= slop && p.x >= x1.min(x2) && p.x <= x1.max(x2)
}

fn near_vertical(p: Point, x: f64, y1: f64, y2: f64, slop: f64) -> bool {
    (p.x - x).abs() <= slop && p.y >= y1.min(y2) && p.y <= y1.max(y2)
}
