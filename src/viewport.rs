#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::ops::{Add, Sub};

use crate::consts::WHEEL_PAN_FACTOR;
use crate::input::WheelDelta;

/// A point in either screen or scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// The pannable window onto the scene.
///
/// `offset_x` / `offset_y` are the pan translation in screen pixels and are
/// never clamped. `screen_width` / `screen_height` track the host surface and
/// are set whenever it resizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pub screen_width: f64,
    pub screen_height: f64,
}

impl Viewport {
    /// Convert a screen-space point to scene coordinates.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point { x: screen.x - self.offset_x, y: screen.y - self.offset_y }
    }

    /// Convert a scene-space point to screen coordinates.
    #[must_use]
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point { x: scene.x + self.offset_x, y: scene.y + self.offset_y }
    }

    /// Return this viewport panned by a wheel delta.
    ///
    /// Scrolling down/right moves the content up/left: the offset decreases by
    /// twice the delta on each axis.
    #[must_use]
    pub fn panned(&self, delta: WheelDelta) -> Self {
        Self {
            offset_x: self.offset_x - delta.dx * WHEEL_PAN_FACTOR,
            offset_y: self.offset_y - delta.dy * WHEEL_PAN_FACTOR,
            ..*self
        }
    }

    /// Return this viewport with a new screen size; the offset is kept.
    #[must_use]
    pub fn resized(&self, width: f64, height: f64) -> Self {
        Self { screen_width: width, screen_height: height, ..*self }
    }
}
