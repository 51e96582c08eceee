//! Shared numeric constants for the ripple crate.

// ── Panning ─────────────────────────────────────────────────────

/// Multiplier applied to wheel deltas before they are subtracted from the
/// viewport offset.
pub const WHEEL_PAN_FACTOR: f64 = 2.0;

// ── Object defaults ─────────────────────────────────────────────

/// Width of a freshly created text object, in scene units.
pub const DEFAULT_TEXT_WIDTH: f64 = 100.0;

/// Height of a freshly created text object, in scene units.
pub const DEFAULT_TEXT_HEIGHT: f64 = 100.0;

/// Placeholder content of a freshly created text object.
pub const DEFAULT_TEXT: &str = "Enter text here";

/// Prefix of generated text object ids (`text-0`, `text-1`, ...).
pub const TEXT_ID_PREFIX: &str = "text";

// ── Handles ─────────────────────────────────────────────────────

/// Half the side of a corner handle's hit square, in screen pixels.
///
/// The visible square is 6px; the hit area adds a 2px margin on each side.
pub const CORNER_HIT_HALF_PX: f64 = 5.0;

/// Default half-width of the hit band around a side handle, in screen pixels.
pub const SIDE_HIT_HALF_PX: f64 = 3.0;
