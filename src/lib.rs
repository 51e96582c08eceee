//! Interaction core for the ripple map editor.
//!
//! The crate owns everything between raw pointer input and the scene the
//! renderer draws: converting screen points into scene space, the object
//! store, mode and selection rules, and the drag-move and resize gestures.
//! Rendering, the toolbar, and the text-editing widget live in the host; the
//! host feeds input through [`engine::EngineCore`] (or the pure
//! [`engine::reduce`]) and redraws from the resulting [`engine::Scene`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `Scene`, `Action`, `Effect`, the reducer, and [`engine::EngineCore`] |
//! | [`dispatch`] | Ordered delivery of physical events (object handlers before background) |
//! | [`selection`] | Mode switching, click/hover/double-click rules |
//! | [`drag`] | Drag-move gesture |
//! | [`resize`] | Eight-handle resize gesture |
//! | [`factory`] | Creation of new objects |
//! | [`doc`] | Scene objects and the in-memory store |
//! | [`viewport`] | Screen/scene conversion and wheel panning |
//! | [`input`] | Input event types and the gesture state |
//! | [`hit`] | Resize handles and hit-testing |
//! | [`config`] | Editor tunables with environment overrides |
//! | [`consts`] | Fixed numeric constants |
//! | [`error`] | Error types |

pub mod config;
pub mod consts;
pub mod dispatch;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod error;
pub mod factory;
pub mod hit;
pub mod input;
pub mod resize;
pub mod selection;
pub mod viewport;
