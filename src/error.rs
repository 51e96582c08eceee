//! Error types.
//!
//! Core operations are total, so none of these cross the reducer boundary.
//! [`InvariantViolation`] is built, logged, and repaired in place;
//! [`ConfigError`] is the only error a caller ever sees.

use crate::doc::ObjectId;

/// A scene reference that no longer points at a live object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("selected object does not exist: {0}")]
    DanglingSelection(ObjectId),
    #[error("hovered object does not exist: {0}")]
    DanglingHover(ObjectId),
    #[error("gesture target does not exist: {0}")]
    DanglingGesture(ObjectId),
}

/// Failure to build an [`crate::config::EditorConfig`] from overrides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
