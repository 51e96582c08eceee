#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use tracing::debug;

use crate::config::EditorConfig;
use crate::doc::{ObjectId, ObjectKind, Rect, SceneStore};
use crate::viewport::Point;

/// Create a new object of `kind` with its top-left corner at the scene point
/// `at`, sized and filled from `config`.
pub fn create_object(store: &mut SceneStore, kind: ObjectKind, at: Point, config: &EditorConfig) -> ObjectId {
    let (rect, data) = match kind {
        ObjectKind::Text => (
            Rect::new(at.x, at.y, config.text_width, config.text_height),
            serde_json::json!({ "text": config.default_text }),
        ),
    };
    let id = store.create_object(kind, rect, data);
    debug!(%id, ?kind, x = at.x, y = at.y, "object created");
    id
}
