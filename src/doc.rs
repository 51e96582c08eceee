//! Document model: scene objects, sparse rect updates, and the in-memory store.
//!
//! `SceneObject` is a positioned rectangle with a kind and an open-ended
//! `data` bag whose shape depends on the kind. `SceneStore` owns every live
//! object and is the only place objects are created or mutated. Mutations are
//! merges: a `PartialRect` only touches the fields it carries, and data
//! updates merge key by key so attributes the caller did not mention survive.
//!
//! Objects are never removed. The renderer paints them in creation order via
//! [`SceneStore::ordered`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::viewport::Point;

/// Unique identifier for a scene object (`text-0`, `text-1`, ...).
pub type ObjectId = String;

/// The kind of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Free-form text box edited by the host's text widget.
    Text,
}

impl ObjectKind {
    /// Prefix used when generating ids for objects of this kind.
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Text => crate::consts::TEXT_ID_PREFIX,
        }
    }
}

/// Axis-aligned rectangle in scene space.
///
/// `width` and `height` may be zero or negative after a resize drags an edge
/// past its opposite edge. Nothing here normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The same area with non-negative width and height.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 { (self.x + self.width, -self.width) } else { (self.x, self.width) };
        let (y, height) = if self.height < 0.0 { (self.y + self.height, -self.height) } else { (self.y, self.height) };
        Self { x, y, width, height }
    }

    /// Whether `p` lies inside the rectangle (edges inclusive), treating an
    /// inverted rectangle as its normalized extent.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let r = self.normalized();
        p.x >= r.x && p.x <= r.x + r.width && p.y >= r.y && p.y <= r.y + r.height
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Sparse update for a rectangle. Only present fields are applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialRect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PartialRect {
    /// Update only the position.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    /// Update every field.
    #[must_use]
    pub fn full(rect: Rect) -> Self {
        Self { x: Some(rect.x), y: Some(rect.y), width: Some(rect.width), height: Some(rect.height) }
    }

    /// Apply the present fields onto `rect`.
    pub fn apply_to(&self, rect: &mut Rect) {
        if let Some(x) = self.x {
            rect.x = x;
        }
        if let Some(y) = self.y {
            rect.y = y;
        }
        if let Some(w) = self.width {
            rect.width = w;
        }
        if let Some(h) = self.height {
            rect.height = h;
        }
    }
}

/// A scene object as held by the store and observed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    /// Bounding box in scene coordinates.
    pub rect: Rect,
    /// Per-kind attributes; always a JSON object.
    pub data: serde_json::Value,
}

/// Typed access to the attributes of a `Text` object's data bag.
pub struct TextData<'a> {
    value: &'a serde_json::Value,
}

impl<'a> TextData<'a> {
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Text content. Empty string when absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.value
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

/// In-memory store of scene objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneStore {
    objects: HashMap<ObjectId, SceneObject>,
    /// Ids in creation order; this is also paint order.
    order: Vec<ObjectId>,
    /// Next numeric id suffix. Only ever grows.
    increment: u64,
}

impl SceneStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Whether an object with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.objects.contains_key(id)
    }

    /// Insert a new object with a freshly generated id and return the id.
    ///
    /// Ids are `<prefix>-<n>` with `n` taken from a counter that never
    /// decreases; a candidate that is already taken is skipped, so an existing
    /// object is never overwritten.
    pub fn create_object(&mut self, kind: ObjectKind, rect: Rect, data: serde_json::Value) -> ObjectId {
        let id = loop {
            let candidate = format!("{}-{}", kind.id_prefix(), self.increment);
            self.increment += 1;
            if !self.objects.contains_key(&candidate) {
                break candidate;
            }
        };
        let data = if data.is_object() { data } else { serde_json::json!({}) };
        self.objects.insert(id.clone(), SceneObject { id: id.clone(), kind, rect, data });
        self.order.push(id.clone());
        id
    }

    /// Insert a fully formed object. Refuses (returns false) if the id is taken.
    #[cfg(test)]
    pub(crate) fn insert(&mut self, obj: SceneObject) -> bool {
        if self.objects.contains_key(&obj.id) {
            debug!(id = %obj.id, "insert refused: id already exists");
            return false;
        }
        self.order.push(obj.id.clone());
        self.objects.insert(obj.id.clone(), obj);
        true
    }

    /// Merge the present fields of `partial` into the object's rect.
    /// Returns false (and changes nothing) if the object doesn't exist.
    pub fn upsert_rect(&mut self, id: &str, partial: &PartialRect) -> bool {
        let Some(obj) = self.objects.get_mut(id) else {
            debug!(%id, "upsert_rect on unknown object ignored");
            return false;
        };
        partial.apply_to(&mut obj.rect);
        true
    }

    /// Merge keys of `partial` into the object's data bag. A `null` value
    /// removes the key. Returns false if the object doesn't exist or
    /// `partial` is not a JSON object.
    pub fn upsert_data(&mut self, id: &str, partial: &serde_json::Value) -> bool {
        let Some(obj) = self.objects.get_mut(id) else {
            debug!(%id, "upsert_data on unknown object ignored");
            return false;
        };
        let Some(incoming) = partial.as_object() else {
            return false;
        };

        if !obj.data.is_object() {
            obj.data = serde_json::json!({});
        }

        if let Some(existing) = obj.data.as_object_mut() {
            for (k, v) in incoming {
                if v.is_null() {
                    existing.remove(k);
                } else {
                    existing.insert(k.clone(), v.clone());
                }
            }
        }
        true
    }

    /// Objects in creation (paint) order; the last one is on top.
    #[must_use]
    pub fn ordered(&self) -> Vec<&SceneObject> {
        self.order.iter().filter_map(|id| self.objects.get(id)).collect()
    }

    /// Number of objects currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
