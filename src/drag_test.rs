#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::doc::ObjectKind;

fn scene_with(rect: Rect) -> (Scene, ObjectId) {
    let mut scene = Scene::default();
    let id = scene.store.create_object(ObjectKind::Text, rect, json!({ "text": "t" }));
    (scene, id)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn dragged_position_adds_cursor_travel() {
    let p = dragged_position(&Rect::new(10.0, 10.0, 50.0, 50.0), pt(15.0, 15.0), pt(40.0, 20.0));
    assert_eq!(p, pt(35.0, 15.0));
}

#[test]
fn drag_translates_object() {
    let (mut scene, id) = scene_with(Rect::new(10.0, 10.0, 50.0, 50.0));
    assert!(begin_drag(&mut scene, &id, pt(15.0, 15.0)));
    assert_eq!(update_drag(&mut scene, pt(40.0, 20.0)), Some(id.clone()));
    assert_eq!(scene.store.get(&id).unwrap().rect, Rect::new(35.0, 15.0, 50.0, 50.0));
}

#[test]
fn drag_holds_still_after_switch_to_text_mode() {
    let (mut scene, id) = scene_with(Rect::new(10.0, 10.0, 50.0, 50.0));
    begin_drag(&mut scene, &id, pt(15.0, 15.0));
    scene.ui.mode = Mode::Text;
    assert_eq!(update_drag(&mut scene, pt(40.0, 20.0)), None);
    assert_eq!(scene.store.get(&id).unwrap().rect, Rect::new(10.0, 10.0, 50.0, 50.0));
    assert!(end_drag(&mut scene));
    assert!(!scene.input.is_active());
}

#[test]
fn drag_works_in_scene_space_under_pan() {
    let (mut scene, id) = scene_with(Rect::new(10.0, 10.0, 50.0, 50.0));
    scene.viewport.offset_x = 100.0;
    scene.viewport.offset_y = -50.0;
    // Screen (115, -35) is scene (15, 15).
    begin_drag(&mut scene, &id, pt(115.0, -35.0));
    update_drag(&mut scene, pt(140.0, -30.0));
    assert_eq!(scene.store.get(&id).unwrap().rect, Rect::new(35.0, 15.0, 50.0, 50.0));
}

#[test]
fn updates_are_relative_to_start_not_previous() {
    let (mut scene, id) = scene_with(Rect::new(0.0, 0.0, 10.0, 10.0));
    begin_drag(&mut scene, &id, pt(0.0, 0.0));
    update_drag(&mut scene, pt(5.0, 5.0));
    update_drag(&mut scene, pt(7.0, 1.0));
    assert_eq!(scene.store.get(&id).unwrap().rect, Rect::new(7.0, 1.0, 10.0, 10.0));
}

#[test]
fn drag_keeps_inverted_size() {
    let (mut scene, id) = scene_with(Rect::new(0.0, 0.0, -20.0, 30.0));
    begin_drag(&mut scene, &id, pt(0.0, 0.0));
    update_drag(&mut scene, pt(1.0, 2.0));
    assert_eq!(scene.store.get(&id).unwrap().rect, Rect::new(1.0, 2.0, -20.0, 30.0));
}

#[test]
fn drag_preserves_data() {
    let (mut scene, id) = scene_with(Rect::new(0.0, 0.0, 10.0, 10.0));
    begin_drag(&mut scene, &id, pt(0.0, 0.0));
    update_drag(&mut scene, pt(3.0, 3.0));
    assert_eq!(scene.store.get(&id).unwrap().data, json!({ "text": "t" }));
}

#[test]
fn update_without_drag_is_noop() {
    let (mut scene, id) = scene_with(Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(update_drag(&mut scene, pt(3.0, 3.0)), None);
    assert_eq!(scene.store.get(&id).unwrap().rect, Rect::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn end_drag_returns_to_idle() {
    let (mut scene, id) = scene_with(Rect::new(0.0, 0.0, 10.0, 10.0));
    begin_drag(&mut scene, &id, pt(0.0, 0.0));
    assert!(end_drag(&mut scene));
    assert_eq!(scene.input, InputState::Idle);
    assert!(!end_drag(&mut scene));
    assert_eq!(update_drag(&mut scene, pt(9.0, 9.0)), None);
}

#[test]
fn begin_drag_requires_select_mode() {
    let (mut scene, id) = scene_with(Rect::new(0.0, 0.0, 10.0, 10.0));
    scene.ui.mode = Mode::Text;
    assert!(!begin_drag(&mut scene, &id, pt(0.0, 0.0)));
    assert!(!scene.input.is_active());
}

#[test]
fn begin_drag_unknown_object_is_noop() {
    let (mut scene, _) = scene_with(Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(!begin_drag(&mut scene, "ghost", pt(0.0, 0.0)));
    assert!(!scene.input.is_active());
}

#[test]
fn second_begin_keeps_first_gesture() {
    let (mut scene, a) = scene_with(Rect::new(0.0, 0.0, 10.0, 10.0));
    let b = scene.store.create_object(ObjectKind::Text, Rect::new(50.0, 50.0, 10.0, 10.0), json!({}));
    begin_drag(&mut scene, &a, pt(0.0, 0.0));
    assert!(!begin_drag(&mut scene, &b, pt(50.0, 50.0)));
    update_drag(&mut scene, pt(5.0, 0.0));
    assert_eq!(scene.store.get(&a).unwrap().rect.x, 5.0);
    assert_eq!(scene.store.get(&b).unwrap().rect.x, 50.0);
}
