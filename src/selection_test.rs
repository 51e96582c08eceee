#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::doc::Rect;

fn scene_with_objects(n: u32) -> (Scene, Vec<ObjectId>) {
    let mut scene = Scene::default();
    let ids = (0..n)
        .map(|i| {
            let x = f64::from(i) * 200.0;
            scene.store.create_object(ObjectKind::Text, Rect::new(x, 0.0, 100.0, 100.0), json!({ "text": "t" }))
        })
        .collect();
    (scene, ids)
}

// =============================================================
// set_mode
// =============================================================

#[test]
fn mode_switch_clears_selection() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.selected_id = Some(ids[0].clone());
    assert!(set_mode(&mut scene, Mode::Text));
    assert_eq!(scene.ui.mode, Mode::Text);
    assert!(scene.ui.selected_id.is_none());
}

#[test]
fn same_mode_is_noop() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.selected_id = Some(ids[0].clone());
    assert!(!set_mode(&mut scene, Mode::Select));
    assert_eq!(scene.ui.selected_id.as_deref(), Some(ids[0].as_str()));
}

#[test]
fn mode_switch_keeps_hover() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.hovered_id = Some(ids[0].clone());
    set_mode(&mut scene, Mode::Text);
    assert_eq!(scene.ui.hovered_id.as_deref(), Some(ids[0].as_str()));
}

// =============================================================
// click
// =============================================================

#[test]
fn click_object_selects_and_consumes() {
    let (mut scene, ids) = scene_with_objects(2);
    assert_eq!(click_object(&mut scene, &ids[1]), Propagation::Stop);
    assert_eq!(scene.ui.selected_id.as_deref(), Some(ids[1].as_str()));
}

#[test]
fn click_object_in_text_mode_passes_through() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.mode = Mode::Text;
    assert_eq!(click_object(&mut scene, &ids[0]), Propagation::Continue);
    assert!(scene.ui.selected_id.is_none());
}

#[test]
fn click_unknown_object_passes_through() {
    let (mut scene, _) = scene_with_objects(1);
    assert_eq!(click_object(&mut scene, "ghost"), Propagation::Continue);
    assert!(scene.ui.selected_id.is_none());
}

#[test]
fn background_click_without_hover_deselects() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.selected_id = Some(ids[0].clone());
    assert!(click_background(&mut scene));
    assert!(scene.ui.selected_id.is_none());
}

#[test]
fn background_click_with_hover_keeps_selection() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.selected_id = Some(ids[0].clone());
    scene.ui.hovered_id = Some(ids[0].clone());
    assert!(!click_background(&mut scene));
    assert_eq!(scene.ui.selected_id.as_deref(), Some(ids[0].as_str()));
}

#[test]
fn background_click_in_text_mode_is_noop() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.mode = Mode::Text;
    scene.ui.selected_id = Some(ids[0].clone());
    assert!(!click_background(&mut scene));
    assert!(scene.ui.selected_id.is_some());
}

// =============================================================
// hover
// =============================================================

#[test]
fn enter_sets_hover() {
    let (mut scene, ids) = scene_with_objects(1);
    assert!(pointer_enter(&mut scene, &ids[0]));
    assert_eq!(scene.ui.hovered_id.as_deref(), Some(ids[0].as_str()));
    assert!(!pointer_enter(&mut scene, &ids[0]));
}

#[test]
fn leave_clears_own_hover() {
    let (mut scene, ids) = scene_with_objects(1);
    pointer_enter(&mut scene, &ids[0]);
    assert!(pointer_leave(&mut scene, &ids[0]));
    assert!(scene.ui.hovered_id.is_none());
}

#[test]
fn late_leave_from_sibling_is_ignored() {
    let (mut scene, ids) = scene_with_objects(2);
    pointer_enter(&mut scene, &ids[0]);
    pointer_enter(&mut scene, &ids[1]);
    assert!(!pointer_leave(&mut scene, &ids[0]));
    assert_eq!(scene.ui.hovered_id.as_deref(), Some(ids[1].as_str()));
}

#[test]
fn hover_target_follows_click_target() {
    let (mut scene, ids) = scene_with_objects(2);
    pointer_enter(&mut scene, &ids[0]);
    assert!(hover_target(&mut scene, Some(&ids[1])));
    assert_eq!(scene.ui.hovered_id.as_deref(), Some(ids[1].as_str()));
    assert!(!hover_target(&mut scene, Some(&ids[1])));
    assert!(hover_target(&mut scene, None));
    assert!(scene.ui.hovered_id.is_none());
}

#[test]
fn hover_target_unknown_id_hovers_nothing() {
    let (mut scene, ids) = scene_with_objects(1);
    pointer_enter(&mut scene, &ids[0]);
    assert!(hover_target(&mut scene, Some("text-99")));
    assert!(scene.ui.hovered_id.is_none());
}

// =============================================================
// double-click
// =============================================================

#[test]
fn double_click_text_object_enters_text_mode() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.selected_id = Some(ids[0].clone());
    assert_eq!(double_click_object(&mut scene, &ids[0]), Some(ids[0].clone()));
    assert_eq!(scene.ui.mode, Mode::Text);
    assert!(scene.ui.selected_id.is_none());
}

#[test]
fn double_click_object_in_text_mode_is_noop() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.mode = Mode::Text;
    assert_eq!(double_click_object(&mut scene, &ids[0]), None);
}

#[test]
fn double_click_unknown_object_is_noop() {
    let (mut scene, _) = scene_with_objects(1);
    assert_eq!(double_click_object(&mut scene, "ghost"), None);
    assert_eq!(scene.ui.mode, Mode::Select);
}

#[test]
fn double_click_background_in_text_mode_creates_at_scene_point() {
    let (mut scene, _) = scene_with_objects(0);
    scene.ui.mode = Mode::Text;
    scene.viewport.offset_x = 10.0;
    scene.viewport.offset_y = -10.0;
    let id = double_click_background(&mut scene, Point::new(50.0, 50.0)).unwrap();
    let obj = scene.store.get(&id).unwrap();
    assert_eq!(obj.rect, Rect::new(40.0, 60.0, 100.0, 100.0));
    assert_eq!(obj.data, json!({ "text": "Enter text here" }));
}

#[test]
fn double_click_background_over_object_does_not_create() {
    let (mut scene, ids) = scene_with_objects(1);
    scene.ui.mode = Mode::Text;
    scene.ui.hovered_id = Some(ids[0].clone());
    assert_eq!(double_click_background(&mut scene, Point::new(5.0, 5.0)), None);
    assert_eq!(scene.store.len(), 1);
}

#[test]
fn double_click_background_in_select_mode_does_not_create() {
    let (mut scene, _) = scene_with_objects(0);
    assert_eq!(double_click_background(&mut scene, Point::new(5.0, 5.0)), None);
    assert!(scene.store.is_empty());
}
