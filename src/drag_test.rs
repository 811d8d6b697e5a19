#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::{Endpoint, WorldPoint};

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn view() -> ViewState {
    ViewState { zoom: 1.0, pan_x: 0.0, pan_y: 0.0, width: 800.0, height: 600.0, padding: 16.0 }
}

fn bounds() -> FloorBounds {
    FloorBounds { min_x: -500.0, max_x: 500.0, min_z: -500.0, max_z: 500.0 }
}

fn walls() -> Vec<Wall> {
    vec![
        Wall::floor(1000.0, 1000.0, 0.0, 0.0),
        Wall::new("target", 400.0, 0.0, 0.0, 0.0),
        Wall::new("drag", 200.0, 0.0, 300.0, 0.0),
    ]
}

#[test]
fn pointer_maps_to_center() {
    let walls = walls();
    let v = view();
    let b = bounds();
    let pointer = v.world_to_view(&b, WorldPoint::new(100.0, 250.0));
    let result = drag_to(&walls[2], pointer, &walls, &v, &b, None, &EditorConfig::default());
    assert!(approx_eq(result.center.x, 100.0));
    assert!(approx_eq(result.center.z, 250.0));
    assert!(result.memory.is_none());
}

#[test]
fn pointer_outside_floor_is_clamped() {
    let walls = walls();
    let v = view();
    let b = bounds();
    let result = drag_to(&walls[2], Point::new(5000.0, -5000.0), &walls, &v, &b, None, &EditorConfig::default());
    assert!(approx_eq(result.center.x, 500.0));
    assert!(approx_eq(result.center.z, -500.0));
}

#[test]
fn drag_near_endpoint_snaps() {
    let walls = walls();
    let v = view();
    let b = bounds();
    // Dragged wall b end 15 cm left of the target's a end (-200, 0).
    let pointer = v.world_to_view(&b, WorldPoint::new(-315.0, 0.0));
    let result = drag_to(&walls[2], pointer, &walls, &v, &b, None, &EditorConfig::default());
    let memory = result.memory.unwrap();
    assert_eq!(memory.target_id, "target");
    assert_eq!(memory.target_end, Endpoint::A);
    assert!(approx_eq(result.center.x, -300.0));
    assert!(approx_eq(result.center.z, 0.0));
}

#[test]
fn drag_uses_zoomed_view() {
    let walls = walls();
    let mut v = view();
    v.zoom = 3.0;
    v.pan_x = -700.0;
    v.pan_y = -400.0;
    let b = bounds();
    let pointer = v.world_to_view(&b, WorldPoint::new(-40.0, 60.0));
    let result = drag_to(&walls[2], pointer, &walls, &v, &b, None, &EditorConfig::default());
    assert!(approx_eq(result.center.x, -40.0));
    assert!(approx_eq(result.center.z, 60.0));
}

#[test]
fn locked_wall_is_still_draggable() {
    let mut walls = walls();
    walls[2].is_locked = true;
    let v = view();
    let b = bounds();
    let pointer = v.world_to_view(&b, WorldPoint::new(10.0, 400.0));
    let result = drag_to(&walls[2], pointer, &walls, &v, &b, None, &EditorConfig::default());
    assert!(approx_eq(result.center.x, 10.0));
    assert!(approx_eq(result.center.z, 400.0));
}
