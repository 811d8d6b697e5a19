#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn store() -> WallStore {
    let mut s = WallStore::new();
    s.insert(Wall::floor(1000.0, 800.0, 0.0, 0.0));
    s.insert(Wall::new("a", 400.0, 0.0, 0.0, 0.0));
    s.insert(Wall::new("b", 200.0, 100.0, 50.0, 1.0));
    s
}

// =============================================================
// Wall
// =============================================================

#[test]
fn endpoints_sit_half_width_from_center() {
    let w = Wall::new("w", 300.0, 10.0, -20.0, 0.7);
    let (a, b) = w.endpoints();
    assert!(approx_eq(geometry::distance(a, b), 300.0));
    let mid = geometry::midpoint(a, b);
    assert!(approx_eq(mid.x, 10.0));
    assert!(approx_eq(mid.z, -20.0));
    assert_eq!(w.endpoint(Endpoint::A), a);
    assert_eq!(w.endpoint(Endpoint::B), b);
}

#[test]
fn floor_is_recognized_by_id() {
    assert!(Wall::floor(100.0, 100.0, 0.0, 0.0).is_floor());
    assert!(!Wall::new("wall-1", 100.0, 0.0, 0.0, 0.0).is_floor());
}

#[test]
fn wall_parses_host_json() {
    let json = r#"{
        "id": "w1",
        "width": 250,
        "height": 240,
        "depth": 12,
        "position": { "x": 10, "y": 120, "z": -30 },
        "rotation": { "y": 1.5 },
        "name": "North",
        "isLocked": true,
        "texture": "brick"
    }"#;
    let w: Wall = serde_json::from_str(json).unwrap();
    assert_eq!(w.width, 250.0);
    assert_eq!(w.position.z, -30.0);
    assert_eq!(w.rotation.y, 1.5);
    assert_eq!(w.rotation.x, 0.0);
    assert!(w.is_locked);
    assert_eq!(w.texture.as_deref(), Some("brick"));
}

#[test]
fn wall_json_minimal_fields() {
    let w: Wall = serde_json::from_str(r#"{"id":"w","width":100,"position":{"x":1,"z":2}}"#).unwrap();
    assert_eq!(w.rotation, Rotation::default());
    assert!(!w.is_locked);
    let out = serde_json::to_value(&w).unwrap();
    assert!(out.get("texture").is_none());
    assert_eq!(out["isLocked"], false);
}

// =============================================================
// FloorBounds
// =============================================================

#[test]
fn bounds_from_floor_entity() {
    let walls = vec![Wall::floor(1000.0, 800.0, 100.0, 0.0)];
    let b = FloorBounds::from_walls(&walls);
    assert_eq!(b.min_x, -400.0);
    assert_eq!(b.max_x, 600.0);
    assert_eq!(b.min_z, -400.0);
    assert_eq!(b.max_z, 400.0);
    assert_eq!(b.width(), 1000.0);
    assert_eq!(b.depth(), 800.0);
}

#[test]
fn missing_floor_uses_default_bounds() {
    let walls = vec![Wall::new("a", 100.0, 0.0, 0.0, 0.0)];
    assert!(FloorBounds::find(&walls).is_none());
    assert_eq!(FloorBounds::from_walls(&walls), FloorBounds::default());
    assert_eq!(FloorBounds::default().min_x, -500.0);
}

#[test]
fn degenerate_floor_uses_default_bounds() {
    let walls = vec![Wall::floor(0.0, 800.0, 0.0, 0.0)];
    assert_eq!(FloorBounds::from_walls(&walls), FloorBounds::default());
}

#[test]
fn clamp_keeps_points_inside() {
    let b = FloorBounds::default();
    let p = b.clamp(WorldPoint::new(900.0, -700.0));
    assert_eq!(p, WorldPoint::new(500.0, -500.0));
    assert_eq!(b.clamp(WorldPoint::new(12.0, 34.0)), WorldPoint::new(12.0, 34.0));
}

// =============================================================
// WallStore
// =============================================================

#[test]
fn insert_replaces_in_place() {
    let mut s = store();
    s.insert(Wall::new("a", 123.0, 0.0, 0.0, 0.0));
    assert_eq!(s.len(), 3);
    assert_eq!(s.walls()[1].width, 123.0);
}

#[test]
fn remove_returns_wall() {
    let mut s = store();
    assert_eq!(s.remove("b").map(|w| w.id), Some("b".to_owned()));
    assert!(s.remove("b").is_none());
    assert_eq!(s.len(), 2);
}

#[test]
fn apply_move_and_rotations() {
    let mut s = store();
    assert!(s.apply(&Action::MoveWall { id: "a".into(), x: 12.0, z: -8.0 }));
    assert!(s.apply(&Action::SetRotation { id: "b".into(), radians: 0.25 }));
    assert!(s.apply(&Action::RotateWall { id: "b".into(), delta: 0.5 }));

    let a = s.get("a").unwrap();
    assert_eq!((a.position.x, a.position.z), (12.0, -8.0));
    assert!(approx_eq(s.get("b").unwrap().rotation.y, 0.75));
}

#[test]
fn apply_ignores_unknown_and_non_wall_actions() {
    let mut s = store();
    assert!(!s.apply(&Action::MoveWall { id: "ghost".into(), x: 0.0, z: 0.0 }));
    assert!(!s.apply(&Action::RenderNeeded));
    let applied = s.apply_all(&[
        Action::SelectWall(Some("a".into())),
        Action::MoveWall { id: "a".into(), x: 1.0, z: 1.0 },
        Action::RenderNeeded,
    ]);
    assert_eq!(applied, 1);
}

#[test]
fn json_round_trip_preserves_order() {
    let s = store();
    let back = WallStore::from_json(&s.to_json().unwrap()).unwrap();
    let ids: Vec<&str> = back.walls().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, ["floor", "a", "b"]);
}

#[test]
fn from_json_rejects_non_array() {
    let err = WallStore::from_json(r#"{"id":"a"}"#).unwrap_err();
    assert_eq!(err.error_code(), "E_SNAPSHOT");
}

#[test]
fn load_snapshot_replaces_everything() {
    let mut s = store();
    s.load_snapshot(vec![Wall::new("z", 10.0, 0.0, 0.0, 0.0)]);
    assert_eq!(s.len(), 1);
    assert!(!s.is_empty());
    assert!(s.get("a").is_none());
}
