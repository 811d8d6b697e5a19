#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Floor, a 400 cm target wall on the X axis, and a 200 cm dragged wall.
fn scene() -> Vec<Wall> {
    vec![
        Wall::floor(1000.0, 1000.0, 0.0, 0.0),
        Wall::new("target", 400.0, 0.0, 0.0, 0.0),
        Wall::new("drag", 200.0, 0.0, 300.0, 0.0),
    ]
}

fn dragged(walls: &[Wall]) -> &Wall {
    walls.iter().find(|w| w.id == "drag").unwrap()
}

/// Tentative center that puts the dragged wall's `b` end `gap` cm left of (-200, 0).
fn center_with_gap(gap: f64) -> WorldPoint {
    WorldPoint::new(-300.0 - gap, 0.0)
}

// =============================================================
// Fresh candidates
// =============================================================

#[test]
fn snaps_within_accept_radius() {
    let walls = scene();
    let cfg = EditorConfig::default();
    let result = find_snap(dragged(&walls), center_with_gap(15.0), &walls, None, &cfg);

    let memory = result.memory.as_ref().unwrap();
    assert_eq!(memory.target_id, "target");
    assert_eq!(memory.target_end, Endpoint::A);
    assert_eq!(memory.source_end, Endpoint::B);
    assert!(approx_eq(result.center.x, -300.0));
    assert!(approx_eq(result.center.z, 0.0));
}

#[test]
fn snapped_endpoints_coincide() {
    let walls = scene();
    let cfg = EditorConfig::default();
    let tentative = WorldPoint::new(-312.3, 9.7);
    let result = find_snap(dragged(&walls), tentative, &walls, None, &cfg);
    let memory = result.memory.unwrap();

    let source = geometry::endpoint(result.center, 200.0, 0.0, memory.source_end);
    let target = walls[1].endpoint(memory.target_end);
    assert!(approx_eq(source.x, target.x));
    assert!(approx_eq(source.z, target.z));
}

#[test]
fn candidate_reports_target_endpoint_position() {
    let walls = scene();
    let cfg = EditorConfig::default();
    let result = find_snap(dragged(&walls), center_with_gap(10.0), &walls, None, &cfg);
    let candidate = result.candidate().unwrap();
    assert_eq!(candidate.target_wall_id, "target");
    assert_eq!(candidate.target_endpoint, Endpoint::A);
    assert_eq!(candidate.source_endpoint, Endpoint::B);
    assert!(approx_eq(candidate.world_x, -200.0));
    assert!(approx_eq(candidate.world_z, 0.0));
}

#[test]
fn no_snap_beyond_accept_radius_without_memory() {
    let walls = scene();
    let cfg = EditorConfig::default();
    let result = find_snap(dragged(&walls), center_with_gap(35.0), &walls, None, &cfg);
    assert!(result.memory.is_none());
    assert!(result.candidate().is_none());
    assert_eq!(result.center, center_with_gap(35.0));
}

#[test]
fn picks_nearest_pair_across_walls() {
    let mut walls = scene();
    // A second target whose `b` end sits 5 cm from the dragged wall's `a` end.
    walls.push(Wall::new("near", 100.0, -465.0, 0.0, 0.0));
    let cfg = EditorConfig::default();
    // drag a = -410, near b = -415 → 5 cm; drag b vs target a → 10 cm.
    let result = find_snap(dragged(&walls), center_with_gap(10.0), &walls, None, &cfg);
    let memory = result.memory.unwrap();
    assert_eq!(memory.target_id, "near");
    assert_eq!(memory.source_end, Endpoint::A);
    assert_eq!(memory.target_end, Endpoint::B);
}

#[test]
fn ties_resolve_to_first_wall_in_order() {
    let walls = vec![
        Wall::new("first", 100.0, -260.0, 0.0, 0.0),
        Wall::new("second", 100.0, -260.0, 0.0, 0.0),
        Wall::new("drag", 200.0, 0.0, 0.0, 0.0),
    ];
    let cfg = EditorConfig::default();
    // Both targets' `b` end is at -210; dragged `b` end at -200.
    let result = find_snap(&walls[2], WorldPoint::new(-300.0, 0.0), &walls, None, &cfg);
    assert_eq!(result.memory.unwrap().target_id, "first");
}

#[test]
fn never_snaps_to_itself() {
    let walls = vec![Wall::new("drag", 200.0, 0.0, 0.0, 0.0)];
    let cfg = EditorConfig::default();
    let result = find_snap(&walls[0], WorldPoint::new(0.0, 0.0), &walls, None, &cfg);
    assert!(result.memory.is_none());
}

#[test]
fn floor_is_not_a_target() {
    // Floor endpoints along X sit at (±500, 0).
    let walls = vec![Wall::floor(1000.0, 1000.0, 0.0, 0.0), Wall::new("drag", 200.0, 0.0, 0.0, 0.0)];
    let cfg = EditorConfig::default();
    let result = find_snap(&walls[1], WorldPoint::new(395.0, 0.0), &walls, None, &cfg);
    assert!(result.memory.is_none());
}

#[test]
fn zero_width_wall_snaps_by_center() {
    let walls = vec![Wall::new("target", 400.0, 0.0, 0.0, 0.0), Wall::new("post", 0.0, 0.0, 0.0, 0.0)];
    let cfg = EditorConfig::default();
    let result = find_snap(&walls[1], WorldPoint::new(190.0, 8.0), &walls, None, &cfg);
    let memory = result.memory.unwrap();
    assert_eq!(memory.target_end, Endpoint::B);
    assert!(approx_eq(result.center.x, 200.0));
    assert!(approx_eq(result.center.z, 0.0));
}

#[test]
fn rotated_target_endpoints() {
    let walls = vec![
        Wall::new("target", 400.0, 0.0, 0.0, std::f64::consts::FRAC_PI_2),
        Wall::new("drag", 200.0, 0.0, 0.0, 0.0),
    ];
    let cfg = EditorConfig::default();
    // Target b end at (0, 200); put dragged a end at (12, 200).
    let result = find_snap(&walls[1], WorldPoint::new(112.0, 200.0), &walls, None, &cfg);
    let memory = result.memory.unwrap();
    assert_eq!(memory.target_end, Endpoint::B);
    assert_eq!(memory.source_end, Endpoint::A);
    assert!(approx_eq(result.center.x, 100.0));
    assert!((result.center.z - 200.0).abs() < 1e-9);
}

// =============================================================
// Hysteresis
// =============================================================

fn snapped_memory(walls: &[Wall]) -> SnapMemory {
    let cfg = EditorConfig::default();
    find_snap(dragged(walls), center_with_gap(5.0), walls, None, &cfg).memory.unwrap()
}

#[test]
fn hysteresis_retains_snap_at_25cm() {
    let walls = scene();
    let cfg = EditorConfig::default();
    let prev = snapped_memory(&walls);
    let result = find_snap(dragged(&walls), center_with_gap(25.0), &walls, Some(&prev), &cfg);
    assert_eq!(result.memory.unwrap().target_id, "target");
}

#[test]
fn hysteresis_keeps_snap_between_accept_and_loose_radius() {
    let walls = scene();
    let cfg = EditorConfig::default();
    let prev = snapped_memory(&walls);
    let result = find_snap(dragged(&walls), center_with_gap(40.0), &walls, Some(&prev), &cfg);
    let memory = result.memory.unwrap();
    assert_eq!(memory.target_id, "target");
    assert_eq!(memory.target_end, Endpoint::A);
    assert!(approx_eq(result.center.x, -300.0));
}

#[test]
fn hysteresis_clears_at_50cm() {
    let walls = scene();
    let cfg = EditorConfig::default();
    let prev = snapped_memory(&walls);
    let result = find_snap(dragged(&walls), center_with_gap(50.0), &walls, Some(&prev), &cfg);
    assert!(result.memory.is_none());
    assert_eq!(result.center, center_with_gap(50.0));
}

#[test]
fn hysteresis_drops_snap_to_removed_target() {
    let walls = scene();
    let cfg = EditorConfig::default();
    let prev = snapped_memory(&walls);
    let remaining: Vec<Wall> = walls.iter().filter(|w| w.id != "target").cloned().collect();
    let result = find_snap(dragged(&walls), center_with_gap(25.0), &remaining, Some(&prev), &cfg);
    assert!(result.memory.is_none());
    assert_eq!(result.center, center_with_gap(25.0));
}

#[test]
fn fresh_candidate_wins_over_memory() {
    let mut walls = scene();
    walls.push(Wall::new("other", 100.0, 0.0, -400.0, 0.0));
    let cfg = EditorConfig::default();
    let prev = snapped_memory(&walls);
    // Move next to "other": its b end is at (50, -400); dragged a end lands 3 cm away.
    let result = find_snap(dragged(&walls), WorldPoint::new(153.0, -400.0), &walls, Some(&prev), &cfg);
    assert_eq!(result.memory.unwrap().target_id, "other");
}

#[test]
fn zoom_independent_radius_uses_config() {
    let walls = scene();
    let cfg = EditorConfig { capture_radius: 5.0, ..EditorConfig::default() };
    let result = find_snap(dragged(&walls), center_with_gap(10.0), &walls, None, &cfg);
    assert!(result.memory.is_none());
}
