//! Shared numeric constants for the floor-plan engine.
//!
//! The snapping and rotation numbers are interaction tuning, not correctness
//! requirements. [`crate::config::EditorConfig`] uses them as defaults.

// ── Snapping ────────────────────────────────────────────────────

/// Endpoint capture radius in world centimeters. Independent of zoom.
pub const CAPTURE_RADIUS: f64 = 20.0;

/// Multiplier on [`CAPTURE_RADIUS`] for accepting a fresh snap candidate.
pub const SNAP_ACCEPT_FACTOR: f64 = 1.5;

/// Multiplier on [`CAPTURE_RADIUS`] for keeping the previous frame's snap.
pub const HYSTERESIS_FACTOR: f64 = 2.2;

// ── Rotation ────────────────────────────────────────────────────

/// Scale applied to the raw pointer-angle delta.
pub const ROTATION_SENSITIVITY: f64 = 0.3;

/// Fraction of the remaining angle covered per pointer event.
pub const ROTATION_SMOOTHING: f64 = 0.25;

/// Largest rotation change applied by a single pointer event, in radians.
pub const MAX_ROTATION_STEP: f64 = 0.06;

// ── View ────────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 4.0;

/// Zoom change per wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

/// Fixed inset between the container edge and the drawable content, in pixels.
pub const VIEW_PADDING_PX: f64 = 16.0;

/// Floor half-extent used when the host supplies no usable floor entity (cm).
pub const DEFAULT_FLOOR_HALF_EXTENT: f64 = 500.0;

/// Id of the distinguished floor entity in the wall list.
pub const FLOOR_ID: &str = "floor";

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for wall bodies and the rotate handle.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance from the wall center to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;

// ── Annotation ──────────────────────────────────────────────────

/// Distance between a wall and its dimension line, in screen pixels.
pub const DIMENSION_OFFSET_PX: f64 = 18.0;
