//! Geometry and interaction engine for a 2D floor-plan editor.
//!
//! Walls are line segments on a centimeter floor plane, drawn top-down in a
//! pixel viewport. This crate turns raw pointer and wheel input into wall
//! moves, rotations and joints: it maps between world and view space,
//! magnetically snaps wall endpoints together with hysteresis, rotates walls
//! smoothly around their center (or around a joined endpoint), and pans and
//! zooms the view without losing the floor. The host keeps the wall list and
//! applies the [`engine::Action`]s each handler returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`] event dispatch and the [`engine::Action`] contract |
//! | [`wall`] | Wall records, floor bounds and the host-side [`wall::WallStore`] |
//! | [`geometry`] | Points, endpoints, angles and distances |
//! | [`view`] | World ↔ view transform and pan clamping |
//! | [`snap`] | Endpoint snapping with hysteresis |
//! | [`drag`] | Pointer → snapped wall center |
//! | [`rotate`] | Smoothed, step-limited, anchor-preserving rotation |
//! | [`pan_zoom`] | Wheel zoom and drag panning |
//! | [`hit`] | Hit-testing wall bodies and the rotate handle |
//! | [`dimension`] | Length annotation side and placement |
//! | [`input`] | Input event types and the session state machine |
//! | [`config`] | Tunable interaction constants |
//! | [`error`] | [`error::EditorError`] |
//! | [`wasm`] | `wasm-bindgen` wrapper for a JavaScript host |
//! | [`consts`] | Default tuning and UI sizes |

pub mod config;
pub mod consts;
pub mod dimension;
pub mod drag;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod pan_zoom;
pub mod rotate;
pub mod snap;
pub mod view;
pub mod wall;
pub mod wasm;
