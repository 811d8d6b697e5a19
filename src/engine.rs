//! `EngineCore`: routes pointer and wheel events to the controllers.
//!
//! The engine never owns the wall list. Every handler takes the host's current
//! walls as a slice and returns the [`Action`]s the host should apply, in order.
//! Session state (drag, rotate, pan), the view, the selection and per-wall
//! snap anchors are the only things kept between events.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{EditorConfig, RotationOutput};
use crate::dimension::{self, DimensionAnnotation, SideOverrides};
use crate::drag;
use crate::error::EditorError;
use crate::geometry::{self, Endpoint, Point};
use crate::hit::{self, Hit, HitPart};
use crate::input::{Button, InputState, Modifiers, WheelDelta};
use crate::pan_zoom;
use crate::rotate::{self, RotationSession, RotationUpdate};
use crate::snap::{SnapCandidate, SnapMemory};
use crate::view::ViewState;
use crate::wall::{FloorBounds, Wall, WallId};

/// An anchor only applies while the wall's endpoint still sits on it, in cm.
const ANCHOR_TOLERANCE: f64 = 0.01;

const CURSOR_DEFAULT: &str = "default";
const CURSOR_MOVE: &str = "move";
const CURSOR_GRABBING: &str = "grabbing";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Action {
    /// Persist a new wall center.
    MoveWall { id: WallId, x: f64, z: f64 },
    /// Persist a new absolute `rotation.y`.
    SetRotation { id: WallId, radians: f64 },
    /// Add `delta` to `rotation.y`.
    RotateWall { id: WallId, delta: f64 },
    /// A drag ended with `source_endpoint` of `source_id` on `target_endpoint` of `target_id`.
    #[serde(rename_all = "camelCase")]
    ConnectWalls { source_id: WallId, source_endpoint: Endpoint, target_id: WallId, target_endpoint: Endpoint },
    SelectWall(Option<WallId>),
    /// The highlighted snap candidate changed.
    SnapChanged(Option<SnapCandidate>),
    ViewChanged(ViewState),
    SetCursor(String),
    RenderNeeded,
}

/// Core engine state. Holds no walls and touches no browser API.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub config: EditorConfig,
    pub view: ViewState,
    pub input: InputState,
    selected: Option<WallId>,
    anchors: HashMap<WallId, SnapMemory>,
    candidate: Option<SnapCandidate>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            view: ViewState { padding: config.padding, ..ViewState::default() },
            input: InputState::Idle,
            selected: None,
            anchors: HashMap::new(),
            candidate: None,
        }
    }

    // --- Data inputs ---

    /// Take a fresh wall snapshot from the host.
    ///
    /// Ends any session, drops every snap anchor, and clears the selection if
    /// the selected wall is gone.
    pub fn load(&mut self, walls: &[Wall]) -> Vec<Action> {
        let mut actions = self.reset_session();
        if FloorBounds::find(walls).is_none() {
            warn!(walls = walls.len(), "floor missing or degenerate; using default bounds");
        }
        if self.selected.as_ref().is_some_and(|id| !walls.iter().any(|w| &w.id == id)) {
            self.selected = None;
            actions.push(Action::SelectWall(None));
        }
        let before = self.view;
        self.view.reclamp(&FloorBounds::from_walls(walls));
        if self.view != before {
            actions.push(Action::ViewChanged(self.view));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Update the container size in CSS pixels and re-clamp the pan.
    pub fn set_viewport(&mut self, walls: &[Wall], width: f64, height: f64) -> Vec<Action> {
        let before = self.view;
        self.view.width = width.max(0.0);
        self.view.height = height.max(0.0);
        self.view.reclamp(&FloorBounds::from_walls(walls));
        if self.view == before {
            return Vec::new();
        }
        vec![Action::ViewChanged(self.view), Action::RenderNeeded]
    }

    /// Abandon any session and forget every snap anchor.
    pub fn reset_session(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if !self.input.is_idle() {
            debug!(wall_id = ?self.input.wall_id(), "session reset");
            actions.push(Action::SetCursor(CURSOR_DEFAULT.to_owned()));
        }
        self.input = InputState::Idle;
        self.anchors.clear();
        if self.candidate.take().is_some() {
            actions.push(Action::SnapChanged(None));
        }
        actions
    }

    // --- Session entry points ---

    /// Route a pointer-down to a drag, rotate or pan session.
    ///
    /// Ignored while another session is active.
    pub fn on_pointer_down(&mut self, walls: &[Wall], pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        let bounds = FloorBounds::from_walls(walls);
        let hit = hit::hit_test(pt, walls, &self.view, &bounds, self.selected.as_deref());

        if pan_zoom::should_pan(hit.is_none(), button, modifiers) {
            let mut actions = Vec::new();
            if hit.is_none() && button == Button::Primary && self.selected.take().is_some() {
                actions.push(Action::SelectWall(None));
            }
            actions.extend(self.begin_pan(pt));
            return actions;
        }

        let Some(Hit { wall_id, part }) = hit else {
            return Vec::new();
        };
        let Some(wall) = walls.iter().find(|w| w.id == wall_id) else {
            return Vec::new();
        };
        match part {
            HitPart::Body => self.start_drag(wall),
            HitPart::RotateHandle => self.start_rotate(wall, pt, &bounds),
        }
    }

    /// Start dragging a wall chosen by the host.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownWall`] if `id` is not in `walls`.
    pub fn begin_drag(&mut self, walls: &[Wall], id: &str) -> Result<Vec<Action>, EditorError> {
        let wall = find_wall(walls, id)?;
        if !self.input.is_idle() {
            return Ok(Vec::new());
        }
        Ok(self.start_drag(wall))
    }

    /// Start rotating a wall chosen by the host, with the pointer at `pt`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownWall`] if `id` is not in `walls`.
    pub fn begin_rotate(&mut self, walls: &[Wall], id: &str, pt: Point) -> Result<Vec<Action>, EditorError> {
        let wall = find_wall(walls, id)?;
        if !self.input.is_idle() {
            return Ok(Vec::new());
        }
        Ok(self.start_rotate(wall, pt, &FloorBounds::from_walls(walls)))
    }

    /// Start panning with the pointer at `pt`.
    pub fn begin_pan(&mut self, pt: Point) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        debug!("pan started");
        self.input = InputState::Panning { last_view: pt };
        vec![Action::SetCursor(CURSOR_GRABBING.to_owned())]
    }

    fn start_drag(&mut self, wall: &Wall) -> Vec<Action> {
        debug!(wall_id = %wall.id, locked = wall.is_locked, "drag started");
        // A joined wall stays joined until dragged past the hysteresis radius.
        let snap = self.anchor_for(wall).cloned();
        self.input = InputState::Dragging { id: wall.id.clone(), snap };
        let mut actions = self.select(&wall.id);
        actions.push(Action::SetCursor(CURSOR_MOVE.to_owned()));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn start_rotate(&mut self, wall: &Wall, pt: Point, bounds: &FloorBounds) -> Vec<Action> {
        debug!(wall_id = %wall.id, locked = wall.is_locked, "rotate started");
        let center = self.view.world_to_view(bounds, wall.center());
        let session = RotationSession::begin(pt, center, wall.rotation.y);
        self.input = InputState::Rotating { id: wall.id.clone(), session };
        let mut actions = self.select(&wall.id);
        actions.push(Action::SetCursor(CURSOR_GRABBING.to_owned()));
        actions
    }

    fn select(&mut self, id: &str) -> Vec<Action> {
        if self.selected.as_deref() == Some(id) {
            return Vec::new();
        }
        self.selected = Some(id.to_owned());
        vec![Action::SelectWall(Some(id.to_owned()))]
    }

    // --- Session updates ---

    /// Advance the active session to pointer position `pt`.
    pub fn on_pointer_move(&mut self, walls: &[Wall], pt: Point) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Dragging { id, snap } => self.drag_move(walls, id, snap, pt),
            InputState::Rotating { id, session } => self.rotate_move(walls, id, session, pt),
            InputState::Panning { last_view } => {
                self.input = InputState::Panning { last_view: pt };
                let bounds = FloorBounds::from_walls(walls);
                let next = pan_zoom::pan_by(&self.view, &bounds, pt.x - last_view.x, pt.y - last_view.y);
                if next == self.view {
                    return Vec::new();
                }
                self.view = next;
                vec![Action::ViewChanged(next), Action::RenderNeeded]
            }
        }
    }

    fn drag_move(&mut self, walls: &[Wall], id: WallId, previous: Option<SnapMemory>, pt: Point) -> Vec<Action> {
        let Some(wall) = walls.iter().find(|w| w.id == id) else {
            debug!(wall_id = %id, "dragged wall disappeared; ending drag");
            return self.finish(InputState::Dragging { id, snap: None });
        };
        let bounds = FloorBounds::from_walls(walls);
        let result = drag::drag_to(wall, pt, walls, &self.view, &bounds, previous.as_ref(), &self.config);

        match (&previous, &result.memory) {
            (None, Some(m)) => debug!(wall_id = %id, target = %m.target_id, "snap acquired"),
            (Some(p), None) => debug!(wall_id = %id, target = %p.target_id, "snap released"),
            _ => {}
        }

        let mut actions = vec![Action::MoveWall { id: id.clone(), x: result.center.x, z: result.center.z }];
        let candidate = result.candidate();
        if candidate != self.candidate {
            self.candidate.clone_from(&candidate);
            actions.push(Action::SnapChanged(candidate));
        }
        actions.push(Action::RenderNeeded);
        self.input = InputState::Dragging { id, snap: result.memory };
        actions
    }

    fn rotate_move(&mut self, walls: &[Wall], id: WallId, mut session: RotationSession, pt: Point) -> Vec<Action> {
        let Some(wall) = walls.iter().find(|w| w.id == id) else {
            debug!(wall_id = %id, "rotated wall disappeared; ending rotate");
            return self.finish(InputState::Rotating { id, session });
        };
        let bounds = FloorBounds::from_walls(walls);
        let center = self.view.world_to_view(&bounds, wall.center());
        session.track(pt, center);
        let next = rotate::rotation_step(&session, wall.rotation.y, &self.config);
        let update = rotate::set_rotation_abs(wall, next, self.anchor_for(wall));
        let mut actions = self.rotation_actions(&id, update);
        actions.push(Action::RenderNeeded);
        self.input = InputState::Rotating { id, session };
        actions
    }

    /// Zoom one step per wheel event.
    pub fn on_wheel(&mut self, walls: &[Wall], delta: WheelDelta) -> Vec<Action> {
        let bounds = FloorBounds::from_walls(walls);
        match pan_zoom::zoom_by_wheel(&self.view, &bounds, delta, &self.config) {
            Some(next) => {
                self.view = next;
                vec![Action::ViewChanged(next), Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    // --- Session exit ---

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_session()
    }

    /// The pointer left the tracked surface; ends the session exactly like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_session()
    }

    fn end_session(&mut self) -> Vec<Action> {
        let input = std::mem::take(&mut self.input);
        self.finish(input)
    }

    /// Close out `input`, which has already been taken from `self.input`.
    ///
    /// A connect is only requested for a snap the host was shown during this
    /// session; a click on an already joined wall keeps its anchor silently.
    fn finish(&mut self, input: InputState) -> Vec<Action> {
        let mut actions = Vec::new();
        if input.is_idle() {
            return actions;
        }
        let shown = self.candidate.take();
        match input {
            InputState::Idle => {}
            InputState::Dragging { id, snap: Some(memory) } => {
                if shown.is_some() {
                    debug!(wall_id = %id, target = %memory.target_id, "connect requested");
                    actions.push(Action::ConnectWalls {
                        source_id: id.clone(),
                        source_endpoint: memory.source_end,
                        target_id: memory.target_id.clone(),
                        target_endpoint: memory.target_end,
                    });
                }
                self.anchors.insert(id, memory);
            }
            InputState::Dragging { id, snap: None } => {
                debug!(wall_id = %id, "drag ended");
                self.anchors.remove(&id);
            }
            InputState::Rotating { id, .. } => debug!(wall_id = %id, "rotate ended"),
            InputState::Panning { .. } => debug!("pan ended"),
        }
        if shown.is_some() {
            actions.push(Action::SnapChanged(None));
        }
        actions.push(Action::SetCursor(CURSOR_DEFAULT.to_owned()));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Programmatic rotation ---

    /// Set a wall's rotation to `radians`, keeping an anchored endpoint fixed.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownWall`] if `id` is not in `walls`.
    pub fn set_rotation_abs(&self, walls: &[Wall], id: &str, radians: f64) -> Result<Vec<Action>, EditorError> {
        let wall = find_wall(walls, id)?;
        let update = rotate::set_rotation_abs(wall, radians, self.anchor_for(wall));
        Ok(self.rotation_actions(id, update))
    }

    /// Rotate a wall by `delta` radians. Same end state as [`Self::set_rotation_abs`].
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownWall`] if `id` is not in `walls`.
    pub fn rotate_by(&self, walls: &[Wall], id: &str, delta: f64) -> Result<Vec<Action>, EditorError> {
        let wall = find_wall(walls, id)?;
        let update = rotate::rotate_by(wall, delta, self.anchor_for(wall));
        Ok(self.rotation_actions(id, update))
    }

    fn rotation_actions(&self, id: &str, update: RotationUpdate) -> Vec<Action> {
        let mut actions = vec![match self.config.rotation_output {
            RotationOutput::Absolute => Action::SetRotation { id: id.to_owned(), radians: update.radians },
            RotationOutput::Delta => Action::RotateWall { id: id.to_owned(), delta: update.delta },
        }];
        if let Some(center) = update.center {
            actions.push(Action::MoveWall { id: id.to_owned(), x: center.x, z: center.z });
        }
        actions
    }

    /// The wall's snap anchor, if its endpoint still sits on it.
    fn anchor_for(&self, wall: &Wall) -> Option<&SnapMemory> {
        self.anchors
            .get(&wall.id)
            .filter(|m| geometry::distance(wall.endpoint(m.source_end), m.anchor) <= ANCHOR_TOLERANCE)
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The snap candidate currently highlighted, if any.
    #[must_use]
    pub fn candidate(&self) -> Option<&SnapCandidate> {
        self.candidate.as_ref()
    }

    /// The snap anchor retained for `id` from its last drag.
    #[must_use]
    pub fn anchor(&self, id: &str) -> Option<&SnapMemory> {
        self.anchors.get(id)
    }

    /// Length annotations for every wall at the current view.
    #[must_use]
    pub fn dimension_annotations(&self, walls: &[Wall], overrides: &SideOverrides) -> Vec<DimensionAnnotation> {
        dimension::annotate_all(walls, &self.view, &FloorBounds::from_walls(walls), overrides)
    }
}

fn find_wall<'a>(walls: &'a [Wall], id: &str) -> Result<&'a Wall, EditorError> {
    walls.iter().find(|w| w.id == id).ok_or_else(|| EditorError::UnknownWall { id: id.to_owned() })
}
