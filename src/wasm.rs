//! Browser entry point: a JSON-in, JSON-out wrapper around [`EngineCore`].
//!
//! The JavaScript host forwards DOM events as plain numbers. Each call applies
//! the resulting actions to the editor's own [`WallStore`] and returns them as
//! a JSON array so the host can mirror them into its own model and redraw.

#[cfg(test)]
#[path = "wasm_test.rs"]
mod wasm_test;

use wasm_bindgen::prelude::*;

use crate::config::EditorConfig;
use crate::dimension::SideOverrides;
use crate::engine::{Action, EngineCore};
use crate::error::EditorError;
use crate::geometry::Point;
use crate::input::{Button, Modifiers, WheelDelta};
use crate::wall::WallStore;

const MOD_SHIFT: u8 = 1;
const MOD_CTRL: u8 = 2;
const MOD_ALT: u8 = 4;
const MOD_META: u8 = 8;

/// A floor-plan editor bound to one container element.
#[wasm_bindgen]
pub struct FloorPlanEditor {
    store: WallStore,
    core: EngineCore,
}

#[wasm_bindgen]
impl FloorPlanEditor {
    /// Create an editor with default tuning for a `width` × `height` container.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::build(EditorConfig::default(), width, height)
    }

    /// Create an editor from a JSON tuning object; missing keys use defaults.
    ///
    /// # Errors
    ///
    /// Fails if the JSON is malformed or a value is out of range.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str, width: f64, height: f64) -> Result<FloorPlanEditor, JsValue> {
        let config = EditorConfig::from_json(config_json).map_err(to_js)?;
        Ok(Self::build(config, width, height))
    }

    /// Replace all walls with a JSON snapshot (an array of walls, floor included).
    ///
    /// # Errors
    ///
    /// Fails if the JSON does not describe a wall list.
    #[wasm_bindgen(js_name = loadWalls)]
    pub fn load_walls(&mut self, walls_json: &str) -> Result<String, JsValue> {
        self.store = WallStore::from_json(walls_json).map_err(to_js)?;
        let actions = self.core.load(self.store.walls());
        self.commit(&actions)
    }

    /// Current walls as a JSON array.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    #[wasm_bindgen(js_name = wallsJson)]
    pub fn walls_json(&self) -> Result<String, JsValue> {
        self.store.to_json().map_err(to_js)
    }

    /// Current view state as JSON.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    #[wasm_bindgen(js_name = viewJson)]
    pub fn view_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.core.view).map_err(|e| to_js(e.into()))
    }

    /// Id of the selected wall, if any.
    #[must_use]
    pub fn selection(&self) -> Option<String> {
        self.core.selection().map(str::to_owned)
    }

    /// Container resized.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<String, JsValue> {
        let actions = self.core.set_viewport(self.store.walls(), width, height);
        self.commit(&actions)
    }

    /// `modifiers` is a bitmask: 1 shift, 2 ctrl, 4 alt, 8 meta.
    /// `button` is the DOM `MouseEvent.button` code.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16, modifiers: u8) -> Result<String, JsValue> {
        let actions = self.core.on_pointer_down(
            self.store.walls(),
            Point::new(x, y),
            Button::from_dom(button),
            modifiers_from_bits(modifiers),
        );
        self.commit(&actions)
    }

    /// # Errors
    ///
    /// Fails only if serialization fails.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        let actions = self.core.on_pointer_move(self.store.walls(), Point::new(x, y));
        self.commit(&actions)
    }

    /// # Errors
    ///
    /// Fails only if serialization fails.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Result<String, JsValue> {
        let actions = self.core.on_pointer_up();
        self.commit(&actions)
    }

    /// # Errors
    ///
    /// Fails only if serialization fails.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> Result<String, JsValue> {
        let actions = self.core.on_pointer_leave();
        self.commit(&actions)
    }

    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn wheel(&mut self, dx: f64, dy: f64) -> Result<String, JsValue> {
        let actions = self.core.on_wheel(self.store.walls(), WheelDelta { dx, dy });
        self.commit(&actions)
    }

    /// # Errors
    ///
    /// Fails if no wall has this id.
    #[wasm_bindgen(js_name = setRotationAbs)]
    pub fn set_rotation_abs(&mut self, id: &str, radians: f64) -> Result<String, JsValue> {
        let actions = self.core.set_rotation_abs(self.store.walls(), id, radians).map_err(to_js)?;
        self.commit(&actions)
    }

    /// # Errors
    ///
    /// Fails if no wall has this id.
    #[wasm_bindgen(js_name = rotateBy)]
    pub fn rotate_by(&mut self, id: &str, delta: f64) -> Result<String, JsValue> {
        let actions = self.core.rotate_by(self.store.walls(), id, delta).map_err(to_js)?;
        self.commit(&actions)
    }

    /// Drop the active session and every snap anchor (e.g. after "reset to default walls").
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    #[wasm_bindgen(js_name = resetSession)]
    pub fn reset_session(&mut self) -> Result<String, JsValue> {
        let actions = self.core.reset_session();
        self.commit(&actions)
    }

    /// Length annotations as JSON. `overrides_json` maps wall ids to `"positive"` / `"negative"`.
    ///
    /// # Errors
    ///
    /// Fails if the override map is malformed.
    #[wasm_bindgen(js_name = dimensionsJson)]
    pub fn dimensions_json(&self, overrides_json: &str) -> Result<String, JsValue> {
        let overrides: SideOverrides = serde_json::from_str(overrides_json).map_err(|e| to_js(e.into()))?;
        let annotations = self.core.dimension_annotations(self.store.walls(), &overrides);
        serde_json::to_string(&annotations).map_err(|e| to_js(e.into()))
    }
}

impl FloorPlanEditor {
    fn build(config: EditorConfig, width: f64, height: f64) -> Self {
        let store = WallStore::new();
        let mut core = EngineCore::with_config(config);
        core.set_viewport(store.walls(), width, height);
        Self { store, core }
    }

    fn commit(&mut self, actions: &[Action]) -> Result<String, JsValue> {
        self.store.apply_all(actions);
        serde_json::to_string(actions).map_err(|e| to_js(e.into()))
    }
}

fn modifiers_from_bits(bits: u8) -> Modifiers {
    Modifiers {
        shift: bits & MOD_SHIFT != 0,
        ctrl: bits & MOD_CTRL != 0,
        alt: bits & MOD_ALT != 0,
        meta: bits & MOD_META != 0,
    }
}

fn to_js(err: EditorError) -> JsValue {
    js_sys::Error::new(&format!("{}: {err}", err.error_code())).into()
}
