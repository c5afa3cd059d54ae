use crate::analysis::AnalysisError;
use crate::store::EditorStore;
use crate::ta::clock_constraint::ClockConstraint;
use crate::ta::switch::Switch;
use wasm_bindgen::prelude::*;

pub mod analysis;
pub mod clause_input;
pub mod error;
pub mod formatting;
pub mod seed;
pub mod store;
pub mod ta;
mod util;
pub mod validation;
pub mod visualization;

pub use crate::util::avg_rounded;

/// The editor as seen from JavaScript. Every mutation either succeeds or throws and leaves the
/// automaton untouched; views re-read the automaton through the JSON getters afterwards.
#[wasm_bindgen]
pub struct TaEditor {
    store: EditorStore,
}

impl Default for TaEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl TaEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            store: EditorStore::new(),
        }
    }

    pub fn reset(&mut self) -> Result<(), JsError> {
        Ok(self.store.reset()?)
    }

    #[wasm_bindgen(js_name = addLocation)]
    pub fn add_location(
        &mut self,
        name: &str,
        is_initial: bool,
        invariant: Option<ClockConstraint>,
    ) -> Result<(), JsError> {
        Ok(self.store.add_location(name, is_initial, invariant)?)
    }

    #[wasm_bindgen(js_name = editLocation)]
    pub fn edit_location(
        &mut self,
        prev_name: &str,
        name: &str,
        is_initial: bool,
        invariant: Option<ClockConstraint>,
    ) -> Result<(), JsError> {
        Ok(self
            .store
            .edit_location(prev_name, name, is_initial, invariant)?)
    }

    #[wasm_bindgen(js_name = deleteLocation)]
    pub fn delete_location(&mut self, name: &str) -> Result<(), JsError> {
        Ok(self.store.delete_location(name)?)
    }

    #[wasm_bindgen(js_name = updateLocationCoordinates)]
    pub fn update_location_coordinates(
        &mut self,
        name: &str,
        x_coordinate: f64,
        y_coordinate: f64,
    ) -> Result<(), JsError> {
        Ok(self
            .store
            .update_location_coordinates(name, x_coordinate, y_coordinate)?)
    }

    #[wasm_bindgen(js_name = addClock)]
    pub fn add_clock(&mut self, name: &str) -> Result<(), JsError> {
        Ok(self.store.add_clock(name)?)
    }

    #[wasm_bindgen(js_name = renameClock)]
    pub fn rename_clock(&mut self, old_name: &str, new_name: &str) -> Result<(), JsError> {
        Ok(self.store.rename_clock(old_name, new_name)?)
    }

    #[wasm_bindgen(js_name = deleteClock)]
    pub fn delete_clock(&mut self, name: &str) -> Result<(), JsError> {
        Ok(self.store.delete_clock(name)?)
    }

    #[wasm_bindgen(js_name = addSwitch)]
    pub fn add_switch(&mut self, sw: Switch) -> Result<(), JsError> {
        Ok(self.store.add_switch(sw)?)
    }

    #[wasm_bindgen(js_name = editSwitch)]
    pub fn edit_switch(&mut self, previous: &Switch, sw: Switch) -> Result<(), JsError> {
        Ok(self.store.edit_switch(previous, sw)?)
    }

    #[wasm_bindgen(js_name = deleteSwitch)]
    pub fn delete_switch(&mut self, previous: &Switch) -> Result<(), JsError> {
        Ok(self.store.delete_switch(previous)?)
    }

    #[wasm_bindgen(js_name = automatonJson)]
    pub fn automaton_json(&self) -> Result<String, JsError> {
        Ok(self.store.automaton_json()?)
    }

    #[wasm_bindgen(js_name = visDataJson)]
    pub fn vis_data_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.store.vis_data())?)
    }

    /// Exports the automaton for the analyzer and locks the editor until the result is handed
    /// back.
    #[wasm_bindgen(js_name = beginAnalysis)]
    pub fn begin_analysis(&mut self) -> Result<String, JsError> {
        let model = self.store.begin_analysis()?;
        Ok(serde_json::to_string(&model)?)
    }

    #[wasm_bindgen(js_name = finishAnalysis)]
    pub fn finish_analysis(&mut self, unreachable: Vec<String>) -> Result<String, JsError> {
        let outcome = self.store.finish_analysis(Ok(unreachable))?;
        Ok(serde_json::to_string(&outcome)?)
    }

    #[wasm_bindgen(js_name = failAnalysis)]
    pub fn fail_analysis(&mut self, msg: &str) -> Result<String, JsError> {
        let outcome = self
            .store
            .finish_analysis(Err(AnalysisError::Failed(String::from(msg))))?;
        Ok(serde_json::to_string(&outcome)?)
    }
}
