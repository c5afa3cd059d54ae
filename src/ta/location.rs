use crate::ta::clock_constraint::ClockConstraint;
use serde::Serialize;
use wasm_bindgen::prelude::wasm_bindgen;

/// A location of the automaton. The name is the identity of a location; switches refer to
/// locations by name only.
#[wasm_bindgen]
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    name: String,
    is_initial: bool,
    invariant: Option<ClockConstraint>,
    x_coordinate: f64,
    y_coordinate: f64,
}

#[wasm_bindgen]
impl Location {
    #[wasm_bindgen(constructor)]
    pub fn new(
        name: &str,
        is_initial: bool,
        invariant: Option<ClockConstraint>,
        x_coordinate: f64,
        y_coordinate: f64,
    ) -> Self {
        Self {
            name: String::from(name),
            is_initial,
            invariant: ClockConstraint::normalize(invariant),
            x_coordinate,
            y_coordinate,
        }
    }
}

impl Location {
    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn is_initial(&self) -> bool {
        self.is_initial
    }

    pub fn invariant(&self) -> &Option<ClockConstraint> {
        &self.invariant
    }

    pub fn x_coordinate(&self) -> f64 {
        self.x_coordinate
    }

    pub fn y_coordinate(&self) -> f64 {
        self.y_coordinate
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = String::from(name);
    }

    pub(crate) fn set_initial(&mut self, is_initial: bool) {
        self.is_initial = is_initial;
    }

    pub(crate) fn set_invariant(&mut self, invariant: Option<ClockConstraint>) {
        self.invariant = ClockConstraint::normalize(invariant);
    }

    pub(crate) fn invariant_mut(&mut self) -> &mut Option<ClockConstraint> {
        &mut self.invariant
    }

    pub(crate) fn move_to(&mut self, x_coordinate: f64, y_coordinate: f64) {
        self.x_coordinate = x_coordinate;
        self.y_coordinate = y_coordinate;
    }
}
