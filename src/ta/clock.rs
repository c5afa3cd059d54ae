use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Clock {
    name: String,
}

#[wasm_bindgen]
impl Clock {
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
        }
    }
}

impl Clock {
    pub fn name(&self) -> &String {
        &self.name
    }

    /// Clocks are identified by their (case-sensitive) name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl Display for Clock {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
