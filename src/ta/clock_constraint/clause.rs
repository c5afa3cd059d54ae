use crate::error::EditorError;
use crate::ta::clock::Clock;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClockComparator {
    EQ,
    LEQ,
    GEQ,
    LESSER,
    GREATER,
}

impl ClockComparator {
    pub const ALL: [ClockComparator; 5] = [
        ClockComparator::EQ,
        ClockComparator::LEQ,
        ClockComparator::GEQ,
        ClockComparator::LESSER,
        ClockComparator::GREATER,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            ClockComparator::EQ => "=",
            ClockComparator::LEQ => "≤",
            ClockComparator::GEQ => "≥",
            ClockComparator::LESSER => "<",
            ClockComparator::GREATER => ">",
        }
    }
}

impl FromStr for ClockComparator {
    type Err = EditorError;

    /// Only the exact operator symbols are accepted (no `<=`, no surrounding whitespace).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ClockComparator::ALL
            .into_iter()
            .find(|op| op.symbol() == input)
            .ok_or_else(|| EditorError::UnknownComparator(String::from(input)))
    }
}

impl Serialize for ClockComparator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl Display for ClockComparator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[wasm_bindgen]
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Clause {
    lhs: Clock,
    op: ClockComparator,
    rhs: u32,
}

#[wasm_bindgen]
impl Clause {
    #[wasm_bindgen(constructor)]
    pub fn new(lhs: &Clock, op: ClockComparator, rhs: u32) -> Self {
        Self {
            lhs: lhs.clone(),
            op,
            rhs,
        }
    }
}

impl Clause {
    pub fn lhs(&self) -> &Clock {
        &self.lhs
    }

    pub fn op(&self) -> ClockComparator {
        self.op
    }

    pub fn rhs(&self) -> u32 {
        self.rhs
    }

    pub fn uses_clock(&self, clock_name: &str) -> bool {
        self.lhs.is_named(clock_name)
    }

    /// Points the clause to another clock. Operator and bound stay untouched.
    pub(crate) fn repoint(&mut self, clock: &Clock) {
        self.lhs = clock.clone();
    }

    /// Returns a copy of the clause with a different operator.
    pub fn with_op(&self, op: ClockComparator) -> Self {
        Self {
            op,
            ..self.clone()
        }
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

/// Clauses are equal if their clock names, operators and bounds are equal. Two missing clauses
/// are equal as well.
pub fn clauses_equal(clause0: Option<&Clause>, clause1: Option<&Clause>) -> bool {
    clause0 == clause1
}
