use crate::ta::clock::Clock;
use crate::ta::clock_constraint::clause::Clause;
use crate::util::{dedup_preserving_order, vecs_eq_without_order};
use serde::Serialize;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod clause;

/// Conjunction of clauses, used as guard or invariant.
///
/// A constraint is a set: duplicate clauses are dropped on construction, the order of the
/// remaining clauses is kept for display purposes only and does not take part in equality.
#[wasm_bindgen]
#[derive(Debug, Clone, Eq, Serialize)]
pub struct ClockConstraint {
    clauses: Vec<Clause>,
}

#[wasm_bindgen]
impl ClockConstraint {
    #[wasm_bindgen(constructor)]
    pub fn new(clauses: Box<[Clause]>) -> Self {
        Self {
            clauses: dedup_preserving_order(Vec::from(clauses)),
        }
    }
}

impl ClockConstraint {
    /// Builds a constraint from user input. An empty clause list is no constraint at all.
    pub fn from_clauses(clauses: Vec<Clause>) -> Option<Self> {
        if clauses.is_empty() {
            return None;
        }
        Some(Self {
            clauses: dedup_preserving_order(clauses),
        })
    }

    /// Maps an empty constraint to `None`.
    pub(crate) fn normalize(cc: Option<Self>) -> Option<Self> {
        cc.filter(|cc| !cc.clauses.is_empty())
    }

    pub fn clauses(&self) -> &Vec<Clause> {
        &self.clauses
    }

    pub fn uses_clock(&self, clock_name: &str) -> bool {
        self.clauses.iter().any(|clause| clause.uses_clock(clock_name))
    }

    /// Drops every clause on the named clock. Returns `None` if no clause survives.
    pub fn without_clock(self, clock_name: &str) -> Option<Self> {
        let remaining: Vec<Clause> = self
            .clauses
            .into_iter()
            .filter(|clause| !clause.uses_clock(clock_name))
            .collect();
        Self::from_clauses(remaining)
    }

    /// Points every clause on `old_name` to `new_clock`.
    pub fn rename_clock(&mut self, old_name: &str, new_clock: &Clock) {
        self.clauses
            .iter_mut()
            .filter(|clause| clause.uses_clock(old_name))
            .for_each(|clause| clause.repoint(new_clock));
        // a rename onto a clock already constrained by an equal clause must not leave duplicates
        self.clauses = dedup_preserving_order(std::mem::take(&mut self.clauses));
    }

    /// Names of all clocks referenced by the constraint, in order of first use.
    pub fn clock_names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = Vec::new();
        for clause in &self.clauses {
            let name = clause.lhs().name();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl PartialEq<Self> for ClockConstraint {
    fn eq(&self, other: &Self) -> bool {
        vecs_eq_without_order(&self.clauses, &other.clauses)
    }
}

/// Compares two optional constraints as sets of clauses.
pub fn clock_constraints_equal(cc0: Option<&ClockConstraint>, cc1: Option<&ClockConstraint>) -> bool {
    cc0 == cc1
}

/// Returns `false` for a missing constraint.
pub fn constraint_uses_clock(clock_name: &str, cc: Option<&ClockConstraint>) -> bool {
    cc.is_some_and(|cc| cc.uses_clock(clock_name))
}
