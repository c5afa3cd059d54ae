use crate::analysis::model::{
    AnalyzerClause, AnalyzerClock, AnalyzerClockConstraint, AnalyzerComparator, AnalyzerLocation,
    AnalyzerSwitch, AnalyzerTimedAutomaton,
};
use crate::error::EditorError;
use crate::ta::TimedAutomaton;
use crate::ta::clock::Clock;
use crate::ta::clock_constraint::ClockConstraint;
use crate::ta::clock_constraint::clause::{Clause, ClockComparator};
use crate::ta::location::Location;
use crate::ta::switch::Switch;
use serde::Serialize;
use thiserror::Error;

pub mod model;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("The analysis failed: {0}")]
    Failed(String),
}

/// An external reachability analysis. Implementations receive the exported automaton and return
/// the names of all unreachable locations.
pub trait ReachabilityAnalyzer {
    fn find_unreachable_locations(
        &self,
        ta: &AnalyzerTimedAutomaton,
    ) -> Result<Vec<String>, AnalysisError>;
}

impl<F> ReachabilityAnalyzer for F
where
    F: Fn(&AnalyzerTimedAutomaton) -> Result<Vec<String>, AnalysisError>,
{
    fn find_unreachable_locations(
        &self,
        ta: &AnalyzerTimedAutomaton,
    ) -> Result<Vec<String>, AnalysisError> {
        self(ta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisState {
    #[default]
    Ready,
    Analyzing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "details", rename_all = "camelCase")]
pub enum AnalysisOutcome {
    AllReachable,
    Unreachable(Vec<String>),
    Failed(String),
}

impl From<Result<Vec<String>, AnalysisError>> for AnalysisOutcome {
    fn from(result: Result<Vec<String>, AnalysisError>) -> Self {
        match result {
            Ok(unreachable) if unreachable.is_empty() => AnalysisOutcome::AllReachable,
            Ok(unreachable) => AnalysisOutcome::Unreachable(unreachable),
            Err(err) => AnalysisOutcome::Failed(err.to_string()),
        }
    }
}

/// Exports the automaton for the analyzer. Every `x = c` becomes `x ≤ c ∧ x ≥ c` since the
/// analyzer has no equality comparator.
///
/// # Errors
/// Fails if a switch refers to a location the automaton does not contain.
pub fn map_ta_to_analyzer_model(ta: &TimedAutomaton) -> Result<AnalyzerTimedAutomaton, EditorError> {
    let locations: Vec<AnalyzerLocation> = ta.locations().iter().map(map_location).collect();
    let switches = ta
        .switches()
        .iter()
        .map(|sw| map_switch(sw, &locations))
        .collect::<Result<Vec<AnalyzerSwitch>, EditorError>>()?;
    Ok(AnalyzerTimedAutomaton {
        locations,
        clocks: ta.clocks().iter().map(map_clock).collect(),
        switches,
    })
}

fn map_clock(clock: &Clock) -> AnalyzerClock {
    AnalyzerClock {
        name: clock.name().clone(),
    }
}

fn map_clause(clause: &Clause, op: AnalyzerComparator) -> AnalyzerClause {
    AnalyzerClause {
        lhs: map_clock(clause.lhs()),
        op,
        rhs: clause.rhs(),
    }
}

fn map_clock_constraint(cc: Option<&ClockConstraint>) -> Option<AnalyzerClockConstraint> {
    let cc = cc?;
    let mut clauses: Vec<AnalyzerClause> = Vec::with_capacity(cc.clauses().len());
    for clause in cc.clauses() {
        match clause.op() {
            ClockComparator::EQ => {
                clauses.push(map_clause(clause, AnalyzerComparator::LEQ));
                clauses.push(map_clause(clause, AnalyzerComparator::GEQ));
            }
            ClockComparator::LEQ => clauses.push(map_clause(clause, AnalyzerComparator::LEQ)),
            ClockComparator::GEQ => clauses.push(map_clause(clause, AnalyzerComparator::GEQ)),
            ClockComparator::LESSER => {
                clauses.push(map_clause(clause, AnalyzerComparator::LESSER))
            }
            ClockComparator::GREATER => {
                clauses.push(map_clause(clause, AnalyzerComparator::GREATER))
            }
        }
    }
    Some(AnalyzerClockConstraint { clauses })
}

fn map_location(loc: &Location) -> AnalyzerLocation {
    AnalyzerLocation {
        name: loc.name().clone(),
        is_initial: loc.is_initial(),
        invariant: map_clock_constraint(loc.invariant().as_ref()),
    }
}

fn map_switch(sw: &Switch, locations: &[AnalyzerLocation]) -> Result<AnalyzerSwitch, EditorError> {
    let resolve = |name: &String| {
        locations
            .iter()
            .find(|loc| loc.name == *name)
            .cloned()
            .ok_or_else(|| EditorError::UnknownLocation(name.clone()))
    };
    Ok(AnalyzerSwitch {
        source: resolve(sw.source())?,
        guard: map_clock_constraint(sw.guard().as_ref()),
        action: sw.action().clone(),
        reset: sw.reset().iter().map(map_clock).collect(),
        target: resolve(sw.target())?,
    })
}
