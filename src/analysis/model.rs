//! The model understood by the reachability analyzer. It mirrors the editor model without
//! coordinates and without the `=` comparator, and switches carry their full locations.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnalyzerComparator {
    LESSER,
    LEQ,
    GEQ,
    GREATER,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerClock {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerClause {
    pub lhs: AnalyzerClock,
    pub op: AnalyzerComparator,
    pub rhs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerClockConstraint {
    pub clauses: Vec<AnalyzerClause>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerLocation {
    pub name: String,
    pub is_initial: bool,
    pub invariant: Option<AnalyzerClockConstraint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerSwitch {
    pub source: AnalyzerLocation,
    pub guard: Option<AnalyzerClockConstraint>,
    pub action: String,
    pub reset: Vec<AnalyzerClock>,
    pub target: AnalyzerLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AnalyzerTimedAutomaton {
    pub locations: Vec<AnalyzerLocation>,
    pub clocks: Vec<AnalyzerClock>,
    pub switches: Vec<AnalyzerSwitch>,
}
