//! Display strings for tables and diagram labels.

use crate::ta::clock::Clock;
use crate::ta::clock_constraint::ClockConstraint;
use crate::ta::location::Location;
use crate::ta::switch::Switch;

pub const CLAUSE_JOIN: &str = " ∧ ";
pub const CLAUSE_JOIN_MULTILINE: &str = " ∧\n";

/// `None` for a missing or empty constraint.
pub fn format_clock_constraint(cc: Option<&ClockConstraint>, clause_join: &str) -> Option<String> {
    let cc = cc.filter(|cc| !cc.clauses().is_empty())?;
    let clauses: Vec<String> = cc.clauses().iter().map(|c| c.to_string()).collect();
    Some(clauses.join(clause_join))
}

/// `None` for an empty reset. `compact` drops the blanks: `{x,y}` instead of `{ x, y }`.
pub fn format_reset(clocks: &[Clock], compact: bool) -> Option<String> {
    if clocks.is_empty() {
        return None;
    }
    let names: Vec<&str> = clocks.iter().map(|c| c.name().as_str()).collect();
    if compact {
        Some(format!("{{{}}}", names.join(",")))
    } else {
        Some(format!("{{ {} }}", names.join(", ")))
    }
}

pub fn format_location_label_visual(location: &Location) -> String {
    match format_clock_constraint(location.invariant().as_ref(), CLAUSE_JOIN) {
        Some(invariant) => format!("{}\n{}", location.name(), invariant),
        None => location.name().clone(),
    }
}

pub fn format_switch_table(sw: &Switch) -> String {
    let guard = format_clock_constraint(sw.guard().as_ref(), CLAUSE_JOIN);
    let reset = format_reset(sw.reset(), true);
    [
        Some(sw.source().clone()),
        Some(sw.action().clone()),
        guard,
        reset,
        Some(sw.target().clone()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<String>>()
    .join(", ")
}

pub fn format_switch_label_visual(sw: &Switch) -> String {
    let guard = format_clock_constraint(sw.guard().as_ref(), CLAUSE_JOIN_MULTILINE);
    let reset = format_reset(sw.reset(), false);
    [Some(sw.action().clone()), guard, reset]
        .into_iter()
        .flatten()
        .collect::<Vec<String>>()
        .join("\n")
}
