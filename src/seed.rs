use crate::ta::TimedAutomaton;
use crate::ta::clock::Clock;
use crate::ta::clock_constraint::ClockConstraint;
use crate::ta::clock_constraint::clause::{Clause, ClockComparator};
use crate::ta::location::Location;
use crate::ta::switch::Switch;

/// The demonstration automaton shown when the editor starts and after a reset:
/// `init` (initial, `x < 5`) --start [`x > 1 ∧ y ≥ 3`, reset `{x}`]--> `final`.
pub fn init_automaton() -> TimedAutomaton {
    let clock_x = Clock::new("x");
    let clock_y = Clock::new("y");

    let invariant = ClockConstraint::new(Box::from([Clause::new(
        &clock_x,
        ClockComparator::LESSER,
        5,
    )]));
    let guard = ClockConstraint::new(Box::from([
        Clause::new(&clock_x, ClockComparator::GREATER, 1),
        Clause::new(&clock_y, ClockComparator::GEQ, 3),
    ]));

    let loc_init = Location::new("init", true, Some(invariant), -100.0, 100.0);
    let loc_final = Location::new("final", false, None, 100.0, 100.0);
    let sw = Switch::new(
        loc_init.name(),
        Some(guard),
        "start",
        Box::from([clock_x.clone()]),
        loc_final.name(),
    );

    TimedAutomaton::new(
        Box::from([loc_init, loc_final]),
        Box::from([clock_x, clock_y]),
        Box::from([sw]),
    )
}
