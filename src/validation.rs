use crate::error::EditorError;
use crate::ta::TimedAutomaton;
use crate::ta::clock_constraint::ClockConstraint;
use crate::ta::switch::Switch;

/// Checks a location name. Names are compared case-insensitively; `prev_name` is the name of the
/// location being edited (which may keep its own name).
pub fn validate_location_name(
    ta: &TimedAutomaton,
    name: &str,
    prev_name: Option<&str>,
) -> Result<(), EditorError> {
    if name.trim().is_empty() {
        return Err(EditorError::EmptyName);
    }
    let lowercase = name.to_lowercase();
    let duplicate = ta
        .locations()
        .iter()
        .filter(|loc| Some(loc.name().as_str()) != prev_name)
        .any(|loc| loc.name().to_lowercase() == lowercase);
    if duplicate {
        return Err(EditorError::DuplicateLocation(String::from(name)));
    }
    Ok(())
}

/// Checks a clock name. Clock names are case-sensitive.
pub fn validate_clock_name(
    ta: &TimedAutomaton,
    name: &str,
    prev_name: Option<&str>,
) -> Result<(), EditorError> {
    if name.trim().is_empty() {
        return Err(EditorError::EmptyName);
    }
    let duplicate = ta
        .clocks()
        .iter()
        .filter(|clock| Some(clock.name().as_str()) != prev_name)
        .any(|clock| clock.is_named(name));
    if duplicate {
        return Err(EditorError::DuplicateClock(String::from(name)));
    }
    Ok(())
}

/// All clocks of a guard or invariant must belong to the automaton.
pub fn validate_constraint_clocks(
    ta: &TimedAutomaton,
    cc: Option<&ClockConstraint>,
) -> Result<(), EditorError> {
    let Some(cc) = cc else {
        return Ok(());
    };
    match cc.clock_names().into_iter().find(|name| ta.find_clock(name).is_none()) {
        Some(unknown) => Err(EditorError::UnknownClock(unknown.clone())),
        None => Ok(()),
    }
}

/// Checks action label, endpoints, guard and resets of a switch. Duplicates are rejected by the
/// automaton itself.
pub fn validate_switch(ta: &TimedAutomaton, sw: &Switch) -> Result<(), EditorError> {
    if sw.action().trim().is_empty() {
        return Err(EditorError::EmptyAction);
    }
    for endpoint in [sw.source(), sw.target()] {
        if ta.find_location(endpoint).is_none() {
            return Err(EditorError::UnknownLocation(endpoint.clone()));
        }
    }
    validate_constraint_clocks(ta, sw.guard().as_ref())?;
    if let Some(unknown) = sw.reset().iter().find(|c| ta.find_clock(c.name()).is_none()) {
        return Err(EditorError::UnknownClock(unknown.name().clone()));
    }
    Ok(())
}

/// An automaton with locations needs exactly one initial location.
pub fn validate_init_loc_count(ta: &TimedAutomaton) -> Result<(), EditorError> {
    if ta.locations().is_empty() {
        return Ok(());
    }
    let init_locs = ta.initial_locations();
    if init_locs.is_empty() {
        return Err(EditorError::NoInitialLocation);
    }
    if init_locs.len() > 1 {
        let init_loc_names: Vec<String> = init_locs.iter().map(|loc| loc.name().clone()).collect();
        return Err(EditorError::MultipleInitialLocations(init_loc_names));
    }
    Ok(())
}

/// Full consistency check of an automaton handed in from outside. Returns the first violation.
pub fn validate_automaton(ta: &TimedAutomaton) -> Result<(), EditorError> {
    let mut seen_locations: Vec<String> = Vec::new();
    for loc in ta.locations() {
        let lowercase = loc.name().to_lowercase();
        if seen_locations.contains(&lowercase) {
            return Err(EditorError::DuplicateLocation(loc.name().clone()));
        }
        seen_locations.push(lowercase);
        validate_constraint_clocks(ta, loc.invariant().as_ref())?;
    }

    for (i, clock) in ta.clocks().iter().enumerate() {
        if ta.clocks()[..i].contains(clock) {
            return Err(EditorError::DuplicateClock(clock.name().clone()));
        }
    }

    for (i, sw) in ta.switches().iter().enumerate() {
        validate_switch(ta, sw)?;
        if ta.switches()[..i].contains(sw) {
            return Err(EditorError::DuplicateSwitch);
        }
    }

    validate_init_loc_count(ta)
}
