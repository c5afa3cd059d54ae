use crate::error::EditorError;
use crate::ta::clock::Clock;
use crate::ta::clock_constraint::ClockConstraint;
use crate::ta::location::Location;
use crate::ta::switch::Switch;
use crate::util::vecs_eq_without_order;
use serde::Serialize;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod clock;
pub mod clock_constraint;
pub mod location;
pub mod switch;

/// The automaton being edited.
///
/// Mutations keep the automaton consistent: exactly one initial location whenever there is at
/// least one location, no two structurally equal switches, and no constraint or reset referring to
/// a deleted clock.
#[wasm_bindgen]
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimedAutomaton {
    locations: Vec<Location>,
    clocks: Vec<Clock>,
    switches: Vec<Switch>,
}

#[wasm_bindgen]
impl TimedAutomaton {
    #[wasm_bindgen(constructor)]
    pub fn new(locations: Box<[Location]>, clocks: Box<[Clock]>, switches: Box<[Switch]>) -> Self {
        Self {
            locations: Vec::from(locations),
            clocks: Vec::from(clocks),
            switches: Vec::from(switches),
        }
    }
}

impl TimedAutomaton {
    pub fn locations(&self) -> &Vec<Location> {
        &self.locations
    }

    pub fn clocks(&self) -> &Vec<Clock> {
        &self.clocks
    }

    pub fn switches(&self) -> &Vec<Switch> {
        &self.switches
    }

    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.name() == name)
    }

    pub fn find_clock(&self, name: &str) -> Option<&Clock> {
        self.clocks.iter().find(|clock| clock.is_named(name))
    }

    pub fn initial_locations(&self) -> Vec<&Location> {
        self.locations.iter().filter(|loc| loc.is_initial()).collect()
    }

    fn location_mut(&mut self, name: &str) -> Result<&mut Location, EditorError> {
        self.locations
            .iter_mut()
            .find(|loc| loc.name() == name)
            .ok_or_else(|| EditorError::UnknownLocation(String::from(name)))
    }

    // ===== clocks ================================================================================

    pub fn add_clock(&mut self, clock: Clock) {
        self.clocks.push(clock);
    }

    /// Whether any invariant or guard has a clause on the clock. Resets are not considered.
    pub fn uses_clock_in_any_constraint(&self, clock: &Clock) -> bool {
        let name = clock.name();
        self.locations
            .iter()
            .filter_map(|loc| loc.invariant().as_ref())
            .chain(self.switches.iter().filter_map(|sw| sw.guard().as_ref()))
            .any(|cc| cc.uses_clock(name))
    }

    /// Removes every clause on the clock from all invariants and guards. A constraint without any
    /// remaining clause is removed altogether.
    pub fn remove_all_clauses_using_clock(&mut self, clock: &Clock) {
        if !self.uses_clock_in_any_constraint(clock) {
            return;
        }
        let name = clock.name();
        let invariants = self.locations.iter_mut().map(|loc| loc.invariant_mut());
        let guards = self.switches.iter_mut().map(|sw| sw.guard_mut());
        for cc in invariants.chain(guards) {
            *cc = cc.take().and_then(|cc| cc.without_clock(name));
        }
    }

    pub fn remove_clock_from_all_resets(&mut self, clock: &Clock) {
        self.switches
            .iter_mut()
            .for_each(|sw| sw.remove_reset(clock.name()));
    }

    /// Deletes a clock together with every clause and reset referring to it.
    pub fn delete_clock(&mut self, name: &str) -> Result<(), EditorError> {
        let clock = self
            .find_clock(name)
            .cloned()
            .ok_or_else(|| EditorError::UnknownClock(String::from(name)))?;
        self.remove_all_clauses_using_clock(&clock);
        self.remove_clock_from_all_resets(&clock);
        self.clocks.retain(|c| *c != clock);
        Ok(())
    }

    /// Renames a clock everywhere: the clock list, all resets, all invariants and guards.
    /// Renaming a clock that does not exist changes nothing. Name collisions are not checked.
    pub fn rename_clock(&mut self, old_name: &str, new_name: &str) {
        let Some(index) = self.clocks.iter().position(|c| c.is_named(old_name)) else {
            return;
        };
        let new_clock = Clock::new(new_name);
        self.clocks[index] = new_clock.clone();

        for sw in self.switches.iter_mut() {
            sw.replace_reset(old_name, &new_clock);
        }

        let invariants = self.locations.iter_mut().map(|loc| loc.invariant_mut());
        let guards = self.switches.iter_mut().map(|sw| sw.guard_mut());
        invariants
            .chain(guards)
            .filter_map(|cc| cc.as_mut())
            .filter(|cc| cc.uses_clock(old_name))
            .for_each(|cc| cc.rename_clock(old_name, &new_clock));
    }

    // ===== locations =============================================================================

    /// Appends a location. An initial location takes the initial flag from all others; the first
    /// location of an empty automaton is always initial.
    pub fn add_location(&mut self, mut location: Location) {
        if self.locations.is_empty() {
            location.set_initial(true);
        }
        let is_initial = location.is_initial();
        self.locations.push(location);
        if is_initial {
            let last = self.locations.len() - 1;
            self.clear_initial_except(last);
        }
    }

    /// Updates name, initial flag and invariant of a location. Coordinates are kept. Switches
    /// follow a renamed location.
    pub fn edit_location(
        &mut self,
        prev_name: &str,
        name: &str,
        is_initial: bool,
        invariant: Option<ClockConstraint>,
    ) -> Result<(), EditorError> {
        let index = self
            .locations
            .iter()
            .position(|loc| loc.name() == prev_name)
            .ok_or_else(|| EditorError::UnknownLocation(String::from(prev_name)))?;

        let loc = &mut self.locations[index];
        loc.set_name(name);
        loc.set_initial(is_initial);
        loc.set_invariant(invariant);

        if prev_name != name {
            self.switches
                .iter_mut()
                .for_each(|sw| sw.rename_location(prev_name, name));
        }

        if is_initial {
            self.clear_initial_except(index);
        } else if !self
            .locations
            .iter()
            .enumerate()
            .any(|(i, loc)| i != index && loc.is_initial())
        {
            self.locations[0].set_initial(true);
        }
        Ok(())
    }

    /// Deletes a location and every switch starting or ending there. If the initial location is
    /// deleted, the first remaining location becomes initial.
    pub fn delete_location(&mut self, name: &str) -> Result<(), EditorError> {
        let index = self
            .locations
            .iter()
            .position(|loc| loc.name() == name)
            .ok_or_else(|| EditorError::UnknownLocation(String::from(name)))?;
        let removed = self.locations.remove(index);
        self.switches.retain(|sw| !sw.connects(name));

        if removed.is_initial() {
            if let Some(first) = self.locations.first_mut() {
                first.set_initial(true);
            }
        }
        Ok(())
    }

    pub fn update_location_coordinates(
        &mut self,
        name: &str,
        x_coordinate: f64,
        y_coordinate: f64,
    ) -> Result<(), EditorError> {
        self.location_mut(name)?.move_to(x_coordinate, y_coordinate);
        Ok(())
    }

    fn clear_initial_except(&mut self, keep: usize) {
        self.locations
            .iter_mut()
            .enumerate()
            .filter(|(i, _)| *i != keep)
            .for_each(|(_, loc)| loc.set_initial(false));
    }

    // ===== switches ==============================================================================

    /// Index of the first switch structurally equal to `sw`.
    pub fn position_of_switch(&self, sw: &Switch) -> Option<usize> {
        self.switches.iter().position(|existing| existing == sw)
    }

    pub fn add_switch(&mut self, sw: Switch) -> Result<(), EditorError> {
        if self.position_of_switch(&sw).is_some() {
            return Err(EditorError::DuplicateSwitch);
        }
        self.switches.push(sw);
        Ok(())
    }

    /// Replaces the first switch equal to `previous`. The result must not equal any other switch.
    pub fn edit_switch(&mut self, previous: &Switch, sw: Switch) -> Result<(), EditorError> {
        let index = self
            .position_of_switch(previous)
            .ok_or(EditorError::UnknownSwitch)?;
        let collides = self
            .switches
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && *existing == sw);
        if collides {
            return Err(EditorError::DuplicateSwitch);
        }
        self.switches[index] = sw;
        Ok(())
    }

    /// Deletes the first switch equal to `previous`.
    pub fn delete_switch(&mut self, previous: &Switch) -> Result<(), EditorError> {
        let index = self
            .position_of_switch(previous)
            .ok_or(EditorError::UnknownSwitch)?;
        self.switches.remove(index);
        Ok(())
    }
}

impl PartialEq<Self> for TimedAutomaton {
    fn eq(&self, other: &Self) -> bool {
        vecs_eq_without_order(&self.clocks, &other.clocks)
            && vecs_eq_without_order(&self.locations, &other.locations)
            && vecs_eq_without_order(&self.switches, &other.switches)
    }
}

/// Returns `false` if the automaton or the clock is missing.
pub fn ta_uses_clock_in_any_constraint(ta: Option<&TimedAutomaton>, clock: Option<&Clock>) -> bool {
    match (ta, clock) {
        (Some(ta), Some(clock)) => ta.uses_clock_in_any_constraint(clock),
        _ => false,
    }
}
