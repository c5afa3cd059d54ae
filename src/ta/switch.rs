use crate::ta::clock::Clock;
use crate::ta::clock_constraint::ClockConstraint;
use crate::util::{dedup_preserving_order, vecs_eq_without_order};
use serde::Serialize;
use wasm_bindgen::prelude::wasm_bindgen;

/// An edge of the automaton. Source and target are location names; the location objects are
/// resolved through the owning automaton.
#[wasm_bindgen]
#[derive(Debug, Clone, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Switch {
    source: String,
    guard: Option<ClockConstraint>,
    #[serde(rename = "actionLabel")]
    action: String,
    reset: Vec<Clock>,
    target: String,
}

#[wasm_bindgen]
impl Switch {
    #[wasm_bindgen(constructor)]
    pub fn new(
        source: &str,
        guard: Option<ClockConstraint>,
        action: &str,
        reset: Box<[Clock]>,
        target: &str,
    ) -> Self {
        Self {
            source: String::from(source),
            guard: ClockConstraint::normalize(guard),
            action: String::from(action),
            reset: dedup_preserving_order(Vec::from(reset)),
            target: String::from(target),
        }
    }
}

impl Switch {
    pub fn source(&self) -> &String {
        &self.source
    }

    pub fn guard(&self) -> &Option<ClockConstraint> {
        &self.guard
    }

    pub fn action(&self) -> &String {
        &self.action
    }

    pub fn reset(&self) -> &Vec<Clock> {
        &self.reset
    }

    pub fn target(&self) -> &String {
        &self.target
    }

    pub fn connects(&self, location_name: &str) -> bool {
        self.source == location_name || self.target == location_name
    }

    pub fn resets_clock(&self, clock_name: &str) -> bool {
        self.reset.iter().any(|clock| clock.is_named(clock_name))
    }

    pub(crate) fn guard_mut(&mut self) -> &mut Option<ClockConstraint> {
        &mut self.guard
    }

    pub(crate) fn rename_location(&mut self, old_name: &str, new_name: &str) {
        if self.source == old_name {
            self.source = String::from(new_name);
        }
        if self.target == old_name {
            self.target = String::from(new_name);
        }
    }

    pub(crate) fn remove_reset(&mut self, clock_name: &str) {
        self.reset.retain(|clock| !clock.is_named(clock_name));
    }

    pub(crate) fn replace_reset(&mut self, old_name: &str, new_clock: &Clock) {
        for clock in self.reset.iter_mut().filter(|clock| clock.is_named(old_name)) {
            *clock = new_clock.clone();
        }
        self.reset = dedup_preserving_order(std::mem::take(&mut self.reset));
    }
}

impl PartialEq<Self> for Switch {
    fn eq(&self, other: &Self) -> bool {
        self.action == other.action
            && vecs_eq_without_order(&self.reset, &other.reset)
            && self.guard == other.guard
            && self.source == other.source
            && self.target == other.target
    }
}

/// Structural switch equality: endpoints, action, guard and reset set. Two missing switches are
/// equal.
pub fn switches_equal(sw0: Option<&Switch>, sw1: Option<&Switch>) -> bool {
    sw0 == sw1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ta::clock_constraint::clause::{Clause, ClockComparator};

    #[test]
    fn new_returns_correct_switch_when_called() {
        // given
        let clause = Clause::new(&Clock::new("x"), ClockComparator::LESSER, 42);
        let cc = ClockConstraint::new(Box::from([clause]));
        let action = "action";
        let reset = vec![Clock::new("clock0"), Clock::new("clock1")];

        // when
        let result = Switch::new(
            "loc0",
            Some(cc.clone()),
            action,
            Box::from(reset.clone()),
            "loc1",
        );

        // then
        assert_eq!(result.source, "loc0");
        assert_eq!(result.guard, Some(cc));
        assert_eq!(result.action, action);
        assert_eq!(result.reset, reset);
        assert_eq!(result.target, "loc1");
    }

    #[test]
    fn new_drops_duplicate_resets() {
        // when
        let result = Switch::new(
            "a",
            None,
            "act",
            Box::from([Clock::new("x"), Clock::new("x")]),
            "b",
        );

        // then
        assert_eq!(result.reset, vec![Clock::new("x")]);
    }

    #[test]
    fn eq_returns_true_when_switches_are_eq() {
        // given
        let sw0 = gen_switch();
        let sw1 = sw0.clone();

        // when / then
        assert_eq!(sw0, sw1);
    }

    #[test]
    fn eq_returns_true_when_resets_differ_only_in_order() {
        // given
        let sw0 = gen_switch();
        let sw1 = Switch {
            reset: vec![Clock::new("y"), Clock::new("x")],
            ..gen_switch()
        };

        // when / then
        assert_eq!(sw0, sw1);
    }

    #[test]
    fn eq_returns_false_when_sources_are_different() {
        // given
        let sw0 = gen_switch();
        let sw1 = Switch {
            source: String::from("different"),
            ..gen_switch()
        };

        // when / then
        assert_ne!(sw0, sw1);
    }

    #[test]
    fn eq_returns_false_when_guards_are_different() {
        // given
        let sw0 = gen_switch();
        let clause = Clause::new(&Clock::new("other"), ClockComparator::GEQ, 1234);
        let cc = ClockConstraint::new(Box::from([clause]));
        let sw1 = Switch {
            guard: Some(cc),
            ..gen_switch()
        };

        // when / then
        assert_ne!(sw0, sw1);
    }

    #[test]
    fn eq_returns_false_when_only_one_switch_has_a_guard() {
        // given
        let sw0 = gen_switch();
        let sw1 = Switch {
            guard: None,
            ..gen_switch()
        };

        // when / then
        assert_ne!(sw0, sw1);
    }

    #[test]
    fn eq_returns_false_when_actions_are_different() {
        // given
        let sw0 = gen_switch();
        let sw1 = Switch {
            action: String::from("other"),
            ..gen_switch()
        };

        // when / then
        assert_ne!(sw0, sw1);
    }

    #[test]
    fn eq_returns_false_when_targets_are_different() {
        // given
        let sw0 = gen_switch();
        let sw1 = Switch {
            target: String::from("different"),
            ..gen_switch()
        };

        // when / then
        assert_ne!(sw0, sw1);
    }

    #[test]
    fn eq_returns_false_when_resets_contain_different_clocks() {
        // given
        let sw0 = gen_switch();
        let sw1 = Switch {
            reset: vec![Clock::new("other")],
            ..gen_switch()
        };

        // when / then
        assert_ne!(sw0, sw1);
    }

    #[test]
    fn switches_equal_is_reflexive_and_symmetric() {
        // given
        let a = gen_switch();
        let b = Switch {
            action: String::from("other"),
            ..gen_switch()
        };

        // when / then
        assert!(switches_equal(Some(&a), Some(&a)));
        assert_eq!(
            switches_equal(Some(&a), Some(&b)),
            switches_equal(Some(&b), Some(&a))
        );
    }

    #[test]
    fn switches_equal_handles_missing_switches() {
        // given
        let a = gen_switch();

        // when / then
        assert!(switches_equal(None, None));
        assert!(!switches_equal(Some(&a), None));
        assert!(!switches_equal(None, Some(&a)));
    }

    #[test]
    fn rename_location_updates_both_endpoints_of_a_loop() {
        // given
        let mut sw = Switch::new("loop", None, "tick", Box::from([]), "loop");

        // when
        sw.rename_location("loop", "spin");

        // then
        assert_eq!(sw.source(), "spin");
        assert_eq!(sw.target(), "spin");
    }

    #[test]
    fn replace_reset_swaps_clock_in_place() {
        // given
        let mut sw = gen_switch();

        // when
        sw.replace_reset("x", &Clock::new("z"));

        // then
        assert_eq!(sw.reset(), &vec![Clock::new("z"), Clock::new("y")]);
    }

    fn gen_switch() -> Switch {
        let clock_x = Clock::new("x");
        let clock_y = Clock::new("y");
        let clause = Clause::new(&clock_x, ClockComparator::LEQ, 42);
        let cc = ClockConstraint::new(Box::from([clause]));
        Switch {
            source: String::from("source"),
            guard: Some(cc),
            action: String::from("action"),
            reset: vec![clock_x, clock_y],
            target: String::from("target"),
        }
    }
}
