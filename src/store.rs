//! The editor state container. The view layer sends intents; each intent is validated, applied
//! to a copy of the current automaton and the copy replaces the automaton only if every step
//! succeeded.

use crate::analysis::model::AnalyzerTimedAutomaton;
use crate::analysis::{
    AnalysisError, AnalysisOutcome, AnalysisState, ReachabilityAnalyzer, map_ta_to_analyzer_model,
};
use crate::error::EditorError;
use crate::seed::init_automaton;
use crate::ta::TimedAutomaton;
use crate::ta::clock::Clock;
use crate::ta::clock_constraint::ClockConstraint;
use crate::ta::location::Location;
use crate::ta::switch::Switch;
use crate::util::avg_rounded;
use crate::validation::{
    validate_automaton, validate_clock_name, validate_constraint_clocks, validate_init_loc_count,
    validate_location_name, validate_switch,
};
use crate::visualization::{VisData, map_ta_to_vis_data};
use log::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct EditorStore {
    ta: TimedAutomaton,
    seed: TimedAutomaton,
    analysis_state: AnalysisState,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorStore {
    /// A store holding the demonstration automaton.
    pub fn new() -> Self {
        let seed = init_automaton();
        Self {
            ta: seed.clone(),
            seed,
            analysis_state: AnalysisState::Ready,
        }
    }

    /// A store starting from (and resetting to) the given automaton.
    pub fn with_automaton(ta: TimedAutomaton) -> Result<Self, EditorError> {
        validate_automaton(&ta)?;
        Ok(Self {
            ta: ta.clone(),
            seed: ta,
            analysis_state: AnalysisState::Ready,
        })
    }

    pub fn automaton(&self) -> &TimedAutomaton {
        &self.ta
    }

    pub fn analysis_state(&self) -> AnalysisState {
        self.analysis_state
    }

    pub fn reset(&mut self) -> Result<(), EditorError> {
        let seed = self.seed.clone();
        self.apply("reset", |ta| {
            *ta = seed;
            Ok(())
        })
    }

    fn apply<F>(&mut self, intent: &str, mutation: F) -> Result<(), EditorError>
    where
        F: FnOnce(&mut TimedAutomaton) -> Result<(), EditorError>,
    {
        if self.analysis_state == AnalysisState::Analyzing {
            warn!("{intent} rejected: analysis in progress");
            return Err(EditorError::AnalysisInProgress);
        }
        let mut next = self.ta.clone();
        match mutation(&mut next) {
            Ok(()) => {
                debug!("{intent} applied");
                self.ta = next;
                Ok(())
            }
            Err(err) => {
                warn!("{intent} rejected: {err}");
                Err(err)
            }
        }
    }

    // ===== locations =============================================================================

    /// Adds a location at the centre of the existing locations.
    pub fn add_location(
        &mut self,
        name: &str,
        is_initial: bool,
        invariant: Option<ClockConstraint>,
    ) -> Result<(), EditorError> {
        self.apply(&format!("add location `{name}`"), |ta| {
            validate_location_name(ta, name, None)?;
            validate_constraint_clocks(ta, invariant.as_ref())?;
            let xs: Vec<f64> = ta.locations().iter().map(|l| l.x_coordinate()).collect();
            let ys: Vec<f64> = ta.locations().iter().map(|l| l.y_coordinate()).collect();
            let location =
                Location::new(name, is_initial, invariant, avg_rounded(&xs), avg_rounded(&ys));
            ta.add_location(location);
            validate_init_loc_count(ta)
        })
    }

    pub fn edit_location(
        &mut self,
        prev_name: &str,
        name: &str,
        is_initial: bool,
        invariant: Option<ClockConstraint>,
    ) -> Result<(), EditorError> {
        self.apply(&format!("edit location `{prev_name}`"), |ta| {
            if ta.find_location(prev_name).is_none() {
                return Err(EditorError::UnknownLocation(String::from(prev_name)));
            }
            validate_location_name(ta, name, Some(prev_name))?;
            validate_constraint_clocks(ta, invariant.as_ref())?;
            ta.edit_location(prev_name, name, is_initial, invariant)?;
            validate_init_loc_count(ta)
        })
    }

    pub fn delete_location(&mut self, name: &str) -> Result<(), EditorError> {
        self.apply(&format!("delete location `{name}`"), |ta| {
            ta.delete_location(name)?;
            validate_init_loc_count(ta)
        })
    }

    pub fn update_location_coordinates(
        &mut self,
        name: &str,
        x_coordinate: f64,
        y_coordinate: f64,
    ) -> Result<(), EditorError> {
        self.apply(&format!("move location `{name}`"), |ta| {
            ta.update_location_coordinates(name, x_coordinate, y_coordinate)
        })
    }

    // ===== clocks ================================================================================

    pub fn add_clock(&mut self, name: &str) -> Result<(), EditorError> {
        self.apply(&format!("add clock `{name}`"), |ta| {
            validate_clock_name(ta, name, None)?;
            ta.add_clock(Clock::new(name));
            Ok(())
        })
    }

    pub fn rename_clock(&mut self, old_name: &str, new_name: &str) -> Result<(), EditorError> {
        self.apply(&format!("rename clock `{old_name}`"), |ta| {
            if ta.find_clock(old_name).is_none() {
                return Err(EditorError::UnknownClock(String::from(old_name)));
            }
            validate_clock_name(ta, new_name, Some(old_name))?;
            ta.rename_clock(old_name, new_name);
            Ok(())
        })
    }

    /// Deletes the clock and everything referring to it.
    pub fn delete_clock(&mut self, name: &str) -> Result<(), EditorError> {
        self.apply(&format!("delete clock `{name}`"), |ta| ta.delete_clock(name))
    }

    // ===== switches ==============================================================================

    pub fn add_switch(&mut self, sw: Switch) -> Result<(), EditorError> {
        self.apply(&format!("add switch `{}`", sw.action()), |ta| {
            validate_switch(ta, &sw)?;
            ta.add_switch(sw)
        })
    }

    pub fn edit_switch(&mut self, previous: &Switch, sw: Switch) -> Result<(), EditorError> {
        self.apply(&format!("edit switch `{}`", previous.action()), |ta| {
            validate_switch(ta, &sw)?;
            ta.edit_switch(previous, sw)
        })
    }

    pub fn delete_switch(&mut self, previous: &Switch) -> Result<(), EditorError> {
        self.apply(&format!("delete switch `{}`", previous.action()), |ta| {
            ta.delete_switch(previous)
        })
    }

    // ===== views =================================================================================

    pub fn automaton_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(&self.ta)?)
    }

    pub fn vis_data(&self) -> VisData {
        map_ta_to_vis_data(&self.ta)
    }

    // ===== analysis ==============================================================================

    /// Exports the automaton and blocks all mutations until [`Self::finish_analysis`] is called.
    pub fn begin_analysis(&mut self) -> Result<AnalyzerTimedAutomaton, EditorError> {
        if self.analysis_state == AnalysisState::Analyzing {
            return Err(EditorError::AnalysisInProgress);
        }
        let model = map_ta_to_analyzer_model(&self.ta)?;
        self.analysis_state = AnalysisState::Analyzing;
        debug!("analysis started");
        Ok(model)
    }

    pub fn finish_analysis(
        &mut self,
        result: Result<Vec<String>, AnalysisError>,
    ) -> Result<AnalysisOutcome, EditorError> {
        if self.analysis_state != AnalysisState::Analyzing {
            return Err(EditorError::NoAnalysisRunning);
        }
        self.analysis_state = AnalysisState::Ready;
        let outcome = AnalysisOutcome::from(result);
        match &outcome {
            AnalysisOutcome::Failed(msg) => warn!("analysis failed: {msg}"),
            _ => info!("analysis finished: {outcome:?}"),
        }
        Ok(outcome)
    }

    /// Runs a synchronous analyzer on the current automaton. The automaton is never modified.
    pub fn analyze(
        &mut self,
        analyzer: &dyn ReachabilityAnalyzer,
    ) -> Result<AnalysisOutcome, EditorError> {
        let model = self.begin_analysis()?;
        let result = analyzer.find_unreachable_locations(&model);
        self.finish_analysis(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ta::clock_constraint::clause::{Clause, ClockComparator};
    use pretty_assertions::assert_eq;

    #[test]
    fn new_holds_demonstration_automaton() {
        // when
        let store = EditorStore::new();

        // then
        assert_eq!(store.automaton(), &init_automaton());
        assert_eq!(store.analysis_state(), AnalysisState::Ready);
    }

    #[test]
    fn with_automaton_rejects_inconsistent_automaton() {
        // given
        let ta = TimedAutomaton::new(
            Box::from([
                Location::new("a", true, None, 0.0, 0.0),
                Location::new("b", true, None, 0.0, 0.0),
            ]),
            Box::from([]),
            Box::from([]),
        );

        // when
        let result = EditorStore::with_automaton(ta);

        // then
        assert_eq!(
            result.err(),
            Some(EditorError::MultipleInitialLocations(vec![
                String::from("a"),
                String::from("b"),
            ]))
        );
    }

    #[test]
    fn add_location_places_location_at_centre_of_existing_locations() {
        // given
        let mut store = EditorStore::new();

        // when
        store.add_location("middle", false, None).unwrap();

        // then
        let loc = store.automaton().find_location("middle").unwrap();
        assert_eq!(loc.x_coordinate(), 0.0);
        assert_eq!(loc.y_coordinate(), 100.0);
        assert!(!loc.is_initial());
    }

    #[test]
    fn add_location_with_initial_flag_clears_flag_on_existing_locations() {
        // given
        let mut store = EditorStore::new();

        // when
        store.add_location("start", true, None).unwrap();

        // then
        let initial: Vec<&String> = store
            .automaton()
            .initial_locations()
            .iter()
            .map(|l| l.name())
            .collect();
        assert_eq!(initial, vec!["start"]);
    }

    #[test]
    fn add_location_rejects_duplicate_name_and_keeps_automaton() {
        // given
        let mut store = EditorStore::new();

        // when
        let result = store.add_location("Final", false, None);

        // then
        assert_eq!(result, Err(EditorError::DuplicateLocation(String::from("Final"))));
        assert_eq!(store.automaton(), &init_automaton());
    }

    #[test]
    fn add_location_rejects_invariant_on_unknown_clock() {
        // given
        let mut store = EditorStore::new();
        let clause = Clause::new(&Clock::new("z"), ClockComparator::LESSER, 1);
        let invariant = ClockConstraint::new(Box::from([clause]));

        // when
        let result = store.add_location("new", false, Some(invariant));

        // then
        assert_eq!(result, Err(EditorError::UnknownClock(String::from("z"))));
    }

    #[test]
    fn edit_location_unchecking_only_initial_location_keeps_it_initial() {
        // given
        let mut store = EditorStore::new();

        // when
        store.edit_location("init", "init", false, None).unwrap();

        // then
        let ta = store.automaton();
        assert!(ta.find_location("init").unwrap().is_initial());
        assert_eq!(ta.initial_locations().len(), 1);
    }

    #[test]
    fn edit_location_rename_is_followed_by_switches() {
        // given
        let mut store = EditorStore::new();

        // when
        store.edit_location("final", "done", false, None).unwrap();

        // then
        assert_eq!(store.automaton().switches()[0].target(), "done");
    }

    #[test]
    fn delete_initial_location_promotes_first_remaining_location() {
        // given
        let mut store = EditorStore::new();
        store.add_location("third", false, None).unwrap();

        // when
        store.delete_location("init").unwrap();

        // then
        let initial: Vec<&String> = store
            .automaton()
            .initial_locations()
            .iter()
            .map(|l| l.name())
            .collect();
        assert_eq!(initial, vec!["final"]);
        assert!(store.automaton().switches().is_empty());
    }

    #[test]
    fn update_location_coordinates_returns_err_for_unknown_location() {
        // given
        let mut store = EditorStore::new();

        // when
        let result = store.update_location_coordinates("nowhere", 1.0, 2.0);

        // then
        assert_eq!(result, Err(EditorError::UnknownLocation(String::from("nowhere"))));
    }

    #[test]
    fn add_clock_rejects_existing_name() {
        // given
        let mut store = EditorStore::new();

        // when
        let result = store.add_clock("x");

        // then
        assert_eq!(result, Err(EditorError::DuplicateClock(String::from("x"))));
    }

    #[test]
    fn rename_clock_rejects_name_of_other_clock() {
        // given
        let mut store = EditorStore::new();

        // when
        let result = store.rename_clock("x", "y");

        // then
        assert_eq!(result, Err(EditorError::DuplicateClock(String::from("y"))));
        assert_eq!(store.automaton(), &init_automaton());
    }

    #[test]
    fn rename_clock_returns_err_when_clock_does_not_exist() {
        // given
        let mut store = EditorStore::new();

        // when
        let result = store.rename_clock("missing", "other");

        // then
        assert_eq!(result, Err(EditorError::UnknownClock(String::from("missing"))));
    }

    #[test]
    fn add_switch_rejects_duplicate_with_reordered_guard() {
        // given
        let mut store = EditorStore::new();
        let guard = ClockConstraint::new(Box::from([
            Clause::new(&Clock::new("y"), ClockComparator::GEQ, 3),
            Clause::new(&Clock::new("x"), ClockComparator::GREATER, 1),
        ]));
        let sw = Switch::new("init", Some(guard), "start", Box::from([Clock::new("x")]), "final");

        // when
        let result = store.add_switch(sw);

        // then
        assert_eq!(result, Err(EditorError::DuplicateSwitch));
    }

    #[test]
    fn add_switch_rejects_unknown_target() {
        // given
        let mut store = EditorStore::new();
        let sw = Switch::new("init", None, "go", Box::from([]), "nowhere");

        // when
        let result = store.add_switch(sw);

        // then
        assert_eq!(result, Err(EditorError::UnknownLocation(String::from("nowhere"))));
    }

    #[test]
    fn add_location_stores_empty_invariant_as_none() {
        // given
        let mut store = EditorStore::new();
        let empty = ClockConstraint::new(Box::from([]));

        // when
        store.add_location("husk", false, Some(empty)).unwrap();

        // then
        let loc = store.automaton().find_location("husk").unwrap();
        assert_eq!(loc.invariant(), &None);
    }

    #[test]
    fn edit_location_stores_empty_invariant_as_none() {
        // given
        let mut store = EditorStore::new();
        let empty = ClockConstraint::new(Box::from([]));

        // when
        store.edit_location("init", "init", true, Some(empty)).unwrap();

        // then
        let loc = store.automaton().find_location("init").unwrap();
        assert_eq!(loc.invariant(), &None);
    }

    #[test]
    fn add_switch_treats_empty_guard_as_missing_guard() {
        // given
        let mut store = EditorStore::new();
        let back = Switch::new("final", None, "back", Box::from([]), "init");
        store.add_switch(back).unwrap();
        let empty = ClockConstraint::new(Box::from([]));
        let duplicate = Switch::new("final", Some(empty), "back", Box::from([]), "init");

        // when
        let result = store.add_switch(duplicate);

        // then
        assert_eq!(result, Err(EditorError::DuplicateSwitch));
        assert_eq!(store.automaton().switches().len(), 2);
        assert_eq!(store.automaton().switches()[1].guard(), &None);
    }

    #[test]
    fn edit_switch_stores_empty_guard_as_none() {
        // given
        let mut store = EditorStore::new();
        let previous = store.automaton().switches()[0].clone();
        let empty = ClockConstraint::new(Box::from([]));
        let edited = Switch::new("init", Some(empty), "start", Box::from([]), "final");

        // when
        store.edit_switch(&previous, edited).unwrap();

        // then
        assert_eq!(store.automaton().switches()[0].guard(), &None);
    }

    #[test]
    fn edit_switch_replaces_switch() {
        // given
        let mut store = EditorStore::new();
        let previous = store.automaton().switches()[0].clone();
        let edited = Switch::new("final", None, "back", Box::from([]), "init");

        // when
        store.edit_switch(&previous, edited.clone()).unwrap();

        // then
        assert_eq!(store.automaton().switches(), &vec![edited]);
    }

    #[test]
    fn delete_switch_removes_switch() {
        // given
        let mut store = EditorStore::new();
        let previous = store.automaton().switches()[0].clone();

        // when
        store.delete_switch(&previous).unwrap();

        // then
        assert!(store.automaton().switches().is_empty());
    }

    #[test]
    fn reset_restores_seed() {
        // given
        let mut store = EditorStore::new();
        store.delete_clock("x").unwrap();
        store.add_location("extra", true, None).unwrap();

        // when
        store.reset().unwrap();

        // then
        assert_eq!(store.automaton(), &init_automaton());
    }

    #[test]
    fn analyze_reports_unreachable_locations_without_touching_automaton() {
        // given
        let mut store = EditorStore::new();
        let analyzer = |_: &AnalyzerTimedAutomaton| -> Result<Vec<String>, AnalysisError> {
            Ok(vec![String::from("final")])
        };

        // when
        let outcome = store.analyze(&analyzer).unwrap();

        // then
        assert_eq!(outcome, AnalysisOutcome::Unreachable(vec![String::from("final")]));
        assert_eq!(store.automaton(), &init_automaton());
        assert_eq!(store.analysis_state(), AnalysisState::Ready);
    }

    #[test]
    fn analyze_reports_failure_of_analyzer() {
        // given
        let mut store = EditorStore::new();
        let analyzer = |_: &AnalyzerTimedAutomaton| -> Result<Vec<String>, AnalysisError> {
            Err(AnalysisError::Failed(String::from("no initial location")))
        };

        // when
        let outcome = store.analyze(&analyzer).unwrap();

        // then
        assert_eq!(
            outcome,
            AnalysisOutcome::Failed(String::from("The analysis failed: no initial location"))
        );
        assert_eq!(store.analysis_state(), AnalysisState::Ready);
    }

    #[test]
    fn mutations_are_rejected_while_analysis_is_running() {
        // given
        let mut store = EditorStore::new();
        store.begin_analysis().unwrap();

        // when
        let result = store.add_clock("z");

        // then
        assert_eq!(result, Err(EditorError::AnalysisInProgress));
        assert_eq!(store.begin_analysis().err(), Some(EditorError::AnalysisInProgress));
        store.finish_analysis(Ok(Vec::new())).unwrap();
        assert_eq!(store.add_clock("z"), Ok(()));
    }

    #[test]
    fn finish_analysis_returns_err_when_no_analysis_is_running() {
        // given
        let mut store = EditorStore::new();

        // when
        let result = store.finish_analysis(Ok(Vec::new()));

        // then
        assert_eq!(result, Err(EditorError::NoAnalysisRunning));
    }

    #[test]
    fn automaton_json_uses_editor_field_names() {
        // given
        let store = EditorStore::new();

        // when
        let json = store.automaton_json().unwrap();

        // then
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["locations"][0]["isInitial"], serde_json::json!(true));
        assert_eq!(value["locations"][0]["invariant"]["clauses"][0]["op"], "<");
        assert_eq!(value["switches"][0]["actionLabel"], "start");
        assert_eq!(value["switches"][0]["reset"][0]["name"], "x");
    }
}
