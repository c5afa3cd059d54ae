use thiserror::Error;

/// Errors raised while editing a timed automaton.
///
/// Parse failures (`UnknownComparator`, `InvalidBound`) signal that raw clause rows were handed
/// over without being validated first. All other variants are rejected user intents; the
/// automaton held by the store is left unchanged when one of them is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("`{0}` is not a valid clock comparator")]
    UnknownComparator(String),

    #[error("`{0}` is not a valid clause bound")]
    InvalidBound(String),

    #[error("The name must not be empty.")]
    EmptyName,

    #[error("The action label must not be empty.")]
    EmptyAction,

    #[error("A location named `{0}` already exists.")]
    DuplicateLocation(String),

    #[error("There is no location named `{0}`.")]
    UnknownLocation(String),

    #[error("A clock named `{0}` already exists.")]
    DuplicateClock(String),

    #[error("There is no clock named `{0}`.")]
    UnknownClock(String),

    #[error("An equal switch already exists.")]
    DuplicateSwitch,

    #[error("The switch does not exist.")]
    UnknownSwitch,

    #[error("The TA does not have an initial location.")]
    NoInitialLocation,

    #[error("The TA has multiple initial locations ({}).", .0.join(", "))]
    MultipleInitialLocations(Vec<String>),

    #[error("The TA cannot be modified while an analysis is running.")]
    AnalysisInProgress,

    #[error("No analysis is running.")]
    NoAnalysisRunning,

    #[error("The TA could not be serialized: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::Serialization(err.to_string())
    }
}
