use crate::movie::Movie;

/// What the result view shows for the recommendation flow. Owned by the
/// page-level view, replaced whole on every transition.
///
/// `Idle` is the initial state and is never re-entered once the first
/// submission happens. `Success` and `Error` hold until the next submission
/// moves the machine back through `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Movie>),
    Error(String),
}

impl ResultState {
    /// Enter `Loading`. Called synchronously at submission time, before the
    /// network call starts, so a prior error or result clears immediately.
    pub fn begin(&mut self) {
        *self = ResultState::Loading;
    }

    /// Apply the outcome of the in-flight request. Only lands while the
    /// machine is `Loading`; a resolution arriving after the state has
    /// already settled is dropped instead of overwriting it.
    pub fn resolve(&mut self, outcome: ResultState) {
        if matches!(self, ResultState::Loading) {
            *self = outcome;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading)
    }
}
