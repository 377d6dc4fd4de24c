// src/app/state.rs

pub(crate) enum AppState {
    Loading(LoadingState),
    Running(RunningState),
    Failed(FailedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState)
    }
}

#[derive(Default, Clone)]
pub(crate) struct LoadingState;

#[derive(Clone)]
pub(crate) struct RunningState;

/// Terminal for the session: the fetch failed, the message replaces the
/// listing entirely. A fresh session re-fetches.
#[derive(Clone)]
pub(crate) struct FailedState {
    pub(crate) message: String,
}
