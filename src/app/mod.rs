mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, FailedState, LoadingState, RunningState};

pub use root::App;
