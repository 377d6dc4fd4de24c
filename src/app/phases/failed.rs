// app/phases/failed.rs

use eframe::egui::Context;

use crate::app::{App, PhaseView, state::AppState, state::FailedState};

impl PhaseView for FailedState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_failed_state(ctx, self)
    }
}
