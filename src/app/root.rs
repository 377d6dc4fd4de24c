use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::{
        mem,
        sync::{mpsc, mpsc::Receiver, mpsc::TryRecvError},
        thread,
    },
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    app::{AppState, FailedState, LoadingState, PhaseView, RunningState},
    config::DF,
    data::{AssetSource, ProxySource},
    domain::AssetRecord,
    table::TableState,
    ui::{SearchState, UI_CONFIG, render_error, render_loading},
};

pub struct App {
    pub(crate) table: TableState,
    pub(crate) search: SearchState,
    state: AppState,
    data_rx: Option<Receiver<Result<Vec<AssetRecord>, String>>>,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let (data_tx, data_rx) = mpsc::channel();

        // One fetch per session, off the UI thread. The runtime lives only as
        // long as the fetch; results come back over the channel.
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            rt.block_on(async move {
                let source = ProxySource::new(args.proxy_url);
                let result = source
                    .fetch_snapshot()
                    .await
                    .map_err(|e| format!("{:#}", e));
                let _ = data_tx.send(result);
            });
        });

        Self {
            table: TableState::default(),
            search: SearchState::default(),
            state: AppState::default(),
            data_rx: Some(data_rx),
        }
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context) -> AppState {
        if let Some(rx) = &self.data_rx {
            match rx.try_recv() {
                Ok(Ok(records)) => {
                    if DF.log_fetch {
                        log::info!("snapshot ready: {} assets", records.len());
                    }
                    self.table = TableState::new(records);
                    self.data_rx = None;
                    return AppState::Running(RunningState);
                }
                Ok(Err(message)) => {
                    log::error!("snapshot fetch failed: {}", message);
                    self.data_rx = None;
                    return AppState::Failed(FailedState { message });
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    return AppState::Failed(FailedState {
                        message: "data source thread terminated unexpectedly".to_string(),
                    });
                }
            }
        }

        render_loading(ctx);
        ctx.request_repaint();
        AppState::Loading(LoadingState)
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) -> AppState {
        self.render_top_panel(ctx);
        self.render_central_panel(ctx);
        AppState::Running(RunningState)
    }

    pub(crate) fn tick_failed_state(&mut self, ctx: &Context, state: &FailedState) -> AppState {
        render_error(ctx, &state.message);
        AppState::Failed(state.clone())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.header_bg;
    visuals.faint_bg_color = UI_CONFIG.colors.row_alt_bg;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    // Hovered table rows pick this up via the table's click sense.
    visuals.widgets.hovered.weak_bg_fill = UI_CONFIG.colors.accent;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_hover_uses_the_accent_color() {
        let ctx = Context::default();
        setup_custom_visuals(&ctx);
        let style = ctx.style();
        assert_eq!(
            style.visuals.widgets.hovered.weak_bg_fill,
            UI_CONFIG.colors.accent
        );
    }
}
