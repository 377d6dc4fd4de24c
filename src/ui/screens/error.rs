use eframe::egui::{CentralPanel, Context, RichText};

use crate::ui::{UI_CONFIG, ui_text::UI_TEXT};

/// Full-screen failure notice. Nothing is recoverable from here short of a
/// restart, so the message is all we show.
pub(crate) fn render_error(ctx: &Context, message: &str) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.add_space(48.0);
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new(format!("{} {}", UI_TEXT.error_prefix, message))
                        .color(UI_CONFIG.colors.loss)
                        .size(20.0),
                );
            });
        });
}
