use eframe::egui::{CentralPanel, Context, CornerRadius, RichText, Sense, vec2};

use crate::ui::{UI_CONFIG, ui_text::UI_TEXT};

const SKELETON_ROWS: usize = 5;
const SKELETON_ROW_HEIGHT: f32 = 44.0;

/// Placeholder listing shown while the first snapshot is in flight:
/// a heading plus a few pulsing skeleton rows.
pub(crate) fn render_loading(ctx: &Context) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new(UI_TEXT.loading_title)
                        .color(UI_CONFIG.colors.heading)
                        .size(22.0),
                );
            });
            ui.add_space(24.0);

            // Pulse between 40% and 100% alpha on a ~1.2s cycle.
            let t = ui.input(|i| i.time);
            let pulse = 0.7 + 0.3 * (t * 5.0).sin() as f32;
            let fill = UI_CONFIG.colors.skeleton.linear_multiply(pulse);

            for _ in 0..SKELETON_ROWS {
                let width = ui.available_width();
                let (rect, _) =
                    ui.allocate_exact_size(vec2(width, SKELETON_ROW_HEIGHT), Sense::hover());
                ui.painter().rect_filled(rect, CornerRadius::same(8), fill);
                ui.add_space(8.0);
            }
        });
}
