use eframe::egui::{Color32, RichText, Ui};

use crate::ui::ui_config::UI_CONFIG;

/// Foreground and chip-background pair for a 24h change value.
/// Positive is green; zero and negative are red, matching the listing look.
pub(crate) fn change_colors(change: f64) -> (Color32, Color32) {
    if change > 0.0 {
        (UI_CONFIG.colors.profit, UI_CONFIG.colors.profit_chip_bg)
    } else {
        (UI_CONFIG.colors.loss, UI_CONFIG.colors.loss_chip_bg)
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text.into()).small().color(UI_CONFIG.colors.subdued));
    }
}
