use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming. The palette mirrors the dark listing
/// look: near-black page, charcoal rows, violet hover accent, green/red chips.
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,

    pub central_panel: Color32,
    pub header_bg: Color32,
    pub row_alt_bg: Color32,
    pub skeleton: Color32,
    pub accent: Color32,

    pub profit: Color32,
    pub profit_chip_bg: Color32,
    pub loss: Color32,
    pub loss_chip_bg: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(229, 229, 229),
        heading: Color32::WHITE,
        subdued: Color32::GRAY,

        central_panel: Color32::from_rgb(18, 18, 18),
        header_bg: Color32::from_rgb(30, 30, 30),
        row_alt_bg: Color32::from_rgb(47, 46, 46),
        skeleton: Color32::from_rgb(48, 44, 44),
        accent: Color32::from_rgb(152, 68, 252),

        profit: Color32::from_rgb(34, 197, 94),
        profit_chip_bg: Color32::from_rgb(20, 68, 20),
        loss: Color32::from_rgb(239, 68, 68),
        loss_chip_bg: Color32::from_rgb(67, 42, 41),
    },
};

impl UiConfig {
    /// Frame for the Top search bar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.header_bg,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the listing area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 8),
            ..Default::default()
        }
    }
}
