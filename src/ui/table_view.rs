use eframe::egui::{
    CentralPanel, Context, CornerRadius, CursorIcon, Frame, Label, Margin, RichText, Sense,
    TopBottomPanel, Ui,
};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::{
    app::App,
    table::{SortColumn, SortDirection},
    ui::{
        UI_CONFIG, UiStyleExt, change_colors, search_bar::render_search_bar, ui_text::UI_TEXT,
        utils::format_usd,
    },
};

const HEADER_HEIGHT: f32 = 28.0;
const ROW_HEIGHT: f32 = 44.0;

impl App {
    /// Title on the left, collapsible search on the right.
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(UI_TEXT.app_title)
                                .strong()
                                .size(20.0)
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.label_subdued(UI_TEXT.app_subtitle);
                    });
                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                        |ui| {
                            if render_search_bar(ui, &mut self.search) {
                                let query = self.search.query.clone();
                                self.table.apply_filter(&query);
                            }
                        },
                    );
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                if self.table.is_empty() && !self.table.filter().is_empty() {
                    ui.add_space(32.0);
                    ui.vertical_centered(|ui| {
                        ui.label_subdued(UI_TEXT.empty_results);
                    });
                    return;
                }
                self.render_asset_table(ui);
            });
    }

    fn render_asset_table(&mut self, ui: &mut Ui) {
        let mut clicked: Option<SortColumn> = None;
        let sort_state = self.table.sort_state();
        let table = &self.table;

        TableBuilder::new(ui)
            .striped(true)
            .sense(Sense::click())
            .column(Column::exact(60.0))
            .column(Column::remainder().clip(true))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(100.0))
            .header(HEADER_HEIGHT, |mut header| {
                for column in SortColumn::iter() {
                    header.col(|ui| {
                        if render_header_cell(ui, column, sort_state) {
                            clicked = Some(column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, table.len(), |mut row| {
                    let record = table.row(row.index());

                    row.col(|ui| {
                        ui.label(RichText::new(record.id.to_string()).color(UI_CONFIG.colors.label));
                    });
                    row.col(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&record.name)
                                    .strong()
                                    .color(UI_CONFIG.colors.heading),
                            );
                            ui.label_subdued(&record.symbol);
                        });
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format_usd(record.price))
                                .color(UI_CONFIG.colors.label),
                        );
                    });
                    row.col(|ui| {
                        render_change_chip(ui, record.percent_change_24h);
                    });
                });
            });

        if let Some(column) = clicked {
            self.table.apply_sort(column);
        }
    }
}

/// Clickable column header with the current sort arrow. Returns true on click.
fn render_header_cell(
    ui: &mut Ui,
    column: SortColumn,
    sort_state: Option<(SortColumn, SortDirection)>,
) -> bool {
    let title = match column {
        SortColumn::Id => UI_TEXT.header_id,
        SortColumn::Name => UI_TEXT.header_name,
        SortColumn::Price => UI_TEXT.header_price,
        SortColumn::Change24h => UI_TEXT.header_change,
    };
    let icon = match sort_state {
        Some((active, SortDirection::Ascending)) if active == column => UI_TEXT.icon_sort_asc,
        Some((active, SortDirection::Descending)) if active == column => UI_TEXT.icon_sort_desc,
        _ => UI_TEXT.icon_sort,
    };

    let text = RichText::new(format!("{} {}", title, icon))
        .strong()
        .color(UI_CONFIG.colors.heading);
    let response = ui.add(Label::new(text).sense(Sense::click()));
    if response.hovered() {
        ui.output_mut(|o| o.cursor_icon = CursorIcon::PointingHand);
    }
    response.clicked()
}

/// Rounded green/red pill showing the 24h percentage with a direction arrow.
fn render_change_chip(ui: &mut Ui, change: f64) {
    let (fg, bg) = change_colors(change);
    let arrow = if change > 0.0 {
        UI_TEXT.icon_up
    } else {
        UI_TEXT.icon_down
    };
    Frame {
        fill: bg,
        corner_radius: CornerRadius::same(6),
        inner_margin: Margin::symmetric(6, 2),
        ..Default::default()
    }
    .show(ui, |ui| {
        ui.label(RichText::new(format!("{} {:.2}%", arrow, change.abs())).color(fg));
    });
}
