use eframe::egui::{Key, TextEdit, Ui};

use crate::ui::{UI_CONFIG, ui_text::UI_TEXT};

/// Collapsible search box state. Starts as a bare magnifier button and
/// expands into a text field on click.
#[derive(Default)]
pub(crate) struct SearchState {
    pub(crate) expanded: bool,
    pub(crate) query: String,
    focus_pending: bool,
}

/// Draws the search control and returns `true` when the query text changed
/// this frame (including when collapsing clears it).
pub(crate) fn render_search_bar(ui: &mut Ui, state: &mut SearchState) -> bool {
    if !state.expanded {
        if ui.button(UI_TEXT.icon_search).clicked() {
            state.expanded = true;
            state.focus_pending = true;
        }
        return false;
    }

    let mut changed = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            TextEdit::singleline(&mut state.query)
                .hint_text(UI_TEXT.search_hint)
                .desired_width(220.0)
                .text_color(UI_CONFIG.colors.label),
        );
        if state.focus_pending {
            response.request_focus();
            state.focus_pending = false;
        }
        changed = response.changed();

        let escape = ui.input(|i| i.key_pressed(Key::Escape));
        let abandoned = response.lost_focus() && state.query.is_empty();
        if escape || abandoned {
            state.expanded = false;
            if !state.query.is_empty() {
                state.query.clear();
                changed = true;
            }
        }
    });
    changed
}
