// src/ui/widgets/text_field.rs
use bevy_egui::egui;

use crate::grid::definitions::{CellValue, ColumnDefinition, RowId};
use crate::ui::elements::grid::state::GridUiState;
use crate::ui::validation::{blur_message, validate_required_cell, ValidationState};

/// Field control: an editable single-line text cell with optional hint text
/// and masked (password-style) display.
///
/// Returns the new value when the user typed this frame. Blur-time "required
/// but empty" errors are recorded in `GridUiState` and rendered by the cell
/// dispatcher below the field; they clear on the next keystroke.
pub(crate) fn add_text_field(
    ui: &mut egui::Ui,
    id: egui::Id,
    current: &str,
    column: &ColumnDefinition,
    row_id: RowId,
    ui_state: &mut GridUiState,
) -> Option<String> {
    let mut temp_string = current.to_string();
    let mut new_value = None;

    let revealed = ui_state.is_revealed(row_id, &column.id);
    ui.horizontal(|row_ui| {
        let mut edit_width = row_ui.available_width();
        if column.masked {
            // Reserve room for the reveal toggle
            let toggle_w =
                row_ui.style().spacing.interact_size.y + row_ui.spacing().item_spacing.x;
            edit_width = (edit_width - toggle_w).max(8.0);
        }

        let mut text_edit = egui::TextEdit::singleline(&mut temp_string)
            .id(id.with("text_edit"))
            .desired_width(edit_width)
            .password(column.masked && !revealed);
        if let Some(hint) = &column.placeholder {
            text_edit = text_edit.hint_text(hint.as_str());
        }
        let resp = row_ui.add(text_edit);

        if resp.changed() {
            ui_state.clear_blur_error(row_id, &column.id);
            new_value = Some(temp_string.clone());
        }
        if resp.lost_focus() {
            let value = CellValue::Text(temp_string.clone());
            match validate_required_cell(Some(&value), column.required) {
                ValidationState::MissingRequired => {
                    ui_state.set_blur_error(row_id, &column.id, blur_message(column));
                }
                ValidationState::Valid => {
                    ui_state.clear_blur_error(row_id, &column.id);
                }
            }
        }

        if column.masked {
            let glyph = if revealed { "🙈" } else { "👁" };
            let side = row_ui.style().spacing.interact_size.y;
            let toggle = row_ui
                .add_sized([side, side], egui::Button::new(glyph))
                .on_hover_text(if revealed {
                    "Hide value"
                } else {
                    "Show value"
                });
            if toggle.clicked() {
                ui_state.toggle_revealed(row_id, &column.id);
            }
        }
    });

    new_value
}
