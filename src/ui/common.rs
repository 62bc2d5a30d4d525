// src/ui/common.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::grid::definitions::{CellValue, ColumnDefinition, ColumnKind, GridRow};
use crate::grid::events::CellButtonClicked;
use crate::grid::resources::FormState;
use crate::ui::elements::grid::state::GridUiState;
use crate::ui::widgets::{
    add_centered_checkbox, add_choice_dropdown, add_icon_button, add_text_field,
};

/// Renders the control for one (row, column) cell, dispatched on the
/// column's kind, and returns the new value when the user changed it this
/// frame. Button presses are reported through `button_writer` instead of a
/// value. Error strings for the cell (validation pass or blur-local) render
/// as a small red label under the control.
pub fn grid_cell_widget(
    ui: &mut egui::Ui,
    id: egui::Id,
    column: &ColumnDefinition,
    row: &GridRow,
    form: &FormState,
    ui_state: &mut GridUiState,
    button_writer: &mut EventWriter<CellButtonClicked>,
) -> Option<CellValue> {
    let mut new_value: Option<CellValue> = None;

    ui.vertical(|cell_ui| {
        match column.kind {
            ColumnKind::TextInput => {
                let current = form
                    .value(row.id, &column.id)
                    .and_then(CellValue::as_str)
                    .unwrap_or("");
                if let Some(text) =
                    add_text_field(cell_ui, id, current, column, row.id, ui_state)
                {
                    new_value = Some(CellValue::Text(text));
                }
            }
            ColumnKind::Dropdown => {
                let current = form
                    .value(row.id, &column.id)
                    .and_then(CellValue::as_str)
                    .unwrap_or("");
                if let Some(value) = add_choice_dropdown(cell_ui, id, current, column) {
                    new_value = Some(CellValue::Choice(value));
                }
            }
            ColumnKind::Checkbox => {
                let mut checked = form
                    .value(row.id, &column.id)
                    .and_then(CellValue::as_toggle)
                    .unwrap_or(false);
                if add_centered_checkbox(cell_ui, &mut checked).changed() {
                    new_value = Some(CellValue::Toggle(checked));
                }
            }
            ColumnKind::IconButton => {
                let glyph = column.icon.as_deref().unwrap_or("⚙");
                if add_icon_button(cell_ui, glyph).clicked() {
                    button_writer.write(CellButtonClicked {
                        row_id: row.id,
                        column_id: column.id.clone(),
                    });
                }
            }
            ColumnKind::Button => {
                let label = column.button_label.as_deref().unwrap_or(&column.title);
                if cell_ui.button(label).clicked() {
                    button_writer.write(CellButtonClicked {
                        row_id: row.id,
                        column_id: column.id.clone(),
                    });
                }
            }
            ColumnKind::Plain => {
                cell_ui.label(row.cell(&column.id));
            }
        }

        // One error line per cell: the validation pass wins over blur-local.
        let error = form
            .error(row.id, &column.id)
            .or_else(|| ui_state.blur_error(row.id, &column.id));
        if let Some(message) = error {
            cell_ui.colored_label(
                egui::Color32::from_rgb(220, 60, 60),
                egui::RichText::new(message).small(),
            );
        }
    });

    new_value
}
