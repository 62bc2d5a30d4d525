// src/ui/elements/grid/table_body.rs
use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{TableBody, TableRow};

use super::state::GridUiState;
use crate::grid::definitions::GridData;
use crate::grid::events::{CellButtonClicked, UpdateCellEvent};
use crate::grid::resources::FormState;
use crate::ui::common::grid_cell_widget;

/// Renders the body rows: one control per (row, column) pair, dispatched on
/// the column kind. Checkbox-selected rows render highlighted. Any value the
/// user changed this frame is reported upward as an `UpdateCellEvent`; the
/// grid logic owns the actual state mutation.
pub fn grid_table_body(
    body: TableBody,
    row_height: f32,
    grid_data: &GridData,
    form: &FormState,
    ui_state: &mut GridUiState,
    cell_update_writer: &mut EventWriter<UpdateCellEvent>,
    button_writer: &mut EventWriter<CellButtonClicked>,
) {
    let mut body = body;
    let num_rows = grid_data.rows.len();
    let num_cols = grid_data.columns.len();

    if num_rows == 0 || num_cols == 0 {
        body.row(row_height, |mut row: TableRow| {
            row.col(|ui| {
                ui.label("(No data)");
            });
        });
        return;
    }

    body.rows(row_height, num_rows, |mut row: TableRow| {
        let row_index = row.index();
        let Some(grid_row) = grid_data.rows.get(row_index) else {
            error!("Row index {} out of bounds while rendering.", row_index);
            row.col(|ui| {
                ui.label("Error: Invalid Row Index");
            });
            return;
        };

        row.set_selected(form.is_row_selected(grid_row.id));

        for column in &grid_data.columns {
            row.col(|ui| {
                // Keyed by row id (not index) so widget state survives reorders
                let cell_id = egui::Id::new("cell")
                    .with(grid_row.id)
                    .with(column.id.as_str());
                if let Some(value) =
                    grid_cell_widget(ui, cell_id, column, grid_row, form, ui_state, button_writer)
                {
                    cell_update_writer.write(UpdateCellEvent {
                        row_id: grid_row.id,
                        column_id: column.id.clone(),
                        value,
                    });
                }
            });
        }
    });
}
