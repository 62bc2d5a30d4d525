// src/grid/systems/logic.rs
use bevy::prelude::*;

use crate::grid::definitions::{normalized_for_column, ColumnKind, GridData};
use crate::grid::events::{
    FormStateChanged, GridOperationFeedback, RequestSetGridData, RequestValidateAll,
    UpdateCellEvent, ValidationCompleted,
};
use crate::grid::resources::FormState;

/// Applies wholesale data replacement requested by the host.
pub fn handle_set_grid_data(
    mut events: EventReader<RequestSetGridData>,
    mut grid_data: ResMut<GridData>,
) {
    for event in events.read() {
        info!(
            "Replacing grid data: {} column(s), {} row(s).",
            event.columns.len(),
            event.rows.len()
        );
        grid_data.columns = event.columns.clone();
        grid_data.rows = event.rows.clone();
    }
}

/// Rebuilds the form and error state whenever the grid data resource changes
/// (initial insertion included). Keeps the row-key invariant: form state rows
/// are exactly the data rows.
pub fn rebuild_form_state_on_data_change(
    grid_data: Res<GridData>,
    mut form: ResMut<FormState>,
) {
    if grid_data.is_changed() {
        form.rebuild(&grid_data.rows);
        debug!(
            "Form state rebuilt for {} row(s).",
            grid_data.rows.len()
        );
    }
}

/// Applies a single cell change: normalizes the value for the column kind,
/// stores it, clears that cell's error, keeps the checkbox selection set in
/// sync, and notifies the host with a full snapshot.
pub fn handle_cell_update(
    mut events: EventReader<UpdateCellEvent>,
    grid_data: Res<GridData>,
    mut form: ResMut<FormState>,
    mut changed_writer: EventWriter<FormStateChanged>,
) {
    let mut any_applied = false;
    for event in events.read() {
        let Some(column) = grid_data.column(&event.column_id) else {
            warn!(
                "Ignoring cell update for unknown column '{}' (row {}).",
                event.column_id, event.row_id
            );
            continue;
        };
        if !form.contains_row(event.row_id) {
            warn!(
                "Ignoring cell update for row {} not present in grid data.",
                event.row_id
            );
            continue;
        }

        let value = normalized_for_column(column.kind, event.value.clone());
        if column.kind == ColumnKind::Checkbox {
            let checked = value.as_toggle().unwrap_or(false);
            form.set_row_selected(event.row_id, checked);
        }
        form.set_value(event.row_id, &column.id, value);
        form.clear_error(event.row_id, &column.id);
        any_applied = true;
    }

    if any_applied {
        changed_writer.write(FormStateChanged {
            snapshot: form.snapshot(),
        });
    }
}

/// Runs the advisory "validate all" pass and reports the result both as an
/// event for hosts and as a feedback line for the UI.
pub fn handle_validate_request(
    mut events: EventReader<RequestValidateAll>,
    grid_data: Res<GridData>,
    mut form: ResMut<FormState>,
    mut completed_writer: EventWriter<ValidationCompleted>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
) {
    for _ in events.read() {
        let is_valid = form.validate(&grid_data.columns);
        let message = if is_valid {
            "All required fields are filled.".to_string()
        } else {
            let missing: usize = grid_data
                .columns
                .iter()
                .filter(|c| c.required)
                .map(|c| {
                    grid_data
                        .rows
                        .iter()
                        .filter(|r| form.error(r.id, &c.id).is_some())
                        .count()
                })
                .sum();
            format!("{} required field(s) missing.", missing)
        };
        info!("Validation pass: valid={} ({})", is_valid, message);
        completed_writer.write(ValidationCompleted { is_valid });
        feedback_writer.write(GridOperationFeedback {
            message,
            is_error: !is_valid,
        });
    }
}
