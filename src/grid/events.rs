// src/grid/events.rs
use bevy::prelude::Event;

use super::definitions::{CellValue, ColumnDefinition, GridRow, RowId};
use super::resources::FormSnapshot;

/// Sent by a rendered control (or the host) when one cell's value changes.
/// Handled by `grid::systems::logic::handle_cell_update`.
#[derive(Event, Debug, Clone)]
pub struct UpdateCellEvent {
    pub row_id: RowId,
    pub column_id: String,
    pub value: CellValue,
}

/// Wholesale replacement of the grid's columns and rows. Form and error
/// state are rebuilt from scratch for the new row set.
#[derive(Event, Debug, Clone)]
pub struct RequestSetGridData {
    pub columns: Vec<ColumnDefinition>,
    pub rows: Vec<GridRow>,
}

/// Explicit "validate all" pass over every required column.
#[derive(Event, Debug, Clone, Default)]
pub struct RequestValidateAll;

/// Advisory result of a validation pass. Never blocks interaction.
#[derive(Event, Debug, Clone)]
pub struct ValidationCompleted {
    pub is_valid: bool,
}

/// Full form-state snapshot, emitted after every applied change. This is the
/// grid's outbound callback surface for host applications.
#[derive(Event, Debug, Clone)]
pub struct FormStateChanged {
    pub snapshot: FormSnapshot,
}

/// A `Button` or `IconButton` cell was pressed. The grid itself attaches no
/// behavior; hosts react to the (row, column) pair.
#[derive(Event, Debug, Clone)]
pub struct CellButtonClicked {
    pub row_id: RowId,
    pub column_id: String,
}

/// Human-readable status line for the UI feedback area.
#[derive(Event, Debug, Clone)]
pub struct GridOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
