// src/lib.rs
//! Presentational form-grid building blocks for Bevy + egui: an editable
//! data table whose cells are typed controls (text input, dropdown,
//! checkbox, buttons, plain text), with row-keyed form state and
//! required-field validation.
//!
//! Hosts supply a [`grid::GridData`] (column descriptors + rows), add
//! [`grid::GridPlugin`] and [`ui::GridUiPlugin`], and listen for
//! [`grid::FormStateChanged`] snapshots, [`grid::ValidationCompleted`]
//! results, and [`grid::CellButtonClicked`] presses.

pub mod example_definitions;
pub mod grid;
pub mod ui;

pub use grid::{
    CellButtonClicked, CellValue, ChoiceOption, ColumnDefinition, ColumnKind, FormSnapshot,
    FormState, FormStateChanged, GridData, GridOperationFeedback, GridPlugin, GridRow,
    RequestSetGridData, RequestValidateAll, RowId, UpdateCellEvent, ValidationCompleted,
};
pub use ui::GridUiPlugin;
