// src/grid/mod.rs

// --- Public Interface ---
// Declare modules first
pub mod definitions;
pub mod events;
pub mod plugin;
pub mod resources;

// Declare internal implementation module
pub(crate) mod systems;

// Re-export types needed externally (by the UI layer or a host app)
pub use definitions::{
    CellValue, ChoiceOption, ColumnDefinition, ColumnKind, GridData, GridRow, RowId,
};
pub use events::{
    CellButtonClicked, FormStateChanged, GridOperationFeedback, RequestSetGridData,
    RequestValidateAll, UpdateCellEvent, ValidationCompleted,
};
pub use plugin::GridPlugin;
pub use resources::{FormSnapshot, FormState};
