// src/grid/definitions.rs

pub mod cell_value;
pub mod column_definition;
pub mod column_kind;
pub mod grid_data;

pub use cell_value::{normalized_for_column, CellValue};
pub use column_definition::{ChoiceOption, ColumnDefinition};
pub use column_kind::ColumnKind;
pub use grid_data::{GridData, GridRow, RowId};
