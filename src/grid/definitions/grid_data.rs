// src/grid/definitions/grid_data.rs
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::column_definition::ColumnDefinition;

/// Unique key distinguishing one data row.
pub type RowId = u64;

/// One caller-supplied data row: an identifier plus an arbitrary payload
/// keyed by column id. `Plain` columns display the payload value verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridRow {
    pub id: RowId,
    #[serde(default)]
    pub cells: HashMap<String, String>,
}

impl GridRow {
    pub fn new(id: RowId) -> Self {
        GridRow {
            id,
            cells: HashMap::new(),
        }
    }

    pub fn with_cell(mut self, column_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.cells.insert(column_id.into(), value.into());
        self
    }

    pub fn cell(&self, column_id: &str) -> &str {
        self.cells.get(column_id).map(String::as_str).unwrap_or("")
    }
}

/// The grid's caller-supplied inputs: ordered column descriptors and ordered
/// data rows. Replaced wholesale via `RequestSetGridData`; the form state is
/// rebuilt whenever this resource changes.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridData {
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub rows: Vec<GridRow>,
}

impl GridData {
    pub fn new(columns: Vec<ColumnDefinition>, rows: Vec<GridRow>) -> Self {
        GridData { columns, rows }
    }

    pub fn column(&self, column_id: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn has_row(&self, row_id: RowId) -> bool {
        self.rows.iter().any(|r| r.id == row_id)
    }
}
