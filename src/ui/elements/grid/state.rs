// src/ui/elements/grid/state.rs
use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::grid::definitions::RowId;

/// Purely-local UI state for the rendered grid: masked-field reveal toggles
/// and blur-time error strings. None of this feeds back into validation or
/// the form state proper.
#[derive(Resource, Debug, Clone, Default)]
pub struct GridUiState {
    /// Masked text cells currently showing plaintext.
    revealed_fields: HashSet<(RowId, String)>,
    /// Inline errors produced when a required field lost focus while empty.
    /// Cleared by the next value change in that field.
    blur_errors: HashMap<(RowId, String), String>,
}

impl GridUiState {
    pub fn is_revealed(&self, row_id: RowId, column_id: &str) -> bool {
        self.revealed_fields
            .contains(&(row_id, column_id.to_string()))
    }

    pub fn toggle_revealed(&mut self, row_id: RowId, column_id: &str) {
        let key = (row_id, column_id.to_string());
        if !self.revealed_fields.remove(&key) {
            self.revealed_fields.insert(key);
        }
    }

    pub fn blur_error(&self, row_id: RowId, column_id: &str) -> Option<&str> {
        self.blur_errors
            .get(&(row_id, column_id.to_string()))
            .map(String::as_str)
    }

    pub fn set_blur_error(&mut self, row_id: RowId, column_id: &str, message: String) {
        self.blur_errors
            .insert((row_id, column_id.to_string()), message);
    }

    pub fn clear_blur_error(&mut self, row_id: RowId, column_id: &str) {
        self.blur_errors.remove(&(row_id, column_id.to_string()));
    }

    /// Dropped alongside wholesale data replacement, since the keyed rows no
    /// longer exist.
    pub fn reset(&mut self) {
        self.revealed_fields.clear();
        self.blur_errors.clear();
    }
}
