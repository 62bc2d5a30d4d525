// src/grid/resources.rs
use bevy::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::definitions::{CellValue, ColumnDefinition, GridRow, RowId};
use crate::ui::validation::required_field_message;

/// Serializable copy of the live form state, forwarded to the host on every
/// change. `BTreeMap`-ordered so logged/serialized output is deterministic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormSnapshot {
    pub values: BTreeMap<RowId, BTreeMap<String, CellValue>>,
    pub selected_rows: BTreeSet<RowId>,
}

/// Row-keyed form state owned by the grid: typed values and validation-error
/// strings per (row, column), plus the set of checkbox-selected rows.
///
/// The row keys of `values` and `errors` are always exactly the row ids of
/// the supplied `GridData`. Entries are never removed one by one; the whole
/// thing is rebuilt when the data changes.
#[derive(Resource, Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<RowId, HashMap<String, CellValue>>,
    errors: HashMap<RowId, HashMap<String, String>>,
    selected: HashSet<RowId>,
}

impl FormState {
    /// Replaces all state wholesale for a new row set. Every row starts with
    /// empty value and error maps; the selection is cleared.
    pub fn rebuild(&mut self, rows: &[GridRow]) {
        self.values = rows.iter().map(|r| (r.id, HashMap::new())).collect();
        self.errors = rows.iter().map(|r| (r.id, HashMap::new())).collect();
        self.selected.clear();
    }

    pub fn contains_row(&self, row_id: RowId) -> bool {
        self.values.contains_key(&row_id)
    }

    pub fn value(&self, row_id: RowId, column_id: &str) -> Option<&CellValue> {
        self.values.get(&row_id).and_then(|row| row.get(column_id))
    }

    /// Stores a value for a known row. Returns false (and leaves state
    /// untouched) when the row is not part of the current data set.
    pub fn set_value(&mut self, row_id: RowId, column_id: &str, value: CellValue) -> bool {
        match self.values.get_mut(&row_id) {
            Some(row) => {
                row.insert(column_id.to_string(), value);
                true
            }
            None => false,
        }
    }

    pub fn error(&self, row_id: RowId, column_id: &str) -> Option<&str> {
        self.errors
            .get(&row_id)
            .and_then(|row| row.get(column_id))
            .map(String::as_str)
    }

    pub fn set_error(&mut self, row_id: RowId, column_id: &str, message: String) {
        if let Some(row) = self.errors.get_mut(&row_id) {
            row.insert(column_id.to_string(), message);
        }
    }

    pub fn clear_error(&mut self, row_id: RowId, column_id: &str) {
        if let Some(row) = self.errors.get_mut(&row_id) {
            row.remove(column_id);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|row| !row.is_empty())
    }

    pub fn is_row_selected(&self, row_id: RowId) -> bool {
        self.selected.contains(&row_id)
    }

    /// Adds or removes a row from the checkbox selection. Rows outside the
    /// current data set are ignored, so the selection can never contain a
    /// row the data does not.
    pub fn set_row_selected(&mut self, row_id: RowId, selected: bool) {
        if !self.contains_row(row_id) {
            return;
        }
        if selected {
            self.selected.insert(row_id);
        } else {
            self.selected.remove(&row_id);
        }
    }

    pub fn selected_rows(&self) -> impl Iterator<Item = RowId> + '_ {
        self.selected.iter().copied()
    }

    /// Validates every required column against every row. Falsy values
    /// (absent, empty string, unchecked) mark an error for that (row, column)
    /// and fail the pass. Only adds error entries; per-change clearing is
    /// what removes them.
    pub fn validate(&mut self, columns: &[ColumnDefinition]) -> bool {
        let mut is_valid = true;
        let row_ids: Vec<RowId> = self.values.keys().copied().collect();
        for column in columns.iter().filter(|c| c.required) {
            for &row_id in &row_ids {
                let missing = self
                    .value(row_id, &column.id)
                    .map_or(true, CellValue::is_empty);
                if missing {
                    is_valid = false;
                    self.set_error(row_id, &column.id, required_field_message(column));
                }
            }
        }
        is_valid
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self
                .values
                .iter()
                .map(|(row_id, row)| {
                    (
                        *row_id,
                        row.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
                    )
                })
                .collect(),
            selected_rows: self.selected.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::ColumnDefinition;

    fn one_row_state() -> FormState {
        let mut state = FormState::default();
        state.rebuild(&[GridRow::new(1)]);
        state
    }

    #[test]
    fn test_validate_required_empty_field() {
        let mut state = one_row_state();
        let columns = vec![ColumnDefinition::text("name", "Name").required()];

        assert!(!state.validate(&columns));
        assert_eq!(state.error(1, "name"), Some("Name wajib diisi"));
    }

    #[test]
    fn test_validate_non_required_never_errors() {
        let mut state = one_row_state();
        let columns = vec![ColumnDefinition::text("notes", "Notes")];

        assert!(state.validate(&columns));
        assert_eq!(state.error(1, "notes"), None);
    }

    #[test]
    fn test_validate_passes_once_filled() {
        let mut state = one_row_state();
        let columns = vec![ColumnDefinition::text("name", "Name").required()];

        assert!(!state.validate(&columns));
        state.set_value(1, "name", CellValue::Text("Concrete".to_string()));
        state.clear_error(1, "name");
        assert!(state.validate(&columns));
        assert_eq!(state.error(1, "name"), None);
    }

    #[test]
    fn test_unchecked_required_checkbox_is_missing() {
        let mut state = one_row_state();
        let columns = vec![ColumnDefinition::checkbox("accept", "Accept").required()];

        state.set_value(1, "accept", CellValue::Toggle(false));
        assert!(!state.validate(&columns));
        state.set_value(1, "accept", CellValue::Toggle(true));
        state.clear_error(1, "accept");
        assert!(state.validate(&columns));
    }

    #[test]
    fn test_selection_ignores_unknown_rows() {
        let mut state = one_row_state();
        state.set_row_selected(1, true);
        state.set_row_selected(99, true);
        assert!(state.is_row_selected(1));
        assert!(!state.is_row_selected(99));
        assert_eq!(state.selected_rows().count(), 1);
    }

    #[test]
    fn test_rebuild_replaces_wholesale() {
        let mut state = one_row_state();
        state.set_value(1, "name", CellValue::Text("kept?".to_string()));
        state.set_row_selected(1, true);

        state.rebuild(&[GridRow::new(2), GridRow::new(3)]);
        assert!(!state.contains_row(1));
        assert!(state.contains_row(2));
        assert!(state.contains_row(3));
        assert_eq!(state.selected_rows().count(), 0);
        assert!(!state.set_value(1, "name", CellValue::Text("stale".to_string())));
    }

    #[test]
    fn test_snapshot_is_ordered() {
        let mut state = FormState::default();
        state.rebuild(&[GridRow::new(2), GridRow::new(1)]);
        state.set_value(1, "b", CellValue::Text("x".to_string()));
        state.set_value(1, "a", CellValue::Toggle(true));

        let snapshot = state.snapshot();
        let keys: Vec<RowId> = snapshot.values.keys().copied().collect();
        assert_eq!(keys, vec![1, 2]);
        let cols: Vec<&String> = snapshot.values[&1].keys().collect();
        assert_eq!(cols, vec!["a", "b"]);
    }
}
