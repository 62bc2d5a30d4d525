// src/grid/definitions/column_kind.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag selecting which control a column's cells render as.
///
/// Serialized in camelCase (`textInput`, `iconButton`, ...) to match the
/// descriptor format the host supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKind {
    TextInput,
    Dropdown,
    IconButton,
    Checkbox,
    Button,
    /// Read-only display of the row payload value.
    #[default]
    Plain,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ColumnKind {
    /// Kinds whose cells hold an editable value in the form state.
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            ColumnKind::TextInput | ColumnKind::Dropdown | ColumnKind::Checkbox
        )
    }
}
