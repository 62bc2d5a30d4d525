// src/grid/definitions/cell_value.rs
use serde::Serialize;

use super::column_kind::ColumnKind;

/// Current value of one editable cell. The variant follows the column kind:
/// text inputs hold `Text`, dropdowns hold the selected option's underlying
/// `Choice` value, checkboxes hold `Toggle`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Choice(String),
    Toggle(bool),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl CellValue {
    /// Falsy check used by the validation pass: empty strings and unchecked
    /// toggles count as missing.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(s) | CellValue::Choice(s) => s.is_empty(),
            CellValue::Toggle(checked) => !checked,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) | CellValue::Choice(s) => Some(s.as_str()),
            CellValue::Toggle(_) => None,
        }
    }

    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            CellValue::Toggle(checked) => Some(*checked),
            _ => None,
        }
    }
}

/// Coerces an incoming value to the variant a column of `kind` stores.
/// Dropdowns always store the underlying option value as `Choice`, checkboxes
/// a `Toggle` (string "true"/"1" is accepted from hosts sending raw text).
pub fn normalized_for_column(kind: ColumnKind, value: CellValue) -> CellValue {
    match kind {
        ColumnKind::Checkbox => match value {
            CellValue::Toggle(b) => CellValue::Toggle(b),
            CellValue::Text(s) | CellValue::Choice(s) => {
                CellValue::Toggle(matches!(s.to_lowercase().as_str(), "true" | "1"))
            }
        },
        ColumnKind::Dropdown => match value {
            CellValue::Choice(s) | CellValue::Text(s) => CellValue::Choice(s),
            CellValue::Toggle(b) => CellValue::Choice(b.to_string()),
        },
        _ => match value {
            CellValue::Choice(s) => CellValue::Text(s),
            other => other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        assert!(CellValue::Text(String::new()).is_empty());
        assert!(CellValue::Choice(String::new()).is_empty());
        assert!(CellValue::Toggle(false).is_empty());
        assert!(!CellValue::Text("x".to_string()).is_empty());
        assert!(!CellValue::Toggle(true).is_empty());
    }

    #[test]
    fn test_normalize_checkbox_from_text() {
        assert_eq!(
            normalized_for_column(ColumnKind::Checkbox, CellValue::Text("true".to_string())),
            CellValue::Toggle(true)
        );
        assert_eq!(
            normalized_for_column(ColumnKind::Checkbox, CellValue::Text("no".to_string())),
            CellValue::Toggle(false)
        );
    }

    #[test]
    fn test_normalize_dropdown_stores_choice() {
        assert_eq!(
            normalized_for_column(ColumnKind::Dropdown, CellValue::Text("opt_a".to_string())),
            CellValue::Choice("opt_a".to_string())
        );
    }

    #[test]
    fn test_normalize_text_demotes_choice() {
        assert_eq!(
            normalized_for_column(ColumnKind::TextInput, CellValue::Choice("v".to_string())),
            CellValue::Text("v".to_string())
        );
    }
}
