// src/ui/validation.rs
use crate::grid::definitions::{CellValue, ColumnDefinition};

/// Default inline message a field control shows when it loses focus while
/// empty and no per-column override is set.
pub const DEFAULT_BLUR_MESSAGE: &str = "This field is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ValidationState {
    #[default]
    Valid,
    MissingRequired,
}

/// Validates a single cell value against its column's required flag.
/// Absent values, empty strings, and unchecked toggles count as missing.
pub(crate) fn validate_required_cell(
    value: Option<&CellValue>,
    required: bool,
) -> ValidationState {
    if required && value.map_or(true, CellValue::is_empty) {
        ValidationState::MissingRequired
    } else {
        ValidationState::Valid
    }
}

/// Message stored by the "validate all" pass for an empty required cell.
pub fn required_field_message(column: &ColumnDefinition) -> String {
    format!("{} wajib diisi", column.title)
}

/// Message a field control shows on blur while empty.
pub fn blur_message(column: &ColumnDefinition) -> String {
    column
        .error_message
        .clone()
        .unwrap_or_else(|| DEFAULT_BLUR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::ColumnDefinition;

    #[test]
    fn test_required_cell_states() {
        let empty = CellValue::Text(String::new());
        let filled = CellValue::Text("x".to_string());

        assert_eq!(
            validate_required_cell(None, true),
            ValidationState::MissingRequired
        );
        assert_eq!(
            validate_required_cell(Some(&empty), true),
            ValidationState::MissingRequired
        );
        assert_eq!(
            validate_required_cell(Some(&filled), true),
            ValidationState::Valid
        );
        assert_eq!(validate_required_cell(None, false), ValidationState::Valid);
    }

    #[test]
    fn test_messages() {
        let column = ColumnDefinition::text("name", "Nama Material").required();
        assert_eq!(required_field_message(&column), "Nama Material wajib diisi");
        assert_eq!(blur_message(&column), DEFAULT_BLUR_MESSAGE);

        let mut column = column;
        column.error_message = Some("Please enter a name".to_string());
        assert_eq!(blur_message(&column), "Please enter a name");
    }
}
