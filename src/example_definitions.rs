// src/example_definitions.rs
use crate::grid::definitions::{ChoiceOption, ColumnDefinition, GridData, GridRow};

/// Built-in demo data: a small materials requisition form, exercising every
/// column kind the grid renders.
pub fn example_grid_data() -> GridData {
    let columns = vec![
        ColumnDefinition::plain("sku", "SKU").with_width(70.0),
        ColumnDefinition::text("name", "Material Name")
            .required()
            .with_placeholder("e.g. Portland cement")
            .with_width(180.0),
        ColumnDefinition::dropdown(
            "material_group",
            "Material Group",
            vec![
                ChoiceOption::new("agg", "Aggregates"),
                ChoiceOption::new("bind", "Binders"),
                ChoiceOption::new("steel", "Steel"),
                ChoiceOption::new("timber", "Timber"),
            ],
        )
        .required()
        .with_tooltip("Procurement category this material is ordered under")
        .with_width(140.0),
        ColumnDefinition::text("access_code", "Access Code")
            .masked()
            .with_placeholder("supplier portal code")
            .with_width(140.0),
        ColumnDefinition::checkbox("in_stock", "In Stock").with_tooltip("Available on site"),
        ColumnDefinition::icon_button("remove", "Remove", "🗑"),
        ColumnDefinition::button("details", "Details", "Open"),
    ];

    let rows = vec![
        GridRow::new(1).with_cell("sku", "MAT-0001"),
        GridRow::new(2).with_cell("sku", "MAT-0002"),
        GridRow::new(3).with_cell("sku", "MAT-0003"),
        GridRow::new(4).with_cell("sku", "MAT-0004"),
    ];

    GridData::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::ColumnKind;

    #[test]
    fn test_example_data_is_consistent() {
        let data = example_grid_data();
        assert!(data.rows.iter().all(|r| !r.cell("sku").is_empty()));
        // Dropdown columns carry options, others don't need them
        for column in &data.columns {
            if column.kind == ColumnKind::Dropdown {
                assert!(!column.options.is_empty());
            }
        }
    }
}
