// tests/form_state.rs
// Drives the grid logic through a headless Bevy App: events in, form state
// and snapshots out, no rendering.

use bevy::prelude::*;

use formgrid::grid::{
    CellValue, ChoiceOption, ColumnDefinition, FormState, FormStateChanged, GridData, GridPlugin,
    GridRow, RequestSetGridData, RequestValidateAll, UpdateCellEvent, ValidationCompleted,
};

fn test_app(data: GridData) -> App {
    let mut app = App::new();
    app.add_plugins(GridPlugin);
    app.insert_resource(data);
    // First update rebuilds form state for the inserted data
    app.update();
    app
}

fn requisition_data() -> GridData {
    GridData::new(
        vec![
            ColumnDefinition::text("name", "Material Name").required(),
            ColumnDefinition::dropdown(
                "material_group",
                "Material Group",
                vec![
                    ChoiceOption::new("agg", "Aggregates"),
                    ChoiceOption::new("bind", "Binders"),
                ],
            )
            .required(),
            ColumnDefinition::text("notes", "Notes"),
            ColumnDefinition::checkbox("in_stock", "In Stock"),
        ],
        vec![GridRow::new(1), GridRow::new(2)],
    )
}

fn drain_snapshots(app: &mut App) -> Vec<FormStateChanged> {
    app.world_mut()
        .resource_mut::<Events<FormStateChanged>>()
        .drain()
        .collect()
}

fn drain_validation_results(app: &mut App) -> Vec<ValidationCompleted> {
    app.world_mut()
        .resource_mut::<Events<ValidationCompleted>>()
        .drain()
        .collect()
}

#[test]
fn validate_flags_every_empty_required_cell() {
    let mut app = test_app(requisition_data());

    app.world_mut().send_event(RequestValidateAll);
    app.update();

    let results = drain_validation_results(&mut app);
    assert_eq!(results.len(), 1);
    assert!(!results[0].is_valid);

    let form = app.world().resource::<FormState>();
    for row_id in [1, 2] {
        assert_eq!(form.error(row_id, "name"), Some("Material Name wajib diisi"));
        assert_eq!(
            form.error(row_id, "material_group"),
            Some("Material Group wajib diisi")
        );
        // Non-required columns never error
        assert_eq!(form.error(row_id, "notes"), None);
        assert_eq!(form.error(row_id, "in_stock"), None);
    }
}

#[test]
fn cell_update_clears_error_and_emits_snapshot() {
    let mut app = test_app(requisition_data());

    app.world_mut().send_event(RequestValidateAll);
    app.update();
    drain_snapshots(&mut app);

    app.world_mut().send_event(UpdateCellEvent {
        row_id: 1,
        column_id: "name".to_string(),
        value: CellValue::Text("Portland cement".to_string()),
    });
    app.update();

    let form = app.world().resource::<FormState>();
    assert_eq!(form.error(1, "name"), None);
    assert_eq!(form.error(2, "name"), Some("Material Name wajib diisi"));
    assert_eq!(
        form.value(1, "name"),
        Some(&CellValue::Text("Portland cement".to_string()))
    );

    let snapshots = drain_snapshots(&mut app);
    assert_eq!(snapshots.len(), 1);
    let row = snapshots[0].snapshot.values.get(&1).expect("row 1 present");
    assert_eq!(
        row.get("name"),
        Some(&CellValue::Text("Portland cement".to_string()))
    );
}

#[test]
fn dropdown_updates_store_the_option_value() {
    let mut app = test_app(requisition_data());

    // A host sending raw text for a dropdown column still ends up with the
    // normalized Choice value in the form state.
    app.world_mut().send_event(UpdateCellEvent {
        row_id: 1,
        column_id: "material_group".to_string(),
        value: CellValue::Text("agg".to_string()),
    });
    app.update();

    let form = app.world().resource::<FormState>();
    assert_eq!(
        form.value(1, "material_group"),
        Some(&CellValue::Choice("agg".to_string()))
    );
}

#[test]
fn checkbox_toggles_drive_row_selection() {
    let mut app = test_app(requisition_data());

    app.world_mut().send_event(UpdateCellEvent {
        row_id: 2,
        column_id: "in_stock".to_string(),
        value: CellValue::Toggle(true),
    });
    app.update();

    {
        let form = app.world().resource::<FormState>();
        assert!(form.is_row_selected(2));
        assert!(!form.is_row_selected(1));
    }

    app.world_mut().send_event(UpdateCellEvent {
        row_id: 2,
        column_id: "in_stock".to_string(),
        value: CellValue::Toggle(false),
    });
    app.update();

    let form = app.world().resource::<FormState>();
    assert!(!form.is_row_selected(2));

    let snapshots = drain_snapshots(&mut app);
    let last = snapshots.last().expect("snapshot emitted");
    assert!(last.snapshot.selected_rows.is_empty());
}

#[test]
fn updates_for_unknown_rows_or_columns_are_dropped() {
    let mut app = test_app(requisition_data());
    drain_snapshots(&mut app);

    app.world_mut().send_event(UpdateCellEvent {
        row_id: 99,
        column_id: "name".to_string(),
        value: CellValue::Text("ghost".to_string()),
    });
    app.world_mut().send_event(UpdateCellEvent {
        row_id: 1,
        column_id: "no_such_column".to_string(),
        value: CellValue::Text("ghost".to_string()),
    });
    app.update();

    let form = app.world().resource::<FormState>();
    assert!(!form.contains_row(99));
    assert_eq!(form.value(1, "no_such_column"), None);
    // Nothing applied, so no snapshot either
    assert!(drain_snapshots(&mut app).is_empty());
}

#[test]
fn replacing_grid_data_rebuilds_state_wholesale() {
    let mut app = test_app(requisition_data());

    app.world_mut().send_event(UpdateCellEvent {
        row_id: 1,
        column_id: "name".to_string(),
        value: CellValue::Text("kept?".to_string()),
    });
    app.world_mut().send_event(UpdateCellEvent {
        row_id: 1,
        column_id: "in_stock".to_string(),
        value: CellValue::Toggle(true),
    });
    app.update();

    app.world_mut().send_event(RequestSetGridData {
        columns: vec![ColumnDefinition::text("name", "Material Name").required()],
        rows: vec![GridRow::new(10), GridRow::new(11)],
    });
    app.update();

    let form = app.world().resource::<FormState>();
    assert!(!form.contains_row(1));
    assert!(form.contains_row(10));
    assert!(form.contains_row(11));
    assert_eq!(form.value(10, "name"), None);
    assert_eq!(form.selected_rows().count(), 0);
}
