// src/grid/plugin.rs
use bevy::prelude::*;

use super::definitions::GridData;
use super::events::{
    CellButtonClicked, FormStateChanged, GridOperationFeedback, RequestSetGridData,
    RequestValidateAll, UpdateCellEvent, ValidationCompleted,
};
use super::resources::FormState;
use super::systems;

// Define system sets for ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum GridSystemSet {
    UserInput,    // Systems reacting directly to host/UI events
    ApplyChanges, // Systems mutating form state and notifying outward
}

/// Plugin owning the grid's data model, form state, and logic systems.
/// Rendering lives in `GridUiPlugin`; hosts that bring their own rendering
/// can use this plugin alone and drive everything through events.
pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        // Configure system sets for ordering
        app.configure_sets(
            Update,
            (
                GridSystemSet::UserInput,
                GridSystemSet::ApplyChanges.after(GridSystemSet::UserInput),
            ),
        );

        // --- Resource Initialization ---
        app.init_resource::<GridData>();
        app.init_resource::<FormState>();

        // --- Event Registration ---
        app.add_event::<RequestSetGridData>()
            .add_event::<UpdateCellEvent>()
            .add_event::<RequestValidateAll>()
            .add_event::<ValidationCompleted>()
            .add_event::<FormStateChanged>()
            .add_event::<CellButtonClicked>()
            .add_event::<GridOperationFeedback>();

        // --- Update Systems (Organized into Sets) ---
        app.add_systems(
            Update,
            (systems::handle_set_grid_data,).in_set(GridSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                systems::rebuild_form_state_on_data_change,
                systems::handle_cell_update,
                systems::handle_validate_request,
            )
                .chain()
                .in_set(GridSystemSet::ApplyChanges),
        );

        info!("GridPlugin initialized.");
    }
}
