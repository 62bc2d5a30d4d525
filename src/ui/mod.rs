// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

// Declare UI element modules
pub mod common;
pub mod elements;
pub mod systems;
pub mod validation;
pub mod widgets;

// Import the grid UI system from its element module
use elements::grid::form_grid_ui;
use elements::grid::GridUiState;
use systems::{handle_ui_feedback, reset_grid_ui_state_on_data_change};

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the egui rendering of the form grid.
pub struct GridUiPlugin;

impl Plugin for GridUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<GridUiState>()
            .add_systems(
                Update,
                (handle_ui_feedback, reset_grid_ui_state_on_data_change),
            )
            .add_systems(EguiContextPass, form_grid_ui);

        info!("GridUiPlugin initialized.");
    }
}
