// src/ui/systems.rs
use bevy::prelude::*;

use crate::grid::definitions::GridData;
use crate::grid::events::GridOperationFeedback;
use crate::ui::elements::grid::GridUiState;
use crate::ui::UiFeedbackState;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<GridOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Prioritize showing the first non-error, or the last error
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Reveal toggles and blur errors are keyed by row id; drop them when the
/// data set is replaced.
pub fn reset_grid_ui_state_on_data_change(
    grid_data: Res<GridData>,
    mut ui_state: ResMut<GridUiState>,
) {
    if grid_data.is_changed() && !grid_data.is_added() {
        ui_state.reset();
    }
}
