// src/ui/widgets/dropdown.rs
use bevy_egui::egui;

use crate::grid::definitions::ColumnDefinition;

/// Selection control: a single-choice combo box over the column's options.
///
/// Displays option labels but reports the selected option's underlying value,
/// which is what ends up in the form state.
pub(crate) fn add_choice_dropdown(
    ui: &mut egui::Ui,
    id: egui::Id,
    current_value: &str,
    column: &ColumnDefinition,
) -> Option<String> {
    let selected_label = column
        .options
        .iter()
        .find(|opt| opt.value == current_value)
        .map(|opt| opt.label.as_str());
    let placeholder = column.placeholder.as_deref().unwrap_or("Select an option");

    let mut picked = None;
    egui::ComboBox::from_id_salt(id.with("choice"))
        .width(ui.available_width())
        .selected_text(selected_label.unwrap_or(placeholder))
        .show_ui(ui, |combo_ui| {
            for option in &column.options {
                let is_selected = option.value == current_value;
                if combo_ui
                    .selectable_label(is_selected, &option.label)
                    .clicked()
                    && !is_selected
                {
                    picked = Some(option.value.clone());
                }
            }
        });

    picked
}
