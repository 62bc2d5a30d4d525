// src/ui/widgets/option_widgets.rs
use bevy_egui::egui;

/// Adds a centered checkbox widget, keeping checkbox cells vertically aligned
/// with the text and dropdown cells around them.
pub(crate) fn add_centered_checkbox(ui: &mut egui::Ui, value: &mut bool) -> egui::Response {
    ui.with_layout(
        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
        |cell_ui| cell_ui.checkbox(value, ""),
    )
    .inner
}

/// Small square action button sized to the row height, used by icon-button
/// cells.
pub(crate) fn add_icon_button(ui: &mut egui::Ui, glyph: &str) -> egui::Response {
    let side = ui.style().spacing.interact_size.y;
    ui.add_sized([side, side], egui::Button::new(glyph))
}
