// src/ui/elements/grid/table_header.rs
use bevy_egui::egui::{self, Color32, RichText};
use egui_extras::TableRow;

use crate::grid::definitions::ColumnDefinition;

/// Renders the header row: column title, a red asterisk for required
/// columns, and a hover-help marker when the column carries a tooltip.
pub fn grid_table_header(header_row: &mut TableRow, columns: &[ColumnDefinition]) {
    for column in columns {
        header_row.col(|ui| {
            ui.horizontal(|ui_h| {
                ui_h.strong(&column.title);
                if column.required {
                    ui_h.label(RichText::new("*").color(Color32::from_rgb(220, 60, 60)));
                }
                if let Some(tooltip) = &column.tooltip {
                    ui_h.label(RichText::new("(?)").weak())
                        .on_hover_text(tooltip);
                }
            });
        });
    }

    if columns.is_empty() {
        header_row.col(|ui| {
            ui.strong("(No Columns)");
        });
    }
}
