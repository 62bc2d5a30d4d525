// src/ui/elements/grid/main_grid.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use egui_extras::{Column, TableBuilder};

use super::state::GridUiState;
use super::table_body::grid_table_body;
use super::table_header::grid_table_header;
use crate::grid::definitions::{ColumnKind, GridData};
use crate::grid::events::{CellButtonClicked, RequestValidateAll, UpdateCellEvent};
use crate::grid::resources::FormState;
use crate::ui::UiFeedbackState;

const CHECKBOX_COLUMN_WIDTH: f32 = 40.0;
const DEFAULT_COLUMN_MIN_WIDTH: f32 = 60.0;

/// The grid's egui render pass: a validate control, the feedback line, and
/// the form table itself.
pub fn form_grid_ui(
    mut contexts: EguiContexts,
    grid_data: Res<GridData>,
    form: Res<FormState>,
    mut ui_state: ResMut<GridUiState>,
    mut cell_update_writer: EventWriter<UpdateCellEvent>,
    mut button_writer: EventWriter<CellButtonClicked>,
    mut validate_writer: EventWriter<RequestValidateAll>,
    ui_feedback: Res<UiFeedbackState>,
) {
    let ctx = contexts.ctx_mut();

    egui::CentralPanel::default().show(ctx, |ui| {
        let text_style = egui::TextStyle::Body;
        // Two text lines per row: the control plus its inline error message.
        let row_height =
            2.0 * ui.text_style_height(&text_style) + ui.style().spacing.item_spacing.y;

        ui.horizontal(|top_ui| {
            if top_ui.button("Validate").clicked() {
                validate_writer.write(RequestValidateAll);
            }
            let selected_count = form.selected_rows().count();
            if selected_count > 0 {
                top_ui.label(format!("{} row(s) selected", selected_count));
            }
        });

        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
        ui.separator();

        egui::ScrollArea::both()
            .id_salt("form_grid_scroll_area")
            .auto_shrink([false; 2])
            .show(ui, |scroll_ui| {
                let mut table_builder = TableBuilder::new(scroll_ui)
                    .striped(true)
                    .resizable(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Min))
                    .min_scrolled_height(0.0);

                table_builder = build_table_columns(table_builder, &grid_data);

                table_builder
                    .header(row_height, |mut header_row| {
                        grid_table_header(&mut header_row, &grid_data.columns);
                    })
                    .body(|body| {
                        grid_table_body(
                            body,
                            row_height,
                            &grid_data,
                            &form,
                            &mut ui_state,
                            &mut cell_update_writer,
                            &mut button_writer,
                        );
                    });
            });
    });
}

/// Declares one table column per descriptor, honoring caller-supplied widths
/// and narrowing checkbox/icon columns.
fn build_table_columns<'a>(
    mut table_builder: TableBuilder<'a>,
    grid_data: &GridData,
) -> TableBuilder<'a> {
    if grid_data.columns.is_empty() {
        return table_builder.column(Column::remainder().resizable(false));
    }

    for column in &grid_data.columns {
        let table_column = match (column.width, column.kind) {
            (Some(w), _) => Column::initial(w).at_least(DEFAULT_COLUMN_MIN_WIDTH).clip(true),
            (None, ColumnKind::Checkbox | ColumnKind::IconButton) => {
                Column::initial(CHECKBOX_COLUMN_WIDTH)
                    .at_least(CHECKBOX_COLUMN_WIDTH)
                    .resizable(false)
            }
            (None, _) => Column::auto().at_least(DEFAULT_COLUMN_MIN_WIDTH).clip(true),
        };
        table_builder = table_builder.column(table_column);
    }
    table_builder
}
