// src/ui/widgets/mod.rs

mod dropdown;
mod option_widgets;
mod text_field;

pub(crate) use dropdown::add_choice_dropdown;
pub(crate) use option_widgets::{add_centered_checkbox, add_icon_button};
pub(crate) use text_field::add_text_field;
