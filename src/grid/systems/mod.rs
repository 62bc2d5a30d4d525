// src/grid/systems/mod.rs

pub mod logic;

pub use logic::{
    handle_cell_update, handle_set_grid_data, handle_validate_request,
    rebuild_form_state_on_data_change,
};
