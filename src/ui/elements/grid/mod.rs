// src/ui/elements/grid/mod.rs

// Declare the submodules for the grid renderer
pub mod main_grid;
pub mod state;
pub mod table_body;
pub mod table_header;

// Re-export the main UI system and the UI-local state
pub use main_grid::form_grid_ui;
pub use state::GridUiState;
