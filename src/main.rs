// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::{PrimaryWindow, WindowPlugin},
    winit::{UpdateMode, WinitSettings},
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// For loading the icon image from disk using the image crate
use image::ImageFormat as CrateImageFormat;

// For the winit window icon type
use winit::window::Icon as WinitIcon;

use bevy_egui::EguiPlugin;

use formgrid::example_definitions::example_grid_data;
use formgrid::grid::{CellButtonClicked, FormStateChanged, GridData, GridPlugin};
use formgrid::ui::GridUiPlugin;

/// Demo host for the form grid widgets.
#[derive(Parser, Debug)]
#[command(name = "formgrid", version, about)]
struct DemoArgs {
    /// JSON file with column descriptors and rows; falls back to the
    /// built-in example data when omitted or unreadable.
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum GridDataError {
    #[error("failed to read grid data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse grid data file: {0}")]
    Parse(#[from] serde_json::Error),
}

fn load_grid_data(path: &Path) -> Result<GridData, GridDataError> {
    let raw = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&raw)?;
    Ok(data)
}

fn main() {
    let args = DemoArgs::parse();

    let grid_data = match &args.data {
        Some(path) => match load_grid_data(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!(
                    "Could not load grid data from '{}': {}. Using example data.",
                    path.display(),
                    e
                );
                example_grid_data()
            }
        },
        None => example_grid_data(),
    };

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Form Grid Demo".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(GridPlugin)
        .add_plugins(GridUiPlugin)
        .insert_resource(grid_data)
        .add_systems(Startup, set_window_icon)
        .add_systems(Update, (log_form_snapshots, log_button_clicks))
        .run();
}

/// Stands in for the host's change callback: every form-state snapshot is
/// serialized and logged.
fn log_form_snapshots(mut events: EventReader<FormStateChanged>) {
    for event in events.read() {
        match serde_json::to_string(&event.snapshot) {
            Ok(json) => info!("Form state changed: {}", json),
            Err(e) => warn!("Could not serialize form snapshot: {}", e),
        }
    }
}

fn log_button_clicks(mut events: EventReader<CellButtonClicked>) {
    for event in events.read() {
        info!(
            "Clicked '{}' button on row {}",
            event.column_id, event.row_id
        );
    }
}

fn set_window_icon(
    primary_window_query: Query<Entity, With<PrimaryWindow>>,
    windows: NonSend<bevy::winit::WinitWindows>,
) {
    let Ok(primary_entity) = primary_window_query.get_single() else {
        warn!("Could not find single primary window to set icon.");
        return;
    };

    let Some(primary_winit_window) = windows.get_window(primary_entity) else {
        warn!("Could not get winit window for primary window entity.");
        return;
    };

    let icon_path = "assets/icon.png";
    match std::fs::read(icon_path) {
        Ok(icon_bytes) => {
            match image::load_from_memory_with_format(&icon_bytes, CrateImageFormat::Png) {
                Ok(image_data) => {
                    let image_buffer = image_data.into_rgba8();
                    let (width, height) = image_buffer.dimensions();
                    let rgba_data = image_buffer.into_raw();

                    match WinitIcon::from_rgba(rgba_data, width, height) {
                        Ok(winit_icon) => {
                            primary_winit_window.set_window_icon(Some(winit_icon));
                        }
                        Err(e) => {
                            warn!("Failed to create window icon: {:?}", e);
                        }
                    }
                }
                Err(e) => {
                    warn!("Failed to load icon image data from '{}': {}", icon_path, e);
                }
            }
        }
        Err(e) => {
            warn!("Failed to read icon file '{}': {}", icon_path, e);
        }
    }
}
