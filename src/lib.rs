//! clickpoints crate root: re-exports and module wiring.
//!
//! Click anywhere on the click area to record a point. Each click draws a red
//! marker, appends `"[x, y]"` (surface-local, three decimals) to the points
//! list and refreshes the status line.
//!
//! - `point`: click coordinates and their display form
//! - `point_list`: append-only list of recorded points
//! - `canvas`: the 2D drawing contract plus egui and raster surfaces
//! - `recorder`: the click handler and its output handles
//! - `controllers`: observe recorded points from other threads
//! - `config`: window / click-area configuration, YAML loading
//! - `export`: PNG and JSON export
//! - `app`: the eframe app, native and browser entry points

pub mod app;
pub mod canvas;
pub mod config;
pub mod controllers;
pub mod error;
pub mod export;
pub mod point;
pub mod point_list;
pub mod recorder;

// Public re-exports for a compact external API
pub use app::{AppOutputs, RecorderApp};
#[cfg(not(target_arch = "wasm32"))]
pub use app::run_recorder;
pub use canvas::{draw_marker, DrawingContext, MarkerStyle, PixmapCanvas, ShapeCanvas};
pub use config::RecorderConfig;
pub use controllers::RecorderController;
pub use error::RecorderError;
pub use point::{BoundingRect, ClickEvent, Point};
pub use point_list::PointList;
pub use recorder::{ClickRecorder, RecorderOutputs, TextOutputs};
