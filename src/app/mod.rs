//! Application layer: the eframe app and its native and browser entry points.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`recorder_app`]  | [`RecorderApp`], the eframe app around the click recorder |
//! | [`run`]           | [`run_recorder()`] native entry point and icon loading |
//! | `web`             | `wasm32` entry point mounting on `<canvas id="click-area">` |

mod recorder_app;
#[cfg(not(target_arch = "wasm32"))]
mod run;
#[cfg(target_arch = "wasm32")]
mod web;

pub use recorder_app::{AppOutputs, RecorderApp};
#[cfg(not(target_arch = "wasm32"))]
pub use run::run_recorder;

use eframe::egui;

/// Install the Phosphor icon font used by the toolbar.
pub(crate) fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
