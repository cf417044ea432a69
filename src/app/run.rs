//! Native entry point.
//!
//! [`run_recorder`] builds a [`RecorderApp`] from a [`RecorderConfig`], opens a
//! window sized to fit the click area and enters the eframe event loop.

use eframe::egui;

use crate::config::RecorderConfig;

use super::RecorderApp;

/// Room around the click area for the toolbar and the two outputs.
const WINDOW_MARGIN: egui::Vec2 = egui::vec2(40.0, 140.0);

static APP_ICON_SVG: &[u8] = include_bytes!("../../icon.svg");

/// Launch the recorder in a native window. Blocks until the window is closed.
pub fn run_recorder(mut cfg: RecorderConfig) -> eframe::Result<()> {
    let app = RecorderApp::new(&cfg);

    let mut opts = cfg.native_options.take().unwrap_or_default();
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon() {
            opts.viewport = opts.viewport.with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        let canvas = egui::vec2(cfg.canvas_size[0] as f32, cfg.canvas_size[1] as f32);
        opts.viewport = opts.viewport.with_inner_size(canvas + WINDOW_MARGIN);
    }

    log::info!(
        "starting recorder: {}x{} click area, drawing {}",
        cfg.canvas_size[0],
        cfg.canvas_size[1],
        if cfg.drawing_enabled { "on" } else { "off" }
    );

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            super::install_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}

/// Render the bundled `icon.svg` to an [`egui::IconData`].
///
/// Returns `None` if the SVG cannot be parsed or has an empty size.
fn load_app_icon() -> Option<egui::IconData> {
    let tree = usvg::Tree::from_data(APP_ICON_SVG, &usvg::Options::default()).ok()?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
