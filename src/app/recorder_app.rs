//! Standalone recorder application that implements [`eframe::App`].
//!
//! [`RecorderApp`] owns the [`ClickRecorder`], the retained marker canvas and
//! the optional background image. Each frame it paints the click area, feeds
//! clicks to the recorder and shows the two outputs underneath.

use std::path::Path;

use eframe::egui;

use crate::canvas::{DrawingContext, ShapeCanvas};
use crate::config::RecorderConfig;
use crate::export;
use crate::point::{BoundingRect, ClickEvent};
use crate::point_list::PointList;
use crate::recorder::{ClickRecorder, RecorderOutputs, TextOutputs};

/// Fill used for the click area when no background image is configured.
const CANVAS_FILL: egui::Color32 = egui::Color32::from_gray(235);

// ─────────────────────────────────────────────────────────────────────────────
// AppOutputs
// ─────────────────────────────────────────────────────────────────────────────

/// Outputs shown inside the app, optionally mirrored to a second destination
/// (the host page's `points` and `info` elements when running in a browser).
#[derive(Default)]
pub struct AppOutputs {
    pub text: TextOutputs,
    pub mirror: Option<Box<dyn RecorderOutputs>>,
}

impl AppOutputs {
    pub fn with_mirror(mirror: impl RecorderOutputs + 'static) -> Self {
        Self {
            text: TextOutputs::default(),
            mirror: Some(Box::new(mirror)),
        }
    }
}

impl RecorderOutputs for AppOutputs {
    fn set_points_value(&mut self, value: &str) {
        self.text.set_points_value(value);
        if let Some(m) = &mut self.mirror {
            m.set_points_value(value);
        }
    }

    fn set_info(&mut self, info: &str) {
        self.text.set_info(info);
        if let Some(m) = &mut self.mirror {
            m.set_info(info);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RecorderApp
// ─────────────────────────────────────────────────────────────────────────────

pub struct RecorderApp {
    recorder: ClickRecorder<AppOutputs>,
    canvas: ShapeCanvas,
    canvas_size: [u32; 2],
    fill_canvas: bool,
    drawing_enabled: bool,
    headline: Option<String>,
    background: Option<image::RgbaImage>,
    background_texture: Option<egui::TextureHandle>,
}

impl RecorderApp {
    pub fn new(cfg: &RecorderConfig) -> Self {
        Self::with_outputs(cfg, AppOutputs::default())
    }

    /// Create the app writing to the given output handles.
    pub fn with_outputs(cfg: &RecorderConfig, mut outputs: AppOutputs) -> Self {
        // Only the in-app line is primed; the mirror is first written by a click.
        outputs.text.set_info(&PointList::new().status_text());

        let mut recorder = ClickRecorder::new(outputs).with_marker(cfg.marker);
        if let Some(ctrl) = &cfg.controller {
            recorder = recorder.with_controller(ctrl.clone());
        }

        Self {
            recorder,
            canvas: ShapeCanvas::new(),
            canvas_size: cfg.canvas_size,
            fill_canvas: cfg.fill_canvas,
            drawing_enabled: cfg.drawing_enabled,
            headline: cfg.headline.clone(),
            background: load_configured_background(cfg),
            background_texture: None,
        }
    }

    pub fn points(&self) -> &PointList {
        self.recorder.points()
    }

    pub fn outputs(&self) -> &TextOutputs {
        &self.recorder.outputs().text
    }

    /// Route a click to the recorder, drawing on the canvas only when drawing is enabled.
    pub fn click(&mut self, event: ClickEvent, rect: &BoundingRect) {
        let ctx: Option<&mut dyn DrawingContext> = if self.drawing_enabled {
            Some(&mut self.canvas)
        } else {
            None
        };
        self.recorder.handle_click(event, rect, ctx);
    }

    fn canvas_vec(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_size[0] as f32, self.canvas_size[1] as f32)
    }

    fn background_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        if self.background_texture.is_none() {
            let img = self.background.as_ref()?;
            let color = egui::ColorImage::from_rgba_unmultiplied(
                [img.width() as usize, img.height() as usize],
                img.as_raw(),
            );
            self.background_texture =
                Some(ctx.load_texture("click-area-background", color, egui::TextureOptions::LINEAR));
        }
        self.background_texture.as_ref().map(|t| t.id())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // UI
    // ─────────────────────────────────────────────────────────────────────────

    fn toolbar_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let copy = ui
                .button(format!("{} Copy points", egui_phosphor::regular::COPY))
                .on_hover_text("Copy the points list to the clipboard");
            if copy.clicked() {
                ui.ctx().copy_text(self.recorder.points().list_value());
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                if ui
                    .button(format!("{} Save image…", egui_phosphor::regular::IMAGE))
                    .clicked()
                {
                    self.save_image_dialog();
                }
                if ui
                    .button(format!("{} Save points…", egui_phosphor::regular::FLOPPY_DISK))
                    .clicked()
                {
                    self.save_points_dialog();
                }
            }
        });
    }

    fn click_area_ui(&mut self, ui: &mut egui::Ui, size: egui::Vec2) {
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let rect = response.rect;

        match self.background_texture(ui.ctx()) {
            Some(tex) => {
                painter.image(
                    tex,
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => {
                painter.rect_filled(rect, 0.0, CANVAS_FILL);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.click(ClickEvent::new(pos.x as f64, pos.y as f64), &BoundingRect::from(rect));
            }
        }

        self.canvas.paint(&painter, rect.min);
    }

    fn outputs_ui(&mut self, ui: &mut egui::Ui) {
        let out = &self.recorder.outputs().text;
        ui.horizontal(|ui| {
            ui.label("Points:");
            let mut value = out.points_value.as_str();
            ui.add(egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY));
        });
        ui.label(out.info.as_str());
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_image_dialog(&self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("points.png")
            .add_filter("PNG", &["png"])
            .save_file()
        else {
            return;
        };
        let result = export::render_markers(
            self.canvas_size,
            self.background.as_ref(),
            self.recorder.points(),
            self.recorder.marker(),
        )
        .and_then(|canvas| export::save_png(&path, &canvas));
        if let Err(e) = result {
            log::error!("Failed to save image: {e}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_points_dialog(&self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("points.json")
            .add_filter("JSON", &["json"])
            .save_file()
        {
            if let Err(e) = export::save_points_json(&path, self.recorder.points()) {
                log::error!("Failed to save points: {e}");
            }
        }
    }
}

impl RecorderApp {
    /// Build one frame. With `fill_canvas` the click area covers the whole
    /// viewport with no margin, so its top-left corner is the host canvas's.
    pub fn ui(&mut self, ctx: &egui::Context) {
        if self.fill_canvas {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let size = ui.available_size();
                    self.click_area_ui(ui, size);
                });
            return;
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar_ui(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(h) = &self.headline {
                ui.heading(h.as_str());
            }
            egui::ScrollArea::both().show(ui, |ui| {
                let size = self.canvas_vec();
                self.click_area_ui(ui, size);
                ui.add_space(6.0);
                self.outputs_ui(ui);
            });
        });
    }
}

impl eframe::App for RecorderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

/// Encoded image bytes win over a file path; the browser build has no filesystem.
fn load_configured_background(cfg: &RecorderConfig) -> Option<image::RgbaImage> {
    if let Some(bytes) = &cfg.background_bytes {
        return match export::decode_background(bytes, cfg.canvas_size) {
            Ok(img) => Some(img),
            Err(e) => {
                log::warn!("Ignoring embedded background: {e}");
                None
            }
        };
    }
    cfg.background.as_ref().and_then(|p| load_background(p, cfg.canvas_size))
}

fn load_background(path: &Path, size: [u32; 2]) -> Option<image::RgbaImage> {
    match export::load_background(path, size) {
        Ok(img) => Some(img),
        Err(e) => {
            log::warn!("Ignoring background {}: {e}", path.display());
            None
        }
    }
}
