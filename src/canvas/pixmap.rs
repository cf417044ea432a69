//! Raster drawing surface backed by `tiny_skia`.

use egui::Color32;
use tiny_skia::{ColorU8, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::{ArcSegment, DrawingContext, ARC_SEGMENTS};
use crate::error::{RecorderError, Result};

/// Off-screen pixel surface. Markers are anti-aliased; the pixmap starts
/// fully transparent unless a background is supplied.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    path: Vec<ArcSegment>,
    line_width: f64,
    fill_style: Color32,
    stroke_style: Color32,
}

impl PixmapCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(RecorderError::InvalidCanvasSize { width, height })?;
        Ok(Self {
            pixmap,
            path: Vec::new(),
            line_width: 1.0,
            fill_style: Color32::BLACK,
            stroke_style: Color32::BLACK,
        })
    }

    /// Create a surface whose initial content is `background`.
    pub fn with_background(background: &image::RgbaImage) -> Result<Self> {
        let mut canvas = Self::new(background.width(), background.height())?;
        for (dst, src) in canvas.pixmap.pixels_mut().iter_mut().zip(background.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Unpremultiplied RGBA of the pixel at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Copy the surface into an `image` buffer for encoding.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut buf = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            buf.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        // Buffer length always matches width * height * 4.
        image::RgbaImage::from_raw(self.width(), self.height(), buf).unwrap_or_default()
    }

    fn build_path(arc: &ArcSegment) -> Option<tiny_skia::Path> {
        if arc.is_full_circle() {
            return PathBuilder::from_circle(arc.cx as f32, arc.cy as f32, arc.radius as f32);
        }
        let pts = arc.sample(ARC_SEGMENTS);
        let mut pb = PathBuilder::new();
        let [x0, y0] = pts[0];
        pb.move_to(x0 as f32, y0 as f32);
        for [x, y] in &pts[1..] {
            pb.line_to(*x as f32, *y as f32);
        }
        pb.finish()
    }

    fn paint_for(color: Color32) -> Paint<'static> {
        let mut paint = Paint::default();
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }
}

impl DrawingContext for PixmapCanvas {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.path.push(ArcSegment { cx, cy, radius, start_angle, end_angle });
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_fill_style(&mut self, color: Color32) {
        self.fill_style = color;
    }

    fn set_stroke_style(&mut self, color: Color32) {
        self.stroke_style = color;
    }

    fn fill(&mut self) {
        let paint = Self::paint_for(self.fill_style);
        for arc in &self.path {
            if let Some(path) = Self::build_path(arc) {
                self.pixmap
                    .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
    }

    fn stroke(&mut self) {
        let paint = Self::paint_for(self.stroke_style);
        let stroke = Stroke {
            width: self.line_width as f32,
            ..Stroke::default()
        };
        for arc in &self.path {
            if let Some(path) = Self::build_path(arc) {
                self.pixmap
                    .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }
}
