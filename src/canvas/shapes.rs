//! Retained egui shapes: a canvas that is never cleared.

use egui::{Color32, Pos2, Shape, Stroke};

use super::{ArcSegment, DrawingContext, ARC_SEGMENTS};

/// Drawing surface that keeps every painted shape in surface-local
/// coordinates. The app replays the list each frame, offset to wherever the
/// click area currently sits.
#[derive(Debug, Clone)]
pub struct ShapeCanvas {
    shapes: Vec<Shape>,
    path: Vec<ArcSegment>,
    line_width: f64,
    fill_style: Color32,
    stroke_style: Color32,
}

impl Default for ShapeCanvas {
    fn default() -> Self {
        // Same initial state as a fresh 2D context: 1-unit black lines and fills.
        Self {
            shapes: Vec::new(),
            path: Vec::new(),
            line_width: 1.0,
            fill_style: Color32::BLACK,
            stroke_style: Color32::BLACK,
        }
    }
}

impl ShapeCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Paint all retained shapes with `origin` as the surface's top-left corner.
    pub fn paint(&self, painter: &egui::Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        painter.extend(self.shapes.iter().cloned().map(|mut s| {
            s.translate(offset);
            s
        }));
    }

    fn sampled(arc: &ArcSegment) -> Vec<Pos2> {
        arc.sample(ARC_SEGMENTS)
            .into_iter()
            .map(|[x, y]| Pos2::new(x as f32, y as f32))
            .collect()
    }
}

impl DrawingContext for ShapeCanvas {
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
        for arc in &self.path {
            let shape = if arc.is_full_circle() {
                Shape::circle_filled(
                    Pos2::new(arc.cx as f32, arc.cy as f32),
                    arc.radius as f32,
                    self.fill_style,
                )
            } else {
                Shape::convex_polygon(Self::sampled(arc), self.fill_style, Stroke::NONE)
            };
            self.shapes.push(shape);
        }
    }

    fn stroke(&mut self) {
        let stroke = Stroke::new(self.line_width as f32, self.stroke_style);
        for arc in &self.path {
            let shape = if arc.is_full_circle() {
                Shape::circle_stroke(Pos2::new(arc.cx as f32, arc.cy as f32), arc.radius as f32, stroke)
            } else {
                Shape::line(Self::sampled(arc), stroke)
            };
            self.shapes.push(shape);
        }
    }
}
