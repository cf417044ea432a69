//! Drawing surfaces the recorder paints markers on.
//!
//! [`DrawingContext`] is the small 2D-context contract the click handler
//! needs: a current path made of arcs, fill and stroke styles, and the
//! `fill`/`stroke` operations. Two surfaces implement it:
//!
//! | Surface         | Backing store |
//! |-----------------|---------------|
//! | [`ShapeCanvas`] | retained `egui::Shape`s painted by the app every frame |
//! | [`PixmapCanvas`]| `tiny_skia::Pixmap`, used for PNG export |

mod pixmap;
mod shapes;

pub use pixmap::PixmapCanvas;
pub use shapes::ShapeCanvas;

use egui::Color32;

/// Default marker radius in surface units.
pub const MARKER_RADIUS: f64 = 3.5;
/// Default marker outline width in surface units.
pub const MARKER_LINE_WIDTH: f64 = 3.0;
/// Default marker colour (opaque red).
pub const MARKER_COLOR: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);

/// Number of line segments used when an arc is not a full circle.
pub(crate) const ARC_SEGMENTS: usize = 32;

/// Minimal 2D drawing contract, modelled on a canvas rendering context.
pub trait DrawingContext {
    /// Discard the current path and start a new one.
    fn begin_path(&mut self);
    /// Add an arc centred at (`cx`, `cy`) to the current path. Angles are in radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn set_line_width(&mut self, width: f64);
    fn set_fill_style(&mut self, color: Color32);
    fn set_stroke_style(&mut self, color: Color32);
    /// Fill the current path with the fill style.
    fn fill(&mut self);
    /// Outline the current path with the stroke style and line width.
    fn stroke(&mut self);
}

/// Visual parameters of the marker drawn at each click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub line_width: f64,
    pub color: Color32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: MARKER_RADIUS,
            line_width: MARKER_LINE_WIDTH,
            color: MARKER_COLOR,
        }
    }
}

/// Paint a filled, outlined circle centred at (`x`, `y`).
pub fn draw_marker(ctx: &mut dyn DrawingContext, x: f64, y: f64, style: &MarkerStyle) {
    ctx.begin_path();
    ctx.arc(x, y, style.radius, 0.0, 2.0 * std::f64::consts::PI);
    ctx.set_line_width(style.line_width);
    ctx.set_fill_style(style.color);
    ctx.set_stroke_style(style.color);
    ctx.fill();
    ctx.stroke();
}

/// One arc of the current path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ArcSegment {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcSegment {
    pub fn is_full_circle(&self) -> bool {
        (self.end_angle - self.start_angle).abs() >= std::f64::consts::TAU - 1e-9
    }

    /// Points along the arc, endpoints included.
    pub fn sample(&self, segments: usize) -> Vec<[f64; 2]> {
        let n = segments.max(1);
        let sweep = self.end_angle - self.start_angle;
        (0..=n)
            .map(|i| {
                let a = self.start_angle + sweep * (i as f64 / n as f64);
                [self.cx + self.radius * a.cos(), self.cy + self.radius * a.sin()]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the call sequence so the marker contract can be checked.
    #[derive(Default)]
    struct CallLog(Vec<String>);

    impl DrawingContext for CallLog {
        fn begin_path(&mut self) {
            self.0.push("begin_path".into());
        }
        fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
            self.0.push(format!("arc {cx} {cy} {radius} {start} {:.4}", end));
        }
        fn set_line_width(&mut self, width: f64) {
            self.0.push(format!("line_width {width}"));
        }
        fn set_fill_style(&mut self, c: Color32) {
            self.0.push(format!("fill_style {:?}", c.to_array()));
        }
        fn set_stroke_style(&mut self, c: Color32) {
            self.0.push(format!("stroke_style {:?}", c.to_array()));
        }
        fn fill(&mut self) {
            self.0.push("fill".into());
        }
        fn stroke(&mut self) {
            self.0.push("stroke".into());
        }
    }

    #[test]
    fn marker_call_sequence() {
        let mut log = CallLog::default();
        draw_marker(&mut log, 5.0, 14.0, &MarkerStyle::default());
        assert_eq!(
            log.0,
            vec![
                "begin_path",
                "arc 5 14 3.5 0 6.2832",
                "line_width 3",
                "fill_style [255, 0, 0, 255]",
                "stroke_style [255, 0, 0, 255]",
                "fill",
                "stroke",
            ]
        );
    }

    #[test]
    fn half_arc_is_not_full_circle() {
        let arc = ArcSegment { cx: 0.0, cy: 0.0, radius: 1.0, start_angle: 0.0, end_angle: std::f64::consts::PI };
        assert!(!arc.is_full_circle());
        let pts = arc.sample(2);
        assert_eq!(pts.len(), 3);
        assert!((pts[1][1] - 1.0).abs() < 1e-12);
    }
}
