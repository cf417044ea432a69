// src/point.rs
// Recorded click coordinates and their fixed 3-decimal display form.

use std::fmt;

/// Number of decimals every recorded coordinate is shown with.
pub const DECIMALS: i32 = 3;

/// A click position relative to the top-left corner of the clicked surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Pointer position in viewport coordinates, as delivered by the click event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl ClickEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Position and size of the clicked surface relative to the viewport at click time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

impl From<egui::Rect> for BoundingRect {
    fn from(r: egui::Rect) -> Self {
        Self {
            left: r.min.x as f64,
            top: r.min.y as f64,
            width: r.width() as f64,
            height: r.height() as f64,
        }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate a click into coordinates local to `rect`.
    pub fn from_click(event: ClickEvent, rect: &BoundingRect) -> Self {
        Self {
            x: event.client_x - rect.left,
            y: event.client_y - rect.top,
        }
    }

    /// Coordinates rounded to [`DECIMALS`] places, as they are displayed.
    pub fn rounded(&self) -> [f64; 2] {
        [round_fixed(self.x), round_fixed(self.y)]
    }
}

/// Round half away from zero at the third decimal.
///
/// The value is scaled before rounding, so `1.2345` becomes `1234.5` and
/// rounds to `1.235` even though its binary expansion is slightly below.
pub fn round_fixed(v: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    (v * scale).round() / scale
}

/// Format one coordinate with exactly three decimals.
pub fn format_coord(v: f64) -> String {
    format!("{:.*}", DECIMALS as usize, round_fixed(v))
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", format_coord(self.x), format_coord(self.y))
    }
}
