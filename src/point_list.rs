//! Append-only list of recorded points.
//!
//! The list lives as long as its owning recorder. Points are only ever pushed;
//! there is no removal or reordering, so `len()` is always the number of
//! clicks recorded so far.

use crate::point::Point;

#[derive(Debug, Clone, Default)]
pub struct PointList {
    points: Vec<Point>,
}

impl PointList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point at the end of the list.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Formatted entries (`"[x, y]"`) in click order.
    pub fn entries(&self) -> Vec<String> {
        self.points.iter().map(|p| p.to_string()).collect()
    }

    /// The value written to the `points` output: all entries joined by a comma.
    pub fn list_value(&self) -> String {
        self.entries().join(",")
    }

    /// The text written to the `info` output.
    pub fn status_text(&self) -> String {
        status_text(self.len())
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Status line for `n` recorded points. The count is never pluralised
/// differently, so one point reads "1 points".
pub fn status_text(n: usize) -> String {
    format!("You have selected {n} points.")
}
