//! The click handler: turns clicks into recorded points.
//!
//! A [`ClickRecorder`] owns the point list and the two output handles it
//! refreshes after every click. Drawing is optional per click; a surface
//! without a drawing context still records points.

use crate::canvas::{draw_marker, DrawingContext, MarkerStyle};
use crate::controllers::RecorderController;
use crate::point::{BoundingRect, ClickEvent, Point};
use crate::point_list::PointList;

/// Destinations for the accumulated list and the status line.
pub trait RecorderOutputs {
    /// Replace the value of the `points` output.
    fn set_points_value(&mut self, value: &str);
    /// Replace the content of the `info` output.
    fn set_info(&mut self, info: &str);
}

/// Outputs held as plain strings, rendered by the egui app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOutputs {
    pub points_value: String,
    pub info: String,
}

impl RecorderOutputs for TextOutputs {
    fn set_points_value(&mut self, value: &str) {
        self.points_value.clear();
        self.points_value.push_str(value);
    }

    fn set_info(&mut self, info: &str) {
        self.info.clear();
        self.info.push_str(info);
    }
}

pub struct ClickRecorder<O: RecorderOutputs> {
    points: PointList,
    outputs: O,
    marker: MarkerStyle,
    controller: Option<RecorderController>,
}

impl<O: RecorderOutputs> ClickRecorder<O> {
    /// Create a recorder with an empty point list writing to `outputs`.
    pub fn new(outputs: O) -> Self {
        Self {
            points: PointList::new(),
            outputs,
            marker: MarkerStyle::default(),
            controller: None,
        }
    }

    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    /// Publish every recorded point to `controller`.
    pub fn with_controller(mut self, controller: RecorderController) -> Self {
        self.controller = Some(controller);
        self
    }

    /// Handle one click on the surface described by `rect`.
    ///
    /// `ctx` is the surface's drawing context, if it has one. The point is
    /// recorded and both outputs are refreshed either way.
    pub fn handle_click(
        &mut self,
        event: ClickEvent,
        rect: &BoundingRect,
        ctx: Option<&mut dyn DrawingContext>,
    ) -> Point {
        let point = Point::from_click(event, rect);

        if let Some(ctx) = ctx {
            draw_marker(ctx, point.x, point.y, &self.marker);
        }

        self.points.push(point);
        self.outputs.set_points_value(&self.points.list_value());
        self.outputs.set_info(&self.points.status_text());
        log::debug!("recorded point #{} {}", self.points.len(), point);

        if let Some(ctrl) = &self.controller {
            ctrl.publish(point);
        }
        point
    }

    pub fn points(&self) -> &PointList {
        &self.points
    }

    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    pub fn marker(&self) -> &MarkerStyle {
        &self.marker
    }
}
