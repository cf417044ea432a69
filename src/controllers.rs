//! Controller for observing the recorder from external code.
//!
//! The controller keeps a snapshot of the recorded points and a list of
//! subscribers so non-UI code (a background thread, a test harness) can read
//! what the user clicked without touching the app.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::point::Point;
use crate::point_list::PointList;

/// Shared handle to the recorded points. Cloning yields another handle to the same state.
#[derive(Clone, Default)]
pub struct RecorderController {
    pub(crate) inner: Arc<Mutex<RecorderCtrlInner>>,
}

#[derive(Default)]
pub(crate) struct RecorderCtrlInner {
    pub(crate) points: PointList,
    pub(crate) listeners: Vec<Sender<Point>>,
}

impl RecorderController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all points recorded so far, in click order.
    pub fn points(&self) -> Vec<Point> {
        self.inner.lock().unwrap().points.as_slice().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Same string the `points` output shows.
    pub fn list_value(&self) -> String {
        self.inner.lock().unwrap().points.list_value()
    }

    /// Subscribe to newly recorded points. Earlier points are not replayed.
    pub fn subscribe(&self) -> Receiver<Point> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.inner.lock().unwrap().listeners.push(tx);
        rx
    }

    /// Record `point` and forward it to subscribers, dropping closed ones.
    pub(crate) fn publish(&self, point: Point) {
        let mut inner = self.inner.lock().unwrap();
        inner.points.push(point);
        inner.listeners.retain(|tx| tx.send(point).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_subscribers_are_dropped() {
        let ctrl = RecorderController::new();
        let rx = ctrl.subscribe();
        drop(ctrl.subscribe());
        ctrl.publish(Point::new(1.0, 1.0));
        assert_eq!(ctrl.inner.lock().unwrap().listeners.len(), 1);
        assert_eq!(rx.try_recv().unwrap(), Point::new(1.0, 1.0));
    }
}
