#![forbid(unsafe_code)]

//! Pointer gesture scripts.
//!
//! Tests describe a gesture once (press here, drag through these points,
//! release or cancel) and replay it against a [`DesktopManager`] the same
//! way a host would deliver the raw events.

use tracing::trace;

use retrodesk_core::Point;
use retrodesk_windowing::{DesktopManager, HitRegion, PanelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureEnd {
    Release,
    Cancel,
}

/// A scripted press-drag-release sequence against one panel.
#[derive(Debug, Clone)]
pub struct Gesture {
    panel: PanelId,
    region: HitRegion,
    press: Point,
    path: Vec<Point>,
    end: GestureEnd,
}

impl Gesture {
    /// Start a gesture with a press on `panel` at `at`.
    #[must_use]
    pub fn press(panel: impl Into<PanelId>, region: HitRegion, at: Point) -> Self {
        Self {
            panel: panel.into(),
            region,
            press: at,
            path: Vec::new(),
            end: GestureEnd::Release,
        }
    }

    /// Add a drag waypoint.
    #[must_use]
    pub fn drag_to(mut self, point: Point) -> Self {
        self.path.push(point);
        self
    }

    /// Interpolate `steps` extra move events between the last point and
    /// `point`, mimicking a real pointer's intermediate positions.
    #[must_use]
    pub fn drag_through(mut self, point: Point, steps: usize) -> Self {
        let from = *self.path.last().unwrap_or(&self.press);
        for step in 1..=steps {
            let t = step as f64 / (steps + 1) as f64;
            self.path.push(Point::new(
                from.x + (point.x - from.x) * t,
                from.y + (point.y - from.y) * t,
            ));
        }
        self.path.push(point);
        self
    }

    /// End the gesture with a platform cancel instead of a release.
    #[must_use]
    pub fn cancelled(mut self) -> Self {
        self.end = GestureEnd::Cancel;
        self
    }
}

/// Replay a gesture against a manager, event by event.
pub fn apply_gesture(manager: &mut DesktopManager, gesture: &Gesture) {
    trace!(panel = %gesture.panel, moves = gesture.path.len(), "apply gesture");
    manager.pointer_down(gesture.panel.as_str(), gesture.press, gesture.region);
    for point in &gesture.path {
        manager.pointer_move(*point);
    }
    match gesture.end {
        GestureEnd::Release => manager.pointer_up(),
        GestureEnd::Cancel => manager.pointer_cancel(),
    }
}
