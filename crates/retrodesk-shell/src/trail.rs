#![forbid(unsafe_code)]

//! Cursor trail behind the custom pointer.
//!
//! Points append on every move and age out one per decay tick, so the
//! trail shortens from the tail while the cursor rests. Leaving the page
//! clears it outright.

use std::collections::VecDeque;

use retrodesk_core::Point;
use web_time::{Duration, Instant};

/// Hard cap on trail length, in points.
pub const TRAIL_CAP: usize = 200;

/// One point falls off the tail per elapsed interval.
pub const TRAIL_DECAY_INTERVAL: Duration = Duration::from_millis(15);

/// Bounded queue of recent cursor positions, oldest first.
#[derive(Debug, Clone, Default)]
pub struct CursorTrail {
    points: VecDeque<Point>,
    last_decay: Option<Instant>,
}

impl CursorTrail {
    /// Empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position, dropping the oldest point past the cap.
    pub fn record(&mut self, point: Point) {
        if self.points.len() == TRAIL_CAP {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Age the trail: one point per full interval elapsed since the
    /// last decay. Work is bounded by the trail length, so a long host
    /// pause costs at most one drain.
    pub fn decay(&mut self, now: Instant) {
        let Some(last) = self.last_decay else {
            self.last_decay = Some(now);
            return;
        };
        let elapsed = now.duration_since(last);
        let intervals = (elapsed.as_millis() / TRAIL_DECAY_INTERVAL.as_millis()) as usize;
        if intervals == 0 {
            return;
        }
        if intervals >= self.points.len() {
            self.points.clear();
            self.last_decay = Some(now);
            return;
        }
        for _ in 0..intervals {
            self.points.pop_front();
        }
        // Partial intervals carry over to the next tick.
        self.last_decay = Some(last + TRAIL_DECAY_INTERVAL * intervals as u32);
    }

    /// Pointer left the page: the whole trail disappears at once.
    pub fn clear(&mut self) {
        self.points.clear();
        self.last_decay = None;
    }

    /// Points oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Current trail length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no points remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_is_capped() {
        let mut trail = CursorTrail::new();
        for i in 0..500 {
            trail.record(Point::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_CAP);
        // Oldest points fell off the front.
        assert_eq!(
            trail.points().next().expect("non-empty").x,
            (500 - TRAIL_CAP) as f64
        );
    }

    #[test]
    fn decay_removes_one_point_per_interval() {
        let mut trail = CursorTrail::new();
        let start = Instant::now();
        trail.decay(start);
        for i in 0..10 {
            trail.record(Point::new(i as f64, 0.0));
        }
        trail.decay(start + Duration::from_millis(45));
        assert_eq!(trail.len(), 7);
        // Partial intervals carry over instead of resetting.
        trail.decay(start + Duration::from_millis(60));
        assert_eq!(trail.len(), 6);
    }

    #[test]
    fn long_pause_drains_the_trail_and_resets_the_cadence() {
        let mut trail = CursorTrail::new();
        let start = Instant::now();
        trail.decay(start);
        for i in 0..5 {
            trail.record(Point::new(i as f64, 0.0));
        }
        // An hour-long host pause drains everything in one step.
        let resumed = start + Duration::from_secs(3600);
        trail.decay(resumed);
        assert!(trail.is_empty());
        // The cadence restarts from the resume instant, not the backlog.
        trail.record(Point::new(0.0, 0.0));
        trail.decay(resumed + Duration::from_millis(14));
        assert_eq!(trail.len(), 1);
        trail.decay(resumed + Duration::from_millis(15));
        assert!(trail.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut trail = CursorTrail::new();
        trail.record(Point::new(1.0, 1.0));
        trail.record(Point::new(2.0, 2.0));
        trail.clear();
        assert!(trail.is_empty());
    }
}
