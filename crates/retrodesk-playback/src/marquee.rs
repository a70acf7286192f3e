#![forbid(unsafe_code)]

//! Marquee geometry for overflowing track titles.
//!
//! A title wider than its container scrolls at a constant speed; the gap
//! between repetitions stretches so the second copy never starts inside
//! the container. Hosts measure the pixel widths, this module does the
//! arithmetic.

/// Minimum gap between the two title copies, px.
pub const MARQUEE_MIN_GAP_PX: f64 = 40.0;

/// Constant scroll speed, px per second.
pub const MARQUEE_SPEED_PX_PER_SEC: f64 = 40.0;

/// Floor on one animation cycle, seconds.
pub const MARQUEE_MIN_DURATION_SECS: f64 = 10.0;

/// Gap and cycle duration for one scrolling title.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarqueeMetrics {
    /// Gap between the end of one copy and the start of the next, px.
    pub gap_px: f64,
    /// One full scroll cycle, seconds.
    pub duration_secs: f64,
}

/// Compute marquee metrics from the container and content widths.
#[must_use]
pub fn measure(wrap_width_px: f64, content_width_px: f64) -> MarqueeMetrics {
    let gap_px = (wrap_width_px - content_width_px).max(MARQUEE_MIN_GAP_PX);
    let duration_secs =
        ((content_width_px + gap_px) / MARQUEE_SPEED_PX_PER_SEC).max(MARQUEE_MIN_DURATION_SECS);
    MarqueeMetrics {
        gap_px,
        duration_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_get_the_container_remainder_as_gap() {
        let metrics = measure(320.0, 180.0);
        assert_eq!(metrics.gap_px, 140.0);
        // (180 + 140) / 40 = 8s, floored to 10.
        assert_eq!(metrics.duration_secs, 10.0);
    }

    #[test]
    fn long_titles_fall_back_to_the_minimum_gap() {
        let metrics = measure(320.0, 900.0);
        assert_eq!(metrics.gap_px, MARQUEE_MIN_GAP_PX);
        assert_eq!(metrics.duration_secs, (900.0 + 40.0) / 40.0);
    }

    #[test]
    fn duration_scales_with_travel_distance() {
        let slow = measure(320.0, 2000.0);
        let fast = measure(320.0, 600.0);
        assert!(slow.duration_secs > fast.duration_secs);
        assert!(fast.duration_secs >= MARQUEE_MIN_DURATION_SECS);
    }
}
