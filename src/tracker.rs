//! Page-wide scroll and pointer state.
//!
//! The root view owns one [`Viewport`] and hands it to the background and the
//! navbar; nothing here reads browser globals.

use crate::geometry::Point;

pub const PARALLAX_FACTOR: f64 = 0.2;
pub const SCROLLED_THRESHOLD_PX: f64 = 30.0;
pub const POINTER_BREAKPOINT_PX: u32 = 768;
pub const POINTER_MEDIA_QUERY: &str = "(min-width: 768px)";
const GLOW_RADIUS_PX: f64 = 300.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub pointer: Point,
    pub tracks_pointer: bool,
}

impl Viewport {
    pub fn with_scroll(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }

    pub fn with_pointer(self, pointer: Point) -> Self {
        Self { pointer, ..self }
    }

    pub fn scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_THRESHOLD_PX
    }

    pub fn parallax_offset(&self) -> f64 {
        self.scroll_y * PARALLAX_FACTOR
    }

    pub fn grid_style(&self) -> String {
        format!("transform: translateY({:.2}px);", self.parallax_offset())
    }

    /// Top-left corner of the glow so that it is centred on the pointer.
    pub fn glow_origin(&self) -> Point {
        Point::new(self.pointer.x - GLOW_RADIUS_PX, self.pointer.y - GLOW_RADIUS_PX)
    }

    pub fn glow_style(&self) -> String {
        let origin = self.glow_origin();
        format!("left: {:.2}px; top: {:.2}px;", origin.x, origin.y)
    }

    pub fn nav_class(&self) -> &'static str {
        if self.scrolled() {
            "is-scrolled"
        } else {
            "is-resting"
        }
    }
}

/// Width check equivalent to [`POINTER_MEDIA_QUERY`], for callers that only
/// know the viewport width.
pub fn pointer_tracking_enabled(viewport_width: f64) -> bool {
    viewport_width >= f64::from(POINTER_BREAKPOINT_PX)
}

/// Keeps only the newest value between animation frames.
#[derive(Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    frame_requested: bool,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            frame_requested: false,
        }
    }
}

impl<T> FrameCoalescer<T> {
    /// Stores `value`; returns `true` when the caller has to request a frame.
    pub fn push(&mut self, value: T) -> bool {
        self.pending = Some(value);
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    pub fn take(&mut self) -> Option<T> {
        self.frame_requested = false;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flips_strictly_above_threshold() {
        let viewport = Viewport::default();

        assert!(!viewport.with_scroll(0.0).scrolled());
        assert!(!viewport.with_scroll(30.0).scrolled());
        assert!(viewport.with_scroll(30.5).scrolled());
        assert!(viewport.with_scroll(31.0).scrolled());
        assert_eq!(viewport.with_scroll(31.0).nav_class(), "is-scrolled");
        assert_eq!(viewport.with_scroll(12.0).nav_class(), "is-resting");
    }

    #[test]
    fn grid_moves_at_a_fifth_of_scroll() {
        let viewport = Viewport::default().with_scroll(500.0);

        assert!((viewport.parallax_offset() - 100.0).abs() < 1e-9);
        assert_eq!(viewport.grid_style(), "transform: translateY(100.00px);");
    }

    #[test]
    fn glow_is_centred_on_pointer() {
        let viewport = Viewport::default().with_pointer(Point::new(640.0, 360.0));

        assert_eq!(viewport.glow_origin(), Point::new(340.0, 60.0));
        assert_eq!(viewport.glow_style(), "left: 340.00px; top: 60.00px;");
    }

    #[test]
    fn pointer_tracking_starts_at_tablet_width() {
        assert!(!pointer_tracking_enabled(767.0));
        assert!(pointer_tracking_enabled(768.0));
        assert!(pointer_tracking_enabled(1440.0));
    }

    #[test]
    fn burst_of_events_requests_one_frame_with_latest_value() {
        let mut coalescer = FrameCoalescer::default();

        assert!(coalescer.push(Point::new(1.0, 1.0)));
        assert!(!coalescer.push(Point::new(2.0, 2.0)));
        assert!(!coalescer.push(Point::new(3.0, 5.0)));

        assert_eq!(coalescer.take(), Some(Point::new(3.0, 5.0)));
        assert_eq!(coalescer.take(), None);

        assert!(coalescer.push(Point::new(4.0, 4.0)), "next event after a frame requests again");
    }
}
