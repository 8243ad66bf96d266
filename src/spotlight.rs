use crate::geometry::{Point, Rect};

const SPOTLIGHT_RADIUS_PX: u32 = 600;
const SPOTLIGHT_TINT: &str = "rgba(99,102,241,0.06)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spotlight {
    center: Point,
    hovered: bool,
}

impl Spotlight {
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn track(&mut self, container: Rect, pointer: Point) {
        self.center = pointer.offset_from(container.top_left());
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    /// The highlight fades out in place; its centre is kept.
    pub fn leave(&mut self) {
        self.hovered = false;
    }

    pub fn opacity(&self) -> u8 {
        u8::from(self.hovered)
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; background: radial-gradient({SPOTLIGHT_RADIUS_PX}px circle at {:.2}px {:.2}px, {SPOTLIGHT_TINT}, transparent 40%);",
            self.opacity(),
            self.center.x,
            self.center.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_relative_to_container() {
        let mut spotlight = Spotlight::default();
        spotlight.track(Rect::new(200.0, 50.0, 400.0, 300.0), Point::new(260.0, 170.0));

        assert_eq!(spotlight.center(), Point::new(60.0, 120.0));
    }

    #[test]
    fn opacity_follows_hover() {
        let mut spotlight = Spotlight::default();
        assert_eq!(spotlight.opacity(), 0);

        spotlight.enter();
        assert_eq!(spotlight.opacity(), 1);

        spotlight.leave();
        assert_eq!(spotlight.opacity(), 0);
    }

    #[test]
    fn style_places_gradient_at_center() {
        let mut spotlight = Spotlight::default();
        spotlight.enter();
        spotlight.track(Rect::new(0.0, 0.0, 100.0, 100.0), Point::new(12.0, 34.5));

        assert_eq!(
            spotlight.style(),
            "opacity: 1; background: radial-gradient(600px circle at 12.00px 34.50px, rgba(99,102,241,0.06), transparent 40%);"
        );
    }
}
