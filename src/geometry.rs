#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_client(client_x: i32, client_y: i32) -> Self {
        Self::new(f64::from(client_x), f64::from(client_y))
    }

    pub fn offset_from(self, origin: Point) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Client-space box of an element, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<web_sys::DomRect> for Rect {
    fn from(rect: web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_center_is_midpoint_of_box() {
        let rect = Rect::new(40.0, 80.0, 120.0, 40.0);

        assert_eq!(rect.center(), Point::new(100.0, 100.0));
        assert_eq!(rect.top_left(), Point::new(40.0, 80.0));
    }

    #[test]
    fn offset_from_subtracts_origin() {
        let pointer = Point::from_client(150, 130);

        assert_eq!(
            pointer.offset_from(Point::new(100.0, 100.0)),
            Point::new(50.0, 30.0)
        );
    }
}
