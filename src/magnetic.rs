use crate::geometry::{Point, Rect};

pub const MAGNETIC_STRENGTH: f64 = 0.35;

/// Offset pulling an element towards the pointer.
pub fn attraction(bounds: Rect, pointer: Point) -> Point {
    pointer.offset_from(bounds.center()).scaled(MAGNETIC_STRENGTH)
}

pub fn translate_style(offset: Point) -> String {
    format!("transform: translate({:.2}px, {:.2}px);", offset.x, offset.y)
}

/// External destinations open in a new tab, in-page anchors do not.
pub fn link_target(href: &str) -> &'static str {
    if href.starts_with("http") {
        "_blank"
    } else {
        "_self"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn pulls_towards_pointer_by_strength() {
        let button = Rect::new(60.0, 80.0, 80.0, 40.0);
        let offset = attraction(button, Point::new(150.0, 130.0));

        assert!(close(offset, Point::new(17.5, 10.5)), "got {offset:?}");
    }

    #[test]
    fn pointer_at_center_means_no_offset() {
        let button = Rect::new(0.0, 0.0, 200.0, 60.0);

        assert!(close(attraction(button, Point::new(100.0, 30.0)), Point::ORIGIN));
    }

    #[test]
    fn style_renders_translation() {
        assert_eq!(
            translate_style(Point::new(17.5, -10.5)),
            "transform: translate(17.50px, -10.50px);"
        );
        assert_eq!(
            translate_style(Point::ORIGIN),
            "transform: translate(0.00px, 0.00px);"
        );
    }

    #[test]
    fn only_absolute_links_open_new_tab() {
        assert_eq!(link_target("https://github.com/Atharvsinh-codez"), "_blank");
        assert_eq!(link_target("#projects"), "_self");
    }
}
