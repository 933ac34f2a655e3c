use crate::shapes::{Circle, Rectangle};

// Check that Rectangle inner is fully contained in Rectangle outer, edges included
pub fn rectangle_contains_rectangle(outer: &Rectangle, inner: &Rectangle) -> bool {
    outer.contains_rectangle(inner)
}

pub fn rectangle_rectangle(a: &Rectangle, b: &Rectangle) -> bool {
    a.intersects(b)
}

/// Tangent circles count as overlapping.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    a.overlaps(b)
}

pub fn circle_rectangle(circle: &Circle, rectangle: &Rectangle) -> bool {
    rectangle.distance_to_point(circle.x, circle.y) <= circle.radius * circle.radius
}
