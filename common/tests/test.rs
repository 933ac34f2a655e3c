use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.left(), 0.0);
    assert_eq!(rect.right(), 4.0);
    assert_eq!(rect.top(), 0.0);
    assert_eq!(rect.bottom(), 6.0);
    assert_eq!(rect.top_left(), (0.0, 0.0));
    assert_eq!(rect.bottom_right(), (4.0, 6.0));
}

#[test]
fn test_from_extent() {
    let rect = Rectangle::from_extent(0.0, 0.0, 100.0, 50.0);
    assert_eq!(rect.center_x(), 50.0);
    assert_eq!(rect.center_y(), 25.0);
    assert_eq!(rect.width(), 100.0);
    assert_eq!(rect.height(), 50.0);
    assert_eq!(rect.top_left(), (0.0, 0.0));
    assert_eq!(rect.bottom_right(), (100.0, 50.0));
}

#[test]
fn test_distance_to_point() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.distance_to_point(2.0, 3.0), 0.0);
    assert_eq!(rect.distance_to_point(6.0, 3.0), 4.0);
    assert_eq!(rect.distance_to_point(2.0, 8.0), 4.0);
}

#[test]
fn test_contains_point() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert!(rect.contains_point(2.0, 3.0));
    assert!(rect.contains_point(4.0, 6.0));
    assert!(!rect.contains_point(6.0, 3.0));
    assert!(!rect.contains_point(2.0, 8.0));
}

#[test]
fn test_quadrants_tile_parent() {
    let rect = Rectangle::from_extent(0.0, 0.0, 100.0, 100.0);
    let ne = rect.quadrant(Quadrant::NorthEast);
    let nw = rect.quadrant(Quadrant::NorthWest);
    let se = rect.quadrant(Quadrant::SouthEast);
    let sw = rect.quadrant(Quadrant::SouthWest);
    assert_eq!(nw, Rectangle::from_extent(0.0, 0.0, 50.0, 50.0));
    assert_eq!(ne, Rectangle::from_extent(50.0, 0.0, 100.0, 50.0));
    assert_eq!(sw, Rectangle::from_extent(0.0, 50.0, 50.0, 100.0));
    assert_eq!(se, Rectangle::from_extent(50.0, 50.0, 100.0, 100.0));

    for quadrant in Quadrant::ALL {
        assert!(rect.contains_rectangle(&rect.quadrant(quadrant)));
    }
}

#[test]
fn test_clamp_point() {
    let rect = Rectangle::from_extent(0.0, 0.0, 100.0, 100.0);
    assert_eq!(rect.clamp_point(50.0, 50.0), (50.0, 50.0));
    assert_eq!(rect.clamp_point(-5.0, 120.0), (0.0, 100.0));
}

#[test]
fn test_circle_bounding_box() {
    let circle = Circle::new(10.0, 20.0, 5.0);
    let bb = circle.bounding_box();
    assert_eq!(bb.top_left(), (5.0, 15.0));
    assert_eq!(bb.bottom_right(), (15.0, 25.0));
}

#[test]
fn test_circle_overlaps() {
    let circle = Circle::new(0.0, 0.0, 1.0);
    assert!(circle.overlaps(&Circle::new(1.0, 1.0, 1.0)));
    // Tangent.
    assert!(circle.overlaps(&Circle::new(3.0, 0.0, 2.0)));
    assert!(Circle::new(3.0, 0.0, 2.0).overlaps(&circle));
    assert!(!circle.overlaps(&Circle::new(0.0, 3.5, 2.0)));

    let point = Circle::new(5.0, 5.0, 0.0);
    assert!(point.overlaps(&point));
}

#[test]
fn test_contains_rectangle() {
    let rect = Rectangle::from_extent(0.0, 0.0, 10.0, 10.0);
    assert!(rect.contains_rectangle(&rect));
    assert!(rect.contains_rectangle(&Rectangle::from_extent(0.0, 4.0, 2.0, 10.0)));
    assert!(!rect.contains_rectangle(&Rectangle::from_extent(9.0, 9.0, 10.5, 10.0)));
    assert!(!Rectangle::from_extent(2.0, 2.0, 4.0, 4.0).contains_rectangle(&rect));
}

#[test]
fn test_intersects() {
    let rect = Rectangle::from_extent(0.0, 0.0, 10.0, 10.0);
    let touching = Rectangle::from_extent(10.0, 10.0, 20.0, 20.0);
    let inside = Rectangle::from_extent(4.0, 4.0, 6.0, 6.0);
    let apart = Rectangle::from_extent(0.0, 10.5, 10.0, 20.0);
    assert!(rect.intersects(&touching));
    assert!(touching.intersects(&rect));
    assert!(rect.intersects(&inside));
    assert!(!rect.intersects(&apart));
    assert!(!apart.intersects(&rect));
}

#[test]
fn test_get_random_circle_coords_inside() {
    let rect = Rectangle::new(2.0, 3.0, 6.0, 8.0);
    let radius = 1.0;

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..10 {
        let (x, y) = rect.get_random_circle_coords_inside(radius, &mut rng);
        let bb = Circle::new(x, y, radius).bounding_box();
        assert!(rect.contains_point(bb.left(), bb.top()));
        assert!(rect.contains_point(bb.right(), bb.bottom()));
    }
}

#[test]
fn test_get_random_circle_coords_inside_small_rectangle() {
    let rect = Rectangle::new(2.0, 3.0, 2.0, 2.0);
    let radius = 2.0;

    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let (x, y) = rect.get_random_circle_coords_inside(radius, &mut rng);
    // The generated coordinates should be clamped to the left/top of the rectangle.
    assert_eq!(x, rect.left() + radius + 1.0);
    assert_eq!(y, rect.top() + radius + 1.0);
}
