use crate::shapes::Circle;

/// A circular collidable registered with a [`QuadTree`](super::QuadTree).
///
/// The client owns the leaf and mutates it freely; the tree only keeps a
/// copy of the indexed circle keyed by `owner`. After changing the position
/// or radius, call [`QuadTree::update`](super::QuadTree::update) to keep the
/// index in sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    owner: u32,
    x: f32,
    y: f32,
    radius: f32,
}

impl Leaf {
    pub fn new(owner: u32, x: f32, y: f32, radius: f32) -> Self {
        Self {
            owner,
            x,
            y,
            radius,
        }
    }

    pub fn owner(&self) -> u32 {
        self.owner
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.x, self.y, self.radius)
    }
}
