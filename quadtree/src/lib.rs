pub mod collision_detection;
pub mod error;
pub mod quadtree;

pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, Leaf, OutOfBoundsPolicy, QuadTree, TreeStats};
