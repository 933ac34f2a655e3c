//! Dynamic quadtree for broad-phase overlap detection among circles.
//!
//! Leaves whose bounding square straddles a split line stay at the node
//! that owns the line, so a node's direct leaves are always fully inside
//! its rectangle and every leaf below a child lies within that child.

use crate::collision_detection;
use crate::error::{QuadtreeError, QuadtreeResult};
use crate::shapes::{Circle, Rectangle};

use fxhash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

mod config;
mod insert;
mod leaf;
mod node;
mod query;
mod remove;
mod stats;
mod update;

pub use config::{Config, OutOfBoundsPolicy};
pub use leaf::Leaf;
pub use stats::TreeStats;

use node::Node;

pub(crate) type NodeStack = SmallVec<[u32; 64]>;

const ROOT: u32 = 0;

/// A leaf as stored inside a node: the owner plus its indexed circle.
#[derive(Debug, Clone, Copy)]
struct NodeLeaf {
    owner: u32,
    circle: Circle,
}

pub struct QuadTree {
    nodes: Vec<Node>,
    free_nodes: Vec<u32>,
    // owner -> index of the node holding it
    owner_map: FxHashMap<u32, u32>,
    bounds: Rectangle,
    config: Config,
}

impl QuadTree {
    pub fn new_with_config(bounds: Rectangle, config: Config) -> QuadtreeResult<Self> {
        let (min_x, min_y) = bounds.top_left();
        let (max_x, max_y) = bounds.bottom_right();
        let finite = [min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x >= max_x || min_y >= max_y {
            return Err(QuadtreeError::InvalidWorldBounds {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }

        let config = config.sanitized();
        let mut nodes = Vec::with_capacity(config.pool_size.max(1));
        nodes.push(Node::new(bounds, None, 0));
        let mut owner_map = FxHashMap::default();
        owner_map.reserve(config.pool_size);

        debug!(
            min_x,
            min_y,
            max_x,
            max_y,
            node_capacity = config.node_capacity,
            merge_threshold = config.merge_threshold,
            max_depth = config.max_depth,
            "created quadtree"
        );

        Ok(QuadTree {
            nodes,
            free_nodes: Vec::new(),
            owner_map,
            bounds,
            config,
        })
    }

    pub fn new(bounds: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Validate a leaf and resolve the circle it is indexed (or queried) with.
    fn index_circle(&self, leaf: &Leaf) -> QuadtreeResult<Circle> {
        let owner = leaf.owner();
        let radius = leaf.radius();
        if !radius.is_finite() || radius < 0.0 {
            debug!(owner, radius, "rejected leaf with invalid radius");
            return Err(QuadtreeError::InvalidLeafRadius { owner, radius });
        }

        let (x, y) = leaf.position();
        if !x.is_finite() || !y.is_finite() {
            debug!(owner, x, y, "rejected leaf with invalid position");
            return Err(QuadtreeError::InvalidLeafPosition { owner, x, y });
        }

        if self.bounds.contains_point(x, y) {
            return Ok(Circle::new(x, y, radius));
        }

        match self.config.out_of_bounds {
            OutOfBoundsPolicy::Clamp => {
                let (cx, cy) = self.bounds.clamp_point(x, y);
                trace!(owner, x, y, cx, cy, "clamped out-of-bounds leaf");
                Ok(Circle::new(cx, cy, radius))
            }
            OutOfBoundsPolicy::Reject => {
                debug!(owner, x, y, "rejected out-of-bounds leaf");
                Err(QuadtreeError::LeafOutOfBounds { owner, x, y })
            }
        }
    }

    // The unique child whose rectangle fully contains `square`, if any.
    fn child_containing(&self, children: &[u32; 4], square: &Rectangle) -> Option<u32> {
        children.iter().copied().find(|&child| {
            collision_detection::rectangle_contains_rectangle(
                &self.nodes[child as usize].bounds,
                square,
            )
        })
    }

    // Move the subtree totals of `idx` and all of its ancestors by one.
    fn adjust_totals(&mut self, idx: u32, grow: bool) {
        let mut current = Some(idx);
        while let Some(i) = current {
            let node = &mut self.nodes[i as usize];
            if grow {
                node.total += 1;
            } else {
                node.total = node.total.saturating_sub(1);
            }
            current = node.parent;
        }
    }
}

impl std::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadTree")
            .field("leaves", &self.owner_map.len())
            .field("nodes", &self.node_count())
            .field("bounds", &self.bounds)
            .finish()
    }
}
