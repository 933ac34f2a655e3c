use super::*;

/// Shape of the partition at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaf_nodes: usize,
    pub internal_nodes: usize,
    pub max_depth: usize,
    pub leaves: usize,
}

impl QuadTree {
    pub fn len(&self) -> usize {
        self.owner_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owner_map.is_empty()
    }

    pub fn contains(&self, owner: u32) -> bool {
        self.owner_map.contains_key(&owner)
    }

    /// The circle `owner` is indexed with, after clamping.
    pub fn get(&self, owner: u32) -> Option<Circle> {
        let idx = *self.owner_map.get(&owner)?;
        let node = &self.nodes[idx as usize];
        node.position_of(owner).map(|pos| node.leaves[pos].circle)
    }

    /// Number of nodes reachable from the root, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_nodes.len()
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for node in self.live_nodes() {
            stats.nodes += 1;
            if node.is_leaf() {
                stats.leaf_nodes += 1;
            } else {
                stats.internal_nodes += 1;
            }
            stats.max_depth = stats.max_depth.max(node.depth);
            stats.leaves += node.leaves.len();
        }
        stats
    }

    // Retrieve all node bounding boxes, root first
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.extend(self.live_nodes().map(|node| node.bounds));
    }

    // Retrieve every indexed circle with its owner
    pub fn all_circles(&self, circles: &mut Vec<(u32, Circle)>) {
        for node in self.live_nodes() {
            circles.extend(node.leaves.iter().map(|leaf| (leaf.owner, leaf.circle)));
        }
    }

    pub(super) fn live_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        let mut stack: NodeStack = SmallVec::new();
        stack.push(ROOT);
        std::iter::from_fn(move || {
            let idx = stack.pop()?;
            let node = &self.nodes[idx as usize];
            if let Some(children) = node.children {
                stack.extend(children.into_iter().rev());
            }
            Some(node)
        })
    }
}
