use super::*;
use crate::shapes::Quadrant;

pub(super) struct Node {
    pub(super) bounds: Rectangle,
    pub(super) leaves: Vec<NodeLeaf>,
    /// Indexed by [`Quadrant::index`].
    pub(super) children: Option<[u32; 4]>,
    pub(super) parent: Option<u32>,
    pub(super) depth: usize,
    /// Leaves held by this node and all of its descendants.
    pub(super) total: usize,
}

impl Node {
    pub(super) fn new(bounds: Rectangle, parent: Option<u32>, depth: usize) -> Self {
        Self {
            bounds,
            leaves: Vec::new(),
            children: None,
            parent,
            depth,
            total: 0,
        }
    }

    pub(super) fn initialize(&mut self, bounds: Rectangle, parent: Option<u32>, depth: usize) {
        self.bounds = bounds;
        self.parent = parent;
        self.depth = depth;
        self.leaves.clear();
        self.children = None;
        self.total = 0;
    }

    pub(super) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub(super) fn position_of(&self, owner: u32) -> Option<usize> {
        self.leaves.iter().position(|leaf| leaf.owner == owner)
    }
}

impl QuadTree {
    fn alloc_node(&mut self, bounds: Rectangle, parent: u32, depth: usize) -> u32 {
        match self.free_nodes.pop() {
            Some(idx) => {
                self.nodes[idx as usize].initialize(bounds, Some(parent), depth);
                idx
            }
            None => {
                self.nodes.push(Node::new(bounds, Some(parent), depth));
                (self.nodes.len() - 1) as u32
            }
        }
    }

    pub(super) fn can_split(&self, idx: u32) -> bool {
        let node = &self.nodes[idx as usize];
        node.depth < self.config.max_depth
            && node.bounds.width / 2.0 >= self.config.min_size
            && node.bounds.height / 2.0 >= self.config.min_size
    }

    /// Splits a leaf-node into four quadrants. Only leaves that fit entirely
    /// inside one quadrant move down; straddling leaves stay here. The new
    /// children are not split further until they receive an insertion.
    pub(super) fn split(&mut self, idx: u32) {
        let (bounds, depth) = {
            let node = &self.nodes[idx as usize];
            debug_assert!(node.is_leaf());
            (node.bounds, node.depth)
        };

        let mut children = [0u32; 4];
        for quadrant in Quadrant::ALL {
            children[quadrant.index()] = self.alloc_node(bounds.quadrant(quadrant), idx, depth + 1);
        }

        let leaves = std::mem::take(&mut self.nodes[idx as usize].leaves);
        let mut kept = Vec::with_capacity(leaves.len());
        let mut moved = 0usize;
        for leaf in leaves {
            match self.child_containing(&children, &leaf.circle.bounding_box()) {
                Some(child) => {
                    let child_node = &mut self.nodes[child as usize];
                    child_node.leaves.push(leaf);
                    child_node.total += 1;
                    self.owner_map.insert(leaf.owner, child);
                    moved += 1;
                }
                None => kept.push(leaf),
            }
        }

        let node = &mut self.nodes[idx as usize];
        node.leaves = kept;
        node.children = Some(children);
        debug!(
            node = idx,
            depth,
            moved,
            kept = node.leaves.len(),
            "split quadtree node"
        );
    }

    /// Walks from `idx` to the root, merging every internal node whose
    /// subtree has shrunk to the merge threshold.
    pub(super) fn merge_upwards(&mut self, idx: u32) {
        let mut current = Some(idx);
        while let Some(i) = current {
            let node = &self.nodes[i as usize];
            if !node.is_leaf() && node.total <= self.config.merge_threshold {
                self.merge(i);
            }
            current = self.nodes[i as usize].parent;
        }
    }

    // Pull every leaf below `idx` up into it and recycle the descendants.
    fn merge(&mut self, idx: u32) {
        let Some(children) = self.nodes[idx as usize].children.take() else {
            return;
        };

        let mut stack: NodeStack = children.into_iter().collect();
        let mut pulled = Vec::new();
        let mut freed = 0usize;
        while let Some(child) = stack.pop() {
            let node = &mut self.nodes[child as usize];
            pulled.append(&mut node.leaves);
            if let Some(grandchildren) = node.children.take() {
                stack.extend(grandchildren);
            }
            self.free_nodes.push(child);
            freed += 1;
        }

        for leaf in &pulled {
            self.owner_map.insert(leaf.owner, idx);
        }
        let node = &mut self.nodes[idx as usize];
        node.leaves.append(&mut pulled);
        debug!(
            node = idx,
            freed,
            leaves = node.leaves.len(),
            "merged quadtree node"
        );
    }
}
