use super::*;

impl QuadTree {
    /// Owners of every indexed leaf whose circle overlaps `leaf`'s circle,
    /// excluding `leaf`'s own owner. Tangent circles overlap. The order is
    /// traversal order.
    pub fn query(&self, leaf: &Leaf) -> QuadtreeResult<Vec<u32>> {
        let mut collisions = Vec::new();
        self.query_into(leaf, &mut collisions)?;
        Ok(collisions)
    }

    /// Like [`query`](Self::query) but appends into a caller-owned buffer.
    pub fn query_into(&self, leaf: &Leaf, collisions: &mut Vec<u32>) -> QuadtreeResult<()> {
        self.query_with(leaf, |owner| collisions.push(owner))
    }

    pub fn query_with<F>(&self, leaf: &Leaf, mut f: F) -> QuadtreeResult<()>
    where
        F: FnMut(u32),
    {
        let probe = self.index_circle(leaf)?;
        self.overlaps_with(leaf.owner(), &probe, &mut f);
        Ok(())
    }

    pub fn query_batch(&self, leaves: &[Leaf]) -> QuadtreeResult<Vec<Vec<u32>>> {
        leaves.iter().map(|leaf| self.query(leaf)).collect()
    }

    /// Owners of every leaf whose circle intersects `rect`.
    pub fn query_rect(&self, rect: &Rectangle) -> Vec<u32> {
        let mut collisions = Vec::new();
        self.query_rect_with(rect, |owner| collisions.push(owner));
        collisions
    }

    pub fn query_rect_with<F>(&self, rect: &Rectangle, mut f: F)
    where
        F: FnMut(u32),
    {
        let mut stack: NodeStack = SmallVec::new();
        stack.push(ROOT);
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx as usize];
            for leaf in &node.leaves {
                if collision_detection::circle_rectangle(&leaf.circle, rect) {
                    f(leaf.owner);
                }
            }
            if let Some(children) = node.children {
                for child in children {
                    if collision_detection::rectangle_rectangle(
                        &self.nodes[child as usize].bounds,
                        rect,
                    ) {
                        stack.push(child);
                    }
                }
            }
        }
    }

    /// Calls `f` once for every pair of indexed leaves whose circles overlap,
    /// with the smaller owner first.
    pub fn for_each_overlap_pair<F>(&self, mut f: F)
    where
        F: FnMut(u32, u32),
    {
        for node in self.live_nodes() {
            for leaf in &node.leaves {
                self.overlaps_with(leaf.owner, &leaf.circle, &mut |other: u32| {
                    if leaf.owner < other {
                        f(leaf.owner, other);
                    }
                });
            }
        }
    }

    // Visit every node whose rectangle touches the probe's bounding square
    // and report the overlapping leaves, skipping `exclude`.
    fn overlaps_with(&self, exclude: u32, probe: &Circle, f: &mut dyn FnMut(u32)) {
        let square = probe.bounding_box();
        let mut stack: NodeStack = SmallVec::new();
        stack.push(ROOT);
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx as usize];
            for leaf in &node.leaves {
                if leaf.owner != exclude && collision_detection::circle_circle(probe, &leaf.circle) {
                    f(leaf.owner);
                }
            }
            if let Some(children) = node.children {
                for child in children {
                    if collision_detection::rectangle_rectangle(
                        &self.nodes[child as usize].bounds,
                        &square,
                    ) {
                        stack.push(child);
                    }
                }
            }
        }
    }
}
