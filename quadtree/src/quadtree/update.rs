use super::*;

impl QuadTree {
    /// Re-indexes `leaf` after its position or radius changed.
    ///
    /// When the new bounding square still belongs to the node currently
    /// holding the leaf only the stored circle is refreshed. Otherwise the
    /// leaf is detached, re-inserted from the nearest ancestor that contains
    /// it, and the old node's ancestors are checked for merging. A leaf that
    /// is not indexed yet is inserted.
    pub fn update(&mut self, leaf: &Leaf) -> QuadtreeResult<()> {
        let owner = leaf.owner();
        let Some(idx) = self.owner_map.get(&owner).copied() else {
            return self.insert(leaf);
        };
        let circle = self.index_circle(leaf)?;
        let square = circle.bounding_box();

        if self.still_belongs(idx, &square) {
            let node = &mut self.nodes[idx as usize];
            if let Some(pos) = node.position_of(owner) {
                node.leaves[pos].circle = circle;
            }
            return Ok(());
        }

        self.detach(owner, idx);
        let mut start = idx;
        while start != ROOT
            && !collision_detection::rectangle_contains_rectangle(
                &self.nodes[start as usize].bounds,
                &square,
            )
        {
            start = self.nodes[start as usize].parent.unwrap_or(ROOT);
        }
        self.insert_from(start, NodeLeaf { owner, circle });
        self.merge_upwards(idx);
        Ok(())
    }

    /// Updates every leaf in order, stopping at the first invalid one.
    pub fn update_batch(&mut self, leaves: &[Leaf]) -> QuadtreeResult<()> {
        for leaf in leaves {
            self.update(leaf)?;
        }
        Ok(())
    }

    // Whether a leaf with this bounding square would be placed at `idx`.
    fn still_belongs(&self, idx: u32, square: &Rectangle) -> bool {
        let node = &self.nodes[idx as usize];
        let contained = idx == ROOT
            || collision_detection::rectangle_contains_rectangle(&node.bounds, square);
        if !contained {
            return false;
        }
        match node.children {
            None => true,
            Some(children) => self.child_containing(&children, square).is_none(),
        }
    }
}
