use super::*;

impl QuadTree {
    /// Indexes `leaf`. Inserting an owner that is already indexed is a
    /// no-op; use [`update`](Self::update) to move it.
    pub fn insert(&mut self, leaf: &Leaf) -> QuadtreeResult<()> {
        let owner = leaf.owner();
        if self.owner_map.contains_key(&owner) {
            trace!(owner, "ignored insert of an indexed leaf");
            return Ok(());
        }
        let circle = self.index_circle(leaf)?;
        self.insert_from(ROOT, NodeLeaf { owner, circle });
        Ok(())
    }

    // Descend from `start` to the deepest node that fully contains the
    // leaf's bounding square, then split that node if it overflowed.
    pub(super) fn insert_from(&mut self, start: u32, leaf: NodeLeaf) {
        let square = leaf.circle.bounding_box();
        let mut idx = start;
        while let Some(children) = self.nodes[idx as usize].children {
            match self.child_containing(&children, &square) {
                Some(child) => idx = child,
                None => break,
            }
        }

        self.nodes[idx as usize].leaves.push(leaf);
        self.owner_map.insert(leaf.owner, idx);
        self.adjust_totals(idx, true);

        let node = &self.nodes[idx as usize];
        if node.is_leaf() && node.leaves.len() > self.config.node_capacity && self.can_split(idx) {
            self.split(idx);
        }
    }
}
