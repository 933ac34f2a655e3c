use super::*;

impl QuadTree {
    /// Removes the leaf owned by `owner`. Returns `false` (and does nothing)
    /// when the owner is not indexed, so a repeated removal is harmless.
    pub fn remove(&mut self, owner: u32) -> bool {
        let Some(idx) = self.owner_map.remove(&owner) else {
            trace!(owner, "ignored removal of an absent leaf");
            return false;
        };
        self.detach(owner, idx);
        self.merge_upwards(idx);
        true
    }

    pub fn remove_leaf(&mut self, leaf: &Leaf) -> bool {
        self.remove(leaf.owner())
    }

    // Take the leaf out of node `idx` without touching the owner map or
    // merging anything.
    pub(super) fn detach(&mut self, owner: u32, idx: u32) -> Option<NodeLeaf> {
        let node = &mut self.nodes[idx as usize];
        let pos = node.position_of(owner)?;
        let leaf = node.leaves.swap_remove(pos);
        self.adjust_totals(idx, false);
        Some(leaf)
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.free_nodes.clear();
        self.owner_map.clear();
        let bounds = self.bounds;
        self.nodes[ROOT as usize].initialize(bounds, None, 0);
        debug!("cleared quadtree");
    }
}
