use common::shapes::Rectangle;
use fxhash::FxHashMap;
use quadtree::quadtree::{Config, QuadTree};
use quadtree::QuadtreeResult;
use std::collections::hash_map::Entry;
use tracing::debug;

pub type LayerId = u32;

/// One quadtree per collision layer, owned by the scene and passed to the
/// colliders that need it.
#[derive(Debug, Default)]
pub struct CollisionLayers {
    layers: FxHashMap<LayerId, QuadTree>,
}

impl CollisionLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the tree for `id`. A layer's bounds are fixed once created,
    /// so asking again for an existing layer returns it untouched.
    pub fn create_layer(
        &mut self,
        id: LayerId,
        bounds: Rectangle,
        config: Config,
    ) -> QuadtreeResult<&mut QuadTree> {
        match self.layers.entry(id) {
            Entry::Occupied(entry) => {
                debug!(layer = id, "collision layer already exists");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let tree = QuadTree::new_with_config(bounds, config)?;
                debug!(layer = id, "created collision layer");
                Ok(entry.insert(tree))
            }
        }
    }

    pub fn layer(&self, id: LayerId) -> Option<&QuadTree> {
        self.layers.get(&id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut QuadTree> {
        self.layers.get_mut(&id)
    }

    pub fn remove_layer(&mut self, id: LayerId) -> Option<QuadTree> {
        self.layers.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.keys().copied()
    }
}
