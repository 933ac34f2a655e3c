use crate::event::{CollisionEvent, EventContext, ListenerId};
use crate::transform::{effective_radius, Transform};

use quadtree::quadtree::{Leaf, QuadTree};
use quadtree::QuadtreeResult;
use tracing::debug;

/// Drives one entity's leaf: keeps it in sync with the entity's transform
/// every tick and, when `check_collision` is set, reports overlapping
/// entities to its subscribers.
#[derive(Debug)]
pub struct Collider {
    leaf: Leaf,
    local_radius: f32,
    check_collision: bool,
    enabled: bool,
    event: CollisionEvent,
    collisions: Vec<u32>,
}

impl Collider {
    pub fn new(owner: u32, transform: &Transform, local_radius: f32, check_collision: bool) -> Self {
        let mut collider = Self {
            leaf: Leaf::new(owner, 0.0, 0.0, 0.0),
            local_radius,
            check_collision,
            enabled: false,
            event: CollisionEvent::new(),
            collisions: Vec::new(),
        };
        collider.sync(transform);
        collider
    }

    pub fn owner(&self) -> u32 {
        self.leaf.owner()
    }

    pub fn leaf(&self) -> &Leaf {
        &self.leaf
    }

    pub fn local_radius(&self) -> f32 {
        self.local_radius
    }

    /// Takes effect on the next tick.
    pub fn set_local_radius(&mut self, local_radius: f32) {
        self.local_radius = local_radius;
    }

    pub fn check_collision(&self) -> bool {
        self.check_collision
    }

    pub fn set_check_collision(&mut self, check_collision: bool) {
        self.check_collision = check_collision;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn event(&self) -> &CollisionEvent {
        &self.event
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&mut EventContext, u32) + 'static,
    {
        self.event.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.event.unsubscribe(id)
    }

    /// Syncs the leaf with `transform` and registers it with `tree`.
    /// Enabling an enabled collider does nothing. If another collider
    /// already indexed the same owner in `tree`, this one stays disabled.
    pub fn enable(&mut self, tree: &mut QuadTree, transform: &Transform) -> QuadtreeResult<()> {
        if self.enabled {
            return Ok(());
        }
        if tree.contains(self.owner()) {
            debug!(owner = self.owner(), "owner already indexed, collider left disabled");
            return Ok(());
        }
        self.sync(transform);
        tree.insert(&self.leaf)?;
        self.enabled = true;
        debug!(owner = self.owner(), "enabled collider");
        Ok(())
    }

    /// Unregisters the leaf. Safe to call repeatedly.
    pub fn disable(&mut self, tree: &mut QuadTree) {
        if !self.enabled {
            return;
        }
        tree.remove_leaf(&self.leaf);
        self.enabled = false;
        debug!(owner = self.owner(), "disabled collider");
    }

    /// Per-frame step: sync the leaf, re-index it, then query and dispatch
    /// collisions if this collider checks for them and anyone is listening.
    /// Returns the number of deliveries made. A disabled collider does
    /// nothing.
    pub fn tick(&mut self, tree: &mut QuadTree, transform: &Transform) -> QuadtreeResult<usize> {
        if !self.enabled {
            return Ok(0);
        }
        self.sync(transform);
        tree.update(&self.leaf)?;

        if !self.check_collision || self.event.is_empty() {
            return Ok(0);
        }
        self.collisions.clear();
        tree.query_into(&self.leaf, &mut self.collisions)?;
        Ok(self.event.dispatch(self.collisions.iter().copied()))
    }

    fn sync(&mut self, transform: &Transform) {
        self.leaf.set_position(transform.x, transform.y);
        self.leaf
            .set_radius(effective_radius(self.local_radius, transform));
    }
}
