/// What to do with a leaf whose center lies outside the world bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutOfBoundsPolicy {
    /// Index the leaf at the nearest in-bounds point.
    #[default]
    Clamp,
    /// Refuse the leaf with [`QuadtreeError::LeafOutOfBounds`](crate::QuadtreeError::LeafOutOfBounds).
    Reject,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Nodes and leaves reserved up front.
    pub pool_size: usize,
    /// A leaf-node splits once it directly holds more leaves than this.
    pub node_capacity: usize,
    /// An internal node merges its children back once its whole subtree
    /// holds at most this many leaves. Clamped to `1..=node_capacity`.
    pub merge_threshold: usize,
    pub max_depth: usize,
    /// Children narrower or shorter than this are never created.
    pub min_size: f32,
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pool_size: 256,
            node_capacity: 8,
            merge_threshold: 8,
            max_depth: 8,
            min_size: 1.0,
            out_of_bounds: OutOfBoundsPolicy::Clamp,
        }
    }
}

impl Config {
    pub(crate) fn sanitized(mut self) -> Self {
        self.node_capacity = self.node_capacity.max(1);
        self.merge_threshold = self.merge_threshold.clamp(1, self.node_capacity);
        if !(self.min_size > 0.0 && self.min_size.is_finite()) {
            self.min_size = 1.0;
        }
        self
    }
}
