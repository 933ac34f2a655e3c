//! Client-side collaborators of the quadtree: a per-entity collider that
//! keeps its leaf in sync with a transform, a listener list for collision
//! events, and a per-scene registry of collision layers.

pub mod collider;
pub mod detector;
pub mod event;
pub mod layers;
pub mod transform;

pub use collider::Collider;
pub use detector::Detector;
pub use event::{CollisionEvent, EventContext, ListenerId};
pub use layers::{CollisionLayers, LayerId};
pub use transform::{effective_radius, Transform};
