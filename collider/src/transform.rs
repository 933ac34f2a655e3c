/// World-space placement of an entity as resolved by the host's transform
/// hierarchy: position plus the accumulated (lossy) global scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Transform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Largest absolute global scale factor. Mirrored axes do not shrink the
    /// collider.
    pub fn max_scale(&self) -> f32 {
        self.scale_x.abs().max(self.scale_y.abs())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Radius of a collider after applying the entity's non-uniform global
/// scale: the local radius grows with the larger of the two factors so the
/// circle always covers the scaled shape.
pub fn effective_radius(local_radius: f32, transform: &Transform) -> f32 {
    local_radius * transform.max_scale()
}
