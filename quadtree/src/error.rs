use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "world bounds must be finite with min < max (min_x: {min_x}, min_y: {min_y}, max_x: {max_x}, max_y: {max_y})"
    )]
    InvalidWorldBounds {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    },

    #[error("leaf {owner} radius must be finite and non-negative (radius: {radius})")]
    InvalidLeafRadius { owner: u32, radius: f32 },

    #[error("leaf {owner} position must be finite (x: {x}, y: {y})")]
    InvalidLeafPosition { owner: u32, x: f32, y: f32 },

    #[error("leaf {owner} lies outside the world bounds (x: {x}, y: {y})")]
    LeafOutOfBounds { owner: u32, x: f32, y: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
