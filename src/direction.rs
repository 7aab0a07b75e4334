//! The six directions a body can be pushed in.
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Directional input understood by [`crate::RigidBody::push`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards +y.
    Up,
    /// Towards -y.
    Down,
    /// Towards +x.
    Left,
    /// Towards -x.
    Right,
    /// Towards +z.
    Forward,
    /// Towards -z.
    Backward,
}

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Forward,
        Self::Backward,
    ];

    /// Unit vector for the direction.
    ///
    /// Left maps to +x and right to -x, matching the game's camera, which
    /// looks down +z.
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::Up => Vec3::Y,
            Self::Down => Vec3::NEG_Y,
            Self::Left => Vec3::X,
            Self::Right => Vec3::NEG_X,
            Self::Forward => Vec3::Z,
            Self::Backward => Vec3::NEG_Z,
        }
    }

    /// Picks one of the six directions uniformly.
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..6) {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            3 => Self::Right,
            4 => Self::Forward,
            _ => Self::Backward,
        }
    }
}
