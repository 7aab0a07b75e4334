#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the coinrun game core.
//!
//! Bodies are axis-aligned cages with an acceleration-driven motion model.
//! A [`Simulation`] owns every body, steps them once per frame and reports
//! what moved through a [`ModelSink`]. Rendering lives behind the `render`
//! feature.
pub mod aabb;
pub mod body;
pub mod collision;
pub mod config;
pub mod constants;
pub mod direction;
pub mod game_state;
pub mod logging;
pub mod motion;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod plugin;
pub mod simulation;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use aabb::AxisAlignedBox;
pub use body::RigidBody;
pub use collision::{check_pairwise, collide, resolve_boundary, resolve_pairwise, Resolution};
pub use config::{ConfigError, GameConfig, GameRules};
pub use direction::Direction;
pub use game_state::GameState;
pub use logging::init as init_logging;
pub use motion::{Motion, MotionLimits};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use plugin::{BodyHandle, CagePhysicsPlugin, LatestReport, PendingInput};
pub use simulation::{
    BodyId, FrameReport, GameObject, ModelSink, ModelUpdate, MovementPattern, ObjectKind,
    Simulation,
};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use coinrun::prelude::*;
    //!
    //! let mut sim = Simulation::new(GameConfig::default(), 7);
    //! let player = sim.spawn(ObjectKind::Player, Vec3::splat(0.5), Vec3::splat(-0.5));
    //! let mut updates: Vec<ModelUpdate> = Vec::new();
    //! sim.step(DELTA_TIME, &[Direction::Forward], &mut updates);
    //! assert!(sim.object(player).is_some_and(|p| p.body().center().z > 0.0));
    //! ```

    pub use crate::constants::DELTA_TIME;
    pub use crate::AxisAlignedBox;
    pub use crate::BodyId;
    pub use crate::Direction;
    pub use crate::GameConfig;
    pub use crate::ModelSink;
    pub use crate::ModelUpdate;
    pub use crate::ObjectKind;
    pub use crate::RigidBody;
    pub use crate::Simulation;
    pub use glam::Vec3;
}
