//! Renderer-facing output of a simulation step.
//!
//! The simulation never touches transforms or graphics handles. It reports
//! what moved through a [`ModelSink`], already converted into render units
//! with each body's scale factor.

use glam::Vec3;

use super::BodyId;

/// Receives the visual consequences of a simulation step.
pub trait ModelSink {
    /// The model for `id` should move by `delta`.
    fn translate(&mut self, id: BodyId, delta: Vec3);

    /// The model for `id` should be recentred on `point`.
    fn move_to(&mut self, id: BodyId, point: Vec3);
}

/// One reported change, as recorded by the `Vec` sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModelUpdate {
    /// Relative move.
    Translate {
        /// Body whose model moves.
        id: BodyId,
        /// Offset in render units.
        delta: Vec3,
    },
    /// Absolute placement.
    MoveTo {
        /// Body whose model moves.
        id: BodyId,
        /// New centre in render units.
        point: Vec3,
    },
}

impl ModelUpdate {
    /// Body the update refers to.
    #[must_use]
    pub const fn id(&self) -> BodyId {
        match self {
            Self::Translate { id, .. } | Self::MoveTo { id, .. } => *id,
        }
    }

    /// Applies the update to a model translation.
    pub fn apply_to(&self, translation: &mut Vec3) {
        match *self {
            Self::Translate { delta, .. } => *translation += delta,
            Self::MoveTo { point, .. } => *translation = point,
        }
    }
}

impl ModelSink for Vec<ModelUpdate> {
    fn translate(&mut self, id: BodyId, delta: Vec3) {
        self.push(ModelUpdate::Translate { id, delta });
    }

    fn move_to(&mut self, id: BodyId, point: Vec3) {
        self.push(ModelUpdate::MoveTo { id, point });
    }
}
