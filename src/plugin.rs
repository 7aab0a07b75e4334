//! Bevy plugin driving a [`Simulation`] from the frame clock.
//!
//! Entities carrying a [`BodyHandle`] are the rendered models of simulation
//! bodies. Each `Update` the plugin steps the simulation with the frame's
//! delta time, consumes [`PendingInput`] and applies the reported
//! [`ModelUpdate`]s to the matching transforms.

use bevy::prelude::*;
use bevy_transform::components::Transform;
use log::info;

use crate::direction::Direction;
use crate::simulation::{BodyId, FrameReport, ModelUpdate, Simulation};

/// Links a rendered entity to the simulation body it shows.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyHandle(pub BodyId);

/// Directions pressed since the last step.
#[derive(Resource, Default, Debug, Clone)]
pub struct PendingInput(pub Vec<Direction>);

/// Report of the most recent simulation step.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct LatestReport(pub FrameReport);

/// Installs the stepping system and its resources.
///
/// The [`Simulation`] itself is inserted by the application; the system
/// idles until it exists.
#[derive(Default)]
pub struct CagePhysicsPlugin;

impl Plugin for CagePhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingInput>();
        app.init_resource::<LatestReport>();
        app.add_systems(
            Update,
            step_simulation_system.run_if(resource_exists::<Simulation>),
        );
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems receive resources by value."
)]
fn step_simulation_system(
    time: Res<Time>,
    mut simulation: ResMut<Simulation>,
    mut input: ResMut<PendingInput>,
    mut latest: ResMut<LatestReport>,
    mut models: Query<(&BodyHandle, &mut Transform)>,
) {
    let mut updates: Vec<ModelUpdate> = Vec::new();
    let report = simulation.step(time.delta_secs(), &input.0, &mut updates);
    input.0.clear();
    if report.lives_lost > 0 {
        info!("{} lives left", simulation.state().lives);
    }
    latest.0 = report;

    for (handle, mut transform) in &mut models {
        for update in updates.iter().filter(|update| update.id() == handle.0) {
            update.apply_to(&mut transform.translation);
        }
    }
}
