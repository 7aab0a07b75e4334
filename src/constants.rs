//! Game physics and rule constants used across systems.
//!
//! These are the startup defaults. [`crate::config::GameConfig`] copies them
//! into its `Default` implementation and a JSON file may override them before
//! the simulation is built.

/// Divisor shared by the movement constants below.
pub const DIVISION_COEFFICIENT: f32 = 10.0;
/// Magnitude of a single directional impulse.
pub const IMPULSE_RATE: f32 = 1.0 / DIVISION_COEFFICIENT;
/// Acceleration magnitude under which a body is considered settled.
pub const LOWEST_ACCELERATION: f32 = 0.3 / DIVISION_COEFFICIENT;
/// Per-axis ceiling applied to accumulated acceleration.
pub const HIGHEST_ACCELERATION: f32 = 1.0 / DIVISION_COEFFICIENT;
/// Fraction of acceleration retained after each integration step.
pub const FRICTION_DECAY: f32 = 0.90;
/// Upward speed given to a resting body that hits an immovable one.
pub const BOUNCE_NUDGE: f32 = 1.0;
/// Half-extent of the playable region on every axis.
pub const WORLD_HALF_EXTENT: f32 = 50.0;
/// Fixed step used by the headless binary when none is supplied.
pub const DELTA_TIME: f32 = 1.0 / 60.0;
/// Frames between direction changes for wandering objects.
pub const WANDER_PERIOD: u32 = 30;
/// Random placement picks integer coordinates strictly inside this range.
pub const PLACEMENT_RANGE: i32 = 5;
/// Lives the player starts with.
pub const STARTING_LIVES: u32 = 3;
/// Hunger level at which the player loses a life.
pub const HUNGER_LIMIT: f32 = 10.0;
/// Hunger gained every frame.
pub const HUNGER_RATE: f32 = 0.001_28;
/// Hunger removed by each collected coin.
pub const COIN_HUNGER_RELIEF: f32 = 0.5;
