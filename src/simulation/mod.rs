//! The simulation context: every object in play, the world boundary and the
//! run's counters.
//!
//! A [`Simulation`] is built once at startup and stepped once per rendered
//! frame by the game loop, which supplies the frame's `delta_time` and the
//! player's directional input. Each step runs the same fixed sequence:
//!
//! 1. player input and wandering become acceleration impulses;
//! 2. every body integrates and its model is translated to match;
//! 3. bodies outside the world boundary are recentred;
//! 4. overlapping solid bodies are resolved pairwise;
//! 5. the player picks up any coin it touches;
//! 6. hunger advances.
//!
//! Randomness comes only from the simulation's own seeded generator, so two
//! simulations given the same seed, spawns and inputs stay in lockstep.

mod sink;
mod wander;

pub use sink::{ModelSink, ModelUpdate};

use glam::{IVec3, Vec3};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::aabb::AxisAlignedBox;
use crate::body::RigidBody;
use crate::collision::{check_pairwise, collide, resolve_boundary};
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::game_state::GameState;
use wander::Wander;

/// Index of an object within its [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// Role an object plays in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// The body steered by input.
    Player,
    /// A hazard that collides with the player and other enemies.
    Enemy,
    /// A pickup; it never collides, it is collected on contact.
    Coin,
    /// Static scenery such as the floor.
    Environment,
}

impl ObjectKind {
    /// Whether the kind takes part in pairwise collision resolution.
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Self::Coin)
    }
}

/// How an object generates its own impulses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MovementPattern {
    /// Moves only when pushed (by input or by collisions).
    #[default]
    Steered,
    /// Picks a random direction periodically and keeps pushing that way.
    Wander,
}

/// A body plus the game-level facts attached to it.
#[derive(Clone, Copy, Debug)]
pub struct GameObject {
    kind: ObjectKind,
    body: RigidBody,
    movement: MovementPattern,
    wander: Wander,
    visible: bool,
}

impl GameObject {
    /// Role of the object.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// The object's rigid body.
    #[must_use]
    pub const fn body(&self) -> &RigidBody {
        &self.body
    }

    /// How the object moves on its own.
    #[must_use]
    pub const fn movement(&self) -> MovementPattern {
        self.movement
    }

    /// Collected coins become invisible and stop taking part in the game.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Summary of what happened during one [`Simulation::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Frame number the report describes, starting at zero.
    pub frame: u64,
    /// Overlapping solid pairs that were resolved.
    pub collisions: usize,
    /// Bodies recentred by the world boundary.
    pub boundary_corrections: usize,
    /// Coins picked up by the player.
    pub coins_collected: u32,
    /// Lives lost to hunger.
    pub lives_lost: u32,
}

/// Simulation context replacing process-wide game globals.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "render", derive(bevy::prelude::Resource))]
pub struct Simulation {
    config: GameConfig,
    boundary: AxisAlignedBox,
    objects: Vec<GameObject>,
    player: Option<BodyId>,
    state: GameState,
    frame: u64,
    rng: Pcg64Mcg,
}

impl Simulation {
    /// Creates an empty simulation whose randomness is derived from `seed`.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            boundary: config.world_boundary(),
            state: GameState::new(&config.rules),
            config,
            objects: Vec::new(),
            player: None,
            frame: 0,
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Adds an object whose cage spans `max` to `min`.
    ///
    /// Environment objects are immovable. Spawning a second player makes it
    /// the one that receives input.
    pub fn spawn(&mut self, kind: ObjectKind, max: Vec3, min: Vec3) -> BodyId {
        let limits = self.config.motion;
        let body = if kind == ObjectKind::Environment {
            RigidBody::immovable(max, min, limits)
        } else {
            RigidBody::new(max, min, limits)
        };
        let id = BodyId(self.objects.len());
        self.objects.push(GameObject {
            kind,
            body,
            movement: MovementPattern::default(),
            wander: Wander::default(),
            visible: true,
        });
        if kind == ObjectKind::Player {
            self.player = Some(id);
        }
        debug!("spawned {kind:?} {id:?} with cage {:?}", body.cage());
        id
    }

    /// Adds an immovable floor slab centred on `center`.
    pub fn spawn_floor(&mut self, center: Vec3, half_extents: Vec3) -> BodyId {
        self.spawn(
            ObjectKind::Environment,
            center + half_extents,
            center - half_extents,
        )
    }

    /// Sets how an object generates its own impulses. Unknown ids are ignored.
    pub fn set_movement(&mut self, id: BodyId, movement: MovementPattern) {
        if let Some(object) = self.objects.get_mut(id.0) {
            object.movement = movement;
        }
    }

    /// Scales an object's cage and records the factor for render output.
    pub fn scale_object(&mut self, id: BodyId, factor: Vec3) {
        if let Some(object) = self.objects.get_mut(id.0) {
            object.body.scale(factor);
        }
    }

    /// Recentres an object on a random integer point and reports the
    /// placement to `sink`.
    ///
    /// Each coordinate is drawn from `-(range - 1)..=(range - 1)` where
    /// `range` is the configured placement range. Returns the logical point,
    /// or `None` for an unknown id.
    pub fn place_randomly(&mut self, id: BodyId, sink: &mut impl ModelSink) -> Option<Vec3> {
        let reach = self.config.rules.placement_range.max(1) - 1;
        let object = self.objects.get_mut(id.0)?;
        let cell = IVec3::new(
            self.rng.gen_range(-reach..=reach),
            self.rng.gen_range(-reach..=reach),
            self.rng.gen_range(-reach..=reach),
        );
        let point = cell.as_vec3();
        object.body.place_at(point);
        sink.move_to(id, object.body.to_render(point));
        Some(point)
    }

    /// Object with the given id.
    #[must_use]
    pub fn object(&self, id: BodyId) -> Option<&GameObject> {
        self.objects.get(id.0)
    }

    /// Every object with its id, in spawn order.
    pub fn objects(&self) -> impl Iterator<Item = (BodyId, &GameObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (BodyId(index), object))
    }

    /// Id of the player, if one was spawned.
    #[must_use]
    pub const fn player(&self) -> Option<BodyId> {
        self.player
    }

    /// The playable region.
    #[must_use]
    pub const fn boundary(&self) -> &AxisAlignedBox {
        &self.boundary
    }

    /// Configuration the simulation was built with.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Score, lives and hunger.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of completed steps.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Advances the simulation by one frame.
    ///
    /// `input` holds the directions pressed this frame; each becomes one
    /// impulse on the player. Visual changes are reported through `sink`.
    pub fn step(
        &mut self,
        delta_time: f32,
        input: &[Direction],
        sink: &mut impl ModelSink,
    ) -> FrameReport {
        let mut report = FrameReport {
            frame: self.frame,
            ..FrameReport::default()
        };

        self.apply_impulses(input);
        self.integrate(delta_time, sink);
        report.boundary_corrections = self.contain(sink);
        report.collisions = self.resolve_collisions();
        report.coins_collected = self.collect_coins();
        if self.state.tick_hunger(&self.config.rules) {
            report.lives_lost += 1;
        }

        self.frame += 1;
        trace!("{report:?}");
        report
    }

    fn apply_impulses(&mut self, input: &[Direction]) {
        let rate = self.config.impulse_rate;
        let period = self.config.rules.wander_period;
        if let Some(player) = self.player.and_then(|id| self.objects.get_mut(id.0)) {
            for direction in input {
                player.body.push(*direction, rate);
            }
        }
        for object in &mut self.objects {
            if object.movement == MovementPattern::Wander {
                let direction = object.wander.next(&mut self.rng, period);
                object.body.push(direction, rate);
            }
        }
    }

    fn integrate(&mut self, delta_time: f32, sink: &mut impl ModelSink) {
        for (index, object) in self.objects.iter_mut().enumerate() {
            let displacement = object.body.integrate(delta_time);
            if displacement != Vec3::ZERO {
                sink.translate(BodyId(index), object.body.to_render(displacement));
            }
        }
    }

    fn contain(&mut self, sink: &mut impl ModelSink) -> usize {
        let boundary = self.boundary;
        let mut corrections = 0;
        for (index, object) in self.objects.iter_mut().enumerate() {
            if !object.visible {
                continue;
            }
            if let Some(target) = resolve_boundary(&mut object.body, &boundary) {
                sink.move_to(BodyId(index), object.body.to_render(target));
                corrections += 1;
            }
        }
        corrections
    }

    fn resolve_collisions(&mut self) -> usize {
        let nudge = self.config.bounce_nudge;
        let count = self.objects.len();
        let mut collisions = 0;
        for first in 0..count {
            for second in (first + 1)..count {
                let Some((a, b)) = pair_mut(&mut self.objects, first, second) else {
                    continue;
                };
                if !(a.kind.is_solid() && b.kind.is_solid() && a.visible && b.visible) {
                    continue;
                }
                if collide(&mut a.body, &mut b.body, nudge).is_some() {
                    collisions += 1;
                }
            }
        }
        collisions
    }

    fn collect_coins(&mut self) -> u32 {
        let Some(player_cage) = self
            .player
            .and_then(|id| self.objects.get(id.0))
            .map(|player| *player.body.cage())
        else {
            return 0;
        };
        let mut collected = 0;
        for object in &mut self.objects {
            if object.kind == ObjectKind::Coin
                && object.visible
                && check_pairwise(&player_cage, object.body.cage())
            {
                object.visible = false;
                self.state.collect_coin(&self.config.rules);
                collected += 1;
            }
        }
        collected
    }
}

/// Borrows two distinct elements mutably; `first` must precede `second`.
fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> Option<(&mut T, &mut T)> {
    if first >= second || second >= items.len() {
        return None;
    }
    let (head, tail) = items.split_at_mut(second);
    Some((head.get_mut(first)?, tail.first_mut()?))
}
