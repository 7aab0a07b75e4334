//! Startup configuration for the simulation.
//!
//! Every field defaults to the matching constant in [`crate::constants`], so a
//! JSON file only needs to mention the values it overrides. The configuration
//! is read once before the simulation is built and never changes afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aabb::AxisAlignedBox;
use crate::motion::MotionLimits;
use crate::{
    BOUNCE_NUDGE, COIN_HUNGER_RELIEF, HUNGER_LIMIT, HUNGER_RATE, IMPULSE_RATE, PLACEMENT_RANGE,
    STARTING_LIVES, WANDER_PERIOD, WORLD_HALF_EXTENT,
};

/// Errors raised while loading a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration from {path}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text was not valid JSON for [`GameConfig`].
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but is outside its permitted range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Rules governing score, lives and hunger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Lives the player starts with.
    pub starting_lives: u32,
    /// Hunger level that costs the player a life.
    pub hunger_limit: f32,
    /// Hunger added every frame.
    pub hunger_rate: f32,
    /// Hunger removed per collected coin.
    pub coin_hunger_relief: f32,
    /// Frames between direction changes for wandering objects.
    pub wander_period: u32,
    /// Random placement picks integer coordinates within
    /// `±(placement_range - 1)`.
    pub placement_range: i32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            hunger_limit: HUNGER_LIMIT,
            hunger_rate: HUNGER_RATE,
            coin_hunger_relief: COIN_HUNGER_RELIEF,
            wander_period: WANDER_PERIOD,
            placement_range: PLACEMENT_RANGE,
        }
    }
}

/// Full simulation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Integration limits shared by every body.
    pub motion: MotionLimits,
    /// Magnitude of one directional impulse.
    pub impulse_rate: f32,
    /// Upward speed given to a resting body that hits an immovable one.
    pub bounce_nudge: f32,
    /// Half-extents of the playable region, centred on the origin.
    pub world_half_extents: Vec3,
    /// Score, lives and hunger rules.
    pub rules: GameRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            motion: MotionLimits::default(),
            impulse_rate: IMPULSE_RATE,
            bounce_nudge: BOUNCE_NUDGE,
            world_half_extents: Vec3::splat(WORLD_HALF_EXTENT),
            rules: GameRules::default(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    ///
    /// # Examples
    /// ```
    /// use coinrun::config::GameConfig;
    /// let config = GameConfig::from_json_str(r#"{ "impulse_rate": 0.2 }"#).unwrap();
    /// assert_eq!(config.impulse_rate, 0.2);
    /// assert_eq!(config.rules, Default::default());
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// the errors of [`GameConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that every value lies in its permitted range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let motion = &self.motion;
        ensure(
            motion.highest_acceleration > 0.0,
            "motion.highest_acceleration",
            "must be positive",
        )?;
        ensure(
            motion.friction_decay > 0.0 && motion.friction_decay < 1.0,
            "motion.friction_decay",
            "must lie strictly between 0 and 1",
        )?;
        ensure(
            motion.friction_limit >= 0.0,
            "motion.friction_limit",
            "must not be negative",
        )?;
        ensure(self.impulse_rate > 0.0, "impulse_rate", "must be positive")?;
        ensure(
            self.bounce_nudge.is_finite(),
            "bounce_nudge",
            "must be a finite number",
        )?;
        ensure(
            self.world_half_extents.cmpgt(Vec3::ZERO).all(),
            "world_half_extents",
            "every component must be positive",
        )?;
        let rules = &self.rules;
        ensure(rules.hunger_limit > 0.0, "rules.hunger_limit", "must be positive")?;
        ensure(
            rules.hunger_rate >= 0.0,
            "rules.hunger_rate",
            "must not be negative",
        )?;
        ensure(
            rules.coin_hunger_relief.is_finite() && rules.coin_hunger_relief >= 0.0,
            "rules.coin_hunger_relief",
            "must be finite and not negative",
        )?;
        ensure(
            rules.wander_period > 0,
            "rules.wander_period",
            "must be at least one frame",
        )?;
        ensure(
            rules.placement_range > 0,
            "rules.placement_range",
            "must be positive",
        )
    }

    /// The playable region described by [`GameConfig::world_half_extents`].
    #[must_use]
    pub fn world_boundary(&self) -> AxisAlignedBox {
        AxisAlignedBox::from_center(Vec3::ZERO, self.world_half_extents)
    }
}

fn ensure(condition: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}
