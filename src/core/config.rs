//! Engine configuration.
//!
//! Callers describe the board they want with `EngineConfig`:
//! - `side`: grid side length
//! - `win_exponent`: tile exponent that counts as a win
//! - `max_exponent`: largest exponent a tile may reach
//! - `high_tile_probability`: odds of spawning a 4 instead of a 2
//! - `spawn_policy`: whether `move_cells` spawns after a no-op move
//! - `seed`: fixed seed for reproducible games
//!
//! Limits are validated once, in `validate`, before an engine is built.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Smallest accepted grid side.
pub const MIN_SIDE: usize = 2;

/// Largest accepted grid side.
pub const MAX_SIDE: usize = 8;

/// Hard ceiling on tile exponents (tile value 131072).
///
/// Matches the range of tile classes a renderer is expected to draw.
pub const MAX_EXPONENT: u8 = 17;

/// Default winning exponent (tile value 2048).
pub const DEFAULT_WIN_EXPONENT: u8 = 11;

/// Default probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_HIGH_TILE_PROBABILITY: f64 = 0.1;

/// Exponent of the common spawned tile (value 2).
pub const LOW_SPAWN_EXPONENT: u8 = 1;

/// Exponent of the rare spawned tile (value 4).
pub const HIGH_SPAWN_EXPONENT: u8 = 2;

/// When `move_cells(direction, true)` spawns a new tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Spawn only if the move changed the board.
    #[default]
    OnChange,
    /// Spawn whenever the caller asks, even after a move with no effect.
    Always,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid side length (`MIN_SIDE..=MAX_SIDE`).
    pub side: usize,

    /// A tile at or above this exponent wins the game.
    pub win_exponent: u8,

    /// Equal tiles at this exponent no longer merge.
    pub max_exponent: u8,

    /// Probability of spawning exponent 2 instead of exponent 1.
    pub high_tile_probability: f64,

    /// Spawn gating for `move_cells`.
    pub spawn_policy: SpawnPolicy,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            side: 4,
            win_exponent: DEFAULT_WIN_EXPONENT,
            max_exponent: MAX_EXPONENT,
            high_tile_probability: DEFAULT_HIGH_TILE_PROBABILITY,
            spawn_policy: SpawnPolicy::OnChange,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a default configuration for a board of the given side.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            ..Self::default()
        }
    }

    /// Set the winning exponent.
    #[must_use]
    pub fn with_win_exponent(mut self, exponent: u8) -> Self {
        self.win_exponent = exponent;
        self
    }

    /// Set the exponent ceiling.
    #[must_use]
    pub fn with_max_exponent(mut self, exponent: u8) -> Self {
        self.max_exponent = exponent;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_high_tile_probability(mut self, probability: f64) -> Self {
        self.high_tile_probability = probability;
        self
    }

    /// Set the spawn policy.
    #[must_use]
    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.spawn_policy = policy;
        self
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every limit, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.side) {
            return Err(EngineError::InvalidSize { side: self.side });
        }
        if self.max_exponent == 0 || self.max_exponent > MAX_EXPONENT {
            return Err(EngineError::InvalidMaxExponent(self.max_exponent));
        }
        if self.win_exponent == 0 || self.win_exponent > self.max_exponent {
            return Err(EngineError::InvalidWinExponent {
                exponent: self.win_exponent,
                max: self.max_exponent,
            });
        }
        if !(0.0..=1.0).contains(&self.high_tile_probability) {
            return Err(EngineError::InvalidSpawnProbability(self.high_tile_probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.side, 4);
        assert_eq!(config.win_exponent, 11);
        assert_eq!(config.max_exponent, 17);
        assert_eq!(config.spawn_policy, SpawnPolicy::OnChange);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new(6)
            .with_win_exponent(13)
            .with_max_exponent(15)
            .with_high_tile_probability(0.25)
            .with_spawn_policy(SpawnPolicy::Always)
            .with_seed(7);

        assert_eq!(config.side, 6);
        assert_eq!(config.win_exponent, 13);
        assert_eq!(config.max_exponent, 15);
        assert_eq!(config.high_tile_probability, 0.25);
        assert_eq!(config.spawn_policy, SpawnPolicy::Always);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_side_limits() {
        assert_eq!(
            EngineConfig::new(1).validate(),
            Err(EngineError::InvalidSize { side: 1 })
        );
        assert_eq!(
            EngineConfig::new(9).validate(),
            Err(EngineError::InvalidSize { side: 9 })
        );
        assert!(EngineConfig::new(2).validate().is_ok());
        assert!(EngineConfig::new(8).validate().is_ok());
    }

    #[test]
    fn test_exponent_limits() {
        assert_eq!(
            EngineConfig::default().with_max_exponent(18).validate(),
            Err(EngineError::InvalidMaxExponent(18))
        );
        assert_eq!(
            EngineConfig::default().with_max_exponent(10).validate(),
            Err(EngineError::InvalidWinExponent { exponent: 11, max: 10 })
        );
        assert_eq!(
            EngineConfig::default().with_win_exponent(0).validate(),
            Err(EngineError::InvalidWinExponent { exponent: 0, max: 17 })
        );
    }

    #[test]
    fn test_probability_limits() {
        assert!(EngineConfig::default().with_high_tile_probability(0.0).validate().is_ok());
        assert!(EngineConfig::default().with_high_tile_probability(1.0).validate().is_ok());
        assert!(matches!(
            EngineConfig::default().with_high_tile_probability(1.5).validate(),
            Err(EngineError::InvalidSpawnProbability(_))
        ));
        assert!(EngineConfig::default()
            .with_high_tile_probability(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = EngineConfig::new(5).with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
