//! Easy-mode stat adjustments applied to shared world state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{EASY_ENEMY_DAMAGE_MULT, EASY_PLAYER_DAMAGE_MULT, EASY_PLAYER_HEALTH_MULT};
use crate::world::{EnemyRegistry, HazardRegistry, PlayerHandle};

/// Multiplier set for the easy-mode difficulty adjustment.
///
/// Player multipliers are buffs (strictly above 1), the enemy damage
/// multiplier is a nerf (strictly between 0 and 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub player_health_mult: f32,
    pub player_damage_mult: f32,
    pub enemy_damage_mult: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            player_health_mult: EASY_PLAYER_HEALTH_MULT,
            player_damage_mult: EASY_PLAYER_DAMAGE_MULT,
            enemy_damage_mult: EASY_ENEMY_DAMAGE_MULT,
        }
    }
}

/// Errors raised when difficulty multipliers violate their invariants.
#[derive(Debug, Error, PartialEq)]
pub enum DifficultyConfigError {
    #[error("{field} must be greater than 1.0 (got {value:.2})")]
    BuffOutOfRange { field: &'static str, value: f32 },
    #[error("enemy_damage_mult must be within (0.0, 1.0) (got {value:.2})")]
    NerfOutOfRange { value: f32 },
}

impl DifficultyConfig {
    /// Check the multiplier invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`DifficultyConfigError`] describing the first violated
    /// bound.
    pub fn validate(&self) -> Result<(), DifficultyConfigError> {
        for (field, value) in [
            ("player_health_mult", self.player_health_mult),
            ("player_damage_mult", self.player_damage_mult),
        ] {
            if value <= 1.0 {
                return Err(DifficultyConfigError::BuffOutOfRange { field, value });
            }
        }
        if self.enemy_damage_mult <= 0.0 || self.enemy_damage_mult >= 1.0 {
            return Err(DifficultyConfigError::NerfOutOfRange {
                value: self.enemy_damage_mult,
            });
        }
        Ok(())
    }
}

/// Reversible multiplicative stat adjustment plus one-shot hazard removal.
///
/// `apply` and `revert` are guarded by the enabled flag, so repeated calls
/// never compound the multipliers. Hazard removal is deliberately one-way:
/// reverting easy mode does not put hazards back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyModifier {
    cfg: DifficultyConfig,
    enabled: bool,
}

impl DifficultyModifier {
    /// Build a modifier in the disabled state.
    ///
    /// # Errors
    ///
    /// Returns a [`DifficultyConfigError`] when the multipliers violate
    /// their bounds.
    pub fn new(cfg: DifficultyConfig) -> Result<Self, DifficultyConfigError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            enabled: false,
        })
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn config(&self) -> &DifficultyConfig {
        &self.cfg
    }

    /// Scale player and enemy stats and clear every hazard in the world.
    ///
    /// A missing player, or enemies already destroyed, are skipped
    /// silently. Returns `true` when the toggle actually flipped; calling
    /// while already enabled is a no-op.
    pub fn apply(
        &mut self,
        player: Option<&mut dyn PlayerHandle>,
        enemies: &mut dyn EnemyRegistry,
        hazards: &mut dyn HazardRegistry,
    ) -> bool {
        if self.enabled {
            return false;
        }
        if let Some(player) = player {
            player.set_health(player.health() * self.cfg.player_health_mult);
            player.set_damage(player.damage() * self.cfg.player_damage_mult);
        }
        for enemy in enemies.live_enemies_mut() {
            enemy.damage *= self.cfg.enemy_damage_mult;
        }
        // One-way environment edit: revert never restores these.
        hazards.remove_all();
        self.enabled = true;
        true
    }

    /// Undo the stat scaling applied by [`Self::apply`].
    ///
    /// Exact inverse of the multipliers used on apply, assuming no other
    /// code path touched the fields in between. Returns `true` when the
    /// toggle actually flipped; calling while disabled is a no-op.
    pub fn revert(
        &mut self,
        player: Option<&mut dyn PlayerHandle>,
        enemies: &mut dyn EnemyRegistry,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        if let Some(player) = player {
            player.set_health(player.health() / self.cfg.player_health_mult);
            player.set_damage(player.damage() / self.cfg.player_damage_mult);
        }
        for enemy in enemies.live_enemies_mut() {
            enemy.damage /= self.cfg.enemy_damage_mult;
        }
        self.enabled = false;
        true
    }
}
