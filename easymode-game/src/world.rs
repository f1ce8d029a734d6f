//! Collaborator interfaces onto the host engine's mutable world state.
//!
//! The core never queries the engine for scene objects; the composition
//! layer resolves player, enemy, and hazard handles once and passes them
//! in. No ambient singletons.

use serde::{Deserialize, Serialize};

/// An item placed in the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
}

/// A charm granted as a quest reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charm {
    pub name: String,
    pub desc: String,
}

/// Mutable accessors onto the player entity.
pub trait PlayerHandle {
    fn health(&self) -> f32;
    fn set_health(&mut self, health: f32);
    fn damage(&self) -> f32;
    fn set_damage(&mut self, damage: f32);
    /// Current geo (currency) balance.
    fn geo(&self) -> i32;
    fn set_geo(&mut self, geo: i32);
    fn add_to_inventory(&mut self, item: InventoryItem);
    fn add_charm(&mut self, charm: Charm);
}

/// Stats of a single live enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyState {
    pub damage: f32,
}

/// Enumerable snapshot of the enemies currently alive in the scene.
///
/// Implementations must not hand out entities that have already been
/// destroyed; absence means "nothing to modify".
pub trait EnemyRegistry {
    fn live_enemies_mut(&mut self) -> Vec<&mut EnemyState>;
}

/// A hazard obstacle (spikes and the like) that easy mode removes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub name: String,
}

/// Enumerable snapshot of hazard objects with a remove operation.
pub trait HazardRegistry {
    /// Remove every hazard from the world, returning how many were removed.
    fn remove_all(&mut self) -> usize;
}

/// In-memory player used by headless play and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicPlayer {
    pub health: f32,
    pub damage: f32,
    pub geo: i32,
    pub inventory: Vec<InventoryItem>,
    pub charms: Vec<Charm>,
}

impl Default for BasicPlayer {
    fn default() -> Self {
        Self {
            health: 5.0,
            damage: 5.0,
            geo: 0,
            inventory: Vec::new(),
            charms: Vec::new(),
        }
    }
}

impl PlayerHandle for BasicPlayer {
    fn health(&self) -> f32 {
        self.health
    }

    fn set_health(&mut self, health: f32) {
        self.health = health;
    }

    fn damage(&self) -> f32 {
        self.damage
    }

    fn set_damage(&mut self, damage: f32) {
        self.damage = damage;
    }

    fn geo(&self) -> i32 {
        self.geo
    }

    fn set_geo(&mut self, geo: i32) {
        self.geo = geo;
    }

    fn add_to_inventory(&mut self, item: InventoryItem) {
        self.inventory.push(item);
    }

    fn add_charm(&mut self, charm: Charm) {
        self.charms.push(charm);
    }
}

/// Enemy roster where a destroyed entity leaves an empty slot behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyRoster {
    slots: Vec<Option<EnemyState>>,
}

impl EnemyRoster {
    /// Spawn an enemy and return its slot index.
    pub fn spawn(&mut self, damage: f32) -> usize {
        self.slots.push(Some(EnemyState { damage }));
        self.slots.len() - 1
    }

    /// Destroy the enemy at `index`. Out-of-range indices are ignored.
    pub fn destroy(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    pub fn live(&self) -> impl Iterator<Item = &EnemyState> {
        self.slots.iter().flatten()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live().count()
    }
}

impl EnemyRegistry for EnemyRoster {
    fn live_enemies_mut(&mut self) -> Vec<&mut EnemyState> {
        self.slots.iter_mut().flatten().collect()
    }
}

/// Hazard collection backing the reference registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardField {
    hazards: Vec<Hazard>,
}

impl HazardField {
    pub fn place(&mut self, name: impl Into<String>) {
        self.hazards.push(Hazard { name: name.into() });
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.hazards.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }
}

impl HazardRegistry for HazardField {
    fn remove_all(&mut self) -> usize {
        let removed = self.hazards.len();
        self.hazards.clear();
        removed
    }
}
