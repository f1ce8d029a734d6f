//! Easy Mode gameplay layer
//!
//! Platform-agnostic logic for an action-platformer mod: a new-game
//! difficulty toggle plus a purchasable quest book with a single
//! grant/complete/reward cycle. Engine concerns (menu widgets, scene
//! object lookup, asset loading) stay behind narrow collaborator traits
//! supplied by the host integration.

pub mod constants;
pub mod difficulty;
pub mod flow;
pub mod i18n;
pub mod quests;
pub mod session;
pub mod world;

// Re-export commonly used types
pub use difficulty::{DifficultyConfig, DifficultyConfigError, DifficultyModifier};
pub use flow::{InteractOutcome, PurchaseError, QuestFlow, QuestFlowConfig, QuestFlowState};
pub use i18n::{Localization, LocalizationError, SUPPORTED_LANGS};
pub use quests::{Quest, QuestBook, QuestBookError};
pub use session::{Interaction, MenuChoice, MenuPresenter, SessionContext, SessionController};
pub use world::{
    BasicPlayer, Charm, EnemyRegistry, EnemyRoster, EnemyState, Hazard, HazardField,
    HazardRegistry, InventoryItem, PlayerHandle,
};
