//! Centralized tuning constants and string keys for the Easy Mode mod.
//!
//! Keeping them together ensures that balance can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! assets.

// Difficulty tuning --------------------------------------------------------
pub(crate) const EASY_PLAYER_HEALTH_MULT: f32 = 2.0;
pub(crate) const EASY_PLAYER_DAMAGE_MULT: f32 = 2.0;
pub(crate) const EASY_ENEMY_DAMAGE_MULT: f32 = 0.5;

// Quest book tuning --------------------------------------------------------
pub(crate) const QUEST_BOOK_COST_GEO: i32 = 50;

// Reward charm (kept un-localized, as shipped) ------------------------------
pub(crate) const REWARD_CHARM_NAME: &str = "Optional Charm";
pub(crate) const REWARD_CHARM_DESC: &str = "A charm that is not essential to complete the game.";

// Localization keys --------------------------------------------------------
pub(crate) const KEY_MENU_YES: &str = "menu.easy-mode.yes";
pub(crate) const KEY_MENU_NO: &str = "menu.easy-mode.no";
pub(crate) const KEY_BOOK_TITLE: &str = "book.title";
pub(crate) const KEY_MSG_BOOK_PURCHASED: &str = "msg.book-purchased";
pub(crate) const KEY_MSG_QUEST_GIVEN: &str = "msg.quest-given";
pub(crate) const KEY_MSG_QUEST_COMPLETED: &str = "msg.quest-completed";
pub(crate) const KEY_MSG_REWARD_RECEIVED: &str = "msg.reward-received";
pub(crate) const KEY_QUEST_NAME: &str = "quest.crossroads.name";
pub(crate) const KEY_QUEST_DESC: &str = "quest.crossroads.desc";
