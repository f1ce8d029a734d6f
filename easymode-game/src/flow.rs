//! Quest flow: purchase, grant, and completion state machine.
//!
//! Every transition is a guarded check-then-set. Interaction events
//! arriving out of order, or delivered twice before state settles, resolve
//! as no-ops.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{QUEST_BOOK_COST_GEO, REWARD_CHARM_DESC, REWARD_CHARM_NAME};
use crate::quests::{Quest, QuestBook, QuestBookError};
use crate::world::{Charm, InventoryItem, PlayerHandle};

/// Progress of the quest mini-system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestFlowState {
    /// Quest book not yet purchased.
    Locked,
    /// Book owned, quest not yet given.
    Unlocked,
    /// Quest active, turn-in pending.
    QuestOffered,
    /// Quest turned in and reward issued. Terminal for the single-quest
    /// scope; a multi-quest design would loop back to `Unlocked`.
    QuestCompleted,
}

/// Static definition of the flow: book identity and cost, the single
/// modeled quest, and the reward charm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestFlowConfig {
    pub book_title: String,
    pub book_cost_geo: i32,
    pub quest_name: String,
    pub quest_description: String,
    pub reward_charm: Charm,
}

impl Default for QuestFlowConfig {
    fn default() -> Self {
        Self {
            book_title: "Quest Book".to_string(),
            book_cost_geo: QUEST_BOOK_COST_GEO,
            quest_name: "Explore the Forgotten Crossroads".to_string(),
            quest_description: "Find and explore all the hidden areas in the Forgotten Crossroads."
                .to_string(),
            reward_charm: Charm {
                name: REWARD_CHARM_NAME.to_string(),
                desc: REWARD_CHARM_DESC.to_string(),
            },
        }
    }
}

/// Error raised when the player cannot afford the quest book.
///
/// Recovered locally: no geo is deducted and the flow stays locked, so
/// retrying after earning more geo is always safe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("not enough geo for the quest book: need {cost}, carrying {geo}")]
    InsufficientGeo { cost: i32, geo: i32 },
}

/// Observable result of a quest-giver interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractOutcome {
    /// The interaction arrived in a state with nothing to do.
    Ignored,
    /// The quest was granted and added to the book.
    QuestGiven { name: String },
    /// The quest was turned in and the reward issued.
    QuestCompleted { name: String, reward: Charm },
    /// Book bookkeeping refused the operation; state is unchanged.
    Fault(QuestBookError),
}

/// State machine coordinating book purchase, quest grant, and turn-in.
///
/// Owns the [`QuestBook`] once purchased. Holds no event subscriptions;
/// the session layer feeds interactions in as explicit calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestFlow {
    cfg: QuestFlowConfig,
    state: QuestFlowState,
    book: Option<QuestBook>,
}

impl QuestFlow {
    #[must_use]
    pub const fn new(cfg: QuestFlowConfig) -> Self {
        Self {
            cfg,
            state: QuestFlowState::Locked,
            book: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> QuestFlowState {
        self.state
    }

    #[must_use]
    pub const fn book(&self) -> Option<&QuestBook> {
        self.book.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &QuestFlowConfig {
        &self.cfg
    }

    /// Attempt to sell the quest book to the interacting player.
    ///
    /// Succeeds at most once. On success the cost is deducted, the book is
    /// created and added to the player's inventory, and the flow unlocks.
    /// Later calls while the book is owned return `Ok(false)` without
    /// charging again.
    ///
    /// # Errors
    ///
    /// [`PurchaseError::InsufficientGeo`] when the player cannot cover the
    /// cost. No geo is deducted and the flow stays locked.
    pub fn try_purchase_book(
        &mut self,
        player: &mut dyn PlayerHandle,
    ) -> Result<bool, PurchaseError> {
        if self.state != QuestFlowState::Locked {
            return Ok(false);
        }
        let geo = player.geo();
        let cost = self.cfg.book_cost_geo;
        if geo < cost {
            return Err(PurchaseError::InsufficientGeo { cost, geo });
        }
        player.set_geo(geo - cost);
        self.book = Some(QuestBook::new(self.cfg.book_title.clone()));
        player.add_to_inventory(InventoryItem {
            name: self.cfg.book_title.clone(),
        });
        self.state = QuestFlowState::Unlocked;
        Ok(true)
    }

    /// Handle contact with the quest giver.
    ///
    /// The first contact after the book is owned grants the quest; the
    /// next one is the turn-in, which completes the quest and issues the
    /// reward charm. Contact before the book is purchased, or after the
    /// reward went out, settles as [`InteractOutcome::Ignored`].
    pub fn on_quest_giver_interact(&mut self, player: &mut dyn PlayerHandle) -> InteractOutcome {
        match self.state {
            QuestFlowState::Locked | QuestFlowState::QuestCompleted => InteractOutcome::Ignored,
            QuestFlowState::Unlocked => self.grant_quest(),
            QuestFlowState::QuestOffered => self.turn_in_quest(player),
        }
    }

    fn grant_quest(&mut self) -> InteractOutcome {
        let Some(book) = self.book.as_mut() else {
            return InteractOutcome::Ignored;
        };
        let quest = Quest::new(self.cfg.quest_name.clone(), self.cfg.quest_description.clone());
        let name = quest.name.clone();
        match book.add_quest(quest) {
            Ok(()) => {
                self.state = QuestFlowState::QuestOffered;
                InteractOutcome::QuestGiven { name }
            }
            Err(err) => InteractOutcome::Fault(err),
        }
    }

    fn turn_in_quest(&mut self, player: &mut dyn PlayerHandle) -> InteractOutcome {
        let Some(book) = self.book.as_mut() else {
            return InteractOutcome::Ignored;
        };
        match book.complete_quest(&self.cfg.quest_name) {
            Ok(()) => {
                let reward = self.cfg.reward_charm.clone();
                player.add_charm(reward.clone());
                self.state = QuestFlowState::QuestCompleted;
                InteractOutcome::QuestCompleted {
                    name: self.cfg.quest_name.clone(),
                    reward,
                }
            }
            Err(err) => InteractOutcome::Fault(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::BasicPlayer;

    fn flow() -> QuestFlow {
        QuestFlow::new(QuestFlowConfig::default())
    }

    fn player_with_geo(geo: i32) -> BasicPlayer {
        BasicPlayer {
            geo,
            ..BasicPlayer::default()
        }
    }

    #[test]
    fn purchase_requires_full_cost() {
        let mut flow = flow();
        let mut player = player_with_geo(49);

        let err = flow.try_purchase_book(&mut player).unwrap_err();
        assert_eq!(err, PurchaseError::InsufficientGeo { cost: 50, geo: 49 });
        assert_eq!(player.geo, 49);
        assert_eq!(flow.state(), QuestFlowState::Locked);
        assert!(flow.book().is_none());

        // Retrying before affording it stays safe.
        assert!(flow.try_purchase_book(&mut player).is_err());
        assert_eq!(player.geo, 49);
    }

    #[test]
    fn purchase_at_exact_cost_unlocks_the_flow() {
        let mut flow = flow();
        let mut player = player_with_geo(50);

        assert_eq!(flow.try_purchase_book(&mut player), Ok(true));
        assert_eq!(player.geo, 0);
        assert_eq!(flow.state(), QuestFlowState::Unlocked);
        assert_eq!(flow.book().unwrap().title(), "Quest Book");
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.inventory[0].name, "Quest Book");
    }

    #[test]
    fn repeat_purchase_never_double_charges() {
        let mut flow = flow();
        let mut player = player_with_geo(50);
        flow.try_purchase_book(&mut player).unwrap();

        player.geo = 100;
        assert_eq!(flow.try_purchase_book(&mut player), Ok(false));
        assert_eq!(player.geo, 100);
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn interact_before_unlock_never_touches_anything() {
        let mut flow = flow();
        let mut player = player_with_geo(0);

        assert_eq!(
            flow.on_quest_giver_interact(&mut player),
            InteractOutcome::Ignored
        );
        assert_eq!(flow.state(), QuestFlowState::Locked);
        assert!(flow.book().is_none());
        assert!(player.charms.is_empty());
    }

    #[test]
    fn full_happy_path_grants_completes_and_rewards() {
        let mut flow = flow();
        let mut player = player_with_geo(50);

        flow.try_purchase_book(&mut player).unwrap();

        let outcome = flow.on_quest_giver_interact(&mut player);
        assert_eq!(
            outcome,
            InteractOutcome::QuestGiven {
                name: "Explore the Forgotten Crossroads".to_string()
            }
        );
        assert_eq!(flow.state(), QuestFlowState::QuestOffered);
        let book = flow.book().unwrap();
        assert_eq!(book.active().len(), 1);
        assert_eq!(book.active()[0].name, "Explore the Forgotten Crossroads");
        assert!(book.completed().is_empty());

        let outcome = flow.on_quest_giver_interact(&mut player);
        let InteractOutcome::QuestCompleted { name, reward } = outcome else {
            panic!("expected turn-in, got {outcome:?}");
        };
        assert_eq!(name, "Explore the Forgotten Crossroads");
        assert_eq!(reward.name, "Optional Charm");
        assert_eq!(flow.state(), QuestFlowState::QuestCompleted);
        let book = flow.book().unwrap();
        assert!(book.active().is_empty());
        assert_eq!(book.completed().len(), 1);
        assert_eq!(player.charms.len(), 1);
    }

    #[test]
    fn completed_flow_ignores_further_contact() {
        let mut flow = flow();
        let mut player = player_with_geo(50);
        flow.try_purchase_book(&mut player).unwrap();
        flow.on_quest_giver_interact(&mut player);
        flow.on_quest_giver_interact(&mut player);

        for _ in 0..3 {
            assert_eq!(
                flow.on_quest_giver_interact(&mut player),
                InteractOutcome::Ignored
            );
        }
        assert_eq!(player.charms.len(), 1);
        assert_eq!(flow.book().unwrap().completed().len(), 1);
    }
}
