//! Session orchestration: startup detection, the difficulty prompt, and
//! routing NPC interactions into the quest flow.
//!
//! This is the only module that talks to engine collaborators or the `log`
//! facade; the state machines below it return plain outcome values.

use log::{info, warn};

use crate::constants::{
    KEY_BOOK_TITLE, KEY_MENU_NO, KEY_MENU_YES, KEY_MSG_BOOK_PURCHASED, KEY_MSG_QUEST_COMPLETED,
    KEY_MSG_QUEST_GIVEN, KEY_MSG_REWARD_RECEIVED, KEY_QUEST_DESC, KEY_QUEST_NAME,
    QUEST_BOOK_COST_GEO, REWARD_CHARM_DESC, REWARD_CHARM_NAME,
};
use crate::difficulty::{DifficultyConfig, DifficultyConfigError, DifficultyModifier};
use crate::flow::{InteractOutcome, PurchaseError, QuestFlow, QuestFlowConfig, QuestFlowState};
use crate::i18n::Localization;
use crate::quests::QuestBook;
use crate::world::{Charm, EnemyRegistry, HazardRegistry, PlayerHandle};

/// Host-engine facts about the running session.
pub trait SessionContext {
    /// Whether the session was started as a brand-new game.
    fn is_new_game(&self) -> bool;
}

/// The player's answer to the difficulty prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Yes,
    No,
}

/// Engine-side presenter for the binary difficulty prompt.
///
/// Implementations must resolve to exactly one choice exactly once per
/// call.
pub trait MenuPresenter {
    fn show_binary_choice(&mut self, yes_label: &str, no_label: &str) -> MenuChoice;
}

/// External actor whose player contact drives the quest flow.
///
/// Interactions arrive as explicit commands; the core holds no event
/// subscriptions of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The NPC selling the quest book.
    BookSeller,
    /// The NPC granting and accepting the quest.
    QuestGiver,
}

/// Wires startup detection, the difficulty modifier, and the quest flow
/// together. The quest system only comes alive once easy mode is chosen.
pub struct SessionController {
    loc: Localization,
    difficulty: DifficultyModifier,
    flow: Option<QuestFlow>,
}

impl SessionController {
    /// Build a controller around a validated localization table.
    ///
    /// # Errors
    ///
    /// Returns a [`DifficultyConfigError`] when the multipliers violate
    /// their bounds.
    pub fn new(loc: Localization, cfg: DifficultyConfig) -> Result<Self, DifficultyConfigError> {
        Ok(Self {
            loc,
            difficulty: DifficultyModifier::new(cfg)?,
            flow: None,
        })
    }

    /// Run startup. On a new game, present the difficulty prompt and act
    /// on the answer; otherwise do nothing.
    ///
    /// Returns the choice made, or `None` when no prompt was shown.
    pub fn start(
        &mut self,
        ctx: &dyn SessionContext,
        menu: &mut dyn MenuPresenter,
        player: Option<&mut dyn PlayerHandle>,
        enemies: &mut dyn EnemyRegistry,
        hazards: &mut dyn HazardRegistry,
    ) -> Option<MenuChoice> {
        if !ctx.is_new_game() {
            return None;
        }
        let yes = self.loc.text(KEY_MENU_YES).to_string();
        let no = self.loc.text(KEY_MENU_NO).to_string();
        let choice = menu.show_binary_choice(&yes, &no);
        match choice {
            MenuChoice::Yes => {
                if self.difficulty.apply(player, enemies, hazards) {
                    self.activate_quest_system();
                }
            }
            MenuChoice::No => {
                self.difficulty.revert(player, enemies);
            }
        }
        Some(choice)
    }

    fn activate_quest_system(&mut self) {
        // Quest progress survives later difficulty toggles.
        if self.flow.is_some() {
            return;
        }
        let cfg = QuestFlowConfig {
            book_title: self.loc.text(KEY_BOOK_TITLE).to_string(),
            book_cost_geo: QUEST_BOOK_COST_GEO,
            quest_name: self.loc.text(KEY_QUEST_NAME).to_string(),
            quest_description: self.loc.text(KEY_QUEST_DESC).to_string(),
            reward_charm: Charm {
                name: REWARD_CHARM_NAME.to_string(),
                desc: REWARD_CHARM_DESC.to_string(),
            },
        };
        self.flow = Some(QuestFlow::new(cfg));
    }

    /// Route an NPC interaction into the quest flow.
    ///
    /// Interactions while the quest system is inactive settle as no-ops.
    pub fn on_interact(&mut self, source: Interaction, player: &mut dyn PlayerHandle) {
        let Some(flow) = self.flow.as_mut() else {
            return;
        };
        match source {
            Interaction::BookSeller => match flow.try_purchase_book(player) {
                Ok(true) => info!("{}", self.loc.text(KEY_MSG_BOOK_PURCHASED)),
                Ok(false) => {}
                Err(PurchaseError::InsufficientGeo { cost, geo }) => {
                    info!("quest book not sold: need {cost} geo, carrying {geo}");
                }
            },
            Interaction::QuestGiver => match flow.on_quest_giver_interact(player) {
                InteractOutcome::Ignored => {}
                InteractOutcome::QuestGiven { .. } => {
                    info!("{}", self.loc.text(KEY_MSG_QUEST_GIVEN));
                }
                InteractOutcome::QuestCompleted { .. } => {
                    info!("{}", self.loc.text(KEY_MSG_QUEST_COMPLETED));
                    info!("{}", self.loc.text(KEY_MSG_REWARD_RECEIVED));
                }
                InteractOutcome::Fault(err) => {
                    warn!("quest book refused the operation: {err}");
                }
            },
        }
    }

    /// Whether easy mode is currently active (UI/debug display).
    #[must_use]
    pub const fn is_easy_mode(&self) -> bool {
        self.difficulty.is_enabled()
    }

    /// Current quest flow state, if the quest system is active.
    #[must_use]
    pub fn flow_state(&self) -> Option<QuestFlowState> {
        self.flow.as_ref().map(QuestFlow::state)
    }

    /// The quest book, once purchased.
    #[must_use]
    pub fn quest_book(&self) -> Option<&QuestBook> {
        self.flow.as_ref().and_then(QuestFlow::book)
    }

    #[must_use]
    pub const fn localization(&self) -> &Localization {
        &self.loc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BasicPlayer, EnemyRoster, HazardField};

    struct FixtureContext {
        new_game: bool,
    }

    impl SessionContext for FixtureContext {
        fn is_new_game(&self) -> bool {
            self.new_game
        }
    }

    struct FixtureMenu {
        choice: MenuChoice,
        shows: usize,
        labels: Option<(String, String)>,
    }

    impl FixtureMenu {
        fn answering(choice: MenuChoice) -> Self {
            Self {
                choice,
                shows: 0,
                labels: None,
            }
        }
    }

    impl MenuPresenter for FixtureMenu {
        fn show_binary_choice(&mut self, yes_label: &str, no_label: &str) -> MenuChoice {
            self.shows += 1;
            self.labels = Some((yes_label.to_string(), no_label.to_string()));
            self.choice
        }
    }

    fn controller(lang: &str) -> SessionController {
        let loc = Localization::load(lang).unwrap();
        SessionController::new(loc, DifficultyConfig::default()).unwrap()
    }

    fn world() -> (BasicPlayer, EnemyRoster, HazardField) {
        let mut roster = EnemyRoster::default();
        roster.spawn(8.0);
        let mut hazards = HazardField::default();
        hazards.place("spike-run");
        (BasicPlayer::default(), roster, hazards)
    }

    #[test]
    fn no_prompt_outside_a_new_game() {
        let mut controller = controller("en");
        let (mut player, mut roster, mut hazards) = world();
        let mut menu = FixtureMenu::answering(MenuChoice::Yes);

        let choice = controller.start(
            &FixtureContext { new_game: false },
            &mut menu,
            Some(&mut player),
            &mut roster,
            &mut hazards,
        );
        assert!(choice.is_none());
        assert_eq!(menu.shows, 0);
        assert!(!controller.is_easy_mode());
        assert!(controller.flow_state().is_none());
    }

    #[test]
    fn accepting_the_prompt_enables_easy_mode_and_quests() {
        let mut controller = controller("en");
        let (mut player, mut roster, mut hazards) = world();
        let mut menu = FixtureMenu::answering(MenuChoice::Yes);

        let choice = controller.start(
            &FixtureContext { new_game: true },
            &mut menu,
            Some(&mut player),
            &mut roster,
            &mut hazards,
        );
        assert_eq!(choice, Some(MenuChoice::Yes));
        assert_eq!(menu.shows, 1);
        assert_eq!(
            menu.labels,
            Some(("Yeah!".to_string(), "No".to_string()))
        );
        assert!(controller.is_easy_mode());
        assert!((player.health - 10.0).abs() < f32::EPSILON);
        assert_eq!(roster.live().next().unwrap().damage, 4.0);
        assert!(hazards.is_empty());
        assert_eq!(controller.flow_state(), Some(QuestFlowState::Locked));
    }

    #[test]
    fn declining_the_prompt_leaves_the_world_untouched() {
        let mut controller = controller("en");
        let (mut player, mut roster, mut hazards) = world();
        let mut menu = FixtureMenu::answering(MenuChoice::No);

        controller.start(
            &FixtureContext { new_game: true },
            &mut menu,
            Some(&mut player),
            &mut roster,
            &mut hazards,
        );
        assert!(!controller.is_easy_mode());
        assert!((player.health - 5.0).abs() < f32::EPSILON);
        assert_eq!(roster.live().next().unwrap().damage, 8.0);
        assert_eq!(hazards.len(), 1);
        assert!(controller.flow_state().is_none());
    }

    #[test]
    fn interactions_are_inert_until_easy_mode_is_chosen() {
        let mut controller = controller("en");
        let mut player = BasicPlayer {
            geo: 500,
            ..BasicPlayer::default()
        };

        controller.on_interact(Interaction::BookSeller, &mut player);
        controller.on_interact(Interaction::QuestGiver, &mut player);
        assert_eq!(player.geo, 500);
        assert!(controller.quest_book().is_none());
    }

    #[test]
    fn french_table_drives_menu_and_quest_strings() {
        let mut controller = controller("fr");
        let (mut player, mut roster, mut hazards) = world();
        let mut menu = FixtureMenu::answering(MenuChoice::Yes);

        controller.start(
            &FixtureContext { new_game: true },
            &mut menu,
            Some(&mut player),
            &mut roster,
            &mut hazards,
        );
        assert_eq!(
            menu.labels,
            Some(("Oui !".to_string(), "Non".to_string()))
        );

        player.geo = 50;
        controller.on_interact(Interaction::BookSeller, &mut player);
        controller.on_interact(Interaction::QuestGiver, &mut player);
        let book = controller.quest_book().unwrap();
        assert_eq!(book.title(), "Livre de Quêtes");
        assert_eq!(book.active()[0].name, "Explorer les Routes Oubliées");
    }
}
