//! Quest book: active and completed quest tracking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, described unit of optional content.
///
/// Identity is the name. A quest never mutates after creation; it moves
/// between the active and completed lists when turned in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub name: String,
    pub description: String,
}

impl Quest {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Errors raised by quest book bookkeeping.
///
/// Both variants indicate a data-consistency fault. Callers report them
/// and carry on; the book itself is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestBookError {
    #[error("quest \"{name}\" is already tracked")]
    DuplicateQuest { name: String },
    #[error("no active quest named \"{name}\"")]
    QuestNotFound { name: String },
}

/// The purchasable container tracking active and completed quests.
///
/// A quest lives in exactly one of the two lists; both keep insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestBook {
    title: String,
    active: Vec<Quest>,
    completed: Vec<Quest>,
}

impl QuestBook {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            active: Vec::new(),
            completed: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn active(&self) -> &[Quest] {
        &self.active
    }

    #[must_use]
    pub fn completed(&self) -> &[Quest] {
        &self.completed
    }

    /// Whether a quest with this exact name sits in either list.
    #[must_use]
    pub fn is_tracked(&self, name: &str) -> bool {
        self.active
            .iter()
            .chain(&self.completed)
            .any(|quest| quest.name == name)
    }

    /// Append a quest to the active list.
    ///
    /// # Errors
    ///
    /// [`QuestBookError::DuplicateQuest`] when a quest with the same name
    /// is already tracked, active or completed. Nothing is mutated.
    pub fn add_quest(&mut self, quest: Quest) -> Result<(), QuestBookError> {
        if self.is_tracked(&quest.name) {
            return Err(QuestBookError::DuplicateQuest { name: quest.name });
        }
        self.active.push(quest);
        Ok(())
    }

    /// Move the named quest from active to completed.
    ///
    /// Lookup is an exact name match; no partial or case-insensitive
    /// matching.
    ///
    /// # Errors
    ///
    /// [`QuestBookError::QuestNotFound`] when no active quest carries the
    /// name. Nothing is mutated.
    pub fn complete_quest(&mut self, name: &str) -> Result<(), QuestBookError> {
        let index = self
            .active
            .iter()
            .position(|quest| quest.name == name)
            .ok_or_else(|| QuestBookError::QuestNotFound {
                name: name.to_string(),
            })?;
        let quest = self.active.remove(index);
        self.completed.push(quest);
        Ok(())
    }
}
