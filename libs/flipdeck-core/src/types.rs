//! Core types for the flipdeck study engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tag given to a group whose block carries no usable `#` line.
pub const DEFAULT_TAG: &str = "default";

/// Review statistics for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Leitner box, 1 (new or just missed) up to the policy's maximum.
    #[serde(rename = "box")]
    pub box_level: u8,
    pub correct_count: u32,
    pub wrong_count: u32,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            box_level: 1,
            correct_count: 0,
            wrong_count: 0,
        }
    }
}

impl ReviewState {
    /// True if the item has never been answered.
    pub fn is_unseen(&self) -> bool {
        self.correct_count == 0 && self.wrong_count == 0
    }
}

/// An item paired with its review state.
///
/// Keeping the two in one value means a reordering of a group can never
/// separate an item from its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub value: String,
    pub review: ReviewState,
}

impl Card {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            review: ReviewState::default(),
        }
    }
}

/// A tagged, ordered collection of cards parsed from one block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub tag: String,
    pub cards: Vec<Card>,
}

impl Group {
    pub fn new(tag: impl Into<String>, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tag: tag.into(),
            cards: items.into_iter().map(Card::new).collect(),
        }
    }

    /// Item values in order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Reset every card to a fresh review state.
    pub fn reset_reviews(&mut self) {
        for card in &mut self.cards {
            card.review = ReviewState::default();
        }
    }
}

/// Flattened view of one item that passes the current filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveItem {
    pub group_index: usize,
    pub item_index: usize,
    pub value: String,
}

/// Which groups take part in selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "tags")]
pub enum FilterMode {
    /// Every tag is active.
    #[default]
    All,
    /// Only the listed tags are active. An empty subset selects nothing.
    Subset(BTreeSet<String>),
}

impl FilterMode {
    /// Build a filter from a tag list, where an empty list means every tag.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            Self::All
        } else {
            Self::Subset(tags)
        }
    }

    pub fn is_active(&self, tag: &str) -> bool {
        match self {
            Self::All => true,
            Self::Subset(tags) => tags.contains(tag),
        }
    }
}

/// Position of the current card within its own group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPosition {
    pub item_index: usize,
    pub group_item_count: usize,
}

/// Read-only snapshot of the card on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentCard {
    pub group_tag: String,
    pub item_value: String,
    pub position: CardPosition,
    pub review: ReviewState,
}

/// Summary of the review activity in the loaded deck.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_items: usize,
    pub active_items: usize,
    /// Items answered at least once.
    pub reviewed_items: usize,
    pub correct: u32,
    pub wrong: u32,
    /// Item count per box, index 0 holding box 1.
    pub per_box: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_review_state() {
        let state = ReviewState::default();
        assert_eq!(state.box_level, 1);
        assert!(state.is_unseen());
    }

    #[test]
    fn empty_tag_list_means_all() {
        let filter = FilterMode::from_tags(Vec::<String>::new());
        assert_eq!(filter, FilterMode::All);
        assert!(filter.is_active("anything"));
    }

    #[test]
    fn empty_subset_selects_nothing() {
        let filter = FilterMode::Subset(BTreeSet::new());
        assert!(!filter.is_active("default"));
    }

    #[test]
    fn subset_membership() {
        let filter = FilterMode::from_tags(["fruit"]);
        assert!(filter.is_active("fruit"));
        assert!(!filter.is_active("veg"));
    }

    #[test]
    fn review_state_serializes_box_field() {
        let json = serde_json::to_value(ReviewState::default()).unwrap();
        assert_eq!(json["box"], 1);
        assert_eq!(json["correct_count"], 0);
    }
}
