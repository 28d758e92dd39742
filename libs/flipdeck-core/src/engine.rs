//! Study session: tag filtering, weighted card selection, navigation.

use crate::algorithm::leitner::LeitnerPolicy;
use crate::algorithm::WeightingPolicy;
use crate::error::{Result, SessionError};
use crate::parser;
use crate::sampling::{shuffle_in_place, weighted_index};
use crate::types::{
    ActiveItem, CardPosition, CurrentCard, FilterMode, Group, ReviewState, SessionStats,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// A study session over one loaded deck.
///
/// Owns the groups and their review state, the tag filter, the flattened list
/// of active items and the cursor into it. Every operation takes `&mut self`
/// and runs to completion, so no caller can observe a half-updated session.
pub struct Session<R: Rng = StdRng> {
    groups: Vec<Group>,
    filter: FilterMode,
    active: Vec<ActiveItem>,
    cursor: Option<usize>,
    policy: Box<dyn WeightingPolicy>,
    rng: R,
}

impl Session<StdRng> {
    /// Empty session with the default Leitner policy and an entropy-seeded
    /// random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_policy(Box::new(LeitnerPolicy::default()), rng)
    }

    pub fn with_policy(policy: Box<dyn WeightingPolicy>, rng: R) -> Self {
        Self {
            groups: Vec::new(),
            filter: FilterMode::All,
            active: Vec::new(),
            cursor: None,
            policy,
            rng,
        }
    }

    /// Replace the deck. All review history is discarded and the cursor is
    /// cleared.
    pub fn load(&mut self, groups: Vec<Group>) {
        self.groups = groups;
        let initial = self.policy.initial_state();
        for group in &mut self.groups {
            for card in &mut group.cards {
                card.review = initial;
            }
        }

        self.recompute_active();
        self.cursor = None;
        debug!(
            groups = self.groups.len(),
            active = self.active.len(),
            "deck loaded"
        );
    }

    /// Parse `text` and load the result.
    pub fn load_text(&mut self, text: &str) {
        self.load(parser::parse(text));
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn active(&self) -> &[ActiveItem] {
        &self.active
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn filter(&self) -> &FilterMode {
        &self.filter
    }

    pub fn policy(&self) -> &dyn WeightingPolicy {
        self.policy.as_ref()
    }

    /// Distinct tags of the loaded deck.
    pub fn tags(&self) -> Vec<String> {
        parser::tags(&self.groups)
    }

    /// Review state of `groups[group_index].cards[item_index]`.
    pub fn review_state(&self, group_index: usize, item_index: usize) -> Result<ReviewState> {
        let group = self
            .groups
            .get(group_index)
            .ok_or(SessionError::InvalidIndex {
                index: group_index,
                len: self.groups.len(),
            })?;
        group
            .cards
            .get(item_index)
            .map(|c| c.review)
            .ok_or(SessionError::InvalidIndex {
                index: item_index,
                len: group.len(),
            })
    }

    /// Replace the tag filter and rebuild the active list.
    ///
    /// A cursor left past the end of the new list moves to the first item, or
    /// is cleared if nothing is active.
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
        self.recompute_active();
        debug!(filter = ?self.filter, active = self.active.len(), "filter changed");
    }

    /// Selection weight of every active item, in active-list order.
    pub fn weights(&self) -> Vec<f64> {
        self.active
            .iter()
            .map(|item| {
                let review = self.groups[item.group_index].cards[item.item_index].review;
                self.policy.weight(&review)
            })
            .collect()
    }

    /// Move the cursor to an active item drawn with probability proportional
    /// to its weight. Leaves the cursor untouched if nothing can be drawn.
    ///
    /// Fails with `EmptyDeck` or `EmptyFilterResult` when the active list is
    /// empty. Active items that all weigh zero are also reported as
    /// `EmptyFilterResult`: nothing under the current filter is selectable.
    pub fn pick_weighted(&mut self) -> Result<usize> {
        if self.active.is_empty() {
            return Err(self.empty_reason());
        }

        let weights = self.weights();
        // A policy that weighs every item at zero leaves nothing selectable.
        let idx = weighted_index(&weights, &mut self.rng).ok_or(SessionError::EmptyFilterResult)?;

        trace!(index = idx, weight = weights[idx], "picked card");
        self.cursor = Some(idx);
        Ok(idx)
    }

    /// Record a correct answer for the current card and pick the next one.
    ///
    /// Returns the answered card's updated review state.
    pub fn mark_correct(&mut self) -> Result<ReviewState> {
        self.answer(true)
    }

    /// Record a wrong answer for the current card and pick the next one.
    ///
    /// Returns the answered card's updated review state.
    pub fn mark_wrong(&mut self) -> Result<ReviewState> {
        self.answer(false)
    }

    fn answer(&mut self, correct: bool) -> Result<ReviewState> {
        let (group_index, item_index) = self.current_indices()?;
        let card = &mut self.groups[group_index].cards[item_index];

        card.review = if correct {
            self.policy.promote(&card.review)
        } else {
            self.policy.demote(&card.review)
        };
        let updated = card.review;

        if let Err(err) = self.pick_weighted() {
            debug!(%err, "no next card after answer");
        }
        Ok(updated)
    }

    /// Step through the active list, wrapping at both ends. Review state is
    /// not touched.
    ///
    /// Without a current card, stepping forward lands on the first item and
    /// stepping backward on the last.
    pub fn advance(&mut self, direction: isize) -> Result<usize> {
        let len = self.active.len();
        if len == 0 {
            return Err(self.empty_reason());
        }

        let start = match self.cursor {
            Some(c) => c as isize,
            None if direction > 0 => -1,
            None => 0,
        };
        // `start` is in -1..len, so reducing the step first keeps the sum in range.
        let step = direction.rem_euclid(len as isize);
        let next = (start + step).rem_euclid(len as isize) as usize;
        self.cursor = Some(next);
        Ok(next)
    }

    /// Point the cursor at a specific active item.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.active.len() {
            return Err(SessionError::InvalidIndex {
                index,
                len: self.active.len(),
            });
        }
        self.cursor = Some(index);
        Ok(())
    }

    /// Randomly reorder one group's cards, each keeping its review state.
    ///
    /// If the current card belonged to that group, the cursor moves to the
    /// group's new first card.
    pub fn shuffle_group(&mut self, group_index: usize) -> Result<()> {
        let len = self.groups.len();
        let group = self
            .groups
            .get_mut(group_index)
            .ok_or(SessionError::InvalidIndex {
                index: group_index,
                len,
            })?;

        let was_current = self
            .cursor
            .and_then(|c| self.active.get(c))
            .is_some_and(|item| item.group_index == group_index);

        shuffle_in_place(&mut group.cards, &mut self.rng);
        self.recompute_active();

        if was_current {
            self.cursor = self
                .active
                .iter()
                .position(|item| item.group_index == group_index && item.item_index == 0);
        }
        debug!(group = group_index, "group shuffled");
        Ok(())
    }

    /// Snapshot of the card under the cursor.
    pub fn current(&self) -> Option<CurrentCard> {
        let item = self.active.get(self.cursor?)?;
        let group = self.groups.get(item.group_index)?;
        let card = group.cards.get(item.item_index)?;

        Some(CurrentCard {
            group_tag: group.tag.clone(),
            item_value: card.value.clone(),
            position: CardPosition {
                item_index: item.item_index,
                group_item_count: group.len(),
            },
            review: card.review,
        })
    }

    /// `Ok` if there is a current card, otherwise why not.
    pub fn status(&self) -> Result<()> {
        self.current_indices().map(|_| ())
    }

    /// Review summary over the whole deck.
    pub fn stats(&self) -> SessionStats {
        let mut stats = SessionStats {
            active_items: self.active.len(),
            per_box: vec![0; usize::from(self.policy.box_count().max(1))],
            ..Default::default()
        };

        for card in self.groups.iter().flat_map(|g| &g.cards) {
            let review = &card.review;
            stats.total_items += 1;
            stats.correct += review.correct_count;
            stats.wrong += review.wrong_count;
            if !review.is_unseen() {
                stats.reviewed_items += 1;
            }
            let slot = usize::from(review.box_level.max(1) - 1).min(stats.per_box.len() - 1);
            stats.per_box[slot] += 1;
        }

        stats
    }

    fn current_indices(&self) -> Result<(usize, usize)> {
        let cursor = match self.cursor {
            Some(c) => c,
            None if self.active.is_empty() => return Err(self.empty_reason()),
            None => return Err(SessionError::NoCurrentCard),
        };
        let item = self.active.get(cursor).ok_or(SessionError::InvalidIndex {
            index: cursor,
            len: self.active.len(),
        })?;
        Ok((item.group_index, item.item_index))
    }

    fn empty_reason(&self) -> SessionError {
        if self.groups.is_empty() {
            SessionError::EmptyDeck
        } else {
            SessionError::EmptyFilterResult
        }
    }

    /// Rebuild the active list from scratch and keep the cursor in range.
    fn recompute_active(&mut self) {
        self.active = self
            .groups
            .iter()
            .enumerate()
            .filter(|(_, group)| self.filter.is_active(&group.tag))
            .flat_map(|(group_index, group)| {
                group
                    .cards
                    .iter()
                    .enumerate()
                    .map(move |(item_index, card)| ActiveItem {
                        group_index,
                        item_index,
                        value: card.value.clone(),
                    })
            })
            .collect();

        if let Some(c) = self.cursor {
            if c >= self.active.len() {
                self.cursor = if self.active.is_empty() { None } else { Some(0) };
            }
        }
    }
}
