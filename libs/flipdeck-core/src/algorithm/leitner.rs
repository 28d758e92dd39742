//! Continuous Leitner weighting.
//!
//! Items sit in boxes `1..=max_box`. A correct answer moves an item up one
//! box, a wrong answer sends it straight back to box 1. Selection weight is
//! `1 / box^exponent`, so with the default exponent of 2 an item in box 5 is
//! drawn 25 times less often than one in box 1. Items that have never been
//! answered get an extra `novelty_bonus` multiplier.

use super::WeightingPolicy;
use crate::types::ReviewState;
use serde::{Deserialize, Serialize};

/// Leitner policy with configurable parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeitnerPolicy {
    pub max_box: u8,
    pub exponent: f64,
    pub novelty_bonus: f64,
}

impl Default for LeitnerPolicy {
    fn default() -> Self {
        Self {
            max_box: 5,
            exponent: 2.0,
            novelty_bonus: 1.4,
        }
    }
}

impl WeightingPolicy for LeitnerPolicy {
    fn name(&self) -> &'static str {
        "leitner"
    }

    fn weight(&self, state: &ReviewState) -> f64 {
        let level = f64::from(state.box_level.max(1));
        let base = 1.0 / level.powf(self.exponent);

        if state.is_unseen() {
            base * self.novelty_bonus
        } else {
            base
        }
    }

    fn promote(&self, state: &ReviewState) -> ReviewState {
        ReviewState {
            box_level: state.box_level.saturating_add(1).min(self.box_count()),
            correct_count: state.correct_count.saturating_add(1),
            wrong_count: state.wrong_count,
        }
    }

    fn demote(&self, state: &ReviewState) -> ReviewState {
        ReviewState {
            box_level: 1,
            correct_count: state.correct_count,
            wrong_count: state.wrong_count.saturating_add(1),
        }
    }

    fn box_count(&self) -> u8 {
        self.max_box.max(1)
    }
}
