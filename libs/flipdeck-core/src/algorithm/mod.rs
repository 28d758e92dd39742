//! Review weighting policies.

pub mod leitner;

use crate::types::ReviewState;

/// Trait for policies that turn review history into selection weights.
pub trait WeightingPolicy: Send + Sync {
    /// Policy identifier.
    fn name(&self) -> &'static str;

    /// Relative likelihood of selecting an item with this state.
    fn weight(&self, state: &ReviewState) -> f64;

    /// State after a correct answer.
    fn promote(&self, state: &ReviewState) -> ReviewState;

    /// State after a wrong answer.
    fn demote(&self, state: &ReviewState) -> ReviewState;

    /// State for an item that has just been loaded.
    fn initial_state(&self) -> ReviewState {
        ReviewState::default()
    }

    /// Number of boxes an item can move through.
    fn box_count(&self) -> u8;
}

/// Get policy by name.
pub fn get_policy(name: &str) -> Option<Box<dyn WeightingPolicy>> {
    match name {
        "leitner" => Some(Box::new(leitner::LeitnerPolicy::default())),
        _ => None,
    }
}
