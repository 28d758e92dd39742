//! Core flipdeck library shared by the study front end and the deck server.
//!
//! Provides:
//! - Plain text deck parser (tagged groups, divider lines)
//! - Leitner weighting policy with configurable constants
//! - Study session: tag filter, weighted selection, navigation, shuffle
//! - Shared types (Group, Card, ReviewState, CurrentCard, etc.)

pub mod algorithm;
pub mod engine;
pub mod error;
pub mod parser;
pub mod sampling;
pub mod types;

pub use algorithm::leitner::LeitnerPolicy;
pub use algorithm::{get_policy, WeightingPolicy};
pub use engine::Session;
pub use error::{Result, SessionError};
pub use parser::parse;
pub use types::{
    ActiveItem, Card, CardPosition, CurrentCard, FilterMode, Group, ReviewState, SessionStats,
    DEFAULT_TAG,
};
