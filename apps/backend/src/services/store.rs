//! In-memory deck store backing share links.
//!
//! Decks live only as long as the process; a restart empties the store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::RwLock;

/// URL-safe characters used for deck ids.
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// A stored deck text.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDeck {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Key-value store of raw deck text keyed by short random ids.
pub struct DeckStore {
    decks: RwLock<HashMap<String, StoredDeck>>,
    id_length: usize,
}

impl DeckStore {
    pub fn new(id_length: usize) -> Self {
        Self {
            decks: RwLock::new(HashMap::new()),
            id_length,
        }
    }

    /// Store `text` under a fresh id and return the id.
    pub async fn put(&self, text: String) -> String {
        let mut decks = self.decks.write().await;

        let mut id = generate_id(self.id_length);
        while decks.contains_key(&id) {
            id = generate_id(self.id_length);
        }

        decks.insert(
            id.clone(),
            StoredDeck {
                text,
                created_at: Utc::now(),
            },
        );
        id
    }

    /// Look up a deck by id.
    pub async fn get(&self, id: &str) -> Option<StoredDeck> {
        self.decks.read().await.get(id).cloned()
    }

    /// Number of stored decks.
    pub async fn len(&self) -> usize {
        self.decks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Random id of `len` characters from the URL-safe alphabet.
pub fn generate_id(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
