//! Test fixtures and factory functions for request bodies.

use serde_json::json;

pub const INDEX_HTML: &str = "<!doctype html><title>flipdeck</title>";
pub const APP_JS: &str = "console.log('flipdeck');";

/// A small two-group deck.
pub const FRUIT_VEG: &str = "#fruit\napple\nbanana\n\n#veg\ncarrot";

/// Generate deck text with `groups` tagged groups of `items` items each,
/// separated by divider lines.
pub fn sample_deck(groups: usize, items: usize) -> String {
    (0..groups)
        .map(|g| {
            let lines: Vec<String> = (0..items).map(|i| format!("item {g}.{i}")).collect();
            format!("#tag{g}\n{}", lines.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n-----\n\n")
}

/// Create a POST /deck body.
pub fn create_deck_request(text: &str) -> serde_json::Value {
    json!({ "text": text })
}
