//! Plain text parser for decks.
//!
//! # Format
//! ```text
//! #fruit
//! apple
//! banana
//!
//! ----------
//!
//! #veg
//! carrot
//! ```
//!
//! Blocks are separated by one or more blank lines. An optional first line
//! starting with `#` names the block's tag; every other non-empty line is an
//! item. Divider lines (`---`, `===`, `___`, `───` ...) are ignored.
//!
//! Parsing is total: any input yields a (possibly empty) list of groups.

use crate::types::{Group, DEFAULT_TAG};

/// Minimum run length for a line to count as a divider.
const MIN_DIVIDER_LEN: usize = 3;

/// Parse deck text into tagged groups.
pub fn parse(content: &str) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut parser = Parser::new();

    for line in content.lines() {
        parser.process_line(line, &mut groups);
    }

    parser.finalize(&mut groups);
    groups
}

/// Distinct tags in order of first appearance.
pub fn tags(groups: &[Group]) -> Vec<String> {
    let mut seen = Vec::new();
    for group in groups {
        if !seen.contains(&group.tag) {
            seen.push(group.tag.clone());
        }
    }
    seen
}

/// Total number of items across all groups.
pub fn item_count(groups: &[Group]) -> usize {
    groups.iter().map(Group::len).sum()
}

struct BlockBuilder {
    tag: Option<String>,
    items: Vec<String>,
}

impl BlockBuilder {
    fn new() -> Self {
        Self {
            tag: None,
            items: Vec::new(),
        }
    }

    fn is_untouched(&self) -> bool {
        self.tag.is_none() && self.items.is_empty()
    }

    fn build(self) -> Option<Group> {
        if self.items.is_empty() {
            return None;
        }

        let tag = self
            .tag
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TAG.to_string());

        Some(Group::new(tag, self.items))
    }
}

struct Parser {
    current: BlockBuilder,
}

impl Parser {
    fn new() -> Self {
        Self {
            current: BlockBuilder::new(),
        }
    }

    fn process_line(&mut self, line: &str, groups: &mut Vec<Group>) {
        match Self::parse_line(line) {
            LineType::Blank => self.flush(groups),
            LineType::Divider => {}
            LineType::Tag(tag) if self.current.is_untouched() => {
                self.current.tag = Some(tag.to_string());
            }
            // A `#` line after the first surviving line is ordinary content.
            LineType::Tag(_) => self.current.items.push(line.trim().to_string()),
            LineType::Item(text) => self.current.items.push(text.to_string()),
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            LineType::Blank
        } else if is_divider(trimmed) {
            LineType::Divider
        } else if let Some(rest) = trimmed.strip_prefix('#') {
            LineType::Tag(rest.trim())
        } else {
            LineType::Item(trimmed)
        }
    }

    fn flush(&mut self, groups: &mut Vec<Group>) {
        let block = std::mem::replace(&mut self.current, BlockBuilder::new());
        if let Some(group) = block.build() {
            groups.push(group);
        }
    }

    fn finalize(mut self, groups: &mut Vec<Group>) {
        self.flush(groups);
    }
}

enum LineType<'a> {
    Blank,
    Divider,
    Tag(&'a str),
    Item(&'a str),
}

/// A run of at least three copies of one divider character.
fn is_divider(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_divider_char(first) {
        return false;
    }

    let mut len = 1;
    for c in chars {
        if c != first {
            return false;
        }
        len += 1;
    }
    len >= MIN_DIVIDER_LEN
}

fn is_divider_char(c: char) -> bool {
    matches!(c, '-' | '_' | '=' | '\u{2500}'..='\u{257F}')
}
