use crate::domain::id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a card, unique across the whole board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    const PREFIX: &'static str = "card";

    /// Generates a fresh identifier from the current time and a random suffix
    pub fn generate() -> Self {
        Self(id::generate(Self::PREFIX))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single freeform-text item on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    /// Creates a card with a freshly generated id
    pub fn new(text: String) -> Self {
        Self::with_id(CardId::generate(), text)
    }

    pub fn with_id(id: CardId, text: String) -> Self {
        Self { id, text }
    }

    /// Replaces the card text
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }
}
