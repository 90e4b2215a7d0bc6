use crate::domain::{
    card::{Card, CardId},
    id,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a list (a board column)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    const PREFIX: &'static str = "list";

    /// Generates a fresh identifier from the current time and a random suffix
    pub fn generate() -> Self {
        Self(id::generate(Self::PREFIX))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ListId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered column of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl List {
    /// Creates an empty list with a freshly generated id
    pub fn new(title: String) -> Self {
        Self::with_id(ListId::generate(), title)
    }

    pub fn with_id(id: ListId, title: String) -> Self {
        Self {
            id,
            title,
            cards: Vec::new(),
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Appends a card to the bottom of the list
    pub fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes a card by id, returning it if it was present
    pub fn take_card(&mut self, card_id: &CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| &c.id == card_id)?;
        Some(self.cards.remove(pos))
    }

    pub fn card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == card_id)
    }

    pub fn card_mut(&mut self, card_id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == card_id)
    }

    pub fn contains_card(&self, card_id: &CardId) -> bool {
        self.card(card_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_creation() {
        let list = List::new("Backlog".to_string());
        assert!(list.id.as_str().starts_with("list-"));
        assert_eq!(list.title, "Backlog");
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_and_take_card() {
        let mut list = List::with_id(ListId::from("l1"), "Backlog".to_string());
        let a = Card::with_id(CardId::from("a"), "A".to_string());
        let b = Card::with_id(CardId::from("b"), "B".to_string());
        list.push_card(a.clone());
        list.push_card(b.clone());

        assert_eq!(list.len(), 2);
        assert_eq!(list.take_card(&CardId::from("a")), Some(a));
        assert_eq!(list.cards, vec![b]);
        assert_eq!(list.take_card(&CardId::from("missing")), None);
    }

    #[test]
    fn test_card_mut_edits_in_place() {
        let mut list = List::with_id(ListId::from("l1"), "Backlog".to_string());
        list.push_card(Card::with_id(CardId::from("a"), "A".to_string()));

        list.card_mut(&CardId::from("a")).unwrap().set_text("A2".to_string());
        assert_eq!(list.card(&CardId::from("a")).unwrap().text, "A2");
        assert!(list.contains_card(&CardId::from("a")));
    }
}
