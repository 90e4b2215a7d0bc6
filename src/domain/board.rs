use crate::{
    config::{self, SeedConfig},
    domain::{
        card::{Card, CardId},
        list::{List, ListId},
    },
    error::{KanbanError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const WELCOME_CARD_ID: &str = "card-welcome";

/// Kanban board state: an ordered sequence of lists.
///
/// Serializes as a bare JSON array of lists, which is the persisted layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    lists: Vec<List>,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(lists: Vec<List>) -> Self {
        Self { lists }
    }

    /// Builds the starting board from a seed.
    ///
    /// Seed ids are derived from titles rather than generated, so two seeded
    /// boards with the same seed are equal.
    pub fn seeded(seed: &SeedConfig) -> Self {
        let mut lists: Vec<List> = seed
            .lists
            .iter()
            .enumerate()
            .map(|(index, title)| {
                List::with_id(
                    ListId::from(config::seed_list_id(index, title)),
                    title.trim().to_string(),
                )
            })
            .collect();

        if let (Some(text), Some(first)) = (&seed.welcome_card, lists.first_mut()) {
            first.push_card(Card::with_id(
                CardId::from(WELCOME_CARD_ID),
                text.trim().to_string(),
            ));
        }

        Self { lists }
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn list(&self, list_id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == list_id)
    }

    fn list_mut(&mut self, list_id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| &l.id == list_id)
    }

    /// Finds a card anywhere on the board, along with the list holding it
    pub fn find_card(&self, card_id: &CardId) -> Option<(&List, &Card)> {
        self.lists
            .iter()
            .find_map(|list| list.card(card_id).map(|card| (list, card)))
    }

    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Total number of cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(List::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Appends a new empty list and returns its id
    pub fn add_list(&mut self, title: &str) -> Result<ListId> {
        let title = required(title, "List title", "Please enter a list title.")?;
        let list = List::new(title);
        let id = list.id.clone();
        self.lists.push(list);
        Ok(id)
    }

    /// Renames a list. Returns false when the list does not exist or
    /// already has that title.
    pub fn rename_list(&mut self, list_id: &ListId, title: &str) -> Result<bool> {
        let title = required(title, "List title", "Please enter a list title.")?;
        match self.list_mut(list_id) {
            Some(list) if list.title != title => {
                list.set_title(title);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Removes a list together with all of its cards
    pub fn delete_list(&mut self, list_id: &ListId) -> bool {
        let before = self.lists.len();
        self.lists.retain(|l| &l.id != list_id);
        self.lists.len() != before
    }

    /// Appends a new card to a list. Returns `None` when the list does not exist.
    pub fn add_card(&mut self, list_id: &ListId, text: &str) -> Result<Option<CardId>> {
        let text = required(text, "Card text", "Please enter some text for the card.")?;
        let Some(list) = self.list_mut(list_id) else {
            return Ok(None);
        };

        let card = Card::new(text);
        let id = card.id.clone();
        list.push_card(card);
        Ok(Some(id))
    }

    /// Replaces the text of a card wherever it lives on the board.
    /// Returns false when the card is missing or the text is unchanged.
    pub fn edit_card(&mut self, card_id: &CardId, text: &str) -> Result<bool> {
        let text = required(text, "Card text", "Card text cannot be empty.")?;
        match self.lists.iter_mut().find_map(|l| l.card_mut(card_id)) {
            Some(card) if card.text != text => {
                card.set_text(text);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn delete_card(&mut self, list_id: &ListId, card_id: &CardId) -> bool {
        self.list_mut(list_id)
            .and_then(|list| list.take_card(card_id))
            .is_some()
    }

    /// Moves a card to the end of another list.
    ///
    /// Returns false without touching the board when source and target are
    /// the same, when either list is missing, or when the card is not in the
    /// source list.
    pub fn move_card(&mut self, card_id: &CardId, source: &ListId, target: &ListId) -> bool {
        if source == target {
            return false;
        }

        let Some(target_idx) = self.lists.iter().position(|l| &l.id == target) else {
            return false;
        };
        let Some(card) = self.list_mut(source).and_then(|l| l.take_card(card_id)) else {
            return false;
        };

        self.lists[target_idx].push_card(card);
        true
    }

    /// Removes every list and card
    pub fn clear(&mut self) {
        self.lists.clear();
    }

    /// Checks structural invariants of a deserialized board.
    ///
    /// Ids and titles must be non-blank, list ids unique, and card ids
    /// unique across the whole board.
    pub fn validate(&self) -> Result<()> {
        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for list in &self.lists {
            if list.id.as_str().trim().is_empty() {
                return Err(KanbanError::InvalidBoard("list with empty id".to_string()));
            }
            if list.title.trim().is_empty() {
                return Err(KanbanError::InvalidBoard(format!(
                    "list '{}' has an empty title",
                    list.id
                )));
            }
            if !list_ids.insert(list.id.as_str()) {
                return Err(KanbanError::InvalidBoard(format!(
                    "duplicate list id '{}'",
                    list.id
                )));
            }

            for card in &list.cards {
                if card.id.as_str().trim().is_empty() {
                    return Err(KanbanError::InvalidBoard(format!(
                        "card with empty id in list '{}'",
                        list.id
                    )));
                }
                if card.text.trim().is_empty() {
                    return Err(KanbanError::InvalidBoard(format!(
                        "card '{}' has empty text",
                        card.id
                    )));
                }
                if !card_ids.insert(card.id.as_str()) {
                    return Err(KanbanError::InvalidBoard(format!(
                        "duplicate card id '{}'",
                        card.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Parses and validates the persisted JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let board: Board = serde_json::from_str(json)?;
        board.validate()?;
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Trims input and rejects it when nothing is left
fn required(value: &str, field: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(KanbanError::blank(field, message));
    }
    Ok(trimmed.to_string())
}
