use crate::{
    domain::{board::Board, card::CardId, list::ListId},
    error::Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutation request against the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardAction {
    AddList {
        title: String,
    },
    RenameList {
        list_id: ListId,
        title: String,
    },
    DeleteList {
        list_id: ListId,
    },
    AddCard {
        list_id: ListId,
        text: String,
    },
    EditCard {
        card_id: CardId,
        text: String,
    },
    DeleteCard {
        list_id: ListId,
        card_id: CardId,
    },
    MoveCard {
        card_id: CardId,
        source: ListId,
        target: ListId,
    },
    ClearBoard,
}

impl fmt::Display for BoardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddList { .. } => write!(f, "add list"),
            Self::RenameList { .. } => write!(f, "rename list"),
            Self::DeleteList { .. } => write!(f, "delete list"),
            Self::AddCard { .. } => write!(f, "add card"),
            Self::EditCard { .. } => write!(f, "edit card"),
            Self::DeleteCard { .. } => write!(f, "delete card"),
            Self::MoveCard { .. } => write!(f, "move card"),
            Self::ClearBoard => write!(f, "clear board"),
        }
    }
}

/// Applies an action to a board without touching the original.
///
/// - `Err` means the action was rejected by validation.
/// - `Ok(None)` means the action had nothing to do (stale ids, same-list move).
/// - `Ok(Some(next))` is the resulting board.
pub fn reduce(board: &Board, action: &BoardAction) -> Result<Option<Board>> {
    // Checked before cloning; a same-list move never changes anything.
    if let BoardAction::MoveCard { source, target, .. } = action {
        if source == target {
            return Ok(None);
        }
    }

    let mut next = board.clone();
    let changed = match action {
        BoardAction::AddList { title } => {
            next.add_list(title)?;
            true
        }
        BoardAction::RenameList { list_id, title } => next.rename_list(list_id, title)?,
        BoardAction::DeleteList { list_id } => next.delete_list(list_id),
        BoardAction::AddCard { list_id, text } => next.add_card(list_id, text)?.is_some(),
        BoardAction::EditCard { card_id, text } => next.edit_card(card_id, text)?,
        BoardAction::DeleteCard { list_id, card_id } => next.delete_card(list_id, card_id),
        BoardAction::MoveCard {
            card_id,
            source,
            target,
        } => next.move_card(card_id, source, target),
        BoardAction::ClearBoard => {
            next.clear();
            true
        }
    };

    Ok(changed.then_some(next))
}
