//! Drag-and-drop as an explicit state machine.
//!
//! UI layers translate their native drag events into [`DragEvent`]s and feed
//! them to [`DragState::handle`]. A drop onto a list other than the one the
//! card came from yields the [`BoardAction::MoveCard`] to dispatch.

use crate::domain::{action::BoardAction, card::CardId, list::ListId};

/// Input to the drag state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start { card_id: CardId, list_id: ListId },
    Enter { list_id: ListId },
    Leave { list_id: ListId },
    Drop { list_id: ListId },
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        card_id: CardId,
        source_list: ListId,
    },
    /// Hovering over a list other than the source; only drives highlighting
    DragOverTarget {
        card_id: CardId,
        source_list: ListId,
        target_list: ListId,
    },
}

impl DragState {
    /// Advances the machine, returning the next state and the move to
    /// perform, if the event completed one.
    pub fn handle(self, event: DragEvent) -> (DragState, Option<BoardAction>) {
        match (self, event) {
            (_, DragEvent::Start { card_id, list_id }) => (
                DragState::Dragging {
                    card_id,
                    source_list: list_id,
                },
                None,
            ),

            (DragState::Idle, _) => (DragState::Idle, None),

            (
                DragState::Dragging {
                    card_id,
                    source_list,
                }
                | DragState::DragOverTarget {
                    card_id,
                    source_list,
                    ..
                },
                DragEvent::Enter { list_id },
            ) => {
                if list_id == source_list {
                    (
                        DragState::Dragging {
                            card_id,
                            source_list,
                        },
                        None,
                    )
                } else {
                    (
                        DragState::DragOverTarget {
                            card_id,
                            source_list,
                            target_list: list_id,
                        },
                        None,
                    )
                }
            }

            (
                DragState::DragOverTarget {
                    card_id,
                    source_list,
                    target_list,
                },
                DragEvent::Leave { list_id },
            ) => {
                if list_id == target_list {
                    (
                        DragState::Dragging {
                            card_id,
                            source_list,
                        },
                        None,
                    )
                } else {
                    (
                        DragState::DragOverTarget {
                            card_id,
                            source_list,
                            target_list,
                        },
                        None,
                    )
                }
            }

            (state @ DragState::Dragging { .. }, DragEvent::Leave { .. }) => (state, None),

            (
                DragState::Dragging {
                    card_id,
                    source_list,
                }
                | DragState::DragOverTarget {
                    card_id,
                    source_list,
                    ..
                },
                DragEvent::Drop { list_id },
            ) => {
                let action = (list_id != source_list).then_some(BoardAction::MoveCard {
                    card_id,
                    source: source_list,
                    target: list_id,
                });
                (DragState::Idle, action)
            }

            (_, DragEvent::End) => (DragState::Idle, None),
        }
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    /// The card being dragged, if any
    pub fn card_id(&self) -> Option<&CardId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { card_id, .. } | DragState::DragOverTarget { card_id, .. } => {
                Some(card_id)
            }
        }
    }

    /// The list to highlight as the current drop candidate
    pub fn highlighted_list(&self) -> Option<&ListId> {
        match self {
            DragState::DragOverTarget { target_list, .. } => Some(target_list),
            _ => None,
        }
    }
}
