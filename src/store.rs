//! The board state container.
//!
//! [`BoardStore`] owns the canonical board and the drag state. Every change
//! goes through [`BoardStore::dispatch`], which runs the pure reducer,
//! reports the outcome to the notifier and publishes the new board to the
//! subscribers. Persistence is one of those subscribers.

use crate::{
    domain::{reduce, Board, BoardAction, DragEvent, DragState},
    error::{KanbanError, Result},
    notify::{Notification, Notifier},
    persistence::BoardRepository,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Receives the board after every change
#[async_trait]
pub trait BoardSubscriber: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    async fn board_changed(&self, board: &Board) -> Result<()>;
}

pub struct BoardStore {
    board: Board,
    drag: DragState,
    notifier: Arc<dyn Notifier>,
    subscribers: Vec<Arc<dyn BoardSubscriber>>,
}

impl BoardStore {
    /// Loads the board from the repository and keeps it in sync from then on
    pub async fn open(repository: BoardRepository, notifier: Arc<dyn Notifier>) -> Self {
        let board = repository.load().await;
        let mut store = Self::with_board(board, notifier);
        store.subscribe(Arc::new(repository));
        store
    }

    /// Opens the file-backed board described by `config`, stored under
    /// its `data_dir` and `storage_key`
    #[cfg(feature = "file-storage")]
    pub async fn open_with_config(
        config: &crate::config::BoardConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let storage = Arc::new(crate::storage::FileStorage::from_config(config));
        let repository = BoardRepository::new(storage, config)?;
        Ok(Self::open(repository, notifier).await)
    }

    /// Creates a store around an existing board, with no subscribers
    pub fn with_board(board: Board, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            board,
            drag: DragState::Idle,
            notifier,
            subscribers: Vec::new(),
        }
    }

    /// Adds a subscriber. Subscribers are called in registration order.
    pub fn subscribe(&mut self, subscriber: Arc<dyn BoardSubscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Applies an action. Returns true if the board changed.
    ///
    /// Validation failures are reported through the notifier, never
    /// returned. The in-memory board stays authoritative even when a
    /// subscriber fails to take the change.
    pub async fn dispatch(&mut self, action: BoardAction) -> bool {
        let next = match reduce(&self.board, &action) {
            Ok(Some(next)) => next,
            Ok(None) => {
                tracing::debug!(%action, "action had no effect");
                return false;
            }
            Err(e) => {
                tracing::debug!(%action, error = %e, "action rejected");
                self.notifier.notify(rejection(&e));
                return false;
            }
        };

        let feedback = success_feedback(&action, &self.board, &next);
        self.board = next;
        if let Some(notification) = feedback {
            self.notifier.notify(notification);
        }

        self.publish().await;
        true
    }

    /// Feeds a drag event to the drag state machine, dispatching the move a
    /// drop produces. Returns true if the board changed.
    pub async fn drag(&mut self, event: DragEvent) -> bool {
        let state = std::mem::take(&mut self.drag);
        let (next, action) = state.handle(event);
        self.drag = next;

        match action {
            Some(action) => self.dispatch(action).await,
            None => false,
        }
    }

    async fn publish(&self) {
        for subscriber in &self.subscribers {
            if let Err(e) = subscriber.board_changed(&self.board).await {
                tracing::error!(
                    subscriber = subscriber.name(),
                    error = %e,
                    "failed to publish board change"
                );
                self.notifier.notify(Notification::error(
                    "Save Failed",
                    format!(
                        "Your changes are kept for this session but could not be saved: {}",
                        e
                    ),
                ));
            }
        }
    }
}

fn rejection(error: &KanbanError) -> Notification {
    match error {
        KanbanError::Validation { message, .. } => Notification::error("Error", message.as_str()),
        other => Notification::error("Error", other.to_string()),
    }
}

/// The confirmation shown for a completed action, if it has one.
/// Moves come from dragging and are acknowledged visually instead.
fn success_feedback(action: &BoardAction, before: &Board, after: &Board) -> Option<Notification> {
    let notification = match action {
        BoardAction::AddList { .. } => {
            let title = after.lists().last().map(|l| l.title.as_str()).unwrap_or_default();
            Notification::success("List Added", format!("\"{}\" list has been added.", title))
        }
        BoardAction::RenameList { list_id, .. } => {
            let title = after.list(list_id).map(|l| l.title.as_str()).unwrap_or_default();
            Notification::success("List Renamed", format!("List renamed to \"{}\".", title))
        }
        BoardAction::DeleteList { list_id } => {
            let title = before.list(list_id).map(|l| l.title.as_str()).unwrap_or_default();
            Notification::success(
                "List Deleted",
                format!("\"{}\" list and all its cards have been deleted.", title),
            )
        }
        BoardAction::AddCard { list_id, .. } => {
            let title = after.list(list_id).map(|l| l.title.as_str()).unwrap_or_default();
            Notification::success("Card Added", format!("New card added to \"{}\".", title))
        }
        BoardAction::EditCard { .. } => {
            Notification::success("Card Updated", "Card text has been updated.")
        }
        BoardAction::DeleteCard { .. } => {
            Notification::success("Card Deleted", "The card has been removed.")
        }
        BoardAction::ClearBoard => Notification::success(
            "Board Cleared",
            "All lists and cards have been removed.",
        ),
        BoardAction::MoveCard { .. } => return None,
    };
    Some(notification)
}
