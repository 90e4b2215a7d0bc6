//! # Office Kanban
//!
//! Board state engine for the office toolkit kanban board.
//!
//! This crate provides the list/card model, a pure reducer for every board
//! mutation, a drag-and-drop state machine and key-value persistence,
//! without any dependency on a specific UI or storage backend.

pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod persistence;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::{BoardConfig, SeedConfig};
pub use domain::{
    action::{reduce, BoardAction},
    board::Board,
    card::{Card, CardId},
    drag::{DragEvent, DragState},
    list::{List, ListId},
};
pub use error::{KanbanError, Result};
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use persistence::BoardRepository;
pub use storage::Storage;
pub use store::{BoardStore, BoardSubscriber};
