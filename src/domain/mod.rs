pub mod action;
pub mod board;
pub mod card;
pub mod drag;
mod id;
pub mod list;

pub use action::{reduce, BoardAction};
pub use board::Board;
pub use card::{Card, CardId};
pub use drag::{DragEvent, DragState};
pub use list::{List, ListId};
