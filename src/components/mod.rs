//! UI Components
//!
//! Leptos components for the board.

mod board_view;
mod column_card;
mod drop_zone;
mod new_task_form;
mod task_card;

pub use board_view::BoardView;
pub use column_card::ColumnCard;
pub use drop_zone::{DropZone, DropZoneProps};
pub use new_task_form::NewTaskForm;
pub use task_card::{TaskCard, TaskCardProps};
