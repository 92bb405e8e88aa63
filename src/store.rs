//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_dragdrop::DragEnd;
use reactive_stores::Store;

use crate::board::{Board, DragOutcome};
use crate::draft::TaskDraft;
use crate::models::{ColumnId, Task};

/// Everything the board view renders or edits
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Columns and their tasks
    pub board: Board,
    /// Add-form inputs
    pub draft: TaskDraft,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole board (after a load)
pub fn store_replace_board(store: &BoardStore, board: Board) {
    store.board().set(board);
}

/// Append a created task to its column
pub fn store_push_task(store: &BoardStore, task: Task) {
    store.board().write().push_task(task);
}

/// Tasks of one column, cloned for rendering
pub fn store_column_tasks(store: &BoardStore, column: ColumnId) -> Vec<Task> {
    store.board().with(|board| board.column(column).items.clone())
}

/// Apply a drag optimistically; returns the task to persist on a column change
pub fn store_apply_drag(store: &BoardStore, drag: &DragEnd<ColumnId>) -> Option<Task> {
    let outcome = store.board().write().apply_drag(drag);
    match outcome {
        Ok(DragOutcome::Moved(task)) => Some(task),
        Ok(_) => None,
        Err(e) => {
            log::error!("[DND] Ignoring drag {:?}: {}", drag, e);
            None
        }
    }
}

/// Edit the add-form draft in place
pub fn store_update_draft(store: &BoardStore, f: impl FnOnce(&mut TaskDraft)) {
    let field = store.draft();
    let mut draft = field.write();
    f(&mut *draft);
}
