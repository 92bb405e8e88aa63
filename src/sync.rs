//! Remote Sync
//!
//! Fire-and-forget wrappers around [`TaskApi`]. Failures are logged here and
//! never reach the UI; nothing is retried or rolled back.

use crate::api::TaskApi;
use crate::board::Board;
use crate::draft::TaskDraft;
use crate::models::{raw_task_id, ColumnId, Task};

/// Fetch every task and group it into a fresh board.
///
/// None on failure; the caller keeps whatever board it already has.
pub async fn load_all<A: TaskApi + ?Sized>(api: &A) -> Option<Board> {
    match api.list_tasks().await {
        Ok(records) => {
            let fetched = records.len();
            let board = Board::from_json(records);
            log::info!("[SYNC] Loaded {} tasks ({} placed)", fetched, board.len());
            Some(board)
        }
        Err(e) => {
            log::error!("[SYNC] Error fetching tasks: {}", e);
            None
        }
    }
}

/// Create the drafted task in the first column.
///
/// Returns the server's copy (with its id) to append locally, or None when
/// the draft is blank or the request failed. The draft is left alone either
/// way; clearing it is the caller's job on success.
pub async fn create_task<A: TaskApi + ?Sized>(api: &A, draft: &TaskDraft) -> Option<Task> {
    let new_task = draft.to_new_task()?;
    let record = match api.create_task(&new_task).await {
        Ok(record) => record,
        Err(e) => {
            log::error!("[SYNC] Error adding task: {}", e);
            return None;
        }
    };

    let id = raw_task_id(&record);
    match Task::from_json(record) {
        Ok(task) => {
            log::debug!("[SYNC] Created task {}", task.id);
            Some(task)
        }
        Err(e) => {
            log::error!("[SYNC] Server returned unusable task {}: {}", id, e);
            None
        }
    }
}

/// Send a moved task's new status with the rest of its body as received
pub async fn persist_move<A: TaskApi + ?Sized>(api: &A, task: &Task, new_status: ColumnId) {
    let mut body = task.clone();
    body.status = new_status;
    match api.update_task(&body).await {
        Ok(()) => log::debug!("[SYNC] Task {} now {}", body.id, new_status),
        Err(e) => log::error!("[SYNC] Error updating task status: {}", e),
    }
}
