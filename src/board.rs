//! Board State
//!
//! Columns of tasks plus the pure update functions the view calls.
//! Nothing here touches the network; callers persist what these return.

use std::collections::BTreeMap;
use std::fmt;

use leptos_dragdrop::DragEnd;
use serde_json::Value;

use crate::config::{column_def, ColumnDef};
use crate::models::{raw_task_id, ColumnId, Task, TaskId};

/// One column: display metadata and its ordered tasks
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: ColumnId,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub items: Vec<Task>,
}

impl Column {
    fn empty(def: &ColumnDef) -> Self {
        Self {
            id: def.id,
            name: def.name,
            icon: def.icon,
            color: def.color,
            items: Vec::new(),
        }
    }
}

/// Board mutation errors (caller bugs, never user-facing)
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    IndexOutOfRange { column: ColumnId, index: usize, len: usize },
    TaskMismatch { expected: TaskId, found: TaskId },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IndexOutOfRange { column, index, len } => {
                write!(f, "Index {} out of range for column {} (len {})", index, column, len)
            }
            BoardError::TaskMismatch { expected, found } => {
                write!(f, "Expected task {} at source index, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// What a drag did to the board
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Dropped nowhere, or back where it started
    Unchanged,
    /// Reordered inside one column; nothing to persist
    Reordered,
    /// Changed column; carries the task with its new status for persisting
    Moved(Task),
}

/// Mapping from column id to column, iterated in display order
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: BTreeMap<ColumnId, Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board with every configured column and no tasks
    pub fn new() -> Self {
        let columns = ColumnId::ALL
            .into_iter()
            .map(|id| (id, Column::empty(column_def(id))))
            .collect();
        Self { columns }
    }

    /// Group server tasks by status, keeping server order per column.
    ///
    /// Each record is decoded on its own. One that does not decode (missing
    /// field, malformed date, status naming no column) is dropped with a
    /// warning and the rest still load.
    pub fn from_json(records: Vec<Value>) -> Self {
        let mut board = Self::new();
        for record in records {
            let id = raw_task_id(&record);
            match Task::from_json(record) {
                Ok(task) => board.push_task(task),
                Err(e) => log::warn!("[BOARD] Dropping task {}: {}", id, e),
            }
        }
        board
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        // Every ColumnId is inserted by new() and never removed
        &self.columns[&id]
    }

    fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        self.columns.entry(id).or_insert_with(|| Column::empty(column_def(id)))
    }

    /// Columns in display order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Total number of tasks across all columns
    pub fn len(&self) -> usize {
        self.columns.values().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locate a task: (column, index)
    pub fn find(&self, task_id: &TaskId) -> Option<(ColumnId, usize)> {
        self.columns.values().find_map(|column| {
            column
                .items
                .iter()
                .position(|t| &t.id == task_id)
                .map(|index| (column.id, index))
        })
    }

    /// Append a task to the end of the column its status names
    pub fn push_task(&mut self, task: Task) {
        self.column_mut(task.status).items.push(task);
    }

    /// Move a task between (or within) columns.
    ///
    /// `to_index` is the position in the destination sequence after the
    /// task has been removed from its source. The task's status follows
    /// its column. On error the board is left untouched.
    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        from: ColumnId,
        from_index: usize,
        to: ColumnId,
        to_index: usize,
    ) -> Result<&Task, BoardError> {
        let source = self.column(from);
        let task = source.items.get(from_index).ok_or(BoardError::IndexOutOfRange {
            column: from,
            index: from_index,
            len: source.items.len(),
        })?;
        if &task.id != task_id {
            return Err(BoardError::TaskMismatch { expected: task_id.clone(), found: task.id.clone() });
        }

        let dest_len = if from == to { source.items.len() - 1 } else { self.column(to).items.len() };
        if to_index > dest_len {
            return Err(BoardError::IndexOutOfRange { column: to, index: to_index, len: dest_len });
        }

        let mut task = self.column_mut(from).items.remove(from_index);
        task.status = to;
        self.column_mut(to).items.insert(to_index, task);
        Ok(&self.column(to).items[to_index])
    }

    /// Apply a finished drag optimistically
    pub fn apply_drag(&mut self, drag: &DragEnd<ColumnId>) -> Result<DragOutcome, BoardError> {
        let Some(dest) = drag.destination else {
            return Ok(DragOutcome::Unchanged);
        };
        if drag.is_noop() {
            return Ok(DragOutcome::Unchanged);
        }

        let source = drag.source;
        let task_id = self
            .column(source.list)
            .items
            .get(source.index)
            .map(|t| t.id.clone())
            .ok_or(BoardError::IndexOutOfRange {
                column: source.list,
                index: source.index,
                len: self.column(source.list).items.len(),
            })?;

        let moved = self.move_task(&task_id, source.list, source.index, dest.list, dest.index)?;
        if source.list == dest.list {
            Ok(DragOutcome::Reordered)
        } else {
            Ok(DragOutcome::Moved(moved.clone()))
        }
    }
}
