//! New Task Draft
//!
//! Input state behind the add form.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

use crate::models::{ColumnId, NewTask};

/// Value format of `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Start of the picked day in the browser's time zone.
///
/// Where a DST jump skips midnight, the first hour that exists is used.
pub fn local_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    (0..3)
        .filter_map(|hour| {
            let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
            date.and_time(time).and_local_timezone(Local).earliest()
        })
        .next()
        .map(|local| local.with_timezone(&Utc))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub content: String,
    pub due_date: Option<NaiveDate>,
    pub assignee: String,
}

impl TaskDraft {
    /// Build the create request, or None when there is nothing to add
    pub fn to_new_task(&self) -> Option<NewTask> {
        if self.content.trim().is_empty() {
            return None;
        }
        Some(NewTask {
            content: self.content.clone(),
            due_date: self.due_date.and_then(local_midnight),
            assignee: self.assignee.trim().to_string(),
            status: ColumnId::FIRST,
        })
    }

    /// Accept the date input's value; empty or malformed clears the date
    pub fn set_due_date_input(&mut self, value: &str) {
        self.due_date = NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok();
    }

    /// Value to show in the date input
    pub fn due_date_input(&self) -> String {
        self.due_date
            .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
