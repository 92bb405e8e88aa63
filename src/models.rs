//! Frontend Models
//!
//! Data structures matching the task service's JSON.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// Server-assigned task identifier (`_id` on the wire).
///
/// Opaque: document stores hand out strings, SQL-backed ones numbers.
/// Serializes back in the form it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Text(String),
    Number(Number),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Text(s) => f.write_str(s),
            TaskId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::Text(s.to_string())
    }
}

impl From<u64> for TaskId {
    fn from(n: u64) -> Self {
        TaskId::Number(n.into())
    }
}

/// Board column identifier, doubling as task status.
///
/// Declaration order is display order; the first variant receives new tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Backlog,
    Design,
    Todo,
    Doing,
}

impl ColumnId {
    pub const ALL: [ColumnId; 4] = [ColumnId::Backlog, ColumnId::Design, ColumnId::Todo, ColumnId::Doing];

    /// Column where newly created tasks are placed
    pub const FIRST: ColumnId = ColumnId::Backlog;

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Backlog => "backlog",
            ColumnId::Design => "design",
            ColumnId::Todo => "todo",
            ColumnId::Doing => "doing",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown status: {}", s))
    }
}

/// Typed view of the fields we read; everything else stays in `Task::raw`
#[derive(Deserialize)]
struct TaskRecord {
    #[serde(rename = "_id")]
    id: TaskId,
    content: String,
    #[serde(rename = "dueDate", default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    assignee: Option<String>,
    status: String,
}

/// Cached copy of a server task.
///
/// `raw` is the object exactly as received. It is the update body, with only
/// `status` overwritten, so fields this client never looks at (or leaves
/// blank) reach the server unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    pub due_date: Option<DateTime<Utc>>,
    /// As sent; may be `""`
    pub assignee: Option<String>,
    pub status: ColumnId,
    raw: Map<String, Value>,
}

impl Task {
    /// Decode one task object. Errors name what was wrong with it.
    pub fn from_json(value: Value) -> Result<Task, String> {
        let raw = match value {
            Value::Object(raw) => raw,
            other => return Err(format!("expected an object, got {}", other)),
        };
        let record: TaskRecord = serde_json::from_value(Value::Object(raw.clone())).map_err(|e| e.to_string())?;
        let status = record.status.parse::<ColumnId>()?;
        Ok(Task {
            id: record.id,
            content: record.content,
            due_date: record.due_date,
            assignee: record.assignee,
            status,
            raw,
        })
    }

    /// Assignee worth showing; the form posts `""` for "nobody"
    pub fn assignee_label(&self) -> Option<&str> {
        self.assignee.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// Update body: the object as received with the current status
    pub fn to_json(&self) -> Value {
        let mut body = self.raw.clone();
        body.insert("status".to_string(), Value::String(self.status.as_str().to_string()));
        Value::Object(body)
    }
}

impl Serialize for Task {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Best-effort id of an undecodable task, for log lines
pub fn raw_task_id(value: &Value) -> String {
    value.get("_id").map(|id| id.to_string()).unwrap_or_else(|| "<no id>".to_string())
}

/// Body of `POST /api/tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub content: String,
    #[serde(rename = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,
    pub assignee: String,
    pub status: ColumnId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_id_parse() {
        assert_eq!("todo".parse::<ColumnId>(), Ok(ColumnId::Todo));
        assert!("done".parse::<ColumnId>().is_err());
        assert!("Todo".parse::<ColumnId>().is_err());
    }

    #[test]
    fn test_task_from_server_json() {
        let task = Task::from_json(json!({
            "_id": "65a1",
            "content": "Write docs",
            "dueDate": "2024-03-01T00:00:00.000Z",
            "assignee": "sam",
            "status": "design",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(task.id, TaskId::from("65a1"));
        assert_eq!(task.due_date.unwrap().to_rfc3339(), "2024-03-01T00:00:00+00:00");
        assert_eq!(task.status, ColumnId::Design);
        assert_eq!(task.assignee_label(), Some("sam"));
    }

    #[test]
    fn test_numeric_id() {
        let task = Task::from_json(json!({ "_id": 1, "content": "One", "status": "backlog" })).unwrap();
        assert_eq!(task.id, TaskId::from(1));
        assert_eq!(task.id.to_string(), "1");
        // Echoed back as a number, not "1"
        assert_eq!(task.to_json()["_id"], json!(1));
    }

    #[test]
    fn test_optional_fields() {
        let task = Task::from_json(json!({
            "_id": "1",
            "content": "Bare",
            "dueDate": null,
            "assignee": "",
            "status": "backlog"
        }))
        .unwrap();
        assert_eq!(task.due_date, None);
        assert_eq!(task.assignee.as_deref(), Some(""));
        assert_eq!(task.assignee_label(), None);
    }

    #[test]
    fn test_bad_tasks_rejected() {
        assert!(Task::from_json(json!({ "_id": "1", "content": "Lost", "status": "archived" })).is_err());
        assert!(Task::from_json(json!({ "_id": "2", "status": "todo" })).is_err());
        assert!(Task::from_json(json!({
            "_id": "3",
            "content": "Date only",
            "dueDate": "2024-03-01",
            "status": "todo"
        }))
        .is_err());
        assert!(Task::from_json(json!(["not", "a", "task"])).is_err());
    }

    #[test]
    fn test_body_is_object_as_received() {
        let mut task = Task::from_json(json!({
            "_id": "abc",
            "content": "Ship",
            "assignee": "",
            "status": "todo",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        task.status = ColumnId::Doing;

        // No dueDate key invented, blank assignee kept
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "_id": "abc",
                "content": "Ship",
                "assignee": "",
                "status": "doing",
                "createdAt": "2024-01-01T00:00:00Z"
            })
        );
    }

    #[test]
    fn test_raw_task_id() {
        assert_eq!(raw_task_id(&json!({ "_id": 7 })), "7");
        assert_eq!(raw_task_id(&json!({ "_id": "x" })), "\"x\"");
        assert_eq!(raw_task_id(&json!({})), "<no id>");
    }
}
