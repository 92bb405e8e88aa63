//! REST Task API
//!
//! `reqwest` client for the `/api/tasks` collection. Uses the browser's
//! fetch when compiled to wasm32.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ApiError, ApiResult, TaskApi};
use crate::models::{NewTask, Task, TaskId};

/// Characters escaped when a task id becomes a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct RestTaskApi {
    client: Client,
    /// Collection URL without trailing slash
    base_url: String,
}

impl RestTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn task_url(&self, id: &TaskId) -> String {
        format!("{}/{}", self.base_url, utf8_percent_encode(&id.to_string(), PATH_SEGMENT))
    }
}

/// Map non-2xx to `ApiError::Status`, keeping the body for the log
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), body })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}

#[async_trait(?Send)]
impl TaskApi for RestTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Value>> {
        let response = self.client.get(&self.base_url).send().await?;
        decode_json(response).await
    }

    async fn create_task(&self, task: &NewTask) -> ApiResult<Value> {
        let response = self.client.post(&self.base_url).json(task).send().await?;
        decode_json(response).await
    }

    async fn update_task(&self, task: &Task) -> ApiResult<()> {
        let response = self.client.put(self.task_url(&task.id)).json(task).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::ColumnId;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, RestTaskApi) {
        let server = MockServer::start().await;
        let api = RestTaskApi::new(format!("{}/api/tasks/", server.uri()));
        (server, api)
    }

    #[test]
    fn test_task_url_escapes_id() {
        let api = RestTaskApi::new("http://localhost:5000/api/tasks");
        assert_eq!(api.base_url(), "http://localhost:5000/api/tasks");
        assert_eq!(api.task_url(&TaskId::from("65f0c1")), "http://localhost:5000/api/tasks/65f0c1");
        assert_eq!(api.task_url(&TaskId::from("a b/c")), "http://localhost:5000/api/tasks/a%20b%2Fc");
        assert_eq!(api.task_url(&TaskId::from(42)), "http://localhost:5000/api/tasks/42");
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "_id": "1", "content": "One", "status": "backlog" },
                { "_id": "2", "content": "Two", "status": "todo", "assignee": "lee" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = api.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1]["status"], json!("todo"));
        assert_eq!(tasks[1]["assignee"], json!("lee"));
    }

    #[tokio::test]
    async fn test_create_task_posts_body() {
        let (server, api) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .and(body_json(json!({
                "content": "Plan sprint",
                "dueDate": null,
                "assignee": "",
                "status": "backlog"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "_id": "new-1",
                "content": "Plan sprint",
                "dueDate": null,
                "assignee": "",
                "status": "backlog"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let new_task = NewTask {
            content: "Plan sprint".to_string(),
            due_date: None,
            assignee: String::new(),
            status: ColumnId::Backlog,
        };
        let created = api.create_task(&new_task).await.unwrap();
        assert_eq!(created["_id"], json!("new-1"));
    }

    #[tokio::test]
    async fn test_update_task_puts_full_body() {
        let (server, api) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/api/tasks/t7"))
            .and(body_json(json!({
                "_id": "t7",
                "content": "Review",
                "dueDate": null,
                "assignee": null,
                "status": "doing",
                "__v": 0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let mut task = Task::from_json(json!({
            "_id": "t7",
            "content": "Review",
            "dueDate": null,
            "assignee": null,
            "status": "todo",
            "__v": 0
        }))
        .unwrap();
        task.status = ColumnId::Doing;
        api.update_task(&task).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_task_with_numeric_id() {
        let (server, api) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/api/tasks/2"))
            .and(body_json(json!({ "_id": 2, "content": "Two", "assignee": "", "status": "doing" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let mut task = Task::from_json(json!({ "_id": 2, "content": "Two", "assignee": "", "status": "todo" })).unwrap();
        task.status = ColumnId::Doing;
        api.update_task(&task).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_keeps_records_that_do_not_decode() {
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "_id": 1, "content": "Good", "status": "backlog" },
                { "_id": 2, "content": "Date only", "dueDate": "2024-03-01", "status": "todo" }
            ])))
            .mount(&server)
            .await;

        // Per-record decoding happens in Board::from_json
        let tasks = api.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(Task::from_json(tasks[0].clone()).is_ok());
        assert!(Task::from_json(tasks[1].clone()).is_err());
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = api.list_tasks().await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, body: "boom".to_string() });
    }

    #[tokio::test]
    async fn test_bad_body_is_decode_error() {
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = api.list_tasks().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Nothing listens on port 1
        let api = RestTaskApi::new("http://127.0.0.1:1/api/tasks");

        let err = api.list_tasks().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "got {:?}", err);
    }
}
