//! In-memory [`TaskApi`] for unit tests

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Mutex;

use crate::todoist::{
    AddTaskArgs, Comment, CommentPage, Credentials, TaskApi, Task, TodoistError, TodoistResult,
    UpdateTaskArgs,
};

pub fn comment(id: &str) -> Comment {
    Comment {
        id: id.to_string(),
        fields: Map::new(),
    }
}

pub fn page(ids: &[&str], cursor: Option<&str>) -> CommentPage {
    CommentPage {
        results: ids.iter().map(|id| comment(id)).collect(),
        next_cursor: cursor.map(str::to_string),
    }
}

/// Serves comment pages in order and records every call
pub struct FakeApi {
    credentials: Credentials,
    pages: Vec<CommentPage>,
    cursors: Mutex<Vec<Option<String>>>,
    added: Mutex<Vec<AddTaskArgs>>,
    updated: Mutex<Vec<(String, UpdateTaskArgs)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::with_pages(Vec::new())
    }

    pub fn with_pages(pages: Vec<CommentPage>) -> Self {
        Self {
            credentials: Credentials::new("http://127.0.0.1:9", "fake-token"),
            pages,
            cursors: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
        }
    }

    /// Cursor passed on each `get_comments` call
    pub fn cursors(&self) -> Vec<Option<String>> {
        self.cursors.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<AddTaskArgs> {
        self.added.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<(String, UpdateTaskArgs)> {
        self.updated.lock().unwrap().clone()
    }

    fn task(id: &str, fields: Value) -> Task {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Task {
            id: id.to_string(),
            fields,
        }
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn add_task(&self, args: &AddTaskArgs) -> TodoistResult<Task> {
        self.added.lock().unwrap().push(args.clone());
        Ok(Self::task("new-task", json!({ "content": args.content })))
    }

    async fn update_task(&self, task_id: &str, args: &UpdateTaskArgs) -> TodoistResult<Task> {
        self.updated
            .lock()
            .unwrap()
            .push((task_id.to_string(), args.clone()));
        Ok(Self::task(task_id, json!({ "content": "updated" })))
    }

    async fn get_comments(
        &self,
        _task_id: &str,
        cursor: Option<&str>,
    ) -> TodoistResult<CommentPage> {
        let mut cursors = self.cursors.lock().unwrap();
        let index = cursors.len();
        cursors.push(cursor.map(str::to_string));

        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| TodoistError::api(500, "no more pages"))
    }
}
