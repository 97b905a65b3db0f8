//! Comment retrieval against a mock Todoist API
//!
//! The mock server stands in for both the Todoist API and the file store.

use mcp_common::{text_of, CallToolResult, EmbeddableError, EmbeddableMcp};
use serde_json::{json, Value};
use todoist_mcp::{Config, TodoistMcpServer};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn server_for(mock: &MockServer, max_pages: usize) -> TodoistMcpServer {
    let mut config = Config::default();
    config.api.token = Some(TOKEN.to_string());
    config.api.base_url = mock.uri();
    config.api.legacy_base_url = mock.uri();
    config.comments.max_pages = max_pages;
    TodoistMcpServer::from_config(&config).unwrap()
}

fn comment(id: &str, content: &str) -> Value {
    json!({
        "id": id,
        "item_id": "123",
        "content": content,
        "posted_at": "2025-01-01T10:00:00Z",
        "file_attachment": null
    })
}

/// Mount two pages for task 123: comments 1 and 2, then comment 3
async fn mount_two_pages(mock: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/comments"))
        .and(query_param("task_id", "123"))
        .and(query_param_is_missing("cursor"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [comment("1", "first"), comment("2", "second")],
            "next_cursor": "page-2"
        })))
        .expect(1)
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/comments"))
        .and(query_param("task_id", "123"))
        .and(query_param("cursor", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [comment("3", "third")],
            "next_cursor": null
        })))
        .expect(1)
        .mount(mock)
        .await;
}

fn parse_blocks(result: &CallToolResult) -> Vec<Value> {
    text_of(result)
        .into_iter()
        .map(|t| serde_json::from_str(t).unwrap())
        .collect()
}

#[tokio::test]
async fn walks_all_pages_in_order() {
    let mock = MockServer::start().await;
    mount_two_pages(&mock).await;

    let result = server_for(&mock, 100)
        .call_tool("get-task-comments", json!({ "taskId": "123" }))
        .await
        .unwrap();

    let blocks = parse_blocks(&result);
    let ids: Vec<&str> = blocks.iter().map(|b| b["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(blocks[2]["content"], "third");
}

#[tokio::test]
async fn no_raw_fetch_without_attachments() {
    let mock = MockServer::start().await;
    mount_two_pages(&mock).await;

    Mock::given(method("GET"))
        .and(path("/rest/v2/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock)
        .await;

    let result = server_for(&mock, 100)
        .call_tool(
            "get-task-comments",
            json!({ "taskId": "123", "includeFileAttachments": false }),
        )
        .await
        .unwrap();

    let blocks = parse_blocks(&result);
    assert_eq!(blocks[0], comment("1", "first"));
    assert_eq!(blocks[1], comment("2", "second"));
    assert_eq!(blocks[2], comment("3", "third"));
}

#[tokio::test]
async fn attachments_are_downloaded_and_failures_recorded() {
    let mock = MockServer::start().await;
    mount_two_pages(&mock).await;

    let ok_url = format!("{}/files/notes.txt", mock.uri());
    let missing_url = format!("{}/files/missing.txt", mock.uri());

    Mock::given(method("GET"))
        .and(path("/rest/v2/comments"))
        .and(query_param("task_id", "123"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "3", "attachment": { "file_url": missing_url, "file_name": "missing.txt" } },
            { "id": "1", "attachment": { "file_url": ok_url, "file_name": "notes.txt" } },
            { "id": "2", "attachment": null }
        ])))
        .expect(1)
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/files/notes.txt"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("line one\nline two\n"))
        .expect(1)
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/files/missing.txt"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock)
        .await;

    let result = server_for(&mock, 100)
        .call_tool(
            "get-task-comments",
            json!({ "taskId": "123", "includeFileAttachments": true }),
        )
        .await
        .unwrap();

    let blocks = parse_blocks(&result);
    assert_eq!(blocks.len(), 3);

    assert_eq!(blocks[0]["id"], "1");
    assert_eq!(blocks[0]["rawFileContent"], "line one\nline two\n");
    assert_eq!(blocks[0]["rawFileUrl"], ok_url.as_str());
    assert!(blocks[0].get("rawFileError").is_none());

    // no attachment: exactly the original comment
    assert_eq!(blocks[1], comment("2", "second"));

    assert_eq!(blocks[2]["id"], "3");
    assert!(blocks[2]["rawFileError"].as_str().unwrap().contains("404"));
    assert!(blocks[2].get("rawFileContent").is_none());
    assert!(blocks[2].get("rawFileUrl").is_none());
}

#[tokio::test]
async fn attachment_redirects_are_followed() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [comment("1", "see file")],
            "next_cursor": null
        })))
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v2/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "attachment": { "file_url": format!("{}/files/short", mock.uri()) } }
        ])))
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/files/short"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{}/files/final", mock.uri()).as_str()),
        )
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/files/final"))
        .respond_with(ResponseTemplate::new(200).set_body_string("final body"))
        .expect(1)
        .mount(&mock)
        .await;

    let result = server_for(&mock, 100)
        .call_tool(
            "get-task-comments",
            json!({ "taskId": "123", "includeFileAttachments": true }),
        )
        .await
        .unwrap();

    let blocks = parse_blocks(&result);
    assert_eq!(blocks[0]["rawFileContent"], "final body");
    assert_eq!(
        blocks[0]["rawFileUrl"],
        format!("{}/files/short", mock.uri()).as_str()
    );
}

#[tokio::test]
async fn page_failure_fails_the_call() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/comments"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [comment("1", "first")],
            "next_cursor": "page-2"
        })))
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/comments"))
        .and(query_param("cursor", "page-2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock)
        .await;

    let err = server_for(&mock, 100)
        .call_tool("get-task-comments", json!({ "taskId": "123" }))
        .await
        .unwrap_err();

    match err {
        EmbeddableError::McpError(msg) => {
            assert!(msg.contains("503"), "{}", msg);
            assert!(msg.contains("maintenance"), "{}", msg);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn endless_cursor_hits_page_limit() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [comment("1", "again")],
            "next_cursor": "forever"
        })))
        .expect(3)
        .mount(&mock)
        .await;

    let err = server_for(&mock, 3)
        .call_tool("get-task-comments", json!({ "taskId": "123" }))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("pagination exhausted"), "{}", err);
}

#[tokio::test]
async fn empty_task_id_makes_no_request() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let err = server_for(&mock, 100)
        .call_tool("get-task-comments", json!({ "taskId": "" }))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("taskId"));
}
