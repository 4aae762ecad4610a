//! Create, list, fetch and toggle over HTTP.

use super::helpers::{app, create_task, send, send_with_content_type};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use chrono::{DateTime, SecondsFormat, Utc};
use rstest::rstest;
use serde_json::{Value, json};
use std::collections::BTreeSet;

const UNKNOWN_ID: &str = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff";

fn assert_task_shape(task: &Value) {
    let object = task.as_object().expect("task should be a JSON object");
    let keys: BTreeSet<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        BTreeSet::from(["completed", "createdAt", "id", "title"])
    );
    assert!(task["id"].is_string());
    assert!(task["title"].is_string());
    assert!(task["completed"].is_boolean());

    let created_at = task["createdAt"]
        .as_str()
        .expect("createdAt should be a string");
    let parsed = DateTime::parse_from_rfc3339(created_at).expect("createdAt should be ISO-8601");
    assert_eq!(
        parsed
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        created_at
    );
}

#[rstest]
#[tokio::test]
async fn post_creates_task_and_returns_201(app: Router) {
    let response = send(
        &app,
        Method::POST,
        "/api/tasks",
        Some(r#"{"title":"Nueva tarea de prueba"}"#),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.is_json());
    let task = response.json().expect("body should be JSON");
    assert_task_shape(&task);
    assert_eq!(task["title"], "Nueva tarea de prueba");
    assert_eq!(task["completed"], false);
}

#[rstest]
#[tokio::test]
async fn post_trims_title(app: Router) {
    let task = create_task(&app, "  Tarea con espacios  ").await;
    assert_eq!(task["title"], "Tarea con espacios");
}

#[rstest]
#[case::min_length("abc".to_owned())]
#[case::max_length("a".repeat(80))]
#[tokio::test]
async fn post_accepts_titles_at_bounds(app: Router, #[case] title: String) {
    let task = create_task(&app, &title).await;
    assert_eq!(task["title"], title.as_str());
}

#[rstest]
#[case::empty_object(Some("{}"), "Title is required")]
#[case::null_title(Some(r#"{"title":null}"#), "Title is required")]
#[case::empty_title(Some(r#"{"title":""}"#), "Title is required")]
#[case::blank_title(Some(r#"{"title":"   "}"#), "Title is required")]
#[case::no_body(None, "Title is required")]
#[case::array_body(Some(r#"["Primera tarea"]"#), "Title is required")]
#[case::number_title(Some(r#"{"title":123}"#), "Title must be a string")]
#[case::boolean_title(Some(r#"{"title":true}"#), "Title must be a string")]
#[case::object_title(Some(r#"{"title":{}}"#), "Title must be a string")]
#[case::short_title(
    Some(r#"{"title":"ab"}"#),
    "Title must be at least 3 characters long"
)]
#[tokio::test]
async fn post_rejects_invalid_input_with_400(
    app: Router,
    #[case] body: Option<&'static str>,
    #[case] message: &'static str,
) {
    let response = send(&app, Method::POST, "/api/tasks", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.is_json());
    assert_eq!(
        response.json().expect("body should be JSON"),
        json!({ "error": message })
    );
}

#[rstest]
#[tokio::test]
async fn post_rejects_title_over_80_characters(app: Router) {
    let body = json!({ "title": "a".repeat(81) }).to_string();

    let response = send(&app, Method::POST, "/api/tasks", Some(&body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json().expect("body should be JSON"),
        json!({ "error": "Title must be at most 80 characters long" })
    );
}

#[rstest]
#[tokio::test]
async fn post_title_of_byte_order_marks_is_required(app: Router) {
    let body = json!({ "title": "\u{FEFF}\u{FEFF}\u{FEFF}" }).to_string();

    let response = send(&app, Method::POST, "/api/tasks", Some(&body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json().expect("body should be JSON"),
        json!({ "error": "Title is required" })
    );
}

#[rstest]
#[tokio::test]
async fn post_with_malformed_json_is_an_internal_error(app: Router) {
    let response = send(&app, Method::POST, "/api/tasks", Some("{ invalid json }")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json().expect("body should be JSON"),
        json!({ "error": "Internal server error" })
    );
}

#[rstest]
#[case::text_plain(Some("text/plain"))]
#[case::form(Some("application/x-www-form-urlencoded"))]
#[case::no_content_type(None)]
#[tokio::test]
async fn post_without_json_content_type_ignores_body(
    app: Router,
    #[case] content_type: Option<&'static str>,
) {
    let response = send_with_content_type(
        &app,
        Method::POST,
        "/api/tasks",
        content_type,
        Some(r#"{"title":"Tarea plana"}"#),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json().expect("body should be JSON"),
        json!({ "error": "Title is required" })
    );

    let listed = send(&app, Method::GET, "/api/tasks", None).await;
    assert_eq!(listed.json().expect("body should be JSON"), json!([]));
}

#[rstest]
#[tokio::test]
async fn post_accepts_json_content_type_with_charset(app: Router) {
    let response = send_with_content_type(
        &app,
        Method::POST,
        "/api/tasks",
        Some("application/json; charset=utf-8"),
        Some(r#"{"title":"Tarea con charset"}"#),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[rstest]
#[tokio::test]
async fn rejected_post_persists_nothing(app: Router) {
    create_task(&app, "Primera tarea").await;

    send(&app, Method::POST, "/api/tasks", Some(r#"{"title":"ab"}"#)).await;

    let listed = send(&app, Method::GET, "/api/tasks", None).await;
    let tasks = listed.json().expect("body should be JSON");
    assert_eq!(tasks.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[tokio::test]
async fn get_list_is_empty_initially(app: Router) {
    let response = send(&app, Method::GET, "/api/tasks", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.is_json());
    assert_eq!(response.json().expect("body should be JSON"), json!([]));
}

#[rstest]
#[tokio::test]
async fn get_list_returns_all_tasks_newest_first(app: Router) {
    for title in ["Primera tarea", "Segunda tarea", "Tercera tarea"] {
        create_task(&app, title).await;
    }

    let response = send(&app, Method::GET, "/api/tasks", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json().expect("body should be JSON");
    let tasks = body.as_array().expect("list should be an array");
    assert_eq!(tasks.len(), 3);
    for task in tasks {
        assert_task_shape(task);
    }
    let titles: Vec<&str> = tasks
        .iter()
        .filter_map(|task| task["title"].as_str())
        .collect();
    assert_eq!(titles, ["Tercera tarea", "Segunda tarea", "Primera tarea"]);
}

#[rstest]
#[tokio::test]
async fn get_by_id_returns_created_task(app: Router) {
    let created = create_task(&app, "Tarea para buscar").await;
    let id = created["id"].as_str().expect("id should be a string");

    let response = send(&app, Method::GET, &format!("/api/tasks/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().expect("body should be JSON"), created);
}

#[rstest]
#[case::unknown(UNKNOWN_ID)]
#[case::malformed("id-invalido")]
#[case::numeric("999")]
#[tokio::test]
async fn get_and_patch_unknown_ids_return_404(app: Router, #[case] id: &'static str) {
    let uri = format!("/api/tasks/{id}");

    for method in [Method::GET, Method::PATCH] {
        let response = send(&app, method, &uri, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.is_json());
        assert_eq!(
            response.json().expect("body should be JSON"),
            json!({ "error": "Task not found" })
        );
    }
}

#[rstest]
#[tokio::test]
async fn patch_toggles_completion_both_ways(app: Router) {
    let created = create_task(&app, "Tarea para completar").await;
    let id = created["id"].as_str().expect("id should be a string");
    let uri = format!("/api/tasks/{id}");

    let first = send(&app, Method::PATCH, &uri, None).await;
    assert_eq!(first.status, StatusCode::OK);
    let toggled = first.json().expect("body should be JSON");
    assert_eq!(toggled["completed"], true);
    assert_eq!(toggled["id"], created["id"]);
    assert_eq!(toggled["title"], created["title"]);
    assert_eq!(toggled["createdAt"], created["createdAt"]);

    let fetched = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched.json().expect("body should be JSON"), toggled);

    let second = send(&app, Method::PATCH, &uri, Some(r#"{"completed":true}"#)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.json().expect("body should be JSON"), created);
}
