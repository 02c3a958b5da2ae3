//! End-to-end label binding tests against a local mock server.

use gitlab_client::GitLab;
use gitlab_client::GitLabError;
use gitlab_client::types::{
    CreateLabelOptions, DeleteLabelOptions, ListLabelsOptions, UpdateLabelOptions,
};
use mockito::{Matcher, Server};

fn client(server: &Server) -> GitLab {
    GitLab::builder()
        .endpoint(server.url())
        .private_token("test-token")
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn list_preserves_order_and_count() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v4/projects/42/labels")
        .match_header("PRIVATE-TOKEN", "test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r##"[{"name":"bug","color":"#ff0000"},
                 {"name":"feature","color":"#00ff00"},
                 {"name":"docs","color":"#0000ff"}]"##,
        )
        .create_async()
        .await;

    let labels = client(&server).labels().list(42, None).await.unwrap();

    assert_eq!(labels.body.len(), 3);
    let names: Vec<&str> = labels.body.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["bug", "feature", "docs"]);
    assert_eq!(labels.meta.status, 200);
}

#[tokio::test]
async fn list_sends_only_supplied_pagination_parameters() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v4/projects/42/labels")
        .match_query(Matcher::Exact("page=2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("x-page", "2")
        .with_header("x-next-page", "3")
        .with_body("[]")
        .create_async()
        .await;

    let options = ListLabelsOptions::new().with_page(2);
    let labels = client(&server)
        .labels()
        .list(42, Some(&options))
        .await
        .unwrap();

    let page = labels.meta.page.expect("pagination metadata");
    assert_eq!(page.page, Some(2));
    assert_eq!(page.next_page, Some(3));
}

#[tokio::test]
async fn create_returns_the_created_label() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/v4/projects/42/labels")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "bug",
            "color": "#ff0000"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r##"{"name":"bug","color":"#ff0000"}"##)
        .create_async()
        .await;

    let created = client(&server)
        .labels()
        .create(42, &CreateLabelOptions::new("bug", "#ff0000"))
        .await
        .unwrap();

    assert_eq!(created.body.name, "bug");
    assert_eq!(created.body.color, "#ff0000");
    assert_eq!(created.meta.status, 201);
}

#[tokio::test]
async fn create_surfaces_a_duplicate_name_rejection() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/v4/projects/42/labels")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Label already exists"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .labels()
        .create(42, &CreateLabelOptions::new("bug", "#ff0000"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    match err {
        GitLabError::Status { message, .. } => {
            assert_eq!(message.as_deref(), Some("Label already exists"));
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn update_sends_only_the_supplied_fields() {
    let mut server = Server::new_async().await;
    // Exact body match: a color-only update must not carry new_name.
    let _m = server
        .mock("PUT", "/api/v4/projects/42/labels")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "bug",
            "color": "#00ff00"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r##"{"name":"bug","color":"#00ff00"}"##)
        .create_async()
        .await;

    let updated = client(&server)
        .labels()
        .update(42, &UpdateLabelOptions::new("bug").with_color("#00ff00"))
        .await
        .unwrap();

    // Name stays what it was; only the color moved.
    assert_eq!(updated.body.name, "bug");
    assert_eq!(updated.body.color, "#00ff00");
}

#[tokio::test]
async fn update_with_nothing_to_change_surfaces_the_remote_rejection() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("PUT", "/api/v4/projects/42/labels")
        .match_body(Matcher::Json(serde_json::json!({"name": "bug"})))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"new_name, color are missing, at least one parameter must be provided"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .labels()
        .update(42, &UpdateLabelOptions::new("bug"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn delete_addresses_the_label_by_name_in_the_query() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("DELETE", "/api/v4/projects/42/labels")
        .match_query(Matcher::Exact("name=bug".into()))
        .with_status(204)
        .create_async()
        .await;

    let meta = client(&server)
        .labels()
        .delete(42, &DeleteLabelOptions::new("bug"))
        .await
        .unwrap();

    assert_eq!(meta.status, 204);
    assert!(meta.is_success());
}

#[tokio::test]
async fn delete_surfaces_the_remote_status_untranslated() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("DELETE", "/api/v4/projects/42/labels")
        .match_query(Matcher::Exact("name=missing".into()))
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"404 Label Not Found"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .labels()
        .delete(42, &DeleteLabelOptions::new("missing"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn path_projects_are_percent_encoded_into_one_segment() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v4/projects/my%20group%2Fmy%20project/labels")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let labels = client(&server)
        .labels()
        .list("my group/my project", None)
        .await
        .unwrap();

    assert!(labels.body.is_empty());
}

#[tokio::test]
async fn empty_project_path_fails_without_touching_the_network() {
    let server = Server::new_async().await;
    // No mock registered: a request reaching the server would 501.
    let err = client(&server).labels().list("", None).await.unwrap_err();
    assert!(matches!(err, GitLabError::Validation(_)));
}

#[tokio::test]
async fn rate_limited_responses_classify_and_expose_the_wait() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v4/projects/42/labels")
        .with_status(429)
        .with_header("retry-after", "30")
        .with_body(r#"{"message":"Too many requests"}"#)
        .create_async()
        .await;

    let err = client(&server).labels().list(42, None).await.unwrap_err();

    assert!(err.is_rate_limited());
    assert!(err.is_retryable());
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(30)));
}
