mod common;

use common::{create_test_submitter, env_for, API_KEY, DATABASE_ID, PAGE_ID};
use launchpad_core::{notion::NOTION_VERSION, SubmissionError};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const BODY: &[u8] = br#"{
    "projectName": "Apollo",
    "description": "Moon shot",
    "projectStage": "mvp",
    "teamSize": "4",
    "tools": ["github", "slack"],
    "toolLinks": {"github": "https://github.com/acme/apollo"}
}"#;

fn created_page() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "object": "page",
        "id": "9f1c2b3a-0000-4000-8000-000000000001",
        "url": "https://www.notion.so/Apollo-9f1c2b3a000040008000000000000001"
    }))
}

#[tokio::test]
async fn test_submit_creates_page_under_parent_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .and(header("Authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header("Notion-Version", NOTION_VERSION))
        .and(body_partial_json(json!({
            "parent": {"page_id": "12345678-90ab-cdef-1234-567890abcdef"},
            "properties": {"title": {"title": [{"text": {"content": "Apollo"}}]}}
        })))
        .respond_with(created_page())
        .expect(1)
        .mount(&server)
        .await;

    let submitter = create_test_submitter(env_for(&server, Some(PAGE_ID), None));
    let page = submitter.submit(BODY).await.expect("submission should succeed");

    assert_eq!(page.page_id, "9f1c2b3a-0000-4000-8000-000000000001");
    assert!(page.page_url.starts_with("https://www.notion.so/Apollo"));
}

#[tokio::test]
async fn test_database_takes_precedence_over_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .and(body_partial_json(json!({
            "parent": {"database_id": "fedcba09-8765-4321-fedc-ba0987654321"}
        })))
        .respond_with(created_page())
        .expect(1)
        .mount(&server)
        .await;

    let submitter = create_test_submitter(env_for(&server, Some(PAGE_ID), Some(DATABASE_ID)));
    submitter.submit(BODY).await.expect("submission should succeed");
}

#[tokio::test]
async fn test_payload_carries_rendered_blocks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(created_page())
        .expect(1)
        .mount(&server)
        .await;

    let submitter = create_test_submitter(env_for(&server, Some(PAGE_ID), None));
    submitter.submit(BODY).await.expect("submission should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value = requests[0].body_json().expect("JSON request body");
    let children = body["children"].as_array().expect("children array");
    assert_eq!(children[0]["type"], "divider");
    assert_eq!(children[1]["type"], "callout");
    assert!(children.iter().all(|block| block["object"] == "block"));
    assert!(body.to_string().contains("https://github.com/acme/apollo"));
}

#[tokio::test]
async fn test_unauthorized_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "object": "error",
            "status": 401,
            "code": "unauthorized",
            "message": "API token is invalid."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = create_test_submitter(env_for(&server, Some(PAGE_ID), None));
    let error = submitter.submit(BODY).await.unwrap_err();

    assert!(matches!(error, SubmissionError::Unauthorized { .. }));
    assert_eq!(error.status_code(), 401);
    assert_eq!(error.details(), Some("API token is invalid."));
}

#[tokio::test]
async fn test_rejected_parent_is_invalid_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "object": "error",
            "status": 400,
            "code": "validation_error",
            "message": "body failed validation: body.parent.page_id should be a valid uuid"
        })))
        .mount(&server)
        .await;

    let submitter = create_test_submitter(env_for(&server, Some(PAGE_ID), None));
    let error = submitter.submit(BODY).await.unwrap_err();

    assert_eq!(error.category(), "invalid_identifier");
    assert_eq!(error.status_code(), 400);
}

#[tokio::test]
async fn test_other_validation_errors_stay_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "object": "error",
            "status": 400,
            "code": "validation_error",
            "message": "body.children[3] should be defined"
        })))
        .mount(&server)
        .await;

    let submitter = create_test_submitter(env_for(&server, Some(PAGE_ID), None));
    let error = submitter.submit(BODY).await.unwrap_err();

    assert_eq!(error.category(), "upstream_failure");
    assert_eq!(error.status_code(), 400);
}

#[tokio::test]
async fn test_unreadable_upstream_error_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let submitter = create_test_submitter(env_for(&server, Some(PAGE_ID), None));
    let error = submitter.submit(BODY).await.unwrap_err();

    assert_eq!(error.status_code(), 500);
    assert_eq!(error.to_string(), "Failed to create Notion page.");
    assert_eq!(error.details(), Some("Failed to create Notion page."));
}

#[tokio::test]
async fn test_rate_limit_status_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "object": "error",
            "status": 429,
            "code": "rate_limited",
            "message": "You have been rate limited."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = create_test_submitter(env_for(&server, Some(PAGE_ID), None));
    let error = submitter.submit(BODY).await.unwrap_err();

    assert_eq!(error.status_code(), 429);
    assert_eq!(error.category(), "upstream_failure");
}

#[tokio::test]
async fn test_failures_before_the_call_never_reach_notion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(created_page())
        .expect(0)
        .mount(&server)
        .await;

    let malformed = create_test_submitter(env_for(&server, Some(PAGE_ID), None));
    assert_eq!(
        malformed.submit(b"not json").await.unwrap_err().category(),
        "malformed_request"
    );

    let mut env = env_for(&server, Some(PAGE_ID), None);
    env.remove("NOTION_API_KEY");
    let unconfigured = create_test_submitter(env);
    let error = unconfigured.submit(BODY).await.unwrap_err();
    assert_eq!(
        error,
        SubmissionError::ConfigurationMissing {
            missing: vec!["NOTION_API_KEY".to_string()]
        }
    );

    let bad_id = create_test_submitter(env_for(&server, Some("not-an-id"), None));
    let error = bad_id.submit(BODY).await.unwrap_err();
    assert_eq!(error.category(), "invalid_identifier");
    assert_eq!(error.details(), Some("not-an-id"));
}

#[tokio::test]
async fn test_unreachable_notion_is_bad_gateway() {
    let server = MockServer::start().await;
    let mut env = env_for(&server, Some(PAGE_ID), None);
    env.insert(
        "NOTION_API_BASE_URL".to_string(),
        "http://127.0.0.1:1".to_string(),
    );

    let submitter = create_test_submitter(env);
    let error = submitter.submit(BODY).await.unwrap_err();

    assert!(matches!(
        error,
        SubmissionError::UpstreamFailure { status: 502, .. }
    ));
    assert_eq!(error.category(), "upstream_failure");
    assert_eq!(error.to_string(), "Failed to create Notion page.");
}
