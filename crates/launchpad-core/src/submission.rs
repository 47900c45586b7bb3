//! Submission pipeline: answers in, Notion page out.
//!
//! ```text
//! body ──parse──▶ ProjectAnswers
//!        config ──▶ NotionConfig ──resolve──▶ Parent
//!                   answers ──build──▶ NotionPayload
//!                   Parent + payload ──create_page──▶ CreatedPage
//! ```
//!
//! Every step short-circuits with a [`SubmissionError`]. There is exactly
//! one outbound call per submission and no retry.

use log::{debug, error, info, warn};

use crate::{
    config::{ConfigSource, NotionConfig},
    error::{Result, SubmissionError},
    identifier::{resolve_parent, Parent},
    models::{CreatePageRequest, CreatedPage, ProjectAnswers},
    notion::{ApiError, NotionApi},
    template::build_payload_today,
};

/// Parses a request body into answers.
///
/// # Errors
///
/// Returns `SubmissionError::MalformedRequest` when the body is not JSON,
/// is JSON but not an object, or has fields of the wrong type.
pub fn parse_answers(body: &[u8]) -> Result<ProjectAnswers> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| SubmissionError::malformed("Invalid JSON body."))?;
    if !value.is_object() {
        return Err(SubmissionError::malformed(
            "Request body must be a JSON object.",
        ));
    }
    serde_json::from_value(value).map_err(|e| {
        SubmissionError::malformed(format!(
            "Request body does not match the project answers shape: {e}"
        ))
    })
}

/// Whether an upstream message talks about the parent id fields.
fn mentions_parent_id(message: &str) -> bool {
    let message = message.to_lowercase();
    ["page_id", "database_id", "page id", "database id"]
        .iter()
        .any(|needle| message.contains(needle))
}

/// Maps a failed Notion call onto the user-facing taxonomy.
///
/// Notion's `code` field is consulted first; the message text is only used
/// to tell parent-id validation failures apart from other validation
/// failures.
pub fn classify_api_error(error: &ApiError, parent: &Parent) -> SubmissionError {
    let status = error.status();
    let code = error.code();
    let message = error.message();

    if status == Some(401) || code == Some("unauthorized") {
        return SubmissionError::Unauthorized {
            details: Some(message),
        };
    }

    let is_validation = code == Some("validation_error") || status == Some(400);
    if is_validation && mentions_parent_id(&message) {
        return SubmissionError::InvalidIdentifier {
            raw: parent.id().to_string(),
            message: "Notion rejected the parent identifier. Check NOTION_PARENT_PAGE_ID or NOTION_DATABASE_ID."
                .to_string(),
        };
    }

    SubmissionError::upstream(status).with_details(message)
}

/// Runs submissions against a Notion API implementation.
pub struct Submitter<A, C> {
    api: A,
    config: C,
}

impl<A, C> Submitter<A, C>
where
    A: NotionApi,
    C: ConfigSource,
{
    /// Creates a submitter reading configuration from `config` on every
    /// call.
    pub fn new(api: A, config: C) -> Self {
        Self { api, config }
    }

    /// Handles a raw request body.
    ///
    /// # Errors
    ///
    /// Any [`SubmissionError`] category; see the module docs for ordering.
    pub async fn submit(&self, body: &[u8]) -> Result<CreatedPage> {
        let answers = parse_answers(body).inspect_err(|e| warn!("Rejected submission: {e}"))?;
        self.submit_answers(&answers).await
    }

    /// Handles already-decoded answers.
    ///
    /// # Errors
    ///
    /// Any [`SubmissionError`] category except `MalformedRequest`.
    pub async fn submit_answers(&self, answers: &ProjectAnswers) -> Result<CreatedPage> {
        let config = NotionConfig::load(&self.config)
            .inspect_err(|e| warn!("Submission blocked by configuration: {e}"))?;
        let parent = resolve_parent(&config)
            .inspect_err(|e| warn!("Submission blocked by parent identifier: {e}"))?;

        let payload = build_payload_today(answers);
        debug!(
            "Creating page '{}' with {} blocks under {:?}",
            payload.title(),
            payload.children.len(),
            parent
        );

        let request = CreatePageRequest::new(&parent, &payload);
        match self.api.create_page(&config, &request).await {
            Ok(page) => {
                info!("Created Notion page {}", page.page_id);
                Ok(page)
            }
            Err(e) => {
                error!("Notion API error: {e}");
                Err(classify_api_error(&e, &parent))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
    };

    use super::*;
    use crate::{
        config::{ENV_DATABASE_ID, ENV_PARENT_PAGE_ID},
        error::ENV_API_KEY,
        identifier::normalize,
    };

    /// Records calls and replays a canned outcome.
    struct FakeNotion {
        calls: AtomicUsize,
        outcome: fn() -> std::result::Result<CreatedPage, ApiError>,
        last_parent: Mutex<Option<serde_json::Value>>,
    }

    impl FakeNotion {
        fn new(outcome: fn() -> std::result::Result<CreatedPage, ApiError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome,
                last_parent: Mutex::new(None),
            }
        }

        fn succeeding() -> Self {
            Self::new(|| {
                Ok(CreatedPage {
                    page_id: "page-1".to_string(),
                    page_url: "https://www.notion.so/page-1".to_string(),
                })
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl NotionApi for &FakeNotion {
        async fn create_page(
            &self,
            _config: &NotionConfig,
            request: &CreatePageRequest<'_>,
        ) -> std::result::Result<CreatedPage, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_parent.lock().unwrap() = Some(serde_json::to_value(request.parent).unwrap());
            (self.outcome)()
        }
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            (ENV_API_KEY, "secret"),
            (ENV_PARENT_PAGE_ID, "aa11aa11aa11aa11aa11aa11aa11aa11"),
        ])
    }

    fn page_parent() -> Parent {
        Parent::Page(normalize("aa11aa11aa11aa11aa11aa11aa11aa11").unwrap())
    }

    #[tokio::test]
    async fn test_non_json_body_is_rejected_without_calling_notion() {
        let fake = FakeNotion::succeeding();
        let submitter = Submitter::new(&fake, full_env());

        let error = submitter.submit(b"projectName=Apollo").await.unwrap_err();

        assert_eq!(error, SubmissionError::malformed("Invalid JSON body."));
        assert_eq!(error.status_code(), 400);
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_non_object_body_is_rejected() {
        let fake = FakeNotion::succeeding();
        let submitter = Submitter::new(&fake, full_env());

        let error = submitter.submit(b"[1, 2, 3]").await.unwrap_err();

        assert_eq!(
            error,
            SubmissionError::malformed("Request body must be a JSON object.")
        );
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_stops_before_resolution() {
        let fake = FakeNotion::succeeding();
        // The page id is invalid too; configuration must be reported first.
        let submitter = Submitter::new(&fake, env(&[(ENV_PARENT_PAGE_ID, "not-an-id")]));

        let error = submitter.submit(b"{}").await.unwrap_err();

        assert_eq!(
            error,
            SubmissionError::ConfigurationMissing {
                missing: vec![ENV_API_KEY.to_string()],
            }
        );
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_parent_stops_before_network() {
        let fake = FakeNotion::succeeding();
        let submitter = Submitter::new(
            &fake,
            env(&[(ENV_API_KEY, "secret"), (ENV_DATABASE_ID, "team-db")]),
        );

        let error = submitter.submit(b"{}").await.unwrap_err();

        assert_eq!(error.category(), "invalid_identifier");
        assert_eq!(error.details(), Some("team-db"));
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let fake = FakeNotion::succeeding();
        let submitter = Submitter::new(&fake, full_env());

        let page = submitter
            .submit(br#"{"projectName":"Apollo","tools":["github"]}"#)
            .await
            .unwrap();

        assert_eq!(page.page_id, "page-1");
        assert_eq!(fake.calls(), 1);
        assert_eq!(
            fake.last_parent.lock().unwrap().clone(),
            Some(serde_json::json!({ "page_id": "aa11aa11-aa11-aa11-aa11-aa11aa11aa11" }))
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_classified() {
        let fake = FakeNotion::new(|| {
            Err(ApiError::Http {
                status: 401,
                code: Some("unauthorized".to_string()),
                message: "API token is invalid.".to_string(),
            })
        });
        let submitter = Submitter::new(&fake, full_env());

        let error = submitter.submit(b"{}").await.unwrap_err();

        assert_eq!(error.category(), "unauthorized");
        assert_eq!(fake.calls(), 1);
    }

    #[test]
    fn test_classify_validation_error_on_parent() {
        let error = ApiError::Http {
            status: 400,
            code: Some("validation_error".to_string()),
            message: "body failed validation: body.parent.page_id should be a valid uuid"
                .to_string(),
        };

        let classified = classify_api_error(&error, &page_parent());

        assert_eq!(classified.category(), "invalid_identifier");
        assert_eq!(classified.status_code(), 400);
        assert!(classified.to_string().contains("parent identifier"));
    }

    #[test]
    fn test_classify_other_validation_error_is_upstream() {
        let error = ApiError::Http {
            status: 400,
            code: Some("validation_error".to_string()),
            message: "body.children[3].callout.rich_text should be defined".to_string(),
        };

        let classified = classify_api_error(&error, &page_parent());

        assert_eq!(
            classified,
            SubmissionError::UpstreamFailure {
                status: 400,
                details: Some("body.children[3].callout.rich_text should be defined".to_string()),
            }
        );
    }

    #[test]
    fn test_classify_rate_limit_keeps_status() {
        let error = ApiError::from_response(
            429,
            r#"{"code":"rate_limited","message":"You have been rate limited."}"#,
        );

        let classified = classify_api_error(&error, &page_parent());

        assert_eq!(classified.status_code(), 429);
        assert_eq!(classified.category(), "upstream_failure");
    }

    #[test]
    fn test_parse_answers_reports_shape_errors() {
        let error = parse_answers(br#"{"tools": 7}"#).unwrap_err();
        assert_eq!(error.category(), "malformed_request");
        assert!(error.to_string().contains("project answers shape"));
    }
}
