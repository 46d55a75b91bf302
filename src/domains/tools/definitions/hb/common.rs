//! Shared request builder for Honeybadger tools.
//!
//! Every tool goes through [`fetch_project_resource`]: it composes the
//! project-scoped URL, attaches only the filters that are present, issues an
//! authenticated GET through the shared session client, and maps the outcome
//! to a JSON payload or a [`ToolError`].

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::Session;
use crate::domains::tools::ToolError;

/// Fetch a resource under `/projects/<project_id>/` from the Honeybadger API.
///
/// `segments` are appended to the project path one by one and percent-encoded
/// by the URL type, so a fault id containing reserved characters never reaches
/// the request line raw. `filters` is serialized into the query string;
/// optional fields must use `skip_serializing_if` so unset filters are
/// omitted entirely rather than sent as empty markers.
pub async fn fetch_project_resource<F>(
    session: &Session,
    segments: &[&str],
    filters: &F,
) -> Result<serde_json::Value, ToolError>
where
    F: Serialize + ?Sized,
{
    let mut url = session.base_url().clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ToolError::internal("Honeybadger base URL cannot be a base"))?;
        path.push("projects").push(session.project_id());
        for segment in segments {
            path.push(segment);
        }
    }

    debug!("Making request to: {}", url);
    debug!("Using API key: {}...", session.api_key_prefix());
    debug!("Using project ID: {}", session.project_id());

    let response = session
        .client()
        .get(url)
        .query(filters)
        .basic_auth(session.api_key(), None::<&str>)
        .send()
        .await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await?;
        warn!("Error from Honeybadger API: HTTP {} - {}", status, body);
        return Err(ToolError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    // A 200 with an unparseable body means the upstream contract is broken;
    // keep it distinct from an HTTP-level error.
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Wrap a successful upstream payload under its result key, e.g.
/// `{"faults": <payload>}`.
pub fn payload_result(key: &str, payload: serde_json::Value) -> CallToolResult {
    let body = serde_json::json!({ key: payload });
    CallToolResult::success(vec![Content::text(render(&body))])
}

/// Wrap a failure into the uniform `{"error": <message>}` result shape.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    let body = serde_json::json!({ "error": message });
    CallToolResult::error(vec![Content::text(render(&body))])
}

fn render(body: &serde_json::Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}


#[cfg(test)]
mod tests {
    use serde::Serialize;
    use wiremock::matchers::{basic_auth, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::test_support::mock_session;
    use super::*;

    #[derive(Serialize)]
    struct NoFilters {}

    #[tokio::test]
    async fn test_fetch_success_parses_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/proj_42/faults"))
            .and(basic_auth("hbp_test_key", ""))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results":[]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let session = mock_session(&server.uri());
        let payload = fetch_project_resource(&session, &["faults"], &NoFilters {})
            .await
            .unwrap();
        assert_eq!(payload, serde_json::json!({"results": []}));
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/proj_42/faults"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let session = mock_session(&server.uri());
        let err = fetch_project_resource(&session, &["faults"], &NoFilters {})
            .await
            .unwrap_err();
        match err {
            ToolError::Upstream { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_200_with_invalid_json_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/proj_42/faults"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>surprise</html>"))
            .mount(&server)
            .await;

        let session = mock_session(&server.uri());
        let err = fetch_project_resource(&session, &["faults"], &NoFilters {})
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_fetch_path_escapes_segments() {
        let server = MockServer::start().await;
        // A fault id with a space must be percent-encoded in the request line.
        Mock::given(method("GET"))
            .and(path("/projects/proj_42/faults/abc%20123/notices"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let session = mock_session(&server.uri());
        let payload =
            fetch_project_resource(&session, &["faults", "abc 123", "notices"], &NoFilters {})
                .await
                .unwrap();
        assert_eq!(payload, serde_json::json!({}));
    }

    #[test]
    fn test_error_result_shape() {
        let result = error_result("HTTP 404 - Not Found");
        assert_eq!(result.is_error, Some(true));
        let body = test_support::result_json(&result);
        assert_eq!(body, serde_json::json!({"error": "HTTP 404 - Not Found"}));
    }

    #[test]
    fn test_payload_result_shape() {
        let result = payload_result("faults", serde_json::json!({"results": []}));
        assert_ne!(result.is_error, Some(true));
        let body = test_support::result_json(&result);
        assert_eq!(body, serde_json::json!({"faults": {"results": []}}));
    }
}
