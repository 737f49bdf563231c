use crate::adapters::notion::NotionClient;
use crate::config::RelayConfig;
use crate::core::translate::build_page;
use crate::domain::model::{CreatedPage, InboundRequest, InboundResponse, Submission};
use crate::domain::ports::PageCreator;
use crate::utils::error::{RelayError, Result};
use serde_json::json;
use std::collections::BTreeMap;

pub const SUCCESS_MESSAGE: &str = "일기가 성공적으로 저장되었습니다!";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";

/// Turns one inbound journal submission into one Notion page.
///
/// Terminal outcomes are preflight (200, empty), method gate (405), saved
/// (200) and failed (500). Every response carries the CORS headers.
pub struct EntryTranslator<P: PageCreator> {
    config: RelayConfig,
    pages: P,
}

impl EntryTranslator<NotionClient> {
    pub fn from_config(config: RelayConfig) -> Self {
        let pages = NotionClient::new(config.base_url.clone());
        Self::new(config, pages)
    }
}

impl<P: PageCreator> EntryTranslator<P> {
    pub fn new(config: RelayConfig, pages: P) -> Self {
        Self { config, pages }
    }

    pub async fn handle(&self, request: &InboundRequest) -> InboundResponse {
        match request.http_method.as_str() {
            "OPTIONS" => return preflight_response(),
            "POST" => {}
            other => {
                tracing::debug!("Rejecting {} request", other);
                return json_response(405, json!({ "error": METHOD_NOT_ALLOWED_MESSAGE }));
            }
        }

        match self.save(request).await {
            Ok(page) => {
                tracing::info!("✅ Journal entry saved as Notion page {}", page.id);
                json_response(
                    200,
                    json!({
                        "success": true,
                        "message": SUCCESS_MESSAGE,
                        "pageId": page.id,
                    }),
                )
            }
            Err(e) => {
                tracing::error!("❌ 저장 오류: {} (category: {})", e, e.category());
                json_response(
                    500,
                    json!({
                        "success": false,
                        "error": e.to_string(),
                    }),
                )
            }
        }
    }

    async fn save(&self, request: &InboundRequest) -> Result<CreatedPage> {
        let credentials = self.config.credentials()?;

        let submission = parse_submission(request)?;
        tracing::debug!("Parsed submission for {}", submission.date);

        let page = build_page(&submission, credentials.database_id);
        self.pages.create_page(credentials, &page).await
    }
}

fn parse_submission(request: &InboundRequest) -> Result<Submission> {
    if let Some(message) = &request.body_error {
        return Err(RelayError::BodyError {
            message: message.clone(),
        });
    }
    if request.is_base64_encoded {
        return Err(RelayError::BodyError {
            message: "base64-encoded bodies are not supported".to_string(),
        });
    }

    let body = request.body.as_deref().unwrap_or_default();
    Ok(serde_json::from_str(body)?)
}

pub fn cors_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            "POST, OPTIONS".to_string(),
        ),
    ])
}

fn preflight_response() -> InboundResponse {
    InboundResponse {
        status_code: 200,
        headers: cors_headers(),
        body: String::new(),
    }
}

fn json_response(status_code: u16, payload: serde_json::Value) -> InboundResponse {
    let mut headers = cors_headers();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    InboundResponse {
        status_code,
        headers,
        body: payload.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExternalPage;
    use crate::domain::ports::NotionCredentials;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingPages {
        calls: Arc<Mutex<Vec<Value>>>,
        fail_with: Option<String>,
    }

    #[async_trait::async_trait]
    impl PageCreator for RecordingPages {
        async fn create_page(
            &self,
            credentials: NotionCredentials<'_>,
            page: &ExternalPage,
        ) -> Result<CreatedPage> {
            assert_eq!(credentials.api_key, "secret_test");
            self.calls
                .lock()
                .unwrap()
                .push(serde_json::to_value(page).unwrap());

            match &self.fail_with {
                Some(message) => Err(RelayError::NotionApiError {
                    status: 400,
                    message: message.clone(),
                }),
                None => Ok(CreatedPage {
                    id: "page_123".to_string(),
                }),
            }
        }
    }

    fn configured() -> RelayConfig {
        RelayConfig::new(Some("secret_test".to_string()), Some("db-1".to_string()))
    }

    fn post(body: &str) -> InboundRequest {
        InboundRequest::new("POST", Some(body.to_string()))
    }

    const SAMPLE: &str = r#"{"date":"2024-05-01","weather":"sunny","mood":"calm","answers":["A","B"],"freeNote":"n/a"}"#;

    fn body_json(response: &InboundResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[tokio::test]
    async fn test_preflight_ignores_config_and_body() {
        let translator = EntryTranslator::new(RelayConfig::new(None, None), RecordingPages::default());
        let mut request = InboundRequest::new("OPTIONS", Some("not json".to_string()));
        request.is_base64_encoded = true;

        let response = translator.handle(&request).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "");
        assert_eq!(response.headers, cors_headers());
    }

    #[tokio::test]
    async fn test_other_methods_are_rejected() {
        let pages = RecordingPages::default();
        let translator = EntryTranslator::new(configured(), pages.clone());

        for method in ["GET", "PUT", "DELETE", "PATCH", "post"] {
            let response = translator.handle(&InboundRequest::new(method, None)).await;
            assert_eq!(response.status_code, 405, "method {}", method);
            assert_eq!(body_json(&response), json!({ "error": "Method Not Allowed" }));
            assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        }
        assert!(pages.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_config_fails_every_post() {
        let pages = RecordingPages::default();
        for config in [
            RelayConfig::new(None, None),
            RelayConfig::new(Some("secret_test".to_string()), None),
            RelayConfig::new(None, Some("db-1".to_string())),
        ] {
            let translator = EntryTranslator::new(config, pages.clone());
            let response = translator.handle(&post(SAMPLE)).await;
            assert_eq!(response.status_code, 500);
            assert_eq!(
                body_json(&response),
                json!({
                    "success": false,
                    "error": "API 키 또는 데이터베이스 ID가 설정되지 않았습니다",
                })
            );
        }
        assert!(pages.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_success_returns_page_id() {
        let pages = RecordingPages::default();
        let translator = EntryTranslator::new(configured(), pages.clone());

        let response = translator.handle(&post(SAMPLE)).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(
            body_json(&response),
            json!({
                "success": true,
                "message": "일기가 성공적으로 저장되었습니다!",
                "pageId": "page_123",
            })
        );
        assert_eq!(response.headers["Content-Type"], "application/json");

        let calls = pages.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0]["parent"]["database_id"], "db-1");
        assert_eq!(
            calls[0]["properties"]["답변3"]["rich_text"][0]["text"]["content"],
            ""
        );
    }

    #[tokio::test]
    async fn test_remote_error_becomes_500() {
        let pages = RecordingPages {
            fail_with: Some("invalid database_id".to_string()),
            ..Default::default()
        };
        let translator = EntryTranslator::new(configured(), pages);

        let response = translator.handle(&post(SAMPLE)).await;
        assert_eq!(response.status_code, 500);
        assert_eq!(
            body_json(&response),
            json!({ "success": false, "error": "노션 API 오류: invalid database_id" })
        );
    }

    #[tokio::test]
    async fn test_date_is_forwarded_verbatim() {
        let pages = RecordingPages::default();
        let translator = EntryTranslator::new(configured(), pages.clone());

        for date in ["2024-05-01T09:30:00", "2024-05-01T09:30:00.000+09:00", "someday"] {
            let body = json!({
                "date": date,
                "weather": "w",
                "mood": "m",
                "answers": [],
                "freeNote": "f",
            });
            let response = translator.handle(&post(&body.to_string())).await;
            assert_eq!(response.status_code, 200, "date {}", date);
        }

        let calls = pages.calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0]["properties"]["날짜"]["date"]["start"], "2024-05-01T09:30:00");
        assert_eq!(
            calls[0]["properties"]["제목"]["title"][0]["text"]["content"],
            "2024-05-01T09:30:00의 일기"
        );
    }

    #[tokio::test]
    async fn test_malformed_bodies_fail_without_outbound_call() {
        let pages = RecordingPages::default();
        let translator = EntryTranslator::new(configured(), pages.clone());

        let missing_body = InboundRequest::new("POST", None);
        let mut base64 = post(SAMPLE);
        base64.is_base64_encoded = true;
        let invalid_utf8 = InboundRequest::from_bytes(
            "POST",
            b"{\"date\":\"2024-05-01\",\"weather\":\"\xff\",\"mood\":\"m\",\"freeNote\":\"f\"}",
        );

        for request in [post("{not json"), missing_body, base64, invalid_utf8] {
            let response = translator.handle(&request).await;
            assert_eq!(response.status_code, 500);
            let body = body_json(&response);
            assert_eq!(body["success"], false);
            assert!(!body["error"].as_str().unwrap().is_empty());
        }
        assert!(pages.calls.lock().unwrap().is_empty());
    }
}
