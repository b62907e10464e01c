//! AnthropicProvider -- concrete [`CopyProvider`] implementation for Anthropic Claude.
//!
//! Sends one request to the Anthropic Messages API (`/v1/messages`) with the
//! prompt as the sole user message.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use copysmith_core::provider::CopyProvider;
use copysmith_types::config::ProviderConfig;
use copysmith_types::error::ProviderError;

use super::types::{AnthropicMessage, AnthropicRequest, AnthropicResponse};

/// Anthropic Claude copy provider.
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// The Anthropic API version header value.
    const API_VERSION: &'static str = "2023-06-01";

    /// Create a provider from the `[provider]` config section.
    ///
    /// A timeout is only applied when `timeout_secs` is set.
    pub fn new(api_key: SecretString, config: &ProviderConfig) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn to_anthropic_request(&self, prompt: &str) -> AnthropicRequest {
        AnthropicRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![AnthropicMessage::user(prompt)],
        }
    }
}

// No Debug derive: keeps the client and key out of formatted output entirely.

impl CopyProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = self.to_anthropic_request(prompt);
        let url = self.url("/v1/messages");

        tracing::debug!(url = %url, model = %self.model, "anthropic messages request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", Self::API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %error_body, "Anthropic API error response");
            return Err(match status.as_u16() {
                401 => ProviderError::AuthenticationFailed,
                429 => ProviderError::RateLimited,
                529 => ProviderError::Overloaded(error_body),
                code => ProviderError::Status {
                    status: code,
                    body: error_body,
                },
            });
        }

        let anthropic_resp: AnthropicResponse = response.json().await.map_err(|e| {
            ProviderError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        anthropic_resp.text().ok_or(ProviderError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};

    fn config_for(base_url: String) -> ProviderConfig {
        ProviderConfig {
            base_url,
            ..ProviderConfig::default()
        }
    }

    fn make_provider(base_url: String) -> AnthropicProvider {
        AnthropicProvider::new(SecretString::from("test-key-not-real"), &config_for(base_url))
            .unwrap()
    }

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn spawn_mock(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn echo_handler(
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> Json<serde_json::Value> {
        let key = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let version = headers
            .get("anthropic-version")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
        let text = format!(
            "{key}|{version}|{}|{}|{}",
            body["model"], body["max_tokens"], prompt
        );
        Json(serde_json::json!({
            "id": "msg_1",
            "content": [{"type": "text", "text": text}],
            "model": body["model"],
            "stop_reason": "end_turn"
        }))
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = make_provider("https://api.anthropic.com".to_string());
        assert_eq!(provider.name(), "anthropic");
        assert_eq!(provider.model(), "claude-3-5-sonnet-20241022");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = make_provider("http://localhost:8080/".to_string());
        assert_eq!(provider.url("/v1/messages"), "http://localhost:8080/v1/messages");
    }

    #[test]
    fn test_to_anthropic_request() {
        let provider = make_provider("http://localhost".to_string());
        let req = provider.to_anthropic_request("Write a tagline");
        assert_eq!(req.model, "claude-3-5-sonnet-20241022");
        assert_eq!(req.max_tokens, 1024);
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");
        assert_eq!(req.messages[0].content, "Write a tagline");
    }

    #[tokio::test]
    async fn test_complete_sends_headers_and_body() {
        let base = spawn_mock(Router::new().route("/v1/messages", post(echo_handler))).await;
        let provider = make_provider(base);

        let text = provider.complete("Write a tagline").await.unwrap();
        assert_eq!(
            text,
            "test-key-not-real|2023-06-01|\"claude-3-5-sonnet-20241022\"|1024|Write a tagline"
        );
    }

    #[tokio::test]
    async fn test_complete_maps_error_statuses() {
        let router = Router::new()
            .route("/401/v1/messages", post(|| async { StatusCode::UNAUTHORIZED }))
            .route("/429/v1/messages", post(|| async { StatusCode::TOO_MANY_REQUESTS }))
            .route(
                "/500/v1/messages",
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );
        let base = spawn_mock(router).await;

        let err = make_provider(format!("{base}/401"))
            .complete("x")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::AuthenticationFailed));

        let err = make_provider(format!("{base}/429"))
            .complete("x")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::RateLimited));

        let err = make_provider(format!("{base}/500"))
            .complete("x")
            .await
            .unwrap_err();
        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_rejects_malformed_body() {
        let router = Router::new()
            .route(
                "/garbage/v1/messages",
                post(|| async { "definitely not json" }),
            )
            .route(
                "/empty/v1/messages",
                post(|| async { Json(serde_json::json!({"content": []})) }),
            );
        let base = spawn_mock(router).await;

        let err = make_provider(format!("{base}/garbage"))
            .complete("x")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Deserialization(_)));

        let err = make_provider(format!("{base}/empty"))
            .complete("x")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_complete_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = make_provider(format!("http://{addr}"))
            .complete("x")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }
}
