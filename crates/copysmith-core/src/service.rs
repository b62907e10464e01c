//! Generation dispatcher.
//!
//! `CopyService` owns an optional provider. With a provider it makes one
//! attempt and masks any failure with the fallback generator; without one
//! it never touches the network. `generate` cannot fail.

use std::fmt;

use copysmith_types::copy::CopyRequest;

use crate::fallback::generate_fallback;
use crate::prompt::build_prompt;
use crate::provider::CopyProvider;

/// Why the fallback generator produced the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No API credential configured.
    NoCredential,
    /// The provider returned an error status, failed in transport, or sent
    /// an unusable body.
    ProviderFailed,
}

/// Where a piece of generated copy came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopySource {
    Provider(String),
    Fallback(FallbackReason),
}

impl fmt::Display for CopySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopySource::Provider(name) => write!(f, "{name}"),
            CopySource::Fallback(FallbackReason::NoCredential) => write!(f, "fallback:no_credential"),
            CopySource::Fallback(FallbackReason::ProviderFailed) => {
                write!(f, "fallback:provider_failed")
            }
        }
    }
}

/// Generated copy plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub text: String,
    pub source: CopySource,
}

/// Builds prompts and dispatches them to the provider or the fallback.
pub struct CopyService<P> {
    provider: Option<P>,
}

impl<P: CopyProvider> CopyService<P> {
    /// `None` runs in fallback-only mode.
    pub fn new(provider: Option<P>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.name())
    }

    /// Build the prompt for `request` and dispatch it.
    pub async fn generate(&self, request: &CopyRequest) -> Generated {
        let prompt = build_prompt(request);
        tracing::debug!(copy_type = %request.copy_type, tone = %request.tone, "built prompt");
        self.dispatch(&prompt).await
    }

    /// Send a finished prompt to the provider, falling back on any failure.
    pub async fn dispatch(&self, prompt: &str) -> Generated {
        let Some(provider) = &self.provider else {
            return Generated {
                text: generate_fallback(prompt),
                source: CopySource::Fallback(FallbackReason::NoCredential),
            };
        };

        match provider.complete(prompt).await {
            Ok(text) => Generated {
                text,
                source: CopySource::Provider(provider.name().to_string()),
            },
            Err(err) => {
                tracing::warn!(provider = provider.name(), error = %err, "provider call failed, using fallback copy");
                Generated {
                    text: generate_fallback(prompt),
                    source: CopySource::Fallback(FallbackReason::ProviderFailed),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::BoxCopyProvider;
    use copysmith_types::copy::{CopyType, Tone};
    use copysmith_types::error::ProviderError;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CannedProvider {
        reply: Result<String, fn() -> ProviderError>,
        calls: Arc<AtomicUsize>,
    }

    impl CopyProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make_err) => Err(make_err()),
            }
        }
    }

    fn tagline_request() -> CopyRequest {
        CopyRequest {
            copy_type: CopyType::Tagline,
            product: "Acme Suite".to_string(),
            target_audience: "SMBs".to_string(),
            key_benefits: "fast, cheap".to_string(),
            tone: Tone::Playful,
            additional_info: None,
        }
    }

    #[tokio::test]
    async fn test_no_provider_uses_fallback() {
        let service: CopyService<BoxCopyProvider> = CopyService::new(None);
        let generated = service.generate(&tagline_request()).await;

        assert_eq!(generated.source, CopySource::Fallback(FallbackReason::NoCredential));
        assert!(generated.text.starts_with("**Option 1:** Acme Suite - Work Smarter, Achieve More"));
        assert!(generated.text.contains("**Option 5:**"));
    }

    #[tokio::test]
    async fn test_provider_success_returns_provider_text() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = CopyService::new(Some(CannedProvider {
            reply: Ok("Acme Suite: speed you can afford.".to_string()),
            calls: calls.clone(),
        }));

        let generated = service.generate(&tagline_request()).await;
        assert_eq!(generated.text, "Acme Suite: speed you can afford.");
        assert_eq!(generated.source, CopySource::Provider("canned".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_matches_no_credential_output() {
        let failures: [fn() -> ProviderError; 4] = [
            || ProviderError::Status { status: 500, body: "boom".to_string() },
            || ProviderError::Transport("connection refused".to_string()),
            || ProviderError::Deserialization("missing content".to_string()),
            || ProviderError::AuthenticationFailed,
        ];

        let baseline: CopyService<BoxCopyProvider> = CopyService::new(None);
        let expected = baseline.generate(&tagline_request()).await.text;

        for make_err in failures {
            let calls = Arc::new(AtomicUsize::new(0));
            let service = CopyService::new(Some(CannedProvider {
                reply: Err(make_err),
                calls: calls.clone(),
            }));
            let generated = service.generate(&tagline_request()).await;
            assert_eq!(generated.text, expected);
            assert_eq!(generated.source, CopySource::Fallback(FallbackReason::ProviderFailed));
            assert_eq!(calls.load(Ordering::SeqCst), 1, "no retries");
        }
    }

    #[test]
    fn test_source_display() {
        assert_eq!(CopySource::Provider("anthropic".into()).to_string(), "anthropic");
        assert_eq!(
            CopySource::Fallback(FallbackReason::NoCredential).to_string(),
            "fallback:no_credential"
        );
    }
}
