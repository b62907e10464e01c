//! Environment API key resolution.
//!
//! The provider credential only ever comes from the environment. A missing,
//! empty, or non-Unicode `ANTHROPIC_API_KEY` all mean the same thing:
//! run without a provider and serve fallback copy.

use secrecy::SecretString;

use copysmith_core::provider::BoxCopyProvider;
use copysmith_types::config::ProviderConfig;
use copysmith_types::error::ProviderError;

use crate::anthropic::AnthropicProvider;

/// Environment variable holding the Anthropic API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Read the API key from the process environment.
pub fn resolve_api_key() -> Option<SecretString> {
    api_key_from(std::env::var(API_KEY_ENV).ok())
}

fn api_key_from(value: Option<String>) -> Option<SecretString> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

/// Build the configured provider, or `None` when no key is available.
pub fn build_provider(
    api_key: Option<SecretString>,
    config: &ProviderConfig,
) -> Result<Option<BoxCopyProvider>, ProviderError> {
    let Some(key) = api_key else {
        tracing::info!("{API_KEY_ENV} not set, serving fallback copy only");
        return Ok(None);
    };

    let provider = AnthropicProvider::new(key, config)?;
    tracing::info!(model = %provider.model(), "anthropic provider configured");
    Ok(Some(BoxCopyProvider::new(provider)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use copysmith_core::provider::CopyProvider;
    use secrecy::ExposeSecret;

    #[test]
    fn test_api_key_present() {
        let key = api_key_from(Some("sk-ant-test".to_string())).unwrap();
        assert_eq!(key.expose_secret(), "sk-ant-test");
    }

    #[test]
    fn test_api_key_missing_or_blank() {
        assert!(api_key_from(None).is_none());
        assert!(api_key_from(Some(String::new())).is_none());
        assert!(api_key_from(Some("   ".to_string())).is_none());
    }

    #[test]
    fn test_build_provider_without_key() {
        let provider = build_provider(None, &ProviderConfig::default()).unwrap();
        assert!(provider.is_none());
    }

    #[test]
    fn test_build_provider_with_key() {
        let provider = build_provider(
            Some(SecretString::from("sk-ant-test")),
            &ProviderConfig::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(provider.name(), "anthropic");
    }
}
