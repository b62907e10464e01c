//! CopyProvider trait and its type-erased wrapper.
//!
//! `CopyProvider` uses native async fn in traits (RPITIT), which makes it
//! not object-safe. `BoxCopyProvider` restores dynamic dispatch with the
//! usual blanket-impl pattern:
//! 1. An object-safe `CopyProviderDyn` trait with boxed futures
//! 2. Blanket-impl `CopyProviderDyn` for all `T: CopyProvider`
//! 3. `BoxCopyProvider` wraps `Box<dyn CopyProviderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use copysmith_types::error::ProviderError;

/// A backend that turns a prompt into generated text.
///
/// Implementations live in copysmith-infra (e.g., `AnthropicProvider`).
pub trait CopyProvider: Send + Sync {
    /// Human-readable provider name (e.g., "anthropic").
    fn name(&self) -> &str;

    /// Send the prompt as the sole user message and return the reply text.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

/// Object-safe version of [`CopyProvider`].
pub trait CopyProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>>;
}

impl<T: CopyProvider> CopyProviderDyn for T {
    fn name(&self) -> &str {
        CopyProvider::name(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>> {
        Box::pin(self.complete(prompt))
    }
}

/// Type-erased provider for runtime provider selection.
pub struct BoxCopyProvider {
    inner: Box<dyn CopyProviderDyn>,
}

impl BoxCopyProvider {
    pub fn new<T: CopyProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }
}

impl CopyProvider for BoxCopyProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.inner.complete_boxed(prompt).await
    }
}
