//! Application state shared by the REST handlers and the in-process CLI path.
//!
//! Everything here is immutable after startup; handlers only ever read it.

use std::sync::Arc;

use copysmith_core::provider::BoxCopyProvider;
use copysmith_core::service::CopyService;
use copysmith_infra::secret::{build_provider, resolve_api_key};
use copysmith_types::config::CopysmithConfig;

/// Copy service pinned to the type-erased provider.
pub type ConcreteCopyService = CopyService<BoxCopyProvider>;

#[derive(Clone)]
pub struct AppState {
    pub copy_service: Arc<ConcreteCopyService>,
    pub config: Arc<CopysmithConfig>,
}

impl AppState {
    /// Wire the copy service, picking up `ANTHROPIC_API_KEY` from the
    /// environment.
    pub fn init(config: CopysmithConfig) -> anyhow::Result<Self> {
        let provider = build_provider(resolve_api_key(), &config.provider)?;
        Ok(Self::with_provider(config, provider))
    }

    pub fn with_provider(config: CopysmithConfig, provider: Option<BoxCopyProvider>) -> Self {
        Self {
            copy_service: Arc::new(CopyService::new(provider)),
            config: Arc::new(config),
        }
    }
}
