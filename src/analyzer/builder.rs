//! Builder for configuring analyzer instances

use std::sync::Arc;
use std::time::Duration;

use crate::reachability::{AlwaysReachable, Reachability};
use crate::router::{Credential, DEFAULT_BASE_URL, Router};
use crate::{Result, TagLensError};

use super::ImageAnalyzer;

/// Per-request timeout applied uniformly to all three API calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Main entry point for creating analyzer instances.
pub struct TagLens;

impl TagLens {
    /// Create a new builder for configuring the analyzer.
    pub fn builder() -> TagLensBuilder {
        TagLensBuilder::new()
    }
}

/// Builder for configuring analyzer instances.
pub struct TagLensBuilder {
    base_url: String,
    credential: Option<Credential>,
    timeout: Duration,
    reachability: Arc<dyn Reachability>,
}

impl TagLensBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credential: None,
            timeout: DEFAULT_TIMEOUT,
            reachability: Arc::new(AlwaysReachable),
        }
    }

    /// Point the client at a different base URL (e.g. a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the static authorization credential (required).
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Override the uniform per-request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Inject a network reachability probe.
    pub fn reachability(mut self, probe: impl Reachability + 'static) -> Self {
        self.reachability = Arc::new(probe);
        self
    }

    /// Build the analyzer.
    ///
    /// Fails fast with a configuration error when the base URL cannot
    /// be parsed or no credential was provided — nothing touches the
    /// network past a successful build.
    pub fn build(self) -> Result<ImageAnalyzer> {
        let credential = self
            .credential
            .ok_or_else(|| TagLensError::Configuration("no credential configured".into()))?;
        let router = Router::new(&self.base_url, credential)?;
        Ok(ImageAnalyzer::new(router, self.timeout, self.reachability))
    }
}

impl Default for TagLensBuilder {
    fn default() -> Self {
        Self::new()
    }
}
