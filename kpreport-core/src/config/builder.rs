// ============================================================================
// kpreport-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every setter is optional; unset values
// keep the CoreConfig defaults.

use std::path::PathBuf;
use std::time::Duration;

use super::CoreConfig;

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new builder seeded with `CoreConfig::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the newline-delimited input list path.
    #[must_use]
    pub fn input_list(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_list = path.into();
        self
    }

    /// Sets the report file path.
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Sets the duration bucket thresholds (minutes, any order).
    #[must_use]
    pub fn duration_buckets(mut self, buckets: Vec<u32>) -> Self {
        self.config.duration_buckets = buckets;
        self
    }

    /// Sets the catalog base URL.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.catalog.api_url = url.into();
        self
    }

    /// Sets the catalog client id.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config.catalog.client_id = Some(client_id.into());
        self
    }

    /// Sets the catalog request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.catalog.timeout = Some(timeout);
        self
    }

    /// Builds the configuration. Call `validate()` on the result before use.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
