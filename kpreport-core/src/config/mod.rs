//! Configuration structures and constants for the kpreport-core library.
//!
//! The configuration is an explicit value handed to the batch driver at
//! construction. Nothing in the library reads process-wide mutable state.

mod builder;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::processing::duration_bucket::DurationBuckets;

pub use builder::CoreConfigBuilder;

// Default constants

/// Default name of the newline-delimited list of media paths.
pub const DEFAULT_INPUT_LIST: &str = "fileList.txt";

/// Default name of the tab-separated report file.
pub const DEFAULT_OUTPUT_FILE: &str = "report.txt";

/// Nominal runtimes (minutes) a file's duration is reported under.
pub const DEFAULT_DURATION_BUCKETS: [u32; 5] = [90, 60, 30, 10, 5];

/// Catalog endpoint baked in at build time, if any. The id is appended to it.
pub const BUILTIN_API_URL: Option<&str> = option_env!("KPREPORT_API_URL");

/// Catalog client id baked in at build time, if any.
pub const BUILTIN_CLIENT_ID: Option<&str> = option_env!("KPREPORT_CLIENT_ID");

/// Settings for the external catalog lookup.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Base URL; the catalog id is appended verbatim.
    pub api_url: String,

    /// Value sent in the `Clientid` header. Lookups fail without it.
    pub client_id: Option<String>,

    /// Request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
}

/// Main configuration structure for the kpreport-core library.
///
/// # Examples
///
/// ```rust
/// use kpreport_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .input_list("fileList.txt")
///     .output_path("report.txt")
///     .duration_buckets(vec![90, 60, 30, 10, 5])
///     .api_url("https://catalog.example/api/films/")
///     .client_id("secret")
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Newline-delimited list of media file paths
    pub input_list: PathBuf,

    /// Report file, truncated at the start of every run
    pub output_path: PathBuf,

    /// Duration bucket thresholds in minutes, any order
    pub duration_buckets: Vec<u32>,

    /// Catalog lookup settings
    pub catalog: CatalogConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            input_list: PathBuf::from(DEFAULT_INPUT_LIST),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            duration_buckets: DEFAULT_DURATION_BUCKETS.to_vec(),
            catalog: CatalogConfig {
                api_url: BUILTIN_API_URL.unwrap_or_default().to_string(),
                client_id: BUILTIN_CLIENT_ID.map(str::to_string),
                timeout: None,
            },
        }
    }
}

impl CoreConfig {
    /// Creates a configuration with default buckets and catalog settings.
    pub fn new(input_list: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_list,
            output_path,
            ..Self::default()
        }
    }

    /// Checks the configuration for values the pipeline cannot work with.
    ///
    /// A missing client id is not rejected here; the catalog client reports
    /// it as `CredentialMissing` on the first lookup.
    pub fn validate(&self) -> CoreResult<()> {
        DurationBuckets::new(&self.duration_buckets)?;

        if self.catalog.api_url.trim().is_empty() {
            return Err(CoreError::Config(
                "catalog API URL is not provided".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> CoreConfig {
        let mut config = CoreConfig::new(PathBuf::from("list.txt"), PathBuf::from("out.txt"));
        config.catalog.api_url = "http://localhost/films/".to_string();
        config
    }

    #[test]
    fn test_default_values() {
        let config = CoreConfig::default();
        assert_eq!(config.input_list, PathBuf::from("fileList.txt"));
        assert_eq!(config.output_path, PathBuf::from("report.txt"));
        assert_eq!(config.duration_buckets, vec![90, 60, 30, 10, 5]);
        assert!(config.catalog.timeout.is_none());
    }

    #[test]
    fn test_validate_accepts_defaults_with_url() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_buckets() {
        let mut config = valid_config();
        config.duration_buckets.clear();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_bucket() {
        let mut config = valid_config();
        config.duration_buckets = vec![60, 0];
        match config.validate() {
            Err(CoreError::Config(msg)) => assert!(msg.contains("positive")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_missing_url() {
        let mut config = valid_config();
        config.catalog.api_url = "  ".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
