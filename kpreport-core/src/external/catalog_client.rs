//! HTTP client for the KinoPoisk-style catalog API.
//!
//! `GET {api_url}{id}` with a `Clientid` header returns
//! `{"title": ..., "originalTitle": ..., "type": ...}`. The body is decoded
//! using the charset announced in `Content-Type`.

use crate::config::CatalogConfig;
use crate::error::{CoreError, CoreResult, LookupFailure};
use crate::external::{CatalogEntry, CatalogLookup};

use reqwest::blocking::Client;
use serde::Deserialize;

const CLIENT_ID_HEADER: &str = "Clientid";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogResponse {
    title: String,
    #[serde(rename = "originalTitle")]
    original_title: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Blocking catalog client. One request per lookup, no retries.
#[derive(Debug, Clone)]
pub struct KinopoiskClient {
    client: Client,
    api_url: String,
    client_id: Option<String>,
}

impl KinopoiskClient {
    /// Builds the client. Without a configured timeout requests may block
    /// indefinitely.
    pub fn new(config: &CatalogConfig) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            client_id: config.client_id.clone(),
        })
    }
}

impl CatalogLookup for KinopoiskClient {
    fn lookup(&self, catalog_id: &str) -> CoreResult<CatalogEntry> {
        let client_id = self
            .client_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(CoreError::CredentialMissing)?;

        let fail = |cause| CoreError::CatalogLookupFailed {
            id: catalog_id.to_string(),
            cause,
        };

        let url = format!("{}{}", self.api_url, catalog_id);
        log::debug!("Catalog request: GET {url}");

        let response = self
            .client
            .get(&url)
            .header(CLIENT_ID_HEADER, client_id)
            .send()
            .map_err(|e| fail(LookupFailure::Network(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(LookupFailure::Status(status.as_u16())));
        }

        let body = response
            .text()
            .map_err(|e| fail(LookupFailure::Decode(e.to_string())))?;

        parse_catalog_response(catalog_id, &body)
    }
}

/// Turns a catalog response body into an entry.
///
/// The display title is `title`, or `originalTitle` when `title` is empty.
pub fn parse_catalog_response(catalog_id: &str, body: &str) -> CoreResult<CatalogEntry> {
    let fail = |cause| CoreError::CatalogLookupFailed {
        id: catalog_id.to_string(),
        cause,
    };

    let response: CatalogResponse =
        serde_json::from_str(body).map_err(|e| fail(LookupFailure::Parse(e.to_string())))?;

    let title = if response.title.is_empty() {
        &response.original_title
    } else {
        &response.title
    };

    let entry = CatalogEntry::from_parts(title, &response.kind)
        .ok_or_else(|| fail(LookupFailure::Incomplete))?;
    log::debug!(
        "Catalog id {catalog_id}: '{}' ({})",
        entry.display_title,
        entry.category
    );
    Ok(entry)
}
