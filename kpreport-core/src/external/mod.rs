// ============================================================================
// kpreport-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL COLLABORATORS: Catalog Lookup and Duration Probe
//
// The pipeline consults two black boxes per file: the HTTP catalog that turns
// a numeric id into a title and a category, and ffprobe for the playback
// duration. Both sit behind traits so the batch driver can be exercised with
// in-memory implementations.

use crate::error::CoreResult;

use std::fmt;
use std::path::Path;

pub mod catalog_client;
pub mod ffprobe_executor;

pub use catalog_client::{KinopoiskClient, parse_catalog_response};
pub use ffprobe_executor::FfprobeDurationProbe;

/// Content category reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentCategory {
    Movie,
    Show,
    Other(String),
}

impl ContentCategory {
    /// Maps the catalog's `type` string. Unknown values are kept verbatim.
    pub fn from_catalog(kind: &str) -> Self {
        match kind {
            "MOVIE" => ContentCategory::Movie,
            "SHOW" => ContentCategory::Show,
            other => ContentCategory::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentCategory::Movie => f.write_str("MOVIE"),
            ContentCategory::Show => f.write_str("SHOW"),
            ContentCategory::Other(kind) => f.write_str(kind),
        }
    }
}

/// Title and category for one catalog id. Built per file, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub display_title: String,
    pub category: ContentCategory,
}

impl CatalogEntry {
    /// Returns `None` when either the title or the category string is empty.
    pub fn from_parts(title: &str, kind: &str) -> Option<Self> {
        if title.is_empty() || kind.is_empty() {
            return None;
        }
        Some(Self {
            display_title: title.to_string(),
            category: ContentCategory::from_catalog(kind),
        })
    }
}

/// Resolves a catalog id to its entry.
pub trait CatalogLookup {
    fn lookup(&self, catalog_id: &str) -> CoreResult<CatalogEntry>;
}

/// Reports a media file's duration as the raw seconds string the prober gave.
pub trait DurationProbe {
    fn probe_duration(&self, path: &Path) -> CoreResult<String>;
}

impl<T: CatalogLookup + ?Sized> CatalogLookup for &T {
    fn lookup(&self, catalog_id: &str) -> CoreResult<CatalogEntry> {
        (**self).lookup(catalog_id)
    }
}

impl<T: DurationProbe + ?Sized> DurationProbe for &T {
    fn probe_duration(&self, path: &Path) -> CoreResult<String> {
        (**self).probe_duration(path)
    }
}
