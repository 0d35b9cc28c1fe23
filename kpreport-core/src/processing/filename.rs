//! Filename pattern extraction.
//!
//! Media files carry their catalog identity in the name itself:
//!
//! ```text
//! [anything][sNNeNN][_]coid<digits>[anything]_r<width>x<height>p[anything]
//! ```
//!
//! One fixed pattern is accepted. A name that does not match is rejected
//! outright instead of being partially parsed.

use crate::error::{CoreError, CoreResult};

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern shown to the user when a filename is rejected.
pub const FILENAME_PATTERN_HINT: &str = r".*coid(\d+).*_r(\d+)x(\d+)p.*";

static FILENAME_RE: Lazy<Regex> = Lazy::new(|| {
    // ASCII digits only.
    Regex::new(r".*?(?:s([0-9]{2})e([0-9]{2,4}))?_?coid([0-9]+).*_r([0-9]+)x([0-9]+)p.*")
        .expect("filename pattern is a valid regex")
});

/// Identity fields encoded in a media filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameFields {
    pub season: Option<String>,
    pub episode: Option<String>,
    /// Numeric catalog id, never empty
    pub catalog_id: String,
    /// Width from the `_rWxHp` marker, 0 when it does not fit in a u64
    pub width: u64,
    /// Height from the `_rWxHp` marker, 0 when it does not fit in a u64
    pub height: u64,
}

impl FilenameFields {
    /// Season number as written in the name, or "" when absent.
    pub fn season_str(&self) -> &str {
        self.season.as_deref().unwrap_or_default()
    }

    /// Episode number as written in the name, or "" when absent.
    pub fn episode_str(&self) -> &str {
        self.episode.as_deref().unwrap_or_default()
    }
}

/// Parses a bare file name (no directory part) into its identity fields.
///
/// # Errors
///
/// `CoreError::MalformedFilename` when the name does not follow the pattern.
///
/// # Examples
///
/// ```rust
/// use kpreport_core::processing::filename::parse_filename;
///
/// let fields = parse_filename("s01e02coid12345_r1920x1080p.mp4").unwrap();
/// assert_eq!(fields.catalog_id, "12345");
/// assert_eq!(fields.season.as_deref(), Some("01"));
/// assert_eq!((fields.width, fields.height), (1920, 1080));
/// ```
pub fn parse_filename(file_name: &str) -> CoreResult<FilenameFields> {
    let malformed = || CoreError::MalformedFilename {
        file_name: file_name.to_string(),
        expected: FILENAME_PATTERN_HINT,
    };

    let caps = FILENAME_RE.captures(file_name).ok_or_else(malformed)?;

    let catalog_id = caps
        .get(3)
        .map(|m| m.as_str())
        .filter(|id| !id.is_empty())
        .ok_or_else(malformed)?
        .to_string();

    let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string());
    let dimension = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    let fields = FilenameFields {
        season: group(1),
        episode: group(2),
        catalog_id,
        width: dimension(4),
        height: dimension(5),
    };
    log::debug!("Parsed '{}': {:?}", file_name, fields);
    Ok(fields)
}
