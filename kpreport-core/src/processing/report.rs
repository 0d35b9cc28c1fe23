//! Report record composition.
//!
//! Each processed file yields one `ReportRecord`. It renders two ways: a
//! tab-separated line for the report file and a column-aligned line for the
//! console.

use crate::external::{CatalogEntry, ContentCategory};
use crate::processing::duration_bucket::{DurationBuckets, duration_label};
use crate::processing::filename::FilenameFields;
use crate::processing::resolution::ResolutionClass;
use crate::terminal_output::{Align, trunc_pad};
use crate::utils::{format_timecode, whole_minutes};

/// Console column widths.
pub const TITLE_WIDTH: usize = 32;
pub const ID_WIDTH: usize = 8;
pub const LABEL_WIDTH: usize = 12;
pub const FILE_NAME_WIDTH: usize = 32;

/// Suffix for shows whose filename carries no season/episode.
pub const MISSING_EPISODE_MARKER: &str = "####";

/// One report line's worth of derived data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub display_name: String,
    pub catalog_id: String,
    pub duration_label: String,
    pub resolution: ResolutionClass,
    pub timecode: String,
    pub file_name: String,
}

impl ReportRecord {
    /// Third report column, e.g. `60 минут HD`.
    pub fn duration_column(&self) -> String {
        format!("{} {}", self.duration_label, self.resolution)
    }

    /// Tab-separated line for the report file, newline-terminated.
    pub fn persisted_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\n",
            self.display_name,
            self.catalog_id,
            self.duration_column(),
            self.timecode,
            self.file_name
        )
    }

    /// Column-aligned console line for item `position` (1-based) of `total`.
    /// No trailing newline.
    pub fn console_line(&self, position: usize, total: usize) -> String {
        format!(
            "{}  {}  {}  {}  {}  {}",
            progress_counter(position, total),
            trunc_pad(&self.display_name, TITLE_WIDTH, Align::Left),
            trunc_pad(&self.catalog_id, ID_WIDTH, Align::Left),
            trunc_pad(&self.duration_column(), LABEL_WIDTH, Align::Left),
            self.timecode,
            trunc_pad(&self.file_name, FILE_NAME_WIDTH, Align::Left)
        )
    }
}

/// `position/total` with `position` right-justified to the digit count of `total`.
pub fn progress_counter(position: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("{position:>width$}/{total}")
}

/// Title shown in the report. Shows get a localized season/episode suffix.
pub fn display_title(fields: &FilenameFields, entry: &CatalogEntry) -> String {
    match entry.category {
        ContentCategory::Show => {
            if fields.season_str().is_empty() || fields.episode_str().is_empty() {
                format!("{}. {}", entry.display_title, MISSING_EPISODE_MARKER)
            } else {
                format!(
                    "{}. {} сезон. {} серия",
                    entry.display_title,
                    fields.season_str(),
                    fields.episode_str()
                )
            }
        }
        _ => entry.display_title.clone(),
    }
}

/// Combines parsed, looked-up and probed data into report records.
#[derive(Debug, Clone, Copy)]
pub struct ReportLineBuilder<'a> {
    buckets: &'a DurationBuckets,
}

impl<'a> ReportLineBuilder<'a> {
    pub fn new(buckets: &'a DurationBuckets) -> Self {
        Self { buckets }
    }

    pub fn build(
        &self,
        file_name: &str,
        fields: &FilenameFields,
        entry: &CatalogEntry,
        duration_secs: f64,
        resolution: ResolutionClass,
    ) -> ReportRecord {
        let bucket = self.buckets.classify(whole_minutes(duration_secs));
        log::debug!(
            "{file_name}: {duration_secs}s -> {bucket} minute bucket, {resolution}"
        );

        ReportRecord {
            display_name: display_title(fields, entry),
            catalog_id: fields.catalog_id.clone(),
            duration_label: duration_label(bucket),
            resolution,
            timecode: format_timecode(duration_secs),
            file_name: file_name.to_string(),
        }
    }
}
