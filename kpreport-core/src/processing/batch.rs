//! Sequential fail-fast batch driver.
//!
//! Files are processed strictly in input order, one at a time. The first error
//! on any file stops the batch; records already handed to the sinks stay
//! written.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{CatalogLookup, DurationProbe};
use crate::processing::duration_bucket::DurationBuckets;
use crate::processing::filename::parse_filename;
use crate::processing::report::{ReportLineBuilder, ReportRecord};
use crate::processing::resolution::ResolutionClass;
use crate::reporting::ReportSink;
use crate::utils::get_filename_safe;

use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of a completed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records written, equal to the number of input paths
    pub processed: usize,
    pub elapsed: Duration,
}

/// Runs the report pipeline over a list of media files.
pub struct BatchDriver<C, P> {
    buckets: DurationBuckets,
    catalog: C,
    probe: P,
}

impl<C: CatalogLookup, P: DurationProbe> BatchDriver<C, P> {
    /// Creates a driver from a validated configuration and its collaborators.
    pub fn new(config: &CoreConfig, catalog: C, probe: P) -> CoreResult<Self> {
        Ok(Self {
            buckets: DurationBuckets::new(&config.duration_buckets)?,
            catalog,
            probe,
        })
    }

    pub fn buckets(&self) -> &DurationBuckets {
        &self.buckets
    }

    /// Derives the report record for a single file without writing it.
    pub fn process_file(&self, path: &Path) -> CoreResult<ReportRecord> {
        if !path.exists() {
            return Err(CoreError::PathNotFound(path.to_path_buf()));
        }

        let file_name = get_filename_safe(path)?;
        let fields = parse_filename(&file_name)?;
        let entry = self.catalog.lookup(&fields.catalog_id)?;

        let raw_duration = self.probe.probe_duration(path)?;
        let duration_secs = parse_duration_secs(path, &raw_duration)?;

        let resolution = ResolutionClass::classify(fields.width, fields.height);
        Ok(ReportLineBuilder::new(&self.buckets).build(
            &file_name,
            &fields,
            &entry,
            duration_secs,
            resolution,
        ))
    }

    /// Processes `files` in order, handing each record to every sink before
    /// moving to the next file.
    pub fn run(
        &self,
        files: &[PathBuf],
        sinks: &mut [&mut dyn ReportSink],
    ) -> CoreResult<BatchSummary> {
        let start = Instant::now();
        let total = files.len();
        info!("Processing {total} file(s)");

        for (index, path) in files.iter().enumerate() {
            debug!("[{}/{}] {}", index + 1, total, path.display());
            let record = self.process_file(path)?;
            for sink in sinks.iter_mut() {
                sink.emit(&record, index + 1, total)?;
            }
        }

        let summary = BatchSummary {
            processed: total,
            elapsed: start.elapsed(),
        };
        info!("Processed {} file(s) in {:?}", summary.processed, summary.elapsed);
        Ok(summary)
    }
}

/// Parses the prober's seconds string (e.g. "125.300000").
fn parse_duration_secs(path: &Path, raw: &str) -> CoreResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .ok_or_else(|| CoreError::DurationUnparsable {
            path: path.to_path_buf(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_secs() {
        let path = Path::new("a.mp4");
        assert_eq!(parse_duration_secs(path, "125.300000").unwrap(), 125.3);
        assert_eq!(parse_duration_secs(path, " 60\n").unwrap(), 60.0);
        assert!(matches!(
            parse_duration_secs(path, "N/A"),
            Err(CoreError::DurationUnparsable { .. })
        ));
        assert!(parse_duration_secs(path, "-1").is_err());
        assert!(parse_duration_secs(path, "inf").is_err());
    }
}
