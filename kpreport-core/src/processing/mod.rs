//! Report-line derivation pipeline and its orchestration.
//!
//! Leaf stages first: filename pattern extraction, duration bucket and
//! resolution classification, report record composition. `batch` sequences
//! them over the input list.

/// Filename pattern extraction
pub mod filename;

/// Duration bucket classification
pub mod duration_bucket;

/// SD/HD classification
pub mod resolution;

/// Report record composition
pub mod report;

/// Sequential batch driver
pub mod batch;

pub use batch::{BatchDriver, BatchSummary};
pub use duration_bucket::DurationBuckets;
pub use filename::{FilenameFields, parse_filename};
pub use report::{ReportLineBuilder, ReportRecord};
pub use resolution::ResolutionClass;

use crate::config::CoreConfig;
use crate::discovery::read_input_list;
use crate::error::CoreResult;
use crate::external::{CatalogLookup, DurationProbe};
use crate::reporting::{ReportSink, TsvReportWriter};

/// Runs a full report: reads the input list, truncates the report file, and
/// processes every listed file into it and into `console`.
///
/// The input list is read before the report file is created, so a missing or
/// empty list leaves any previous report untouched.
pub fn generate_report<C, P>(
    config: &CoreConfig,
    catalog: C,
    probe: P,
    console: &mut dyn ReportSink,
) -> CoreResult<BatchSummary>
where
    C: CatalogLookup,
    P: DurationProbe,
{
    config.validate()?;
    let files = read_input_list(&config.input_list)?;
    let driver = BatchDriver::new(config, catalog, probe)?;
    let mut writer = TsvReportWriter::create(&config.output_path)?;
    let mut sinks: [&mut dyn ReportSink; 2] = [&mut writer, console];
    driver.run(&files, &mut sinks)
}
