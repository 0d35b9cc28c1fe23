//! Core library for building media duration reports.
//!
//! Each media path in the input list is turned into one report record: the
//! catalog id, season/episode and frame size are parsed from the filename, the
//! title and category come from the catalog API, the duration comes from
//! ffprobe and is classified into a nominal bucket.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use kpreport_core::{
//!     ConsoleProgressSink, CoreConfigBuilder, FfprobeDurationProbe, KinopoiskClient,
//!     generate_report,
//! };
//!
//! let config = CoreConfigBuilder::new()
//!     .input_list("fileList.txt")
//!     .output_path("report.txt")
//!     .api_url("https://catalog.example/api/films/")
//!     .client_id("secret")
//!     .build();
//!
//! let catalog = KinopoiskClient::new(&config.catalog).unwrap();
//! let mut console = ConsoleProgressSink::new(true);
//! let summary = generate_report(&config, catalog, FfprobeDurationProbe::new(), &mut console)
//!     .unwrap();
//! println!("{} record(s)", summary.processed);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod reporting;
pub mod terminal_output;
pub mod utils;

// Re-exports for public API
pub use config::{CatalogConfig, CoreConfig, CoreConfigBuilder};
pub use discovery::read_input_list;
pub use error::{CoreError, CoreResult, LookupFailure};
pub use external::{
    CatalogEntry, CatalogLookup, ContentCategory, DurationProbe, FfprobeDurationProbe,
    KinopoiskClient,
};
pub use processing::{
    BatchDriver, BatchSummary, DurationBuckets, FilenameFields, ReportLineBuilder, ReportRecord,
    ResolutionClass, generate_report, parse_filename,
};
pub use reporting::{ConsoleProgressSink, ReportSink, TsvReportWriter};
pub use terminal_output::{Align, strip_escapes, trunc_pad};
pub use utils::format_timecode;
