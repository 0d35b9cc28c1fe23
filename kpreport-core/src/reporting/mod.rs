// ============================================================================
// kpreport-core/src/reporting/mod.rs
// ============================================================================
//
// REPORT SINKS: Where finished report records go
//
// The batch driver hands every record to a list of sinks in input order. Two
// sinks ship with the library: the tab-separated report file and the console
// progress printer. Both are plain `ReportSink` implementations, so tests can
// substitute an in-memory collector.

use crate::error::{CoreError, CoreResult};
use crate::processing::report::ReportRecord;
use crate::terminal_output::{console_print, strip_escapes};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Receives finished records, one call per processed file.
pub trait ReportSink {
    /// `position` is 1-based; `total` is the size of the batch.
    fn emit(&mut self, record: &ReportRecord, position: usize, total: usize) -> CoreResult<()>;
}

// ============================================================================
// REPORT FILE
// ============================================================================

/// Appends tab-separated records with all color sequences removed.
///
/// Every record is flushed as soon as it is written, so a failed batch leaves
/// the lines written so far in place.
#[derive(Debug)]
pub struct TsvReportWriter<W: Write> {
    writer: W,
}

impl TsvReportWriter<BufWriter<File>> {
    /// Creates (or truncates) the report file.
    pub fn create(path: &Path) -> CoreResult<Self> {
        let file = File::create(path).map_err(|source| CoreError::OutputCreateFailed {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Writing report to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TsvReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TsvReportWriter<W> {
    fn emit(&mut self, record: &ReportRecord, _position: usize, _total: usize) -> CoreResult<()> {
        let line = record.persisted_line();
        self.writer
            .write_all(strip_escapes(&line).as_bytes())
            .map_err(CoreError::WriteFailed)?;
        self.writer.flush().map_err(CoreError::WriteFailed)
    }
}

// ============================================================================
// CONSOLE PROGRESS
// ============================================================================

/// Prints one aligned progress line per record on stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleProgressSink {
    color: bool,
}

impl ConsoleProgressSink {
    /// With `color` off, escape sequences are stripped before printing.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Newline-terminated progress line as it is printed.
    pub fn render(&self, record: &ReportRecord, position: usize, total: usize) -> String {
        let line = record.console_line(position, total);
        let mut text = if self.color {
            line
        } else {
            strip_escapes(&line).into_owned()
        };
        text.push('\n');
        text
    }
}

impl ReportSink for ConsoleProgressSink {
    fn emit(&mut self, record: &ReportRecord, position: usize, total: usize) -> CoreResult<()> {
        console_print(&self.render(record, position, total)).map_err(CoreError::WriteFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::resolution::ResolutionClass;
    use crate::terminal_output::ELLIPSIS_MARKER;

    fn record(display_name: &str) -> ReportRecord {
        ReportRecord {
            display_name: display_name.to_string(),
            catalog_id: "12345".to_string(),
            duration_label: "60 минут".to_string(),
            resolution: ResolutionClass::Hd,
            timecode: "00:47:12".to_string(),
            file_name: "coid12345_r1920x1080p.mp4".to_string(),
        }
    }

    #[test]
    fn test_writer_emits_tsv_lines_in_order() {
        let mut writer = TsvReportWriter::new(Vec::new());
        writer.emit(&record("First"), 1, 2).unwrap();
        writer.emit(&record("Second"), 2, 2).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "First\t12345\t60 минут HD\t00:47:12\tcoid12345_r1920x1080p.mp4\n\
             Second\t12345\t60 минут HD\t00:47:12\tcoid12345_r1920x1080p.mp4\n"
        );
    }

    #[test]
    fn test_writer_strips_escape_sequences() {
        let mut writer = TsvReportWriter::new(Vec::new());
        writer.emit(&record("\x1b[1mBold\x1b[0m title"), 1, 1).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert!(output.starts_with("Bold title\t"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_create_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        assert!(matches!(
            TsvReportWriter::create(&path),
            Err(CoreError::OutputCreateFailed { .. })
        ));
    }

    #[test]
    fn test_console_line_keeps_color_when_enabled() {
        let long_title = "Иван Васильевич меняет профессию (1973)";
        let text = ConsoleProgressSink::new(true).render(&record(long_title), 3, 12);

        assert!(text.starts_with(" 3/12  "));
        assert!(text.ends_with('\n'));
        assert!(text.contains(&format!("профес{ELLIPSIS_MARKER}")));
    }

    #[test]
    fn test_console_line_strips_color_when_disabled() {
        let long_title = "Иван Васильевич меняет профессию (1973)";
        let text = ConsoleProgressSink::new(false).render(&record(long_title), 1, 1);

        assert!(!text.contains('\x1b'));
        assert!(text.contains("Иван Васильевич меняет профес...  12345   "));
        assert!(text.ends_with("coid12345_r1920x1080p.mp4       \n"));
        assert_eq!(text.matches('\n').count(), 1);
    }
}
