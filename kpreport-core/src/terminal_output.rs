//! Fixed-width text formatting and console output for report lines.
//!
//! Console lines may carry SGR color sequences (`ESC[<n>m` or `ESC[<n>;<m>m`).
//! `trunc_pad` measures raw code points, so callers pass it uncolored field
//! values; the ellipsis marker it appends is colored and does not count toward
//! the column budget. `strip_escapes` removes the same sequences from text that
//! is persisted.

use std::borrow::Cow;
use std::io;

use console::{Term, style};
use once_cell::sync::Lazy;
use regex::Regex;

/// Dim ellipsis appended to truncated fields.
pub const ELLIPSIS_MARKER: &str = "\x1b[30;1m...\x1b[0m";

/// Number of columns the ellipsis occupies once rendered.
const ELLIPSIS_COLUMNS: usize = 3;

static ESCAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9]+m|\x1b\[[0-9]+;[0-9]+m").expect("escape pattern is a valid regex")
});

/// Side a padded field is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Text first, padding on the right
    Left,
    /// Padding first, text on the right
    Right,
}

/// Removes every recognized color sequence from `text`.
#[must_use]
pub fn strip_escapes(text: &str) -> Cow<'_, str> {
    ESCAPE_RE.replace_all(text, "")
}

/// Number of code points left once color sequences are removed.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    strip_escapes(text).chars().count()
}

/// Truncates or pads `text` to exactly `width` columns.
///
/// Text longer than `width` keeps its first `width - 3` code points followed
/// by [`ELLIPSIS_MARKER`]. Shorter text is padded with spaces on the side
/// opposite `align`. With `width < 3` an over-long value collapses to the
/// marker alone.
#[must_use]
pub fn trunc_pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    if len > width {
        let keep = width.saturating_sub(ELLIPSIS_COLUMNS);
        let mut truncated: String = text.chars().take(keep).collect();
        truncated.push_str(ELLIPSIS_MARKER);
        return truncated;
    }

    let padding = " ".repeat(width - len);
    match align {
        Align::Left => format!("{text}{padding}"),
        Align::Right => format!("{padding}{text}"),
    }
}

/// Check if color should be used (respects NO_COLOR environment variable)
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// Writes `text` to stdout with the cursor hidden, restoring it afterwards.
pub fn console_print(text: &str) -> io::Result<()> {
    let term = Term::stdout();
    let is_term = term.is_term();
    if is_term {
        term.hide_cursor()?;
    }
    let written = term.write_str(text);
    if is_term {
        term.show_cursor()?;
    }
    written
}

/// Prints a fatal diagnostic in bold red on stderr.
pub fn print_fatal(message: &str) {
    let term = Term::stderr();
    let line = style(message).red().bold().for_stderr();
    let _ = term.write_line(&line.to_string());
}

/// Prints a warning in bold yellow on stderr.
pub fn print_warning(message: &str) {
    let term = Term::stderr();
    let line = style(message).yellow().bold().for_stderr();
    let _ = term.write_line(&line.to_string());
}
