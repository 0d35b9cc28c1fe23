//! Utility functions for formatting and path handling.
//!
//! This module provides the timecode formatter used in report lines and a
//! couple of small helpers shared by the pipeline stages.

use std::path::Path;

/// Rounds to the nearest integer, halves away from zero (2.5 -> 3, -2.5 -> -3).
#[must_use]
pub fn round_half_away(value: f64) -> i64 {
    if value < 0.0 {
        (value - 0.5).ceil() as i64
    } else {
        (value + 0.5).floor() as i64
    }
}

/// Formats seconds as a zero-padded HH:MM:SS timecode.
///
/// The fractional part is rounded half away from zero before the value is
/// split, so a rounded-up second carries into the minutes (59.6 -> "00:01:00").
/// Hours grow past two digits when needed. Returns "??:??:??" for negative or
/// non-finite input.
#[must_use]
pub fn format_timecode(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = round_half_away(seconds) as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Whole minutes in a duration, rounded down.
#[must_use]
pub fn whole_minutes(seconds: f64) -> u64 {
    if seconds <= 0.0 || !seconds.is_finite() {
        0
    } else {
        (seconds / 60.0).floor() as u64
    }
}

/// Safely extracts filename from a path with consistent error handling.
/// Returns the filename as a String, or an error if the path has no filename component.
pub fn get_filename_safe(path: &Path) -> crate::CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            crate::CoreError::PathError(format!(
                "Failed to get filename for {}",
                path.display()
            ))
        })?
        .to_string_lossy()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(0.0), 0);
        assert_eq!(round_half_away(0.4), 0);
        assert_eq!(round_half_away(0.5), 1);
        assert_eq!(round_half_away(1.5), 2);
        assert_eq!(round_half_away(2.5), 3);
        assert_eq!(round_half_away(-0.5), -1);
        assert_eq!(round_half_away(-1.4), -1);
        assert_eq!(round_half_away(-2.5), -3);
    }

    #[test]
    fn test_format_timecode() {
        assert_eq!(format_timecode(0.0), "00:00:00");
        assert_eq!(format_timecode(59.0), "00:00:59");
        assert_eq!(format_timecode(60.0), "00:01:00");
        assert_eq!(format_timecode(125.3), "00:02:05");
        assert_eq!(format_timecode(3599.0), "00:59:59");
        assert_eq!(format_timecode(3725.0), "01:02:05");
        assert_eq!(format_timecode(86400.0), "24:00:00");
        assert_eq!(format_timecode(360_000.0), "100:00:00");
    }

    #[test]
    fn test_format_timecode_rounding_carries() {
        assert_eq!(format_timecode(59.6), "00:01:00");
        assert_eq!(format_timecode(59.4), "00:00:59");
        assert_eq!(format_timecode(0.5), "00:00:01");
        assert_eq!(format_timecode(3599.5), "01:00:00");
    }

    #[test]
    fn test_format_timecode_invalid() {
        assert_eq!(format_timecode(-1.0), "??:??:??");
        assert_eq!(format_timecode(f64::NAN), "??:??:??");
        assert_eq!(format_timecode(f64::INFINITY), "??:??:??");
    }

    #[test]
    fn test_whole_minutes() {
        assert_eq!(whole_minutes(0.0), 0);
        assert_eq!(whole_minutes(59.9), 0);
        assert_eq!(whole_minutes(125.3), 2);
        assert_eq!(whole_minutes(3600.0), 60);
        assert_eq!(whole_minutes(-3.0), 0);
    }

    #[test]
    fn test_get_filename_safe() {
        assert_eq!(
            get_filename_safe(Path::new("/media/in/s01e02coid1_r720x576p.mp4")).unwrap(),
            "s01e02coid1_r720x576p.mp4"
        );
        assert!(get_filename_safe(Path::new("/")).is_err());
    }
}
