//! FFprobe integration for duration probing.
//!
//! Runs ffprobe (via the `ffprobe` crate) and returns the container-level
//! `format.duration` string untouched; parsing it is the caller's job.
use crate::error::{CoreError, CoreResult};
use crate::external::DurationProbe;
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Duration probe backed by the system `ffprobe` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfprobeDurationProbe;

impl FfprobeDurationProbe {
    pub fn new() -> Self {
        Self
    }
}

impl DurationProbe for FfprobeDurationProbe {
    fn probe_duration(&self, path: &Path) -> CoreResult<String> {
        log::debug!("Running ffprobe (via crate) for duration on: {}", path.display());
        match ffprobe(path) {
            Ok(metadata) => metadata.format.duration.ok_or_else(|| CoreError::ProbeFailed {
                path: path.to_path_buf(),
                reason: "no duration in container format".to_string(),
            }),
            Err(err) => {
                log::error!("ffprobe failed for duration on {}: {:?}", path.display(), err);
                Err(map_ffprobe_error(err, path))
            }
        }
    }
}

fn map_ffprobe_error(err: FfProbeError, path: &Path) -> CoreError {
    let reason = match err {
        FfProbeError::Io(io_err) => format!("failed to start ffprobe: {io_err}"),
        FfProbeError::Status(output) => format!(
            "ffprobe exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ),
        FfProbeError::Deserialize(err) => format!("output deserialization: {err}"),
        other => format!("unknown ffprobe error: {other:?}"),
    };
    CoreError::ProbeFailed {
        path: path.to_path_buf(),
        reason,
    }
}
