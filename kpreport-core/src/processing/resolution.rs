//! Coarse SD/HD classification from the pixel size in the filename.

use std::fmt;

/// Widths above this are HD.
pub const HD_MIN_EXCLUSIVE_WIDTH: u64 = 1024;

/// Heights above this are HD.
pub const HD_MIN_EXCLUSIVE_HEIGHT: u64 = 576;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionClass {
    Sd,
    Hd,
}

impl ResolutionClass {
    /// HD when either dimension exceeds the PAL SD frame (1024x576 anamorphic).
    #[must_use]
    pub fn classify(width: u64, height: u64) -> Self {
        if width > HD_MIN_EXCLUSIVE_WIDTH || height > HD_MIN_EXCLUSIVE_HEIGHT {
            ResolutionClass::Hd
        } else {
            ResolutionClass::Sd
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionClass::Sd => "SD",
            ResolutionClass::Hd => "HD",
        }
    }
}

impl fmt::Display for ResolutionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
