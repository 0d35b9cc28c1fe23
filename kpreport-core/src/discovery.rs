//! Input list loading.
//!
//! The batch is driven by a plain text file holding one media path per line.
//! Lines are taken in order; surrounding whitespace is trimmed and blank lines
//! are skipped.

use crate::error::{CoreError, CoreResult};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads the newline-delimited list of media paths to process.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The listed paths in file order
/// * `Err(CoreError::InputListMissing)` - If the list cannot be opened or read
/// * `Err(CoreError::InputListEmpty)` - If the list holds no paths
///
/// # Examples
///
/// ```rust,no_run
/// use kpreport_core::read_input_list;
/// use std::path::Path;
///
/// let files = read_input_list(Path::new("fileList.txt")).unwrap();
/// println!("{} file(s) to report", files.len());
/// ```
pub fn read_input_list(list_path: &Path) -> CoreResult<Vec<PathBuf>> {
    let missing = |source| CoreError::InputListMissing {
        path: list_path.to_path_buf(),
        source,
    };

    let file = File::open(list_path).map_err(missing)?;
    let mut files = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(missing)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            files.push(PathBuf::from(trimmed));
        }
    }

    if files.is_empty() {
        return Err(CoreError::InputListEmpty(list_path.to_path_buf()));
    }

    log::debug!(
        "Read {} path(s) from {}",
        files.len(),
        list_path.display()
    );
    Ok(files)
}
