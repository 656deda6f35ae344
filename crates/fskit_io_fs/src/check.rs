//! Directory emptiness inspection.

use std::fs;
use std::path::Path;

use crate::spec::FsOpError;

/// Check whether the directory at `path` has zero entries.
///
/// `.` and `..` never count. Fails when `path` is missing, unreadable, or not
/// a directory.
pub fn is_folder_empty<P: AsRef<Path>>(path: P) -> Result<bool, FsOpError> {
    let path = path.as_ref();
    let meta_dir = fs::metadata(path).map_err(|e| FsOpError::from_io(path, e))?;
    if !meta_dir.is_dir() {
        return Err(FsOpError::invalid_argument(path, "Path is not a directory"));
    }

    let mut iter_entries = fs::read_dir(path).map_err(|e| FsOpError::from_io(path, e))?;
    match iter_entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) => Err(FsOpError::from_io(path, e)),
    }
}
