//! Shallow folder content cleanup.

use std::fs;
use std::path::Path;

use crate::spec::FsOpError;

/// Delete every direct and transitive child of `folder_path`, keeping the
/// folder itself.
///
/// Useful when the folder's own permissions must survive, or when the caller
/// may manipulate the folder's contents but not the folder. Symbolic links
/// among the children are removed as links; their targets are untouched.
///
/// Fails on the first entry that cannot be deleted, naming that entry;
/// remaining entries are left as they are (no retry, no partial rollback).
pub fn cleanup_folder<P: AsRef<Path>>(folder_path: P) -> Result<(), FsOpError> {
    let path_dir = folder_path.as_ref();
    let meta_dir = fs::metadata(path_dir).map_err(|e| FsOpError::from_io(path_dir, e))?;
    if !meta_dir.is_dir() {
        return Err(FsOpError::invalid_argument(
            path_dir,
            "Path is not a directory",
        ));
    }

    let iter_entries = fs::read_dir(path_dir).map_err(|e| FsOpError::from_io(path_dir, e))?;
    for entry_res in iter_entries {
        let entry = entry_res.map_err(|e| FsOpError::from_io(path_dir, e))?;
        let path_entry = entry.path();
        let kind_entry = entry
            .file_type()
            .map_err(|e| FsOpError::from_io(&path_entry, e))?;

        // A symlink to a directory reports is_dir() == false here, so it is
        // removed as a link rather than followed.
        if kind_entry.is_dir() {
            fs::remove_dir_all(&path_entry)
        } else {
            fs::remove_file(&path_entry)
        }
        .map_err(|e| FsOpError::from_io(&path_entry, e))?;
    }
    Ok(())
}
