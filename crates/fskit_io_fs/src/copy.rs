//! Recursive directory copy with destination-path derivation.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::spec::FsOpError;
use crate::util::{copy_file_with_metadata, is_overlapping, recreate_symbolic_link};

#[derive(Debug)]
struct SpecWalkEntry {
    name_entry: OsString,
    path_entry_src: PathBuf,
    kind_entry: fs::FileType,
}

/// Derive the effective destination directory for a copy.
///
/// Joins `dir_destination_root` with the base name (final path segment) of
/// `dir_source`. Pure; performs no filesystem access.
///
/// # Errors
/// Returns [`FsOpError::InvalidArgument`] when `dir_source` has no base name
/// (a root path such as `/`, an empty path, or a path ending in `..`).
///
/// # Examples
/// ```
/// use std::path::Path;
/// use fskit_io_fs::derive_destination_dir;
///
/// let path_dir_dst = derive_destination_dir("/a/b/src", "/dst").unwrap();
/// assert_eq!(path_dir_dst, Path::new("/dst/src"));
/// ```
pub fn derive_destination_dir<P, Q>(
    dir_source: P,
    dir_destination_root: Q,
) -> Result<PathBuf, FsOpError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_src = dir_source.as_ref();
    let Some(name_base) = path_dir_src.file_name() else {
        return Err(FsOpError::invalid_argument(
            path_dir_src,
            "Source path has no base name",
        ));
    };
    Ok(dir_destination_root.as_ref().join(name_base))
}

/// Copy the directory tree at `dir_source` into a new directory under
/// `dir_destination_root`.
///
/// The effective destination is `dir_destination_root` joined with the base
/// name of `dir_source` (see [`derive_destination_dir`]). When that
/// destination overlaps the source (either path equal to or nested under the
/// other), the copy fails with [`FsOpError::InvalidArgument`]: copying a tree
/// into itself would otherwise recurse without bound. When the destination
/// already exists in any form (file, directory, or dangling symlink), the
/// copy fails with [`FsOpError::AlreadyExists`] before any copy I/O; this
/// guards against silent overwrite or merge.
///
/// Behavior:
/// - Entries are visited in sorted name order; subdirectories are created
///   fresh at the destination and recursed into.
/// - Regular files are copied with their byte content and permission bits;
///   on Linux, timestamps and extended attributes are replicated as well.
/// - Symbolic links are copied as links: the link itself is recreated at the
///   destination and never followed.
/// - Special files (FIFOs, sockets, devices) are skipped.
/// - The copy is best-effort and non-atomic: the first failing entry stops
///   the operation with an error naming that entry, and entries copied up to
///   that point are left in place. Callers needing all-or-nothing semantics
///   must stage into a scratch location themselves.
///
/// Returns the resolved destination path on success.
pub fn copy_directory<P, Q>(dir_source: P, dir_destination_root: Q) -> Result<PathBuf, FsOpError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_src = dir_source.as_ref();
    let path_dir_dst = derive_destination_dir(path_dir_src, dir_destination_root)?;

    let meta_dir_src =
        fs::metadata(path_dir_src).map_err(|e| FsOpError::from_io(path_dir_src, e))?;
    if !meta_dir_src.is_dir() {
        return Err(FsOpError::invalid_argument(
            path_dir_src,
            "Source is not a directory",
        ));
    }

    if is_overlapping(path_dir_src, &path_dir_dst) {
        return Err(FsOpError::invalid_argument(
            &path_dir_dst,
            "Source and destination directories overlap",
        ));
    }

    // symlink_metadata so a dangling symlink at the destination also blocks.
    if fs::symlink_metadata(&path_dir_dst).is_ok() {
        return Err(FsOpError::AlreadyExists(path_dir_dst));
    }

    fs::create_dir_all(&path_dir_dst).map_err(|e| FsOpError::from_io(&path_dir_dst, e))?;
    copy_children(path_dir_src, &path_dir_dst)?;
    Ok(path_dir_dst)
}

fn copy_children(path_dir_src: &Path, path_dir_dst: &Path) -> Result<(), FsOpError> {
    let iter_entries =
        fs::read_dir(path_dir_src).map_err(|e| FsOpError::from_io(path_dir_src, e))?;

    let mut l_entries: Vec<SpecWalkEntry> = Vec::new();
    for entry_res in iter_entries {
        let entry = entry_res.map_err(|e| FsOpError::from_io(path_dir_src, e))?;
        let path_entry_src = entry.path();
        let kind_entry = entry
            .file_type()
            .map_err(|e| FsOpError::from_io(&path_entry_src, e))?;
        l_entries.push(SpecWalkEntry {
            name_entry: entry.file_name(),
            path_entry_src,
            kind_entry,
        });
    }
    l_entries.sort_by(|a, b| a.name_entry.cmp(&b.name_entry));

    for spec_walk_entry in l_entries {
        let path_entry_dst = path_dir_dst.join(&spec_walk_entry.name_entry);
        if spec_walk_entry.kind_entry.is_symlink() {
            recreate_symbolic_link(&spec_walk_entry.path_entry_src, &path_entry_dst)?;
        } else if spec_walk_entry.kind_entry.is_dir() {
            // Freshly created above the recursion, so no per-level existence check.
            fs::create_dir(&path_entry_dst).map_err(|e| FsOpError::from_io(&path_entry_dst, e))?;
            copy_children(&spec_walk_entry.path_entry_src, &path_entry_dst)?;
        } else if spec_walk_entry.kind_entry.is_file() {
            copy_file_with_metadata(&spec_walk_entry.path_entry_src, &path_entry_dst)?;
        }
        // FIFOs, sockets and device nodes are skipped.
    }
    Ok(())
}
