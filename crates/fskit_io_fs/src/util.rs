use std::fs;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::spec::FsOpError;

////////////////////////////////////////////////////////////////////////////////
// #region PathOverlap

fn resolve_for_overlap(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    // A composed destination usually does not exist yet: canonicalize the
    // nearest existing ancestor and re-append the remainder.
    if let Some(parent) = path.parent()
        && let Some(name) = path.file_name()
    {
        return resolve_for_overlap(parent).join(name);
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

/// True when one path equals the other or lies anywhere under it.
pub(crate) fn is_overlapping(path_a: &Path, path_b: &Path) -> bool {
    let path_a_resolved = resolve_for_overlap(path_a);
    let path_b_resolved = resolve_for_overlap(path_b);
    path_b_resolved.starts_with(&path_a_resolved)
        || path_a_resolved.starts_with(&path_b_resolved)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileCopy

/// Copy one regular file, carrying over what the platform supports.
///
/// Content and permission bits are carried everywhere; on Linux the access
/// and modification times plus extended attributes are carried as well.
/// Failures name the side that actually failed: the source for open/read
/// errors, the destination for create/write errors.
pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), FsOpError> {
    let mut file_src =
        File::open(path_file_src).map_err(|e| FsOpError::from_io(path_file_src, e))?;
    let mut file_dst =
        File::create(path_file_dst).map_err(|e| FsOpError::from_io(path_file_dst, e))?;
    io::copy(&mut file_src, &mut file_dst).map_err(|e| FsOpError::from_io(path_file_dst, e))?;

    let meta_src =
        fs::metadata(path_file_src).map_err(|e| FsOpError::from_io(path_file_src, e))?;
    fs::set_permissions(path_file_dst, meta_src.permissions())
        .map_err(|e| FsOpError::from_io(path_file_dst, e))?;

    #[cfg(target_os = "linux")]
    carry_over_times_and_xattrs(path_file_src, path_file_dst, &meta_src)?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn carry_over_times_and_xattrs(
    path_file_src: &Path,
    path_file_dst: &Path,
    meta_src: &fs::Metadata,
) -> Result<(), FsOpError> {
    use filetime::{FileTime, set_file_times};

    let time_access = FileTime::from_last_access_time(meta_src);
    let time_modify = FileTime::from_last_modification_time(meta_src);
    set_file_times(path_file_dst, time_access, time_modify)
        .map_err(|e| FsOpError::from_io(path_file_dst, e))?;

    carry_over_xattrs(path_file_src, path_file_dst);
    Ok(())
}

// Missing or unreadable xattrs are not an error condition.
#[cfg(target_os = "linux")]
fn carry_over_xattrs(path_file_src: &Path, path_file_dst: &Path) {
    let iter_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(_) => return,
    };

    for name in iter_names {
        let Some(value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        let _ = xattr::set(path_file_dst, &name, &value);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Symlinks

/// Recreate the symbolic link at `path_src` as a new link at `path_dst`.
///
/// The link target is carried over verbatim; the target itself is never read.
pub(crate) fn recreate_symbolic_link(path_src: &Path, path_dst: &Path) -> Result<(), FsOpError> {
    let target = fs::read_link(path_src).map_err(|e| FsOpError::from_io(path_src, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::symlink;
        symlink(&target, path_dst).map_err(|e| FsOpError::from_io(path_dst, e))
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::{symlink_dir, symlink_file};
        let res = if path_src.is_dir() {
            symlink_dir(&target, path_dst)
        } else {
            symlink_file(&target, path_dst)
        };
        res.map_err(|e| FsOpError::from_io(path_dst, e))
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = target;
        Err(FsOpError::Io {
            path: path_dst.to_path_buf(),
            message: "Symbolic links are unsupported on this platform".to_string(),
        })
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
