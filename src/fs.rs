//! Filesystem checks
//!
//! Thin helpers over `std::fs` metadata queries. Each returns `Ok(false)` when
//! the path does not exist and an error for any other failure.

use crate::error::{GitverError, Result};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Checks if a directory exists.
///
/// A path that exists but is not a directory is an error.
pub fn dir_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(true),
        Ok(_) => Err(GitverError::Io(std::io::Error::new(
            ErrorKind::Other,
            format!("{:?} is not a directory", path),
        ))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Checks if a file or directory exists.
pub fn file_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Checks if a regular file exists.
pub fn regular_file_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Checks if a file can be opened for writing.
pub fn is_file_writable<P: AsRef<Path>>(path: P) -> Result<bool> {
    OpenOptions::new().write(true).open(path)?;
    Ok(true)
}

/// Checks if a path is a symbolic link.
pub fn is_symlink<P: AsRef<Path>>(path: P) -> Result<bool> {
    let meta = fs::symlink_metadata(path)?;
    Ok(meta.file_type().is_symlink())
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Checks if `sub_path` is `parent_path` or lies beneath it.
///
/// `parent_path` must be absolute; a relative `sub_path` is resolved against
/// it. With `eval_symlinks`, existing directories are canonicalized first.
pub fn is_sub_dir<P: AsRef<Path>, S: AsRef<Path>>(
    parent_path: P,
    sub_path: S,
    eval_symlinks: bool,
) -> Result<bool> {
    let mut parent = parent_path.as_ref().to_path_buf();
    let mut sub = sub_path.as_ref().to_path_buf();

    if !parent.is_absolute() {
        return Err(GitverError::Io(std::io::Error::new(
            ErrorKind::InvalidInput,
            "parent path is not an absolute path",
        )));
    }

    if eval_symlinks {
        if dir_exists(&parent)? {
            parent = fs::canonicalize(&parent)?;
        }
        if dir_exists(&sub)? {
            sub = fs::canonicalize(&sub)?;
        }
    }

    if !sub.is_absolute() {
        sub = parent.join(sub);
    }

    Ok(normalize(&sub).starts_with(normalize(&parent)))
}
