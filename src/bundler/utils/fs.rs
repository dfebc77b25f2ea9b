//! File system utilities for bundling.
//!
//! All operations here are idempotent with respect to existing destinations:
//! directories that already exist are reused and files are overwritten in
//! place. Nothing is ever removed from a destination tree except the single
//! entry being replaced.

use crate::bundler::error::{Context, Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path.
///
/// Succeeds if the directory already exists.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Makes a symbolic link.
#[cfg(unix)]
fn symlink(src: &Path, dst: &Path, _is_dir: bool) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link.
#[cfg(windows)]
fn symlink(src: &Path, dst: &Path, is_dir: bool) -> io::Result<()> {
    if is_dir {
        std::os::windows::fs::symlink_dir(src, dst)
    } else {
        std::os::windows::fs::symlink_file(src, dst)
    }
}

/// Removes a non-directory entry at `path` so it can be replaced.
///
/// Missing entries are fine. Directories are left alone; copying a file over
/// a directory is reported by the copy itself.
fn remove_replaceable(path: &Path) -> io::Result<()> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if !meta.is_dir() => std::fs::remove_file(path),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// An existing destination file is overwritten. Fails if the source path is
/// a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        create_dir_all(dest_dir).await?;
    }
    // A symlink at the destination would redirect the write elsewhere.
    if fs::symlink_metadata(to)
        .await
        .is_ok_and(|meta| meta.file_type().is_symlink())
    {
        fs::remove_file(to)
            .await
            .fs_context("replacing symlink", to)?;
    }
    fs::copy(from, to).await.fs_context("copying file to", to)?;
    Ok(())
}

/// Recursively merges a directory into another, creating any parent
/// directories of the destination path as necessary.
///
/// Files and symlinks present in `from` replace their counterparts in `to`;
/// entries that only exist in `to` are kept. Symlinks are recreated rather
/// than followed. Fails if the source path is not a directory or doesn't
/// exist.
///
/// A source symlink whose destination is a real directory (for example one
/// left by an earlier run) is a conflict: the directory is left untouched and
/// the copy fails rather than deleting it.
///
/// Returns the number of files and symlinks copied.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_dir() {
        return Err(Error::GenericError(format!("{from:?} is not a Directory")));
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || copy_dir_blocking(&from, &to))
        .await
        .context("directory copy task panicked")?
}

fn copy_dir_blocking(from: &Path, to: &Path) -> Result<usize> {
    std::fs::create_dir_all(to).fs_context("creating directory", to)?;

    let mut copied = 0;
    for entry in walkdir::WalkDir::new(from).min_depth(1) {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(from)?;
        let dest_path: PathBuf = to.join(rel_path);

        if entry.file_type().is_symlink() {
            let target = std::fs::read_link(entry.path())
                .fs_context("reading symlink", entry.path())?;
            if std::fs::symlink_metadata(&dest_path).is_ok_and(|m| m.is_dir()) {
                return Err(Error::GenericError(format!(
                    "cannot replace directory {} with symlink {}",
                    dest_path.display(),
                    entry.path().display()
                )));
            }
            remove_replaceable(&dest_path).fs_context("replacing entry", &dest_path)?;
            symlink(&target, &dest_path, entry.path().is_dir())
                .fs_context("creating symlink", &dest_path)?;
            copied += 1;
        } else if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
        } else {
            if std::fs::symlink_metadata(&dest_path).is_ok_and(|m| m.file_type().is_symlink()) {
                std::fs::remove_file(&dest_path).fs_context("replacing symlink", &dest_path)?;
            }
            std::fs::copy(entry.path(), &dest_path).fs_context("copying file to", &dest_path)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Marks a file as executable (`0755`).
#[cfg(unix)]
pub async fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .fs_context("setting executable permissions on", path)
}

/// Marks a file as executable. No-op where the platform has no mode bits.
#[cfg(not(unix))]
pub async fn set_executable(path: &Path) -> Result<()> {
    fs::metadata(path)
        .await
        .fs_context("reading metadata of", path)
        .map(|_| ())
}
