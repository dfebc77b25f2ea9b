//! Artifact checksum calculation.
//!
//! A `.app` bundle is a directory, so its checksum covers the whole tree:
//! every file's relative path and contents, in sorted path order. Each entry
//! is framed as `tag, path length, path, content length, content` so that no
//! two distinct trees feed the hasher the same byte stream.

use crate::{
    bail,
    bundler::{Result, error::ErrorExt},
};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Hex-encoded SHA-256 and total size of a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDigest {
    /// Hex-encoded SHA-256 (64 characters)
    pub sha256: String,
    /// Sum of all file sizes in bytes
    pub size: u64,
}

/// Calculates the SHA-256 digest of a file or directory tree.
pub async fn calculate_sha256(path: &Path) -> Result<BundleDigest> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading metadata of", path)?;

    if metadata.is_file() {
        let mut hasher = Sha256::new();
        let size = hash_file(path, &mut hasher).await?;
        Ok(BundleDigest {
            sha256: format!("{:x}", hasher.finalize()),
            size,
        })
    } else if metadata.is_dir() {
        calculate_directory_sha256(path).await
    } else {
        bail!("Path is neither file nor directory: {}", path.display())
    }
}

/// Feeds a file into `hasher` in 8KB chunks, returning the bytes read.
async fn hash_file(file_path: &Path, hasher: &mut Sha256) -> Result<u64> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut buffer = vec![0u8; 8192];
    let mut total = 0u64;

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        total += n as u64;
    }

    Ok(total)
}

/// Entry tags in the directory digest.
const FILE_TAG: u8 = b'F';
const SYMLINK_TAG: u8 = b'L';

/// Feeds a length-prefixed byte string into `hasher`.
fn update_framed(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

/// Hashes every regular file under `dir_path` in sorted order.
///
/// Symlinks are not followed; each contributes its relative path and target.
async fn calculate_directory_sha256(dir_path: &Path) -> Result<BundleDigest> {
    let mut entries: Vec<walkdir::DirEntry> = walkdir::WalkDir::new(dir_path)
        .follow_links(false)
        .into_iter()
        .collect::<std::result::Result<_, _>>()?;
    entries.sort_by(|a, b| a.path().cmp(b.path()));

    let mut hasher = Sha256::new();
    let mut size = 0u64;

    for entry in entries {
        let rel_path: PathBuf = entry.path().strip_prefix(dir_path)?.to_path_buf();
        let rel_path = rel_path.to_string_lossy();

        if entry.file_type().is_symlink() {
            let target = tokio::fs::read_link(entry.path())
                .await
                .fs_context("reading symlink", entry.path())?;
            hasher.update([SYMLINK_TAG]);
            update_framed(&mut hasher, rel_path.as_bytes());
            update_framed(&mut hasher, target.to_string_lossy().as_bytes());
        } else if entry.file_type().is_file() {
            let expected = entry.metadata()?.len();
            hasher.update([FILE_TAG]);
            update_framed(&mut hasher, rel_path.as_bytes());
            hasher.update(expected.to_le_bytes());
            let read = hash_file(entry.path(), &mut hasher).await?;
            if read != expected {
                bail!(
                    "{} changed while hashing ({} bytes expected, {} read)",
                    entry.path().display(),
                    expected,
                    read
                );
            }
            size += read;
        }
    }

    Ok(BundleDigest {
        sha256: format!("{:x}", hasher.finalize()),
        size,
    })
}
