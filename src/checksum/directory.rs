// Directory digest module
// Folds every regular file below a directory into one running digest

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::algorithm::ChecksumAlgorithm;
use super::error::{ChecksumError, Result};
use super::hash::{HashRegistry, Hasher};
use super::hex::encode_hex;

/// Order in which the entries of each directory are folded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Whatever order the filesystem enumerates entries in.
    /// Two platforms may disagree on the digest of the same tree.
    #[default]
    FileSystem,
    /// Entries sorted by file name within each directory
    FileName,
}

/// Counters collected while walking a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files: usize,
    pub directories: usize,
    pub bytes: u64,
}

/// Digest of a directory tree.
///
/// The digest is taken over the raw bytes of every regular file, depth first,
/// with one hasher shared by all levels of the walk. Directory names, file
/// names and metadata do not contribute, and an empty tree digests like empty
/// input. An entry that is neither a file nor a directory (socket, FIFO,
/// device node) aborts the walk instead of being read or skipped.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryDigest {
    algorithm: ChecksumAlgorithm,
    order: EntryOrder,
}

impl DirectoryDigest {
    pub fn new(algorithm: ChecksumAlgorithm) -> Result<Self> {
        Ok(Self {
            algorithm: algorithm.ensure_defined()?,
            order: EntryOrder::default(),
        })
    }

    pub fn with_order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    /// Digest every file under `root` and return the hex digest
    pub fn digest(&self, root: &Path) -> Result<String> {
        self.digest_with_stats(root).map(|(hash, _)| hash)
    }

    /// Like [`digest`](Self::digest), also reporting what the walk folded
    pub fn digest_with_stats(&self, root: &Path) -> Result<(String, WalkStats)> {
        let metadata = fs::metadata(root)
            .map_err(|e| ChecksumError::from_io_error(e, "reading directory", Some(root)))?;
        if !metadata.is_dir() {
            return Err(ChecksumError::from_io_error(
                io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
                "reading directory",
                Some(root),
            ));
        }

        let mut hasher = HashRegistry::get_hasher(self.algorithm)?;
        let mut stats = WalkStats::default();

        // On error the hasher is dropped here with whatever it absorbed
        self.fold_directory(root, hasher.as_mut(), &mut stats)?;

        debug!(
            root = %root.display(),
            algorithm = %self.algorithm,
            files = stats.files,
            directories = stats.directories,
            bytes = stats.bytes,
            "directory digest complete"
        );

        Ok((encode_hex(&hasher.finalize()), stats))
    }

    fn fold_directory(
        &self,
        dir: &Path,
        hasher: &mut dyn Hasher,
        stats: &mut WalkStats,
    ) -> Result<()> {
        stats.directories += 1;

        for path in self.list_entries(dir)? {
            // Follows symlinks, so a link to a file contributes the file's bytes
            let metadata = fs::metadata(&path)
                .map_err(|e| ChecksumError::from_io_error(e, "reading metadata of", Some(&path)))?;

            if metadata.is_dir() {
                self.fold_directory(&path, hasher, stats)?;
            } else if metadata.is_file() {
                let bytes = fs::read(&path)
                    .map_err(|e| ChecksumError::from_io_error(e, "reading", Some(&path)))?;
                trace!(path = %path.display(), bytes = bytes.len(), "folding file");
                hasher.update(&bytes);
                stats.files += 1;
                stats.bytes += bytes.len() as u64;
            } else {
                return Err(ChecksumError::from_io_error(
                    io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
                    "reading",
                    Some(&path),
                ));
            }
        }

        Ok(())
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir)
            .map_err(|e| ChecksumError::from_io_error(e, "reading directory", Some(dir)))?;

        let mut paths = Vec::new();
        for entry_result in entries {
            let entry = entry_result
                .map_err(|e| ChecksumError::from_io_error(e, "reading directory entry in", Some(dir)))?;
            paths.push(entry.path());
        }

        if self.order == EntryOrder::FileName {
            paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }

        Ok(paths)
    }
}
