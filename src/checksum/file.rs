// File checksum module
// Resolves a path into digests: whole-file reads for hashes, streamed reads for rolling checksums

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::algorithm::ChecksumAlgorithm;
use super::directory::{DirectoryDigest, EntryOrder};
use super::error::{ChecksumError, Result};
use super::hash::digest_hex;
use super::rolling::{RollingChecksum, RollingChecksumKind};

const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Computes digests and rolling checksums of files and directories
#[derive(Debug, Clone)]
pub struct FileChecksum {
    buffer_size: usize,
    entry_order: EntryOrder,
}

impl FileChecksum {
    /// Create a new FileChecksum with a 64KB read buffer and filesystem entry order
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            entry_order: EntryOrder::default(),
        }
    }

    /// Read buffer size for streamed rolling checksums (minimum one byte)
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Entry order used when the path is a directory
    pub fn with_entry_order(mut self, entry_order: EntryOrder) -> Self {
        self.entry_order = entry_order;
        self
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn entry_order(&self) -> EntryOrder {
        self.entry_order
    }

    /// Read the full contents of a file
    pub fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| ChecksumError::from_io_error(e, "reading", Some(path)))
    }

    /// Hex digest of a file, or of every file below it when `path` is a directory
    pub fn digest(&self, path: &Path, algorithm: ChecksumAlgorithm) -> Result<String> {
        // Reject the algorithm before touching the filesystem
        algorithm.ensure_defined()?;

        let metadata = fs::metadata(path)
            .map_err(|e| ChecksumError::from_io_error(e, "reading metadata of", Some(path)))?;

        if metadata.is_dir() {
            debug!(path = %path.display(), algorithm = %algorithm, "digesting directory");
            return DirectoryDigest::new(algorithm)?
                .with_order(self.entry_order)
                .digest(path);
        }

        let bytes = self.read_bytes(path)?;
        digest_hex(algorithm, [bytes])
    }

    /// Same as [`digest`](Self::digest) with the algorithm given by provider name
    pub fn digest_by_name(&self, path: &Path, name: &str) -> Result<String> {
        self.digest(path, ChecksumAlgorithm::from_name(name)?)
    }

    /// Stream a file through a CRC-32 or Adler-32 accumulator
    pub fn rolling_checksum(&self, path: &Path, kind: RollingChecksumKind) -> Result<u32> {
        let mut file =
            File::open(path).map_err(|e| ChecksumError::from_io_error(e, "opening", Some(path)))?;

        let mut checksum = RollingChecksum::new(kind);
        let mut buffer = vec![0u8; self.buffer_size];
        let mut total = 0u64;

        loop {
            let bytes_read = file
                .read(&mut buffer)
                .map_err(|e| ChecksumError::from_io_error(e, "reading", Some(path)))?;
            if bytes_read == 0 {
                break;
            }
            checksum.update(&buffer[..bytes_read]);
            total += bytes_read as u64;
        }

        debug!(path = %path.display(), kind = %kind, bytes = total, "rolling checksum complete");
        Ok(checksum.value())
    }

    /// Hex form of [`rolling_checksum`](Self::rolling_checksum)
    pub fn rolling_checksum_hex(&self, path: &Path, kind: RollingChecksumKind) -> Result<String> {
        self.rolling_checksum(path, kind)
            .map(|value| kind.format_hex(value))
    }
}

impl Default for FileChecksum {
    fn default() -> Self {
        Self::new()
    }
}
