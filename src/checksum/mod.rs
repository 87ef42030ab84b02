// Checksum core library
// Digests for byte buffers, files, directory trees and serializable values

pub mod algorithm;
pub mod classify;
pub mod directory;
pub mod error;
pub mod file;
pub mod hash;
pub mod hex;
pub mod rolling;
pub mod value;

// Re-export commonly used types for convenience
pub use algorithm::{AlgorithmInfo, ChecksumAlgorithm};
pub use classify::{classify, matches_pattern};
pub use directory::{DirectoryDigest, EntryOrder, WalkStats};
pub use error::{ChecksumError, FailureKind, Result};
pub use file::FileChecksum;
pub use hash::{
    digest_hex, digest_hex_by_name, digest_hex_each, digest_hex_each_by_name, digest_text,
    HashRegistry, HashResult, Hasher,
};
pub use hex::{encode_hex, normalize_width};
pub use rolling::{
    checksum_text, rolling_checksum, rolling_checksum_hex, RollingChecksum, RollingChecksumKind,
};
pub use value::{
    checksum_value, checksum_value_hex, digest_pair, digest_value, digest_value_by_name,
    digest_values, to_canonical_bytes, to_canonical_bytes_all,
};
