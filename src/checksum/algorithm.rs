// Algorithm catalog
// Closed set of digest algorithms and the provider names they are selected by

use std::fmt;
use std::str::FromStr;

use super::error::{ChecksumError, Result};

/// Digest algorithms understood by the hash registry
///
/// `Undefined` is what the pattern classifier returns when nothing matches.
/// It never reaches a digest provider: every hashing entry point rejects it
/// with [`ChecksumError::UnsupportedAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    Md2,
    Md4,
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Undefined,
}

/// Provider name and output size in bytes, one row per defined algorithm
static CATALOG: [(ChecksumAlgorithm, &str, usize); 7] = [
    (ChecksumAlgorithm::Md2, "MD2", 16),
    (ChecksumAlgorithm::Md4, "MD4", 16),
    (ChecksumAlgorithm::Md5, "MD5", 16),
    (ChecksumAlgorithm::Sha1, "SHA-1", 20),
    (ChecksumAlgorithm::Sha256, "SHA-256", 32),
    (ChecksumAlgorithm::Sha384, "SHA-384", 48),
    (ChecksumAlgorithm::Sha512, "SHA-512", 64),
];

const UNDEFINED_NAME: &str = "UNDEFINED";

impl ChecksumAlgorithm {
    /// Every algorithm that can actually be computed, in catalog order
    pub const ALL: [ChecksumAlgorithm; 7] = [
        ChecksumAlgorithm::Md2,
        ChecksumAlgorithm::Md4,
        ChecksumAlgorithm::Md5,
        ChecksumAlgorithm::Sha1,
        ChecksumAlgorithm::Sha256,
        ChecksumAlgorithm::Sha384,
        ChecksumAlgorithm::Sha512,
    ];

    fn entry(self) -> Option<&'static (ChecksumAlgorithm, &'static str, usize)> {
        CATALOG.iter().find(|(alg, _, _)| *alg == self)
    }

    /// Canonical provider name, e.g. `"SHA-256"`
    pub fn name(self) -> &'static str {
        self.entry().map_or(UNDEFINED_NAME, |(_, name, _)| *name)
    }

    /// Digest length in bytes, `None` for `Undefined`
    pub fn output_size(self) -> Option<usize> {
        self.entry().map(|(_, _, size)| *size)
    }

    /// Length of the hex rendering of a digest
    pub fn hex_len(self) -> Option<usize> {
        self.output_size().map(|size| size * 2)
    }

    pub fn is_defined(self) -> bool {
        self != ChecksumAlgorithm::Undefined
    }

    /// Look up an algorithm by its exact provider name.
    ///
    /// Matching is case-sensitive and spelling-exact: `"SHA-1"` resolves,
    /// `"SHA1"` and `"sha-1"` do not. The `UNDEFINED` sentinel is rejected.
    pub fn from_name(name: &str) -> Result<Self> {
        CATALOG
            .iter()
            .find(|(_, provider_name, _)| *provider_name == name)
            .map(|(alg, _, _)| *alg)
            .ok_or_else(|| ChecksumError::unsupported(name))
    }

    /// Fail with `UnsupportedAlgorithm` unless this is a computable algorithm
    pub fn ensure_defined(self) -> Result<Self> {
        if self.is_defined() {
            Ok(self)
        } else {
            Err(ChecksumError::unsupported(UNDEFINED_NAME))
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChecksumAlgorithm {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Information about a checksum algorithm
#[derive(Debug, Clone, serde::Serialize)]
pub struct AlgorithmInfo {
    pub name: String,
    pub output_bits: usize,
    pub cryptographic: bool,
}
