// Hash computation module
// Provides the digest registry and the byte-level digest operations

use std::path::PathBuf;

use md2::Md2;
use md4::Md4;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::trace;

use super::algorithm::{AlgorithmInfo, ChecksumAlgorithm};
use super::error::{ChecksumError, Result};
use super::hex::encode_hex;
use super::rolling::RollingChecksumKind;

/// Trait for digest algorithm implementations
pub trait Hasher: Send {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash and return the raw digest bytes
    fn finalize(self: Box<Self>) -> Vec<u8>;

    /// Get the output size in bytes
    fn output_size(&self) -> usize;
}

// All supported algorithms implement the RustCrypto `Digest` trait, so a
// single wrapper covers the whole catalog.
struct DigestHasher<D>(D);

impl<D> Hasher for DigestHasher<D>
where
    D: Digest + Send,
{
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        <D as Digest>::output_size()
    }
}

/// Registry for digest algorithms
pub struct HashRegistry;

impl HashRegistry {
    /// Get a fresh hasher for the specified algorithm
    pub fn get_hasher(algorithm: ChecksumAlgorithm) -> Result<Box<dyn Hasher>> {
        match algorithm {
            ChecksumAlgorithm::Md2 => Ok(Box::new(DigestHasher(Md2::new()))),
            ChecksumAlgorithm::Md4 => Ok(Box::new(DigestHasher(Md4::new()))),
            ChecksumAlgorithm::Md5 => Ok(Box::new(DigestHasher(Md5::new()))),
            ChecksumAlgorithm::Sha1 => Ok(Box::new(DigestHasher(Sha1::new()))),
            ChecksumAlgorithm::Sha256 => Ok(Box::new(DigestHasher(Sha256::new()))),
            ChecksumAlgorithm::Sha384 => Ok(Box::new(DigestHasher(Sha384::new()))),
            ChecksumAlgorithm::Sha512 => Ok(Box::new(DigestHasher(Sha512::new()))),
            ChecksumAlgorithm::Undefined => Err(ChecksumError::unsupported(algorithm.name())),
        }
    }

    /// Get a fresh hasher by provider name (`"MD5"`, `"SHA-256"`, ...)
    pub fn get_hasher_by_name(name: &str) -> Result<Box<dyn Hasher>> {
        Self::get_hasher(ChecksumAlgorithm::from_name(name)?)
    }

    /// List all available algorithms, digests first, then rolling checksums
    pub fn list_algorithms() -> Vec<AlgorithmInfo> {
        let mut algorithms: Vec<AlgorithmInfo> = ChecksumAlgorithm::ALL
            .iter()
            .filter_map(|alg| {
                alg.output_size().map(|size| AlgorithmInfo {
                    name: alg.name().to_string(),
                    output_bits: size * 8,
                    cryptographic: true,
                })
            })
            .collect();

        for kind in [RollingChecksumKind::Crc32, RollingChecksumKind::Adler32] {
            algorithms.push(AlgorithmInfo {
                name: kind.name().to_string(),
                output_bits: 32,
                cryptographic: false,
            });
        }

        algorithms
    }
}

/// Result of a digest computation
#[derive(Debug, Clone, serde::Serialize)]
pub struct HashResult {
    pub algorithm: String,
    pub hash: String, // hex-encoded
    pub source: PathBuf,
}

/// Digest the concatenation of `buffers` and return the lowercase hex digest.
///
/// Buffers are fed in iteration order with nothing in between, so
/// `digest_hex(alg, [a, b])` equals the digest of `a ++ b`.
pub fn digest_hex<I>(algorithm: ChecksumAlgorithm, buffers: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut hasher = HashRegistry::get_hasher(algorithm)?;
    let mut total = 0usize;
    for buffer in buffers {
        let buffer = buffer.as_ref();
        total += buffer.len();
        hasher.update(buffer);
    }
    trace!(algorithm = %algorithm, bytes = total, "digested buffers");
    Ok(encode_hex(&hasher.finalize()))
}

/// Same as [`digest_hex`] with the algorithm selected by provider name
pub fn digest_hex_by_name<I>(name: &str, buffers: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    digest_hex(ChecksumAlgorithm::from_name(name)?, buffers)
}

/// Digest every buffer on its own and concatenate the hex digests.
///
/// This is not the digest of the concatenated input: two buffers with MD5
/// yield 64 hex characters.
pub fn digest_hex_each<I>(algorithm: ChecksumAlgorithm, buffers: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    algorithm.ensure_defined()?;
    buffers
        .into_iter()
        .map(|buffer| digest_hex(algorithm, [buffer]))
        .collect()
}

/// Same as [`digest_hex_each`] with the algorithm selected by provider name
pub fn digest_hex_each_by_name<I>(name: &str, buffers: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    digest_hex_each(ChecksumAlgorithm::from_name(name)?, buffers)
}

/// Digest the UTF-8 bytes of `text`
pub fn digest_text(text: &str, algorithm: ChecksumAlgorithm) -> Result<String> {
    digest_hex(algorithm, [text.as_bytes()])
}
