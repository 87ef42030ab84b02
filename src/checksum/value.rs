// Structured value checksums
// Values are encoded to canonical bytes with bincode before they reach the digest engine

use serde::Serialize;

use super::algorithm::ChecksumAlgorithm;
use super::error::Result;
use super::hash::digest_hex;
use super::rolling::{rolling_checksum, rolling_checksum_hex, RollingChecksumKind};

/// Canonical byte encoding of a single value
pub fn to_canonical_bytes<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    Ok(bincode::serialize(value)?)
}

/// Encode each value on its own and concatenate the encodings in order
pub fn to_canonical_bytes_all<T>(values: &[T]) -> Result<Vec<u8>>
where
    T: Serialize,
{
    let mut bytes = Vec::new();
    for value in values {
        bytes.extend(to_canonical_bytes(value)?);
    }
    Ok(bytes)
}

/// Hex digest of a value's canonical bytes
pub fn digest_value<T>(value: &T, algorithm: ChecksumAlgorithm) -> Result<String>
where
    T: Serialize + ?Sized,
{
    algorithm.ensure_defined()?;
    digest_hex(algorithm, [to_canonical_bytes(value)?])
}

pub fn digest_value_by_name<T>(value: &T, name: &str) -> Result<String>
where
    T: Serialize + ?Sized,
{
    digest_value(value, ChecksumAlgorithm::from_name(name)?)
}

/// Hex digest over the encodings of `values`, concatenated in slice order
pub fn digest_values<T>(values: &[T], algorithm: ChecksumAlgorithm) -> Result<String>
where
    T: Serialize,
{
    algorithm.ensure_defined()?;
    digest_hex(algorithm, [to_canonical_bytes_all(values)?])
}

/// Hex digest of `first` followed by `second`; swapping them changes the result
pub fn digest_pair<A, B>(first: &A, second: &B, algorithm: ChecksumAlgorithm) -> Result<String>
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    algorithm.ensure_defined()?;
    let first = to_canonical_bytes(first)?;
    let second = to_canonical_bytes(second)?;
    digest_hex(algorithm, [first, second])
}

/// CRC-32 (`use_crc`) or Adler-32 checksum of a value's canonical bytes
pub fn checksum_value<T>(value: &T, use_crc: bool) -> Result<u32>
where
    T: Serialize + ?Sized,
{
    let bytes = to_canonical_bytes(value)?;
    Ok(rolling_checksum(&bytes, RollingChecksumKind::from_crc_flag(use_crc)))
}

pub fn checksum_value_hex<T>(value: &T, use_crc: bool) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let bytes = to_canonical_bytes(value)?;
    Ok(rolling_checksum_hex(&bytes, RollingChecksumKind::from_crc_flag(use_crc)))
}
