// Checksum pattern classifier
// Guesses which algorithm produced a hex string from its length alone

use super::algorithm::ChecksumAlgorithm;

/// Hex lengths checked in order; the first match wins
const PATTERNS: [(usize, ChecksumAlgorithm); 5] = [
    (32, ChecksumAlgorithm::Md5),
    (40, ChecksumAlgorithm::Sha1),
    (64, ChecksumAlgorithm::Sha256),
    (96, ChecksumAlgorithm::Sha384),
    (128, ChecksumAlgorithm::Sha512),
];

fn is_hex(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Infer the most likely algorithm behind a hex digest.
///
/// This is a display hint, not provenance. MD2, MD4 and MD5 all produce 32
/// hex characters, and every 32-character string resolves to MD5. Strings of
/// any other length, or containing a non-hex character, yield `Undefined`.
/// Surrounding whitespace is not trimmed.
pub fn classify(text: &str) -> ChecksumAlgorithm {
    if !is_hex(text) {
        return ChecksumAlgorithm::Undefined;
    }
    PATTERNS
        .iter()
        .find(|(len, _)| *len == text.len())
        .map_or(ChecksumAlgorithm::Undefined, |(_, alg)| *alg)
}

/// Whether `text` has the shape of a hex digest produced by `algorithm`
pub fn matches_pattern(text: &str, algorithm: ChecksumAlgorithm) -> bool {
    match algorithm.hex_len() {
        Some(len) => text.len() == len && is_hex(text),
        None => false,
    }
}
