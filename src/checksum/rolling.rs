// Rolling checksums
// CRC-32 and Adler-32 accumulators producing 32-bit values

use std::fmt;

use super::hex::normalize_width;

/// Hex width of a CRC-32 rendering
const CRC32_HEX_WIDTH: usize = 8;

/// Non-cryptographic checksum flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollingChecksumKind {
    Crc32,
    Adler32,
}

impl RollingChecksumKind {
    /// `true` selects CRC-32, `false` selects Adler-32
    pub fn from_crc_flag(use_crc: bool) -> Self {
        if use_crc {
            RollingChecksumKind::Crc32
        } else {
            RollingChecksumKind::Adler32
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RollingChecksumKind::Crc32 => "CRC-32",
            RollingChecksumKind::Adler32 => "Adler-32",
        }
    }

    /// Fixed hex width for this kind, if any.
    ///
    /// Only CRC-32 is zero-padded. Adler-32 renders without padding, so an
    /// empty input yields `"1"`.
    pub fn hex_width(self) -> Option<usize> {
        match self {
            RollingChecksumKind::Crc32 => Some(CRC32_HEX_WIDTH),
            RollingChecksumKind::Adler32 => None,
        }
    }

    /// Render a checksum value of this kind as hex
    pub fn format_hex(self, value: u32) -> String {
        let hex = format!("{:x}", value);
        match self.hex_width() {
            Some(width) => normalize_width(&hex, width),
            None => hex,
        }
    }
}

impl fmt::Display for RollingChecksumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

enum Accumulator {
    Crc32(crc32fast::Hasher),
    Adler32(adler2::Adler32),
}

/// Incremental CRC-32 / Adler-32 accumulator
pub struct RollingChecksum {
    inner: Accumulator,
}

impl RollingChecksum {
    pub fn new(kind: RollingChecksumKind) -> Self {
        let inner = match kind {
            RollingChecksumKind::Crc32 => Accumulator::Crc32(crc32fast::Hasher::new()),
            RollingChecksumKind::Adler32 => Accumulator::Adler32(adler2::Adler32::new()),
        };
        Self { inner }
    }

    pub fn kind(&self) -> RollingChecksumKind {
        match self.inner {
            Accumulator::Crc32(_) => RollingChecksumKind::Crc32,
            Accumulator::Adler32(_) => RollingChecksumKind::Adler32,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Accumulator::Crc32(hasher) => hasher.update(data),
            Accumulator::Adler32(hasher) => hasher.write_slice(data),
        }
    }

    /// Current checksum value; the accumulator can keep taking data afterwards
    pub fn value(&self) -> u32 {
        match &self.inner {
            Accumulator::Crc32(hasher) => hasher.clone().finalize(),
            Accumulator::Adler32(hasher) => hasher.checksum(),
        }
    }
}

/// Checksum `bytes` in a single update on a fresh accumulator
pub fn rolling_checksum(bytes: &[u8], kind: RollingChecksumKind) -> u32 {
    let mut checksum = RollingChecksum::new(kind);
    checksum.update(bytes);
    checksum.value()
}

/// Hex form of [`rolling_checksum`]; CRC-32 is always 8 characters wide
pub fn rolling_checksum_hex(bytes: &[u8], kind: RollingChecksumKind) -> String {
    kind.format_hex(rolling_checksum(bytes, kind))
}

/// Checksum the UTF-8 bytes of `text`, CRC-32 when `use_crc` is set, Adler-32 otherwise
pub fn checksum_text(text: &str, use_crc: bool) -> u32 {
    rolling_checksum(text.as_bytes(), RollingChecksumKind::from_crc_flag(use_crc))
}
