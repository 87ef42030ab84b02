// Hex rendering of digest bytes and checksum values

/// Encode bytes as lowercase hex, two digits per byte, no separators
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Left-pad `hex` with zeros up to `width` characters.
///
/// Strings that already reach `width` are returned as they are.
pub fn normalize_width(hex: &str, width: usize) -> String {
    format!("{:0>width$}", hex, width = width)
}
