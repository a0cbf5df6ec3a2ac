use log::{debug, log_enabled, Level};

use crate::p4conv_common_rs::codec::core::exceptions::{CodecError, CodecResult};
use crate::p4conv_common_rs::codec::core::value::ValueKind;

/// Hex rendering options for encoded values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexFormat {
    pub prefix: bool,
    pub uppercase: bool,
}

impl Default for HexFormat {
    fn default() -> Self {
        Self { prefix: true, uppercase: false }
    }
}

/// Renders `bytes` as one hex number, e.g. `0x0a000001`.
pub fn format_hex(bytes: &[u8], format: HexFormat) -> String {
    let digits = if format.uppercase { hex::encode_upper(bytes) } else { hex::encode(bytes) };
    if format.prefix {
        format!("0x{}", digits)
    } else {
        digits
    }
}

/// Parses hex text back into bytes.
/// Accepts an optional `0x` prefix and `:`, `_` or whitespace separators; an odd
/// digit count is padded with a leading zero.
pub fn parse_hex(text: &str) -> CodecResult<Vec<u8>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let mut digits: String = body
        .chars()
        .filter(|c| !(c.is_whitespace() || *c == ':' || *c == '_'))
        .collect();
    if digits.is_empty() {
        return Err(CodecError::InvalidHex(text.to_string()));
    }
    if digits.len() % 2 == 1 {
        digits.insert(0, '0');
    }
    hex::decode(&digits).map_err(|_| CodecError::InvalidHex(text.to_string()))
}

/// Minimal encoded-value logger used while building table entries.
/// - Dumps the encoded bytes with their kind and declared width
/// - Skips formatting entirely when debug logging is off
pub struct EncodedValueDebugLogger;

impl EncodedValueDebugLogger {
    pub fn log_encoded(kind: ValueKind, bit_width: u32, bytes: &[u8]) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!(
            "[EncodeDebug] kind={} bitwidth={} len={} value={}",
            kind,
            bit_width,
            bytes.len(),
            format_hex(bytes, HexFormat::default())
        );
    }

    pub fn log_decoded(kind: ValueKind, bytes: &[u8], decoded: &str) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!(
            "[DecodeDebug] kind={} value={} decoded={}",
            kind,
            format_hex(bytes, HexFormat::default()),
            decoded
        );
    }
}
