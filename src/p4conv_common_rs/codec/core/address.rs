//! アドレスコーデック
//! MAC / IPv4 / IPv6 のテキスト表現と固定長バイト列の相互変換

use std::net::{Ipv4Addr, Ipv6Addr};

use super::exceptions::{CodecError, CodecResult};
use super::matchers::is_mac;
use super::value::ValueKind;

pub const MAC_LEN: usize = 6;
pub const IPV4_LEN: usize = 4;
pub const IPV6_LEN: usize = 16;

/// MACアドレス文字列を6バイトに変換
pub fn encode_mac(s: &str) -> CodecResult<Vec<u8>> {
    if !is_mac(s) {
        return Err(CodecError::malformed(ValueKind::Mac, s));
    }
    hex::decode(s.replace(':', "")).map_err(|_| CodecError::malformed(ValueKind::Mac, s))
}

/// 6バイトを小文字16進のコロン区切り文字列に変換
pub fn decode_mac(bytes: &[u8]) -> CodecResult<String> {
    if bytes.len() != MAC_LEN {
        return Err(CodecError::invalid_length(ValueKind::Mac, MAC_LEN, bytes.len()));
    }
    Ok(bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(":"))
}

/// ドット区切りIPv4を4バイト（ビッグエンディアン）に変換
pub fn encode_ipv4(s: &str) -> CodecResult<Vec<u8>> {
    let addr: Ipv4Addr = s
        .parse()
        .map_err(|_| CodecError::malformed(ValueKind::Ipv4, s))?;
    Ok(addr.octets().to_vec())
}

pub fn decode_ipv4(bytes: &[u8]) -> CodecResult<String> {
    let octets: [u8; IPV4_LEN] = bytes
        .try_into()
        .map_err(|_| CodecError::invalid_length(ValueKind::Ipv4, IPV4_LEN, bytes.len()))?;
    Ok(Ipv4Addr::from(octets).to_string())
}

/// IPv6テキスト表現を16バイトに変換
pub fn encode_ipv6(s: &str) -> CodecResult<Vec<u8>> {
    let addr: Ipv6Addr = s
        .parse()
        .map_err(|_| CodecError::malformed(ValueKind::Ipv6, s))?;
    Ok(addr.octets().to_vec())
}

/// 16バイトをIPv6テキスト表現に変換
///
/// 最長のゼログループ列を `::` で省略する（同じ長さなら先頭側）。
/// 単独のゼログループは省略しない。
pub fn decode_ipv6(bytes: &[u8]) -> CodecResult<String> {
    let octets: [u8; IPV6_LEN] = bytes
        .try_into()
        .map_err(|_| CodecError::invalid_length(ValueKind::Ipv6, IPV6_LEN, bytes.len()))?;
    Ok(Ipv6Addr::from(octets).to_string())
}
