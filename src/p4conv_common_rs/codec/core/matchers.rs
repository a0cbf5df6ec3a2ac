use once_cell::sync::Lazy;
use regex::Regex;
use std::net::Ipv6Addr;

use super::value::ValueKind;

// `\d` はUnicode数字にもマッチするため、ASCIIの範囲を明示する
static MAC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9a-fA-F]{2}:){5}[0-9a-fA-F]{2}$").expect("mac pattern")
});

static IPV4_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("ipv4 pattern")
});

/// `aa:bb:cc:dd:ee:ff` 形式（大文字小文字を区別しない）
pub fn is_mac(s: &str) -> bool {
    MAC_PATTERN.is_match(s)
}

/// ドット区切り4グループの10進数。各オクテットが255以下かは検査しない
pub fn is_ipv4(s: &str) -> bool {
    IPV4_PATTERN.is_match(s)
}

/// IPv6テキスト表現（`::` 省略形を含む）として解析できるか
pub fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// MAC, IPv4, IPv6 の順に判定し、最初に一致した形式を返す
pub fn detect_format(s: &str) -> Option<ValueKind> {
    if is_mac(s) {
        Some(ValueKind::Mac)
    } else if is_ipv4(s) {
        Some(ValueKind::Ipv4)
    } else if is_ipv6(s) {
        Some(ValueKind::Ipv6)
    } else {
        None
    }
}
