//! 値ディスパッチャ
//! 入力値の形式を判定し、対応するコーデックへ振り分ける。
//! 出力は常に宣言されたビット幅のバイト長になる。

use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::address::{decode_ipv4, decode_ipv6, decode_mac, encode_ipv4, encode_ipv6, encode_mac};
use super::bit_width::BitWidth;
use super::exceptions::{CodecError, CodecResult};
use super::integer::{decode_num, encode_num};
use super::matchers::detect_format;
use super::value::{DecodedValue, Value, ValueKind};

/// アドレスとして認識できないテキストの扱い
///
/// `Allow` はテキストをエンコード済みのバイト列とみなしてそのまま通す。
/// 内容は検査されず、長さの一致だけが保証される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassthroughPolicy {
    #[default]
    Allow,
    Reject,
}

impl fmt::Display for PassthroughPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassthroughPolicy::Allow => write!(f, "allow"),
            PassthroughPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for PassthroughPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allow" => Ok(PassthroughPolicy::Allow),
            "reject" => Ok(PassthroughPolicy::Reject),
            _ => Err(format!("Invalid passthrough policy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValueEncoder {
    policy: PassthroughPolicy,
}

impl ValueEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: PassthroughPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> PassthroughPolicy {
        self.policy
    }

    /// 入力値の表現形式を判定する（1要素シーケンスは展開してから判定）
    pub fn classify(&self, value: Value) -> CodecResult<ValueKind> {
        self.detect(&value.unwrap_if_singleton())
    }

    fn detect(&self, value: &Value) -> CodecResult<ValueKind> {
        match value {
            Value::Text(s) => match detect_format(s) {
                Some(kind) => Ok(kind),
                None if self.policy == PassthroughPolicy::Allow => Ok(ValueKind::Raw),
                None => Err(CodecError::UnsupportedType(format!("unrecognised text '{}'", s))),
            },
            Value::Integer(_) => Ok(ValueKind::Integer),
            Value::Raw(_) => Ok(ValueKind::Raw),
            Value::Sequence(_) => Err(CodecError::UnsupportedType(value.shape_name())),
        }
    }

    /// 値の形式を推定してエンコードする
    ///
    /// 判定順: MAC → IPv4 → IPv6 → パススルー（テキスト）、整数、バイト列。
    pub fn encode(&self, value: impl Into<Value>, bit_width: u32) -> CodecResult<Vec<u8>> {
        let width = BitWidth::new(bit_width)?;
        let value = value.into().unwrap_if_singleton();
        let kind = self.detect(&value)?;

        let encoded = match value {
            Value::Text(s) => encode_text(kind, &s, bit_width)?,
            Value::Integer(n) => encode_num(n, bit_width)?,
            Value::Raw(bytes) => bytes,
            Value::Sequence(items) => {
                return Err(CodecError::UnsupportedType(format!("sequence of length {}", items.len())))
            }
        };
        check_length(encoded, width)
    }

    /// 形式を明示してテキストをエンコードする（形式判定は行わない）
    pub fn encode_as(&self, kind: ValueKind, text: &str, bit_width: u32) -> CodecResult<Vec<u8>> {
        let width = BitWidth::new(bit_width)?;
        check_length(encode_text(kind, text, bit_width)?, width)
    }

    /// 形式を指定してバイト列をデコードする
    pub fn decode(&self, kind: ValueKind, bytes: &[u8]) -> CodecResult<DecodedValue> {
        match kind {
            ValueKind::Mac => decode_mac(bytes).map(DecodedValue::Text),
            ValueKind::Ipv4 => decode_ipv4(bytes).map(DecodedValue::Text),
            ValueKind::Ipv6 => decode_ipv6(bytes).map(DecodedValue::Text),
            ValueKind::Integer => decode_num(bytes).map(DecodedValue::Integer),
            ValueKind::Raw => Ok(DecodedValue::Text(hex::encode(bytes))),
        }
    }
}

fn encode_text(kind: ValueKind, text: &str, bit_width: u32) -> CodecResult<Vec<u8>> {
    match kind {
        ValueKind::Mac => encode_mac(text),
        ValueKind::Ipv4 => encode_ipv4(text),
        ValueKind::Ipv6 => encode_ipv6(text),
        ValueKind::Integer => encode_num(parse_integer(text)?, bit_width),
        ValueKind::Raw => {
            warn!("passing through unrecognised text as encoded bytes: '{}'", text);
            Ok(text.as_bytes().to_vec())
        }
    }
}

/// 10進数または `0x` 付き16進数
fn parse_integer(text: &str) -> CodecResult<i128> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if digits.starts_with(['-', '+']) {
        return Err(CodecError::UnsupportedType(format!("non-integer text '{}'", text)));
    }

    let parsed = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex_digits) => i128::from_str_radix(hex_digits, 16),
        None => digits.parse::<i128>(),
    };
    let magnitude =
        parsed.map_err(|_| CodecError::UnsupportedType(format!("non-integer text '{}'", text)))?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn check_length(encoded: Vec<u8>, width: BitWidth) -> CodecResult<Vec<u8>> {
    if encoded.len() != width.byte_len() {
        error!(
            "encoded value has {} bytes but {} requires {}",
            encoded.len(),
            width,
            width.byte_len()
        );
        return Err(CodecError::LengthMismatch {
            expected: width.byte_len(),
            actual: encoded.len(),
        });
    }
    Ok(encoded)
}

/// 既定の設定（パススルー許可）で値をエンコードする
pub fn encode(value: impl Into<Value>, bit_width: u32) -> CodecResult<Vec<u8>> {
    ValueEncoder::new().encode(value, bit_width)
}

pub fn decode(kind: ValueKind, bytes: &[u8]) -> CodecResult<DecodedValue> {
    ValueEncoder::new().decode(kind, bytes)
}
