use std::fmt;
use std::str::FromStr;

use super::exceptions::CodecError;

/// 入力値の表現形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Mac,
    Ipv4,
    Ipv6,
    Integer,
    Raw,
}

impl ValueKind {
    /// アドレス形式の固定バイト長
    pub fn fixed_len(&self) -> Option<usize> {
        match self {
            ValueKind::Mac => Some(6),
            ValueKind::Ipv4 => Some(4),
            ValueKind::Ipv6 => Some(16),
            ValueKind::Integer | ValueKind::Raw => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Mac => write!(f, "mac"),
            ValueKind::Ipv4 => write!(f, "ipv4"),
            ValueKind::Ipv6 => write!(f, "ipv6"),
            ValueKind::Integer => write!(f, "int"),
            ValueKind::Raw => write!(f, "raw"),
        }
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mac" => Ok(ValueKind::Mac),
            "ipv4" => Ok(ValueKind::Ipv4),
            "ipv6" => Ok(ValueKind::Ipv6),
            "int" | "integer" => Ok(ValueKind::Integer),
            "raw" => Ok(ValueKind::Raw),
            _ => Err(format!("Invalid value kind: {}", s)),
        }
    }
}

/// エンコード対象の値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Integer(i128),
    /// エンコード済みとみなすバイト列
    Raw(Vec<u8>),
    /// スカラーを包むシーケンス（1要素のタプル・リスト）
    Sequence(Vec<Value>),
}

impl Value {
    pub fn shape_name(&self) -> String {
        match self {
            Value::Text(_) => "text".to_string(),
            Value::Integer(_) => "integer".to_string(),
            Value::Raw(_) => "raw bytes".to_string(),
            Value::Sequence(items) => format!("sequence of length {}", items.len()),
        }
    }

    /// 1要素のシーケンスを中身に置き換える（1段のみ）
    pub fn unwrap_if_singleton(self) -> Value {
        match self {
            Value::Sequence(mut items) if items.len() == 1 => items.remove(0),
            other => other,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Raw(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(n as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl TryFrom<serde_json::Value> for Value {
    type Error = CodecError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i as i128))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::Integer(u as i128))
                } else {
                    Err(CodecError::UnsupportedType(format!("float ({})", n)))
                }
            }
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Sequence),
            serde_json::Value::Bool(_) => Err(CodecError::UnsupportedType("bool".to_string())),
            serde_json::Value::Null => Err(CodecError::UnsupportedType("null".to_string())),
            serde_json::Value::Object(_) => Err(CodecError::UnsupportedType("object".to_string())),
        }
    }
}

/// デコード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    Text(String),
    Integer(u128),
    Signed(i128),
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Text(s) => write!(f, "{}", s),
            DecodedValue::Integer(n) => write!(f, "{}", n),
            DecodedValue::Signed(n) => write!(f, "{}", n),
        }
    }
}
