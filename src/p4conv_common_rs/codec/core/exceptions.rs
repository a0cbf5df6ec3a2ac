/// 値コーデック用エラー型定義
/// エンコード・デコード処理で発生する失敗をすべてこの型で表現する

use std::fmt;
use std::error::Error;

use super::value::ValueKind;

/// 整数が範囲外になった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    /// 負の値の2の補数表現がビット幅に収まらない
    NegativeTooSmall,
    /// 値がビット幅に収まらない
    TooLarge,
}

/// 値コーデックの統合エラー型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// アドレス文字列の構造が不正
    MalformedAddress { kind: ValueKind, input: String },
    /// 整数値が指定ビット幅で表現できない
    OutOfRange { value: i128, bit_width: u32, reason: RangeViolation },
    /// デコード対象のバイト長が形式の固定長と一致しない
    InvalidLength { kind: ValueKind, expected: usize, actual: usize },
    /// エンコードできない入力形状
    UnsupportedType(String),
    /// エンコード結果の長さがビット幅と一致しない
    LengthMismatch { expected: usize, actual: usize },
    /// ビット幅が0
    InvalidBitWidth(u32),
    /// デコード結果が指定ビット幅（最大128ビット）を超える
    DecodeOverflow { len: usize, bit_width: u32 },
    /// 16進文字列として解釈できない
    InvalidHex(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::MalformedAddress { kind, input } => {
                write!(f, "malformed {} address: '{}'", kind, input)
            }
            CodecError::OutOfRange { value, bit_width, reason: RangeViolation::NegativeTooSmall } => {
                write!(
                    f,
                    "negative number, {}, has 2's complement representation that does not fit in {} bits",
                    value, bit_width
                )
            }
            CodecError::OutOfRange { value, bit_width, reason: RangeViolation::TooLarge } => {
                write!(f, "number, {}, does not fit in {} bits", value, bit_width)
            }
            CodecError::InvalidLength { kind, expected, actual } => {
                write!(f, "invalid {} length: expected {} bytes, got {}", kind, expected, actual)
            }
            CodecError::UnsupportedType(shape) => {
                write!(f, "encoding values of {} is not supported", shape)
            }
            CodecError::LengthMismatch { expected, actual } => {
                write!(f, "encoded length mismatch: expected {} bytes, got {}", expected, actual)
            }
            CodecError::InvalidBitWidth(bits) => {
                write!(f, "invalid bit width: {}", bits)
            }
            CodecError::DecodeOverflow { len, bit_width } => {
                write!(f, "{} byte value exceeds {} significant bits", len, bit_width)
            }
            CodecError::InvalidHex(input) => {
                write!(f, "invalid hex string: '{}'", input)
            }
        }
    }
}

impl Error for CodecError {}

/// Result型のエイリアス
pub type CodecResult<T> = Result<T, CodecError>;

/// エラーヘルパー関数
impl CodecError {
    /// アドレス不正エラーを作成
    pub fn malformed(kind: ValueKind, input: &str) -> Self {
        CodecError::MalformedAddress { kind, input: input.to_string() }
    }

    /// バイト長不正エラーを作成
    pub fn invalid_length(kind: ValueKind, expected: usize, actual: usize) -> Self {
        CodecError::InvalidLength { kind, expected, actual }
    }

    /// 範囲外エラーを作成
    pub fn out_of_range(value: i128, bit_width: u32, reason: RangeViolation) -> Self {
        CodecError::OutOfRange { value, bit_width, reason }
    }
}
