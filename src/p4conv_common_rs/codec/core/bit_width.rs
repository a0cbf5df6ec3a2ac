/// ビット幅ユーティリティ
/// フィールドのビット幅と、エンコード後のバイト長の対応を扱う

use std::fmt;

use super::exceptions::{CodecError, CodecResult};

/// ビット幅からバイト長を計算する（切り上げ）
///
/// Args:
///     bit_width: フィールドのビット幅
///
/// Returns:
///     エンコード後のバイト長
pub fn bitwidth_to_bytes(bit_width: u32) -> usize {
    (bit_width as usize + 7) / 8
}

/// フィールドのビット幅（1以上）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitWidth(u32);

impl BitWidth {
    /// 新しいビット幅を作成。0は不正
    pub fn new(bits: u32) -> CodecResult<Self> {
        if bits == 0 {
            return Err(CodecError::InvalidBitWidth(bits));
        }
        Ok(Self(bits))
    }

    /// ビット数
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// エンコード後のバイト長
    pub fn byte_len(&self) -> usize {
        bitwidth_to_bytes(self.0)
    }

    /// バイト長に対して余るビット数（先頭バイトでマスクされる上位ビット）
    pub fn padding_bits(&self) -> u32 {
        (self.byte_len() * 8) as u32 - self.0
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = CodecError;

    fn try_from(bits: u32) -> CodecResult<Self> {
        BitWidth::new(bits)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}
