//! 整数コーデック
//! 任意ビット幅の符号付き/符号なし整数と、ビッグエンディアン・ゼロ詰めの
//! 固定長バイト列との相互変換

use log::debug;

use super::bit_width::BitWidth;
use super::exceptions::{CodecError, CodecResult, RangeViolation};

const U128_BYTES: usize = 16;

/// 整数を指定ビット幅のバイト列にエンコードする
///
/// 負の値は2の補数表現（`2^bit_width + n`）に置き換えてからエンコードする。
/// 結果は常に `bitwidth_to_bytes(bit_width)` バイト。
///
/// Args:
///     n: エンコードする値
///     bit_width: フィールドのビット幅
///
/// Returns:
///     ビッグエンディアンのバイト列
pub fn encode_num(n: i128, bit_width: u32) -> CodecResult<Vec<u8>> {
    let width = BitWidth::new(bit_width)?;

    // 128ビット以上の幅ではi128の全範囲が収まる
    if n < 0 {
        if bit_width <= 127 && n < -(1i128 << (bit_width - 1)) {
            return Err(CodecError::out_of_range(n, bit_width, RangeViolation::NegativeTooSmall));
        }
    } else if bit_width < 127 && n >= (1i128 << bit_width) {
        return Err(CodecError::out_of_range(n, bit_width, RangeViolation::TooLarge));
    }

    let byte_len = width.byte_len();
    let fill = if n < 0 { 0xFF } else { 0x00 };
    let be = n.to_be_bytes();

    let mut encoded = vec![fill; byte_len.saturating_sub(U128_BYTES)];
    encoded.extend_from_slice(&be[U128_BYTES.saturating_sub(byte_len)..]);
    if let Some(first) = encoded.first_mut() {
        *first &= 0xFF >> width.padding_bits();
    }

    if n < 0 {
        debug!(
            target: "p4conv::integer",
            "negative number remapped: orig_number={} bit_width={} encoded={}",
            n,
            bit_width,
            hex::encode(&encoded)
        );
    }

    Ok(encoded)
}

/// ビッグエンディアンの符号なし整数としてデコードする
///
/// 符号の復元は行わない。符号付きの値が必要なら `decode_signed` を使う。
pub fn decode_num(bytes: &[u8]) -> CodecResult<u128> {
    let significant = bytes.iter().skip_while(|b| **b == 0).count();
    if significant > U128_BYTES {
        return Err(CodecError::DecodeOverflow { len: bytes.len(), bit_width: 128 });
    }
    Ok(bytes.iter().fold(0u128, |acc, b| (acc << 8) | *b as u128))
}

/// 2の補数表現として符号付き整数にデコードする（`encode_num` の逆変換）
pub fn decode_signed(bytes: &[u8], bit_width: u32) -> CodecResult<i128> {
    let width = BitWidth::new(bit_width)?;
    if bit_width > 128 {
        return Err(CodecError::InvalidBitWidth(bit_width));
    }

    let value = decode_num(bytes)?;
    if bit_width < 128 && value >> bit_width != 0 {
        return Err(CodecError::DecodeOverflow { len: bytes.len(), bit_width });
    }

    let shift = 128 - width.bits();
    Ok(((value << shift) as i128) >> shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_num_basic() {
        assert_eq!(encode_num(1337, 40).unwrap(), vec![0x00, 0x00, 0x00, 0x05, 0x39]);
        assert_eq!(encode_num(0, 8).unwrap(), vec![0x00]);
        assert_eq!(encode_num(255, 8).unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_encode_num_bounds() {
        assert!(matches!(
            encode_num(256, 8),
            Err(CodecError::OutOfRange { reason: RangeViolation::TooLarge, .. })
        ));
        assert!(matches!(
            encode_num(-129, 8),
            Err(CodecError::OutOfRange { reason: RangeViolation::NegativeTooSmall, .. })
        ));
        assert_eq!(encode_num(-128, 8).unwrap(), vec![0x80]);
        assert_eq!(encode_num(-1, 8).unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_encode_num_partial_byte() {
        // 9ビット幅: -1 は 0x1FF
        assert_eq!(encode_num(-1, 9).unwrap(), vec![0x01, 0xFF]);
        assert_eq!(encode_num(511, 9).unwrap(), vec![0x01, 0xFF]);
        assert!(encode_num(512, 9).is_err());
        assert_eq!(encode_num(-256, 9).unwrap(), vec![0x01, 0x00]);
        assert!(encode_num(-257, 9).is_err());
    }

    #[test]
    fn test_encode_num_wide() {
        let encoded = encode_num(-1, 136).unwrap();
        assert_eq!(encoded.len(), 17);
        assert!(encoded.iter().all(|b| *b == 0xFF));

        let encoded = encode_num(-1, 130).unwrap();
        assert_eq!(encoded[0], 0x03);
        assert!(encoded[1..].iter().all(|b| *b == 0xFF));

        let encoded = encode_num(i128::MAX, 128).unwrap();
        assert_eq!(encoded[0], 0x7F);
        assert_eq!(encode_num(i128::MIN, 128).unwrap()[0], 0x80);
        assert!(encode_num(i128::MAX, 126).is_err());
    }

    #[test]
    fn test_encode_num_zero_width() {
        assert_eq!(encode_num(0, 0), Err(CodecError::InvalidBitWidth(0)));
    }

    #[test]
    fn test_decode_num() {
        assert_eq!(decode_num(&[0x00, 0x00, 0x00, 0x05, 0x39]).unwrap(), 1337);
        assert_eq!(decode_num(&[]).unwrap(), 0);
        assert_eq!(decode_num(&[0xFF]).unwrap(), 255);

        let mut wide = vec![0u8; 4];
        wide.extend_from_slice(&[0xFF; 16]);
        assert_eq!(decode_num(&wide).unwrap(), u128::MAX);
        assert!(decode_num(&[0x01; 17]).is_err());
    }

    #[test]
    fn test_decode_signed() {
        assert_eq!(decode_signed(&[0xFF], 8).unwrap(), -1);
        assert_eq!(decode_signed(&[0x7F], 8).unwrap(), 127);
        assert_eq!(decode_signed(&[0x01, 0xFF], 9).unwrap(), -1);
        assert_eq!(decode_signed(&[0x00, 0xFF], 9).unwrap(), 255);
        assert!(decode_signed(&[0x02, 0x00], 9).is_err());
        assert!(decode_signed(&[0x00], 129).is_err());
    }
}
