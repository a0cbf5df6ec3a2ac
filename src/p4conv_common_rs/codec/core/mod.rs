//! 値コーデックのコア機能
//! 形式判定、アドレス・整数の変換、値のディスパッチ、エラー処理

pub mod exceptions;
pub mod bit_width;
pub mod value;
pub mod matchers;
pub mod address;
pub mod integer;
pub mod dispatcher;

// 便利な再エクスポート
pub use exceptions::{CodecError, CodecResult, RangeViolation};
pub use bit_width::{bitwidth_to_bytes, BitWidth};
pub use value::{DecodedValue, Value, ValueKind};
pub use matchers::{detect_format, is_ipv4, is_ipv6, is_mac};
pub use address::{decode_ipv4, decode_ipv6, decode_mac, encode_ipv4, encode_ipv6, encode_mac};
pub use integer::{decode_num, decode_signed, encode_num};
pub use dispatcher::{decode, encode, PassthroughPolicy, ValueEncoder};
