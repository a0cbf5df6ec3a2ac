/// p4conv Rust Implementation
/// Field value codec for P4Runtime-style match/action entries

pub mod p4conv_common_rs;

// 便利な再エクスポート
pub mod prelude {
    pub use crate::p4conv_common_rs::codec::core::{
        bitwidth_to_bytes, decode, encode, CodecError, CodecResult, DecodedValue,
        PassthroughPolicy, Value, ValueEncoder, ValueKind,
    };
    pub use crate::p4conv_common_rs::codec::core::address::{
        decode_ipv4, decode_ipv6, decode_mac, encode_ipv4, encode_ipv6, encode_mac,
    };
    pub use crate::p4conv_common_rs::codec::core::integer::{decode_num, decode_signed, encode_num};
    pub use crate::p4conv_common_rs::codec::core::matchers::{is_ipv4, is_ipv6, is_mac};
}
