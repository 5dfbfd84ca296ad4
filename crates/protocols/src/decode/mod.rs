//! Decoders for the field shapes a node returns for Move values.
//!
//! - Byte vectors encoding coin type strings
//! - Integers rendered as numbers, strings or wrapped objects

mod bytes;
mod number;

pub use bytes::decode_bytes_field;
pub use number::OnChainNumber;
