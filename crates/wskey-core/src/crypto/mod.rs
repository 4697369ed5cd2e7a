//! Cryptographic utilities - SSOT for SHA-1, Base64, etc.
//!
//! Thin wrappers that give the handshake code fixed-size outputs and
//! typed errors on top of the `sha1` and `base64` crates.

mod sha1;
mod base64;

pub use self::sha1::{sha1, Sha1Context, DIGEST_LEN};
pub use self::base64::{decode_into, decoded_capacity, encode_into, encoded_size};
