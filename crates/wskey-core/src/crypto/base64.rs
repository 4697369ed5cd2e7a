//! Base64 encoding for handshake tokens
//!
//! RFC 4648 standard alphabet with padding, written into caller-sized
//! buffers so the handshake path stays off the heap.

use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Padded encoded length of `n` input bytes
pub const fn encoded_size(n: usize) -> usize {
    (n + 2) / 3 * 4
}

/// Output capacity the decoder needs for `n` bytes of encoded text
pub const fn decoded_capacity(n: usize) -> usize {
    (n + 3) / 4 * 3
}

/// Encode `input` into `output`, returning the number of bytes written
pub fn encode_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    STANDARD
        .encode_slice(input, output)
        .map_err(|e| Error::Internal(format!("base64 encode: {}", e)))
}

/// Decode `input` into `output`, returning the number of bytes written
///
/// `output` must hold at least `decoded_capacity(input.len())` bytes.
pub fn decode_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    STANDARD
        .decode_slice(input, output)
        .map_err(|e| Error::InvalidKey(format!("base64 decode: {}", e)))
}
