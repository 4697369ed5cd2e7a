//! `Sec-WebSocket-Key` / `Sec-WebSocket-Accept` (RFC 6455 section 1.3)
//!
//! Both tokens live in fixed-size stack buffers. Nothing on this path
//! allocates.

use crate::crypto::{self, Sha1Context, DIGEST_LEN};
use crate::{Error, Result};
use rand::RngCore;
use smallvec::SmallVec;

/// Magic GUID appended to the client key before hashing
pub const GUID: &str = "258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// Raw nonce size carried by a client key
pub const NONCE_LEN: usize = 16;

/// Encoded length of a client key
pub const KEY_LEN: usize = crypto::encoded_size(NONCE_LEN);

/// Encoded length of an accept token
pub const ACCEPT_LEN: usize = crypto::encoded_size(DIGEST_LEN);

/// Longest key text `derive_accept` will hash
pub const MAX_KEY_LEN: usize = KEY_LEN;

const ACCEPT_INPUT_CAPACITY: usize = MAX_KEY_LEN + GUID.len();

/// Client handshake nonce, base64 of 16 random bytes
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecWebSocketKey {
    buf: [u8; KEY_LEN],
}

impl SecWebSocketKey {
    /// Strictly validate a key received from the network
    ///
    /// Rejects text longer than `MAX_KEY_LEN` with `InvalidArgument` and
    /// text that does not decode to exactly 16 bytes with `InvalidKey`.
    pub fn parse(key: &str) -> Result<Self> {
        let key = key.as_bytes();
        if key.len() > MAX_KEY_LEN {
            log::debug!("rejecting {}-byte Sec-WebSocket-Key", key.len());
            return Err(Error::InvalidArgument {
                len: key.len(),
                max: MAX_KEY_LEN,
            });
        }

        let mut raw = [0u8; crypto::decoded_capacity(KEY_LEN)];
        let n = crypto::decode_into(key, &mut raw)?;
        if n != NONCE_LEN || key.len() != KEY_LEN {
            return Err(Error::InvalidKey(format!(
                "decodes to {} bytes, expected {}",
                n, NONCE_LEN
            )));
        }

        let mut buf = [0u8; KEY_LEN];
        buf.copy_from_slice(key);
        Ok(Self { buf })
    }

    /// Encode a raw nonce
    pub fn from_nonce(nonce: &[u8; NONCE_LEN]) -> Result<Self> {
        let mut buf = [0u8; KEY_LEN];
        crypto::encode_into(nonce, &mut buf)?;
        Ok(Self { buf })
    }

    /// Decode back to the raw nonce
    pub fn decode(&self) -> [u8; NONCE_LEN] {
        let mut raw = [0u8; crypto::decoded_capacity(KEY_LEN)];
        let mut nonce = [0u8; NONCE_LEN];
        // Only ever built from a 16-byte nonce or a validated key.
        if let Ok(NONCE_LEN) = crypto::decode_into(&self.buf, &mut raw) {
            nonce.copy_from_slice(&raw[..NONCE_LEN]);
        }
        nonce
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_str(&self) -> &str {
        ascii_str(&self.buf)
    }
}

/// Server accept token, base64 of the 20-byte SHA-1 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecWebSocketAccept {
    buf: [u8; ACCEPT_LEN],
}

impl SecWebSocketAccept {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_str(&self) -> &str {
        ascii_str(&self.buf)
    }
}

// Both buffers only ever hold base64 output.
fn ascii_str(buf: &[u8]) -> &str {
    std::str::from_utf8(buf).unwrap_or_default()
}

macro_rules! token_impls {
    ($ty:ty) => {
        impl AsRef<[u8]> for $ty {
            fn as_ref(&self) -> &[u8] {
                self.as_bytes()
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($ty)).field(&self.as_str()).finish()
            }
        }
    };
}

token_impls!(SecWebSocketKey);
token_impls!(SecWebSocketAccept);

/// Generate a client key from the thread-local CSPRNG
pub fn generate_key() -> Result<SecWebSocketKey> {
    generate_key_with(&mut rand::thread_rng())
}

/// Generate a client key from `rng`
///
/// The nonce is four 32-bit draws, each laid out little-endian.
pub fn generate_key_with<R: RngCore + ?Sized>(rng: &mut R) -> Result<SecWebSocketKey> {
    let mut nonce = [0u8; NONCE_LEN];
    for word in nonce.chunks_exact_mut(4) {
        rng.try_fill_bytes(word)?;
    }

    let key = SecWebSocketKey::from_nonce(&nonce)?;
    log::trace!("generated Sec-WebSocket-Key {}", key);
    Ok(key)
}

/// Derive the `Sec-WebSocket-Accept` value for a client key
///
/// Keys longer than `MAX_KEY_LEN` fail with `InvalidArgument`. Shorter
/// text is hashed as-is, whether or not it is valid base64.
pub fn derive_accept(key: impl AsRef<[u8]>) -> Result<SecWebSocketAccept> {
    let key = key.as_ref();
    if key.len() > MAX_KEY_LEN {
        log::debug!("refusing to derive accept for {}-byte key", key.len());
        return Err(Error::InvalidArgument {
            len: key.len(),
            max: MAX_KEY_LEN,
        });
    }

    let mut input: SmallVec<[u8; ACCEPT_INPUT_CAPACITY]> = SmallVec::new();
    input.extend_from_slice(key);
    input.extend_from_slice(GUID.as_bytes());

    let mut sha1 = Sha1Context::new();
    sha1.update(&input);
    let digest = sha1.finish();

    let mut buf = [0u8; ACCEPT_LEN];
    crypto::encode_into(&digest, &mut buf)?;
    let accept = SecWebSocketAccept { buf };
    log::trace!("derived Sec-WebSocket-Accept {}", accept);
    Ok(accept)
}

/// Check a server's accept value against the key that was sent
pub fn verify_accept(key: impl AsRef<[u8]>, accept: impl AsRef<[u8]>) -> bool {
    match derive_accept(key) {
        Ok(expected) => expected.as_bytes() == accept.as_ref(),
        Err(_) => false,
    }
}
