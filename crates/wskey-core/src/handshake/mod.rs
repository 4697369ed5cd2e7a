//! WebSocket opening-handshake key material

pub mod key;
pub mod headers;

pub use key::{
    SecWebSocketKey, SecWebSocketAccept,
    generate_key, generate_key_with, derive_accept, verify_accept,
    GUID, NONCE_LEN, KEY_LEN, ACCEPT_LEN, MAX_KEY_LEN,
};
pub use headers::{accept_for_request, verify_response};
