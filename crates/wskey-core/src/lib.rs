//! wskey-core: WebSocket handshake key derivation
//!
//! Generates client `Sec-WebSocket-Key` nonces and derives the matching
//! `Sec-WebSocket-Accept` token (RFC 6455 section 1.3).
//!
//! ## Example
//! ```
//! let key = wskey_core::generate_key()?;
//! let accept = wskey_core::derive_accept(&key)?;
//! assert!(wskey_core::verify_accept(&key, &accept));
//! # Ok::<(), wskey_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod config;
pub mod crypto;
pub mod rng;
pub mod handshake;

// Re-exports
pub use error::{Error, Result};
pub use config::{KeyConfig, RngKind};
pub use rng::KeyGenerator;

pub use handshake::{
    SecWebSocketKey, SecWebSocketAccept,
    generate_key, generate_key_with, derive_accept, verify_accept,
    accept_for_request, verify_response,
    GUID, KEY_LEN, ACCEPT_LEN, MAX_KEY_LEN,
};
