//! Random sources for handshake nonces
//!
//! `KeyGenerator` owns the strategy: the thread-local CSPRNG by default,
//! or any injected `RngCore` (deterministic generators in tests).

use crate::config::{KeyConfig, RngKind};
use crate::handshake::{generate_key_with, SecWebSocketKey};
use crate::Result;
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

enum Source {
    Thread,
    Owned(Box<dyn RngCore + Send>),
}

/// Client key generator
pub struct KeyGenerator {
    source: Source,
}

impl KeyGenerator {
    /// Build a generator from configuration
    pub fn new(config: &KeyConfig) -> Result<Self> {
        let source = match config.rng {
            RngKind::Thread => Source::Thread,
            RngKind::Os => Source::Owned(Box::new(OsRng)),
            RngKind::ChaCha => {
                let rng = match config.seed {
                    Some(seed) => ChaCha20Rng::from_seed(seed),
                    None => ChaCha20Rng::from_rng(OsRng)?,
                };
                Source::Owned(Box::new(rng))
            }
        };

        log::debug!("key generator using {:?} source", config.rng);
        Ok(Self { source })
    }

    /// Use a caller-supplied random source
    pub fn with_rng<R>(rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            source: Source::Owned(Box::new(rng)),
        }
    }

    /// Generate a fresh `Sec-WebSocket-Key`
    pub fn generate(&mut self) -> Result<SecWebSocketKey> {
        match &mut self.source {
            Source::Thread => generate_key_with(&mut rand::thread_rng()),
            Source::Owned(rng) => generate_key_with(rng.as_mut()),
        }
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self {
            source: Source::Thread,
        }
    }
}

impl std::fmt::Debug for KeyGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match self.source {
            Source::Thread => "thread",
            Source::Owned(_) => "owned",
        };
        f.debug_struct("KeyGenerator").field("source", &source).finish()
    }
}
