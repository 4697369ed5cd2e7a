//! Key generation configuration

/// Random source used for `Sec-WebSocket-Key` nonces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngKind {
    /// Thread-local CSPRNG, reseeded from the OS
    #[default]
    Thread,
    /// Operating system entropy on every draw
    Os,
    /// ChaCha20 stream, seeded from the OS or from `KeyConfig::seed`
    ChaCha,
}

/// Key generator configuration
#[derive(Debug, Clone, Default)]
pub struct KeyConfig {
    /// Random source
    pub rng: RngKind,
    /// Fixed ChaCha seed, for reproducible keys in tests
    pub seed: Option<[u8; 32]>,
}

impl KeyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rng(mut self, kind: RngKind) -> Self {
        self.rng = kind;
        self
    }

    /// Seed the generator. Switches the source to `RngKind::ChaCha`.
    pub fn seed(mut self, seed: [u8; 32]) -> Self {
        self.rng = RngKind::ChaCha;
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_thread_rng() {
        let config = KeyConfig::new();
        assert_eq!(config.rng, RngKind::Thread);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_seed_selects_chacha() {
        let config = KeyConfig::new().rng(RngKind::Os).seed([7; 32]);
        assert_eq!(config.rng, RngKind::ChaCha);
        assert_eq!(config.seed, Some([7; 32]));
    }
}
