//! SHA-1 digest for the accept token

use ::sha1::{Digest, Sha1};

/// SHA-1 output size in bytes
pub const DIGEST_LEN: usize = 20;

/// Incremental SHA-1 context with `new` / `update` / `finish` semantics
#[derive(Clone, Default)]
pub struct Sha1Context {
    inner: Sha1,
}

impl Sha1Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed more input
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Consume the context and produce the digest
    pub fn finish(self) -> [u8; DIGEST_LEN] {
        let digest = self.inner.finalize();
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&digest);
        out
    }
}

/// One-shot SHA-1
pub fn sha1(input: &[u8]) -> [u8; DIGEST_LEN] {
    let mut ctx = Sha1Context::new();
    ctx.update(input);
    ctx.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    #[test]
    fn test_sha1_empty() {
        assert_eq!(hex(&sha1(b"")), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_sha1_abc() {
        assert_eq!(hex(&sha1(b"abc")), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut ctx = Sha1Context::new();
        ctx.update(b"dGhlIHNhbXBsZSBub25jZQ==");
        ctx.update(b"258EAFA5-E914-47DA-95CA-C5AB0DC85B11");

        assert_eq!(
            ctx.finish(),
            sha1(b"dGhlIHNhbXBsZSBub25jZQ==258EAFA5-E914-47DA-95CA-C5AB0DC85B11")
        );
    }
}
