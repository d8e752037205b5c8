//! Discovery keys
//!
//! Peers that know a log's public key rendezvous on its discovery key instead,
//! so the public key itself never has to be announced.

use crate::hash::hasher;
use crate::types::Digest;

/// Well-known domain separator prefixed to the public key
pub const DISCOVERY_KEY_CONTEXT: &[u8] = b"hypercore";

/// Derive the discovery key for `public_key`
///
/// Computes `BLAKE2b-256("hypercore" ‖ public_key)`.
pub fn discovery_key(public_key: &[u8; 32]) -> Digest {
    let mut h = hasher();
    h.update(DISCOVERY_KEY_CONTEXT);
    h.update(public_key);
    Digest::new(h.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash;

    #[test]
    fn test_discovery_key_golden() {
        assert_eq!(
            discovery_key(&[0u8; 32]).to_hex(),
            "9ad6c2adf9b48e3928fa854ae7698cb45cc0828602f8769b78e8d1a33167eb9c"
        );
    }

    #[test]
    fn test_discovery_key_layout() {
        let pk = [0x5au8; 32];
        let mut stream = b"hypercore".to_vec();
        stream.extend_from_slice(&pk);
        assert_eq!(discovery_key(&pk), Digest::new(hash(&stream)));
    }

    #[test]
    fn test_discovery_key_differs_from_public_key() {
        let pk = [3u8; 32];
        let dk = discovery_key(&pk);
        assert_eq!(dk.as_bytes().len(), 32);
        assert_ne!(dk.as_bytes(), &pk);
        assert_ne!(dk, discovery_key(&[4u8; 32]));
    }
}
