//! Secure random bytes from the operating system CSPRNG

use rand::rngs::OsRng;
use rand::RngCore;

/// Return `n` cryptographically secure random bytes
pub fn random_bytes(n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    OsRng.fill_bytes(&mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() {
        assert!(random_bytes(0).is_empty());
        assert_eq!(random_bytes(1).len(), 1);
        assert_eq!(random_bytes(64).len(), 64);
    }

    #[test]
    fn test_random_bytes_differ() {
        assert_ne!(random_bytes(32), random_bytes(32));
    }
}
