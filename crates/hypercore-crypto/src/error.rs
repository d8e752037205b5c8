//! Unified error system for hypercore-crypto
//!
//! Hashing never fails. Errors only surface where untrusted bytes are parsed
//! into keys, signatures, digests or varints.

/// Error type for all parsing operations in this crate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    /// Public key bytes are not a valid Ed25519 point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// The public half embedded in a secret key does not match its seed
    #[error("Secret key does not derive the stored public key")]
    KeyPairMismatch,

    /// A fixed-size value was given the wrong number of bytes
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte count
        expected: usize,
        /// Byte count that was supplied
        actual: usize,
    },

    /// A hex string could not be decoded
    #[error("Invalid hex: {message}")]
    InvalidHex {
        /// Decoder message
        message: String,
    },

    /// Input ended before the final varint byte
    #[error("Varint truncated")]
    VarintTruncated,

    /// Varint does not fit in 64 bits
    #[error("Varint overflows u64")]
    VarintOverflow,

    /// Varint carries superfluous trailing zero groups
    #[error("Varint is not minimally encoded")]
    VarintNotMinimal,
}

impl CryptoError {
    /// Create a length mismatch error
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }
}

impl From<hex::FromHexError> for CryptoError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidHex {
            message: err.to_string(),
        }
    }
}

/// Standard result type for this crate
pub type Result<T> = std::result::Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = CryptoError::invalid_length(32, 7);
        assert_eq!(e.to_string(), "Invalid length: expected 32 bytes, got 7");

        let e = CryptoError::VarintOverflow;
        assert!(e.to_string().contains("overflows"));
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: CryptoError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, CryptoError::InvalidHex { .. }));
    }
}
