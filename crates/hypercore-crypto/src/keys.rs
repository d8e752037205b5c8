//! Ed25519 keys and signatures
//!
//! Thin wrappers over `ed25519-dalek` using the raw byte layouts Hypercore
//! stores: a 32-byte public key, a 64-byte secret key (`seed ‖ public key`)
//! and a 64-byte signature. Verification reports a plain `bool`; a rejected
//! signature is an expected outcome the caller must check, not an error.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::discovery::discovery_key;
use crate::error::{CryptoError, Result};
use crate::types::{Digest, FixedBytesVisitor};

/// Public key length in bytes
pub const PUBLIC_KEY_LENGTH: usize = 32;
/// Secret key length in bytes (seed followed by public key)
pub const SECRET_KEY_LENGTH: usize = 64;
/// Signature length in bytes
pub const SIGNATURE_LENGTH: usize = 64;

const SEED_LENGTH: usize = 32;

// ========== PublicKey ==========

/// Ed25519 public key, validated as a curve point on construction
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Create a PublicKey from raw bytes
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self> {
        VerifyingKey::from_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(*bytes))
    }

    /// Get the raw bytes
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Discovery key announced in place of this public key
    pub fn discovery_key(&self) -> Digest {
        discovery_key(&self.0)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let array: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| CryptoError::invalid_length(PUBLIC_KEY_LENGTH, bytes.len()))?;
        Self::from_bytes(&array)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bytes = deserializer.deserialize_bytes(FixedBytesVisitor::<PUBLIC_KEY_LENGTH>)?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

// ========== SecretKey ==========

/// Ed25519 secret key in the 64-byte `seed ‖ public key` layout
///
/// The bytes are wiped on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_LENGTH]);

impl SecretKey {
    /// Create a SecretKey from raw bytes
    ///
    /// Fails unless the trailing 32 bytes are the public key derived from the
    /// leading 32-byte seed.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> Result<Self> {
        SigningKey::from_keypair_bytes(bytes).map_err(|_| CryptoError::KeyPairMismatch)?;
        Ok(Self(*bytes))
    }

    /// Get the raw bytes
    ///
    /// Use with extreme caution - exposing these bytes compromises the key.
    pub const fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.0
    }

    /// Public half embedded in the secret key
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        let mut out = [0u8; PUBLIC_KEY_LENGTH];
        out.copy_from_slice(&self.0[SEED_LENGTH..]);
        out
    }

    fn signing_key(&self) -> SigningKey {
        let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
        seed.copy_from_slice(&self.0[..SEED_LENGTH]);
        SigningKey::from_bytes(&seed)
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let array: Zeroizing<[u8; SECRET_KEY_LENGTH]> = Zeroizing::new(
            bytes
                .try_into()
                .map_err(|_| CryptoError::invalid_length(SECRET_KEY_LENGTH, bytes.len()))?,
        );
        Self::from_bytes(&array)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

// ========== Signature ==========

/// Ed25519 signature bytes
///
/// Any 64 bytes are accepted; whether they form a valid signature is decided
/// by [`verify`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Create a Signature from raw bytes
    pub const fn new(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let array: [u8; SIGNATURE_LENGTH] = bytes
            .try_into()
            .map_err(|_| CryptoError::invalid_length(SIGNATURE_LENGTH, bytes.len()))?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer
            .deserialize_bytes(FixedBytesVisitor::<SIGNATURE_LENGTH>)
            .map(Self)
    }
}

// ========== KeyPair ==========

/// Ed25519 key pair used to sign tree state
///
/// Pairs built by [`KeyPair::generate`] and [`KeyPair::from_seed`] always
/// satisfy [`KeyPair::validate`]. Pairs assembled by hand from their fields
/// should be checked before use.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Public key, shared with readers of the log
    pub public_key: PublicKey,
    /// Secret key, held only by the writer
    pub secret_key: SecretKey,
}

impl KeyPair {
    /// Generate a new random key pair using the OS random number generator
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        tracing::trace!("generated ed25519 key pair");
        Self::from_signing_key(&signing_key)
    }

    /// Derive the key pair for a 32-byte seed
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        Self::from_signing_key(&SigningKey::from_bytes(seed))
    }

    fn from_signing_key(signing_key: &SigningKey) -> Self {
        Self {
            public_key: PublicKey(signing_key.verifying_key().to_bytes()),
            secret_key: SecretKey(signing_key.to_keypair_bytes()),
        }
    }

    /// Check that the secret key derives the stored public key
    pub fn validate(&self) -> bool {
        let derived = self.secret_key.signing_key().verifying_key().to_bytes();
        derived == self.public_key.0 && derived == self.secret_key.public_key_bytes()
    }

    /// Sign `message` with this pair's secret key
    pub fn sign(&self, message: &[u8]) -> Signature {
        sign(message, &self.secret_key)
    }

    /// Verify `signature` over `message` against this pair's public key
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        verify(message, signature, &self.public_key)
    }
}

// ========== Sign / Verify ==========

/// Sign a message with a secret key
///
/// Ed25519 signatures are deterministic: the same key and message always give
/// the same signature.
pub fn sign(message: &[u8], secret_key: &SecretKey) -> Signature {
    Signature(secret_key.signing_key().sign(message).to_bytes())
}

/// Verify a signature against a message and public key
pub fn verify(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(key) = VerifyingKey::from_bytes(&public_key.0) else {
        tracing::debug!("signature rejected: public key is not a curve point");
        return false;
    };
    let signature = ed25519_dalek::Signature::from_bytes(&signature.0);
    key.verify(message, &signature).is_ok()
}

/// Verify raw signature and public key bytes
///
/// Malformed lengths or points yield `false`, never a panic.
pub fn verify_bytes(message: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
    let Ok(signature) = Signature::try_from(signature) else {
        tracing::debug!(len = signature.len(), "signature rejected: wrong length");
        return false;
    };
    let Ok(public_key) = PublicKey::try_from(public_key) else {
        tracing::debug!(len = public_key.len(), "signature rejected: malformed public key");
        return false;
    };
    verify(message, &signature, &public_key)
}
