//! Pure synchronous hash trait for tree hashing
//!
//! Hashing is a pure, deterministic operation: the same input always produces
//! the same output, no runtime context is needed, and nothing is shared between
//! calls. Every digest in this crate goes through the functions below.
//!
//! # Algorithm Selection
//!
//! The hash algorithm is selected once at compile time via the `ALGORITHM`
//! constant. The Hypercore tree format is defined over **BLAKE2b with a
//! 32-byte output**, so changing it breaks compatibility with every existing
//! log.
//!
//! # Usage
//!
//! ```
//! use hypercore_crypto::hash::{hash, hasher};
//!
//! let digest = hash(b"hello world");
//!
//! let mut h = hasher();
//! h.update(b"hello");
//! h.update(b" world");
//! assert_eq!(h.finalize(), digest);
//! ```

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use std::fmt;

/// BLAKE2b truncated to a 256-bit output
type Blake2b256 = Blake2b<U32>;

/// Synchronous trait for cryptographic hashing
///
/// Implementations must be collision resistant and support incremental
/// feeding of several segments before the digest is read.
pub trait HashAlgorithm: Send + Sync + fmt::Debug {
    /// Hash arbitrary bytes to a 32-byte digest
    fn hash(&self, data: &[u8]) -> [u8; 32];

    /// Create an incremental hasher for multi-part hashing
    fn hasher(&self) -> Box<dyn Hasher>;
}

/// Trait for incremental hashing of multi-part data
pub trait Hasher: Send {
    /// Update the hasher with more data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hasher and return the 32-byte digest
    ///
    /// Consumes the hasher. The hasher cannot be used after finalization.
    fn finalize(self: Box<Self>) -> [u8; 32];
}

/// BLAKE2b-256 hash implementation
///
/// - 256-bit (32-byte) output, unkeyed, no salt or personalization
/// - RFC 7693
#[derive(Debug, Clone, Copy)]
pub struct Blake2b256Algorithm;

impl HashAlgorithm for Blake2b256Algorithm {
    fn hash(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = Blake2b256::new();
        Digest::update(&mut hasher, data);
        let result = hasher.finalize();
        let mut output = [0u8; 32];
        output.copy_from_slice(&result);
        output
    }

    fn hasher(&self) -> Box<dyn Hasher> {
        Box::new(Blake2b256Hasher(Blake2b256::new()))
    }
}

/// BLAKE2b-256 incremental hasher
struct Blake2b256Hasher(Blake2b256);

impl Hasher for Blake2b256Hasher {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> [u8; 32] {
        let result = self.0.finalize();
        let mut output = [0u8; 32];
        output.copy_from_slice(&result);
        output
    }
}

/// The hash algorithm used throughout the crate.
///
/// This is the single source of truth for which algorithm is used.
pub const ALGORITHM: Blake2b256Algorithm = Blake2b256Algorithm;

/// Hash `data` with the global algorithm
#[inline]
pub fn hash(data: &[u8]) -> [u8; 32] {
    ALGORITHM.hash(data)
}

/// Create an incremental hasher using the global algorithm
#[inline]
pub fn hasher() -> Box<dyn Hasher> {
    ALGORITHM.hasher()
}
