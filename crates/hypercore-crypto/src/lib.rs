//! Hypercore Crypto - Merkle Log Primitive Layer
//!
//! This crate provides the pure cryptographic functions that turn the content
//! of a Hypercore append-only log into canonical digests and identifiers. It
//! holds no tree structure, storage or networking of its own.
//!
//! # Layers
//!
//! ## Canonical Encoding
//! - `NodeType`: one-byte domain tags (`Leaf = 0`, `Parent = 1`, `Root = 2`)
//! - Minimal little-endian base-128 varints for every integer field
//!
//! ## Tree Hashing
//! - `hash_leaf`: `BLAKE2b([0] ‖ varint(len) ‖ data)`
//! - `hash_parent`: children ordered by index, `BLAKE2b([1] ‖ varint(Σsize) ‖ left ‖ right)`
//! - `hash_roots`: `BLAKE2b([2] ‖ (hash ‖ varint(index) ‖ varint(size))*)`
//!
//! ## Identifiers
//! - `discovery_key`: `BLAKE2b("hypercore" ‖ public_key)`
//! - `namespace`: `BLAKE2b(BLAKE2b(name) ‖ i)` for `i < count`
//!
//! ## Keys
//! - Ed25519 `KeyPair` generation, signing and verification
//!
//! All hashing operations are total, synchronous and free of shared state, so
//! they can be called from any number of threads without coordination.

#![forbid(unsafe_code)]

/// Unified error handling
pub mod error;

/// Pure synchronous hash trait (BLAKE2b-256)
pub mod hash;

/// Byte layouts fed into the hash primitive
pub mod encoding;

/// Digest and tree node value types
pub mod types;

/// Leaf, parent and root digests
pub mod tree;

/// Discovery key derivation
pub mod discovery;

/// Namespace expansion
pub mod namespace;

/// Ed25519 keys and signatures
pub mod keys;

/// Secure random bytes
pub mod random;

pub use discovery::{discovery_key, DISCOVERY_KEY_CONTEXT};
pub use encoding::{
    decode_uvarint, encode_uvarint, leaf_preimage, parent_preimage, roots_preimage,
    write_uvarint, ByteSink, NodeType, MAX_VARINT_LEN,
};
pub use error::{CryptoError, Result};
pub use hash::{hash, hasher, HashAlgorithm, Hasher};
pub use keys::{sign, verify, verify_bytes, KeyPair, PublicKey, SecretKey, Signature};
pub use namespace::{namespace, MAX_NAMESPACE_COUNT};
pub use random::random_bytes;
pub use tree::{hash_leaf, hash_parent, hash_roots};
pub use types::{Digest, TreeNode, DIGEST_LENGTH};
