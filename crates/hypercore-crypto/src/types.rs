// Value types shared by the hashing operations

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{CryptoError, Result};

/// Length in bytes of every digest produced by this crate
pub const DIGEST_LENGTH: usize = 32;

// ========== Digest ==========

/// Type-safe 256-bit digest
///
/// The universal output of every hashing operation. Digests are immutable
/// values; they are frequently used as map keys, so no mutable access to the
/// backing array is exposed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl Digest {
    /// Create a new Digest from raw bytes
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; DIGEST_LENGTH];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LENGTH] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let array: [u8; DIGEST_LENGTH] = bytes
            .try_into()
            .map_err(|_| CryptoError::invalid_length(DIGEST_LENGTH, bytes.len()))?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer
            .deserialize_bytes(FixedBytesVisitor::<DIGEST_LENGTH>)
            .map(Self)
    }
}

/// Serde visitor accepting exactly `N` raw bytes, either as a byte string or
/// as a sequence (the form self-describing formats such as JSON produce)
pub(crate) struct FixedBytesVisitor<const N: usize>;

impl<'de, const N: usize> serde::de::Visitor<'de> for FixedBytesVisitor<N> {
    type Value = [u8; N];

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{N} bytes")
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> std::result::Result<[u8; N], E> {
        v.try_into()
            .map_err(|_| E::invalid_length(v.len(), &self))
    }

    fn visit_seq<A: serde::de::SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> std::result::Result<[u8; N], A::Error> {
        let mut bytes = [0u8; N];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(serde::de::Error::invalid_length(N + 1, &self));
        }
        Ok(bytes)
    }
}

// ========== TreeNode ==========

/// One node of a Hypercore Merkle tree
///
/// `index` is the node's position in flat-tree order, `hash` its content
/// digest and `size` the cumulative byte size of the subtree it roots. Nodes
/// are produced by the tree structure and passed around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeNode {
    /// Flat-tree position
    pub index: u64,
    /// Content digest
    pub hash: Digest,
    /// Total bytes covered by this subtree
    pub size: u64,
}

impl TreeNode {
    /// Create a new tree node
    pub const fn new(index: u64, hash: Digest, size: u64) -> Self {
        Self { index, hash, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest() {
        let bytes = [42u8; 32];
        let digest = Digest::new(bytes);
        assert_eq!(digest.as_bytes(), &bytes);
        assert_eq!(Digest::from(bytes), digest);
        assert_eq!(<[u8; 32]>::from(digest), bytes);
    }

    #[test]
    fn test_digest_hex() {
        let digest = Digest::new([0xAB; 32]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64); // 32 bytes * 2 hex chars
        assert_eq!(Digest::from_hex(&hex).unwrap(), digest);
        assert_eq!(digest.to_string(), hex);
    }

    #[test]
    fn test_digest_from_hex_rejects_wrong_length() {
        assert!(matches!(
            Digest::from_hex("abcd"),
            Err(CryptoError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_digest_try_from_slice() {
        assert!(Digest::try_from(&[1u8; 32][..]).is_ok());
        assert_eq!(
            Digest::try_from(&[1u8; 31][..]),
            Err(CryptoError::invalid_length(32, 31))
        );
    }

    #[test]
    fn test_digest_ordering_is_bytewise() {
        let mut low = [0u8; 32];
        low[31] = 0xff;
        let mut high = [0u8; 32];
        high[0] = 0x01;
        assert!(Digest::new(low) < Digest::new(high));
    }

    #[test]
    fn test_tree_node_json() {
        let node = TreeNode::new(3, Digest::new([7u8; 32]), 1024);
        let json = serde_json::to_string(&node).unwrap();
        let recovered: TreeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, recovered);
    }

    #[test]
    fn test_tree_node_bincode() {
        let node = TreeNode::new(u64::MAX, Digest::new([9u8; 32]), 0);
        let bytes = bincode::serialize(&node).unwrap();
        let recovered: TreeNode = bincode::deserialize(&bytes).unwrap();
        assert_eq!(node, recovered);
    }

    #[test]
    fn test_digest_json_rejects_short_array() {
        let result: std::result::Result<Digest, _> = serde_json::from_str("[1,2,3]");
        assert!(result.is_err());
    }
}
