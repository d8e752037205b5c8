//! Canonical byte layouts for tree hashing
//!
//! Every hashed stream starts with a one-byte [`NodeType`] tag so that a leaf
//! preimage can never be reinterpreted as a parent or root preimage. Integer
//! fields are written as minimal unsigned LEB128 varints. The layouts here are
//! part of the on-disk and on-wire format:
//!
//! | node   | stream                                                   |
//! |--------|----------------------------------------------------------|
//! | leaf   | `0 ‖ varint(len) ‖ data`                                 |
//! | parent | `1 ‖ varint(left.size + right.size) ‖ left.hash ‖ right.hash` |
//! | roots  | `2 ‖ (hash ‖ varint(index) ‖ varint(size))*`             |
//!
//! The encoders write into any [`ByteSink`], so the same function feeds both
//! the streaming hasher and the materialised preimage.

use crate::error::{CryptoError, Result};
use crate::hash::Hasher;
use crate::types::TreeNode;

/// Longest varint needed for a `u64`
pub const MAX_VARINT_LEN: usize = 10;

/// Domain separation tag placed at byte 0 of every tree preimage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeType {
    /// Leaf holding original content
    Leaf = 0,
    /// Parent combining two children
    Parent = 1,
    /// Aggregate of the current roots
    Root = 2,
}

impl NodeType {
    /// Single-byte wire tag
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// Destination for encoded segments
pub trait ByteSink {
    /// Append `bytes` to the sink
    fn put(&mut self, bytes: &[u8]);
}

impl ByteSink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl ByteSink for Box<dyn Hasher> {
    fn put(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

// ========== Varint ==========

/// Encode `value` as a minimal unsigned varint into `buf`
///
/// Returns the number of bytes written (1..=10).
pub fn encode_uvarint(mut value: u64, buf: &mut [u8; MAX_VARINT_LEN]) -> usize {
    let mut i = 0;
    while value >= 0x80 {
        buf[i] = (value as u8) | 0x80;
        value >>= 7;
        i += 1;
    }
    buf[i] = value as u8;
    i + 1
}

/// Write `value` as a minimal unsigned varint into `sink`
pub fn write_uvarint<S: ByteSink + ?Sized>(sink: &mut S, value: u64) {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let len = encode_uvarint(value, &mut buf);
    sink.put(&buf[..len]);
}

/// Decode a varint from the front of `bytes`
///
/// Returns the value and the number of bytes consumed. Trailing bytes after
/// the varint are left untouched.
pub fn decode_uvarint(bytes: &[u8]) -> Result<(u64, usize)> {
    let mut value = 0u64;
    let mut shift = 0u32;

    for (i, &byte) in bytes.iter().enumerate() {
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            return Err(CryptoError::VarintOverflow);
        }
        if i >= MAX_VARINT_LEN {
            return Err(CryptoError::VarintOverflow);
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte < 0x80 {
            if byte == 0 && i > 0 {
                return Err(CryptoError::VarintNotMinimal);
            }
            return Ok((value, i + 1));
        }
        shift += 7;
    }

    Err(CryptoError::VarintTruncated)
}

// ========== Tree preimages ==========

/// Write the leaf stream for `data`
pub fn encode_leaf<S: ByteSink + ?Sized>(sink: &mut S, data: &[u8]) {
    sink.put(&[NodeType::Leaf.tag()]);
    write_uvarint(sink, data.len() as u64);
    sink.put(data);
}

/// Write the parent stream for two index-ordered children
///
/// Callers pass `left` and `right` already ordered; see
/// [`crate::tree::hash_parent`] for the ordering rule.
///
/// # Panics
/// Panics if the combined subtree size overflows `u64`.
pub fn encode_parent<S: ByteSink + ?Sized>(sink: &mut S, left: &TreeNode, right: &TreeNode) {
    let Some(size) = left.size.checked_add(right.size) else {
        panic!(
            "combined subtree size overflows u64: {} + {}",
            left.size, right.size
        );
    };
    sink.put(&[NodeType::Parent.tag()]);
    write_uvarint(sink, size);
    sink.put(left.hash.as_bytes());
    sink.put(right.hash.as_bytes());
}

/// Write the root aggregation stream, keeping the caller's root order
pub fn encode_roots<S: ByteSink + ?Sized>(sink: &mut S, roots: &[TreeNode]) {
    sink.put(&[NodeType::Root.tag()]);
    for root in roots {
        sink.put(root.hash.as_bytes());
        write_uvarint(sink, root.index);
        write_uvarint(sink, root.size);
    }
}

/// Exact bytes hashed by [`crate::tree::hash_leaf`]
pub fn leaf_preimage(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + MAX_VARINT_LEN + data.len());
    encode_leaf(&mut out, data);
    out
}

/// Exact bytes hashed by [`crate::tree::hash_parent`]
pub fn parent_preimage(a: &TreeNode, b: &TreeNode) -> Vec<u8> {
    let (left, right) = order_by_index(a, b);
    let mut out = Vec::with_capacity(1 + MAX_VARINT_LEN + 64);
    encode_parent(&mut out, left, right);
    out
}

/// Exact bytes hashed by [`crate::tree::hash_roots`]
pub fn roots_preimage(roots: &[TreeNode]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + roots.len() * (32 + 2 * MAX_VARINT_LEN));
    encode_roots(&mut out, roots);
    out
}

/// Order two siblings so the smaller index is on the left
///
/// Equal indices are a caller error; the supplied order is kept.
pub(crate) fn order_by_index<'a>(a: &'a TreeNode, b: &'a TreeNode) -> (&'a TreeNode, &'a TreeNode) {
    debug_assert_ne!(
        a.index, b.index,
        "parent hashing requires two distinct child indices"
    );
    if b.index < a.index {
        (b, a)
    } else {
        (a, b)
    }
}
