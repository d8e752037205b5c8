//! Merkle tree digests
//!
//! Pure functions turning leaves, sibling pairs and root sets into digests.
//! Tree navigation, storage and proofs live with the caller.

use crate::encoding::{encode_leaf, encode_parent, encode_roots, order_by_index};
use crate::hash::hasher;
use crate::types::{Digest, TreeNode};

/// Digest of a leaf holding `data`
pub fn hash_leaf(data: &[u8]) -> Digest {
    let mut h = hasher();
    encode_leaf(&mut h, data);
    Digest::new(h.finalize())
}

/// Digest of the parent of `a` and `b`
///
/// The child with the smaller `index` is always hashed on the left, so the
/// argument order does not matter: `hash_parent(a, b) == hash_parent(b, a)`.
/// The parent covers `a.size + b.size` bytes.
///
/// Both children must have distinct indices. Equal indices are a caller
/// error; debug builds assert on it, release builds hash in argument order.
///
/// # Panics
/// Panics if `a.size + b.size` overflows `u64`.
pub fn hash_parent(a: &TreeNode, b: &TreeNode) -> Digest {
    let (left, right) = order_by_index(a, b);
    let mut h = hasher();
    encode_parent(&mut h, left, right);
    Digest::new(h.finalize())
}

/// Digest of the whole tree given its current roots, left to right
///
/// Unlike [`hash_parent`] the sequence is hashed exactly as given. An empty
/// slice is valid and hashes the bare root tag.
pub fn hash_roots(roots: &[TreeNode]) -> Digest {
    let mut h = hasher();
    encode_roots(&mut h, roots);
    Digest::new(h.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{leaf_preimage, parent_preimage, roots_preimage};
    use crate::hash::hash;

    fn node(index: u64, fill: u8, size: u64) -> TreeNode {
        TreeNode::new(index, Digest::new([fill; 32]), size)
    }

    #[test]
    fn test_leaf_matches_preimage() {
        let inputs: [&[u8]; 4] = [b"", b"a", b"hello world", &[0u8; 300]];
        for data in inputs {
            assert_eq!(hash_leaf(data), Digest::new(hash(&leaf_preimage(data))));
        }
    }

    #[test]
    fn test_leaf_empty_golden() {
        assert_eq!(
            hash_leaf(b"").to_hex(),
            "9ee6dfb61a2fb903df487c401663825643bb825d41695e63df8af6162ab145a6"
        );
    }

    #[test]
    fn test_leaf_is_not_plain_hash() {
        assert_ne!(hash_leaf(b"abc").as_bytes(), &hash(b"abc"));
    }

    #[test]
    fn test_parent_matches_preimage() {
        let a = node(0, 1, 10);
        let b = node(2, 2, 20);
        assert_eq!(
            hash_parent(&a, &b),
            Digest::new(hash(&parent_preimage(&a, &b)))
        );
    }

    #[test]
    fn test_parent_commutative() {
        let a = node(4, 0x12, 100);
        let b = node(6, 0xf0, 200);
        assert_eq!(hash_parent(&a, &b), hash_parent(&b, &a));
    }

    #[test]
    fn test_parent_orders_by_index_not_size() {
        // Larger subtree on the left must still hash left
        let left = node(1, 0xaa, 500);
        let right = node(5, 0xbb, 1);

        let mut expected = vec![1u8];
        expected.extend_from_slice(&[0xf5, 0x03]); // 501
        expected.extend_from_slice(&[0xaa; 32]);
        expected.extend_from_slice(&[0xbb; 32]);

        assert_eq!(hash_parent(&right, &left), Digest::new(hash(&expected)));
    }

    #[test]
    fn test_parent_sensitive_to_every_field() {
        let a = node(0, 1, 10);
        let b = node(2, 2, 20);
        let base = hash_parent(&a, &b);

        assert_ne!(base, hash_parent(&node(0, 3, 10), &b));
        assert_ne!(base, hash_parent(&a, &node(2, 3, 20)));
        assert_ne!(base, hash_parent(&node(0, 1, 11), &b));
        assert_ne!(base, hash_parent(&a, &node(2, 2, 21)));
    }

    #[test]
    fn test_roots_empty() {
        assert_eq!(hash_roots(&[]), Digest::new(hash(&[2u8])));
    }

    #[test]
    fn test_roots_match_preimage_and_keep_order() {
        let r1 = node(1, 0x01, 2);
        let r2 = node(5, 0x02, 1);

        assert_eq!(
            hash_roots(&[r1, r2]),
            Digest::new(hash(&roots_preimage(&[r1, r2])))
        );
        assert_ne!(hash_roots(&[r1, r2]), hash_roots(&[r2, r1]));
    }

    #[test]
    fn test_domain_separation_between_node_types() {
        // A leaf whose payload mimics a parent stream must not collide
        let a = node(0, 7, 1);
        let b = node(2, 8, 1);
        let forged = parent_preimage(&a, &b);

        assert_ne!(hash_leaf(&forged), hash_parent(&a, &b));
        assert_ne!(hash_leaf(b""), hash_roots(&[]));
    }
}
