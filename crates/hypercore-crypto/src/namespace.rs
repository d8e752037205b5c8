//! Namespace expansion
//!
//! Expands one secret name into `count` unlinkable 32-byte identifiers:
//! `seed = BLAKE2b(name)`, then `id[i] = BLAKE2b(seed ‖ i)` with `i` written
//! as a single raw byte.

use crate::hash::{hash, hasher};
use crate::types::Digest;

/// Largest `count` the one-byte index can address
///
/// Raising this would require a wider index encoding, which changes every
/// derived identifier.
pub const MAX_NAMESPACE_COUNT: usize = 256;

/// Derive `count` identifiers from `name`, in increasing index order
///
/// # Panics
/// Panics if `count` is zero or exceeds [`MAX_NAMESPACE_COUNT`].
pub fn namespace(name: &[u8], count: usize) -> Vec<Digest> {
    assert!(count > 0, "namespace count must be positive");
    assert!(
        count <= MAX_NAMESPACE_COUNT,
        "namespace count {count} exceeds MAX_NAMESPACE_COUNT {MAX_NAMESPACE_COUNT}"
    );

    let seed = hash(name);
    let ids: Vec<Digest> = (0..count)
        .map(|i| {
            let mut h = hasher();
            h.update(&seed);
            h.update(&[i as u8]);
            Digest::new(h.finalize())
        })
        .collect();

    tracing::trace!(count, "namespace derived");
    ids
}
