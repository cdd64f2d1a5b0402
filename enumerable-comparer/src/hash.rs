use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;

// Hash codes must agree between comparers constructed separately, so the
// hasher state is never randomized.
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// FNV-1a 64 bit offset basis; the starting point of [`combine`].
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// The hasher state shared by all natural comparers.
pub(crate) fn fixed_state() -> RandomState {
    RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3])
}

pub(crate) fn hash_with<T: Hash + ?Sized>(state: &RandomState, value: &T) -> u64 {
    let mut hasher = state.build_hasher();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic structural hash of a value.
///
/// This is the hash the default comparer uses, so it is a convenient building
/// block for the hash half of a [`custom`](crate::custom) comparer.
pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    hash_with(&fixed_state(), value)
}

/// Fold one more hash code into an accumulated one.
///
/// Order sensitive: `combine(combine(b, x), y)` and `combine(combine(b, y), x)`
/// generally differ.
#[inline]
pub fn combine(accumulated: u64, hash: u64) -> u64 {
    (accumulated ^ hash).wrapping_mul(FNV_PRIME)
}

/// Combine a series of hash codes, starting from [`FNV_OFFSET_BASIS`].
pub fn combine_all(hashes: impl IntoIterator<Item = u64>) -> u64 {
    hashes.into_iter().fold(FNV_OFFSET_BASIS, combine)
}
