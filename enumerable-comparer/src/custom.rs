use std::fmt;

use crate::comparer::EqualityComparer;

/// A comparer built from a caller-supplied equality and hash function.
#[derive(Clone)]
pub struct Custom<E, H> {
    equals: E,
    hash: H,
}

impl<E, H> fmt::Debug for Custom<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").finish_non_exhaustive()
    }
}

impl<T, E, H> EqualityComparer<T> for Custom<E, H>
where
    T: ?Sized,
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// Construct a comparer from an equality function and a hash function.
///
/// The pair may implement a lossy equality (case-insensitive text, floats
/// within a tolerance) as long as equal values hash equal. For a tolerance
/// comparison that usually means hashing a coarse bucket, or a constant.
pub fn custom<T, E, H>(equals: E, hash: H) -> Custom<E, H>
where
    T: ?Sized,
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    Custom { equals, hash }
}
