use std::fmt;
use std::hash::Hash;

use crate::comparer::EqualityComparer;
use crate::natural::DefaultComparer;

/// Compares elements by a projected key.
///
/// Two elements are equal when their keys are equal, and an element hashes as
/// its key does. Fields that take no part in the key, including ones without
/// equality at all (closures, float vectors), are ignored.
pub struct ByField<K, F> {
    key: F,
    natural: DefaultComparer<K>,
}

impl<K, F: Clone> Clone for ByField<K, F> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            natural: self.natural.clone(),
        }
    }
}

impl<K, F> fmt::Debug for ByField<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByField").finish_non_exhaustive()
    }
}

impl<T, K, F> EqualityComparer<T> for ByField<K, F>
where
    T: ?Sized,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self.natural.equals(&(self.key)(a), &(self.key)(b))
    }

    #[inline]
    fn hash_code(&self, value: &T) -> u64 {
        self.natural.hash_code(&(self.key)(value))
    }
}

/// Construct a comparer that compares the key `key` extracts.
pub fn by_field<T, K, F>(key: F) -> ByField<K, F>
where
    T: ?Sized,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    ByField {
        key,
        natural: DefaultComparer::new(),
    }
}
