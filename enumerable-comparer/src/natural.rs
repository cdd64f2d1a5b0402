use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use ahash::RandomState;

use crate::comparer::EqualityComparer;
use crate::hash::{fixed_state, hash_with};

/// The natural comparer: `==` for equality and the type's own `Hash`
/// implementation, fed through a fixed-seed hasher.
///
/// Floating point values have no `Eq`; wrap them in
/// `ordered_float::OrderedFloat` to compare them by value.
pub struct DefaultComparer<T: ?Sized> {
    state: RandomState,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> DefaultComparer<T> {
    pub fn new() -> Self {
        Self {
            state: fixed_state(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for DefaultComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for DefaultComparer<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for DefaultComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultComparer").finish()
    }
}

impl<T> EqualityComparer<T> for DefaultComparer<T>
where
    T: Eq + Hash + ?Sized,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash_code(&self, value: &T) -> u64 {
        hash_with(&self.state, value)
    }
}

/// Construct the natural comparer for `T`.
pub fn default<T: Eq + Hash + ?Sized>() -> DefaultComparer<T> {
    DefaultComparer::new()
}
