use std::rc::Rc;

/// Equality plus a compatible hash, for types that lack native equality or
/// need a different notion of it.
///
/// Implementations must uphold one rule: if `equals(a, b)` is true, then
/// `hash_code(a) == hash_code(b)`. Nothing checks this, but hash based
/// operations silently miss matches when it is broken.
pub trait EqualityComparer<T: ?Sized> {
    /// Whether `a` and `b` belong to the same equivalence class.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Hash code of `value`.
    fn hash_code(&self, value: &T) -> u64;
}

impl<T, C> EqualityComparer<T> for &C
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> u64 {
        (**self).hash_code(value)
    }
}

impl<T, C> EqualityComparer<T> for Box<C>
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> u64 {
        (**self).hash_code(value)
    }
}

impl<T, C> EqualityComparer<T> for Rc<C>
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> u64 {
        (**self).hash_code(value)
    }
}
