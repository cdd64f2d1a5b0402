use std::fmt;

use crate::comparer::EqualityComparer;
use crate::hash::{combine, FNV_OFFSET_BASIS};

/// A comparer that requires every member comparer to agree.
///
/// Members are consulted in insertion order and `equals` stops at the first
/// one that says no, so cheap comparers belong in front. The hash folds the
/// member hashes together in order, which keeps it consistent with the
/// conjunction: elements equal under every member hash equal under each.
///
/// A composite without members considers every pair equal.
pub struct Composite<'a, T: ?Sized> {
    comparers: Vec<Box<dyn EqualityComparer<T> + 'a>>,
}

impl<'a, T: ?Sized> Composite<'a, T> {
    pub fn new() -> Self {
        Self {
            comparers: Vec::new(),
        }
    }

    /// Append a member comparer.
    pub fn with<C>(mut self, comparer: C) -> Self
    where
        C: EqualityComparer<T> + 'a,
    {
        self.comparers.push(Box::new(comparer));
        self
    }

    pub fn len(&self) -> usize {
        self.comparers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparers.is_empty()
    }
}

impl<T: ?Sized> Default for Composite<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Composite<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("comparers", &self.comparers.len())
            .finish()
    }
}

impl<'a, T: ?Sized> FromIterator<Box<dyn EqualityComparer<T> + 'a>> for Composite<'a, T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn EqualityComparer<T> + 'a>>>(iter: I) -> Self {
        Self {
            comparers: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> EqualityComparer<T> for Composite<'_, T> {
    fn equals(&self, a: &T, b: &T) -> bool {
        self.comparers.iter().all(|comparer| comparer.equals(a, b))
    }

    fn hash_code(&self, value: &T) -> u64 {
        self.comparers
            .iter()
            .fold(FNV_OFFSET_BASIS, |acc, comparer| {
                combine(acc, comparer.hash_code(value))
            })
    }
}

/// Construct an empty composite comparer; add members with
/// [`Composite::with`].
pub fn composite<'a, T: ?Sized>() -> Composite<'a, T> {
    Composite::new()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{by_field, custom, default};

    #[derive(Debug, Clone)]
    struct Point {
        x: i32,
        y: i32,
        label: &'static str,
    }

    fn point(x: i32, y: i32, label: &'static str) -> Point {
        Point { x, y, label }
    }

    #[test]
    fn test_composite_and_semantics() {
        let comparer = composite::<Point>()
            .with(by_field(|p: &Point| p.x))
            .with(by_field(|p: &Point| p.y));
        assert!(comparer.equals(&point(1, 2, "a"), &point(1, 2, "b")));
        assert!(!comparer.equals(&point(1, 2, "a"), &point(1, 3, "a")));
        assert!(!comparer.equals(&point(0, 2, "a"), &point(1, 2, "a")));
        assert_eq!(
            comparer.hash_code(&point(1, 2, "a")),
            comparer.hash_code(&point(1, 2, "b"))
        );
    }

    #[test]
    fn test_composite_short_circuits() {
        let calls = Cell::new(0);
        let cheap = custom(|_: &i32, _: &i32| false, |_: &i32| 0);
        let expensive = custom(
            |a: &i32, b: &i32| {
                calls.set(calls.get() + 1);
                a == b
            },
            |_: &i32| 0,
        );
        let comparer = composite::<i32>().with(cheap).with(expensive);
        assert!(!comparer.equals(&1, &1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_composite_consults_later_members_on_agreement() {
        let calls = Cell::new(0);
        let expensive = custom(
            |a: &i32, b: &i32| {
                calls.set(calls.get() + 1);
                a == b
            },
            |_: &i32| 0,
        );
        let comparer = composite::<i32>().with(default::<i32>()).with(expensive);
        assert!(comparer.equals(&4, &4));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_composite_hash_is_order_sensitive() {
        let first = custom(|_: &u8, _: &u8| true, |_: &u8| 1);
        let second = custom(|_: &u8, _: &u8| true, |_: &u8| 2);
        let forward = composite::<u8>().with(first.clone()).with(second.clone());
        let backward = composite::<u8>().with(second).with(first);
        assert_ne!(forward.hash_code(&0), backward.hash_code(&0));
    }

    #[test]
    fn test_composite_empty() {
        let comparer = composite::<str>();
        assert!(comparer.is_empty());
        assert!(comparer.equals("a", "b"));
        assert_eq!(comparer.hash_code("a"), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_composite_from_iter() {
        let mut members: Vec<Box<dyn EqualityComparer<Point>>> = Vec::new();
        members.push(Box::new(by_field(|p: &Point| p.label)));
        members.push(Box::new(by_field(|p: &Point| p.x)));
        let comparer: Composite<Point> = members.into_iter().collect();
        assert_eq!(comparer.len(), 2);
        assert!(comparer.equals(&point(1, 5, "a"), &point(1, 9, "a")));
        assert!(!comparer.equals(&point(1, 5, "a"), &point(1, 5, "b")));
    }

    #[test]
    fn test_composite_construction_is_idempotent() {
        let make = || {
            composite::<Point>()
                .with(by_field(|p: &Point| p.x))
                .with(by_field(|p: &Point| p.label))
        };
        let first = make();
        let second = make();
        let points = [point(1, 2, "a"), point(1, 3, "a"), point(2, 2, "b")];
        for a in &points {
            assert_eq!(first.hash_code(a), second.hash_code(a));
            for b in &points {
                assert_eq!(first.equals(a, b), second.equals(a, b));
            }
        }
    }
}
