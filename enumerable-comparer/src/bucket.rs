use ahash::{HashMap, HashMapExt};

use crate::comparer::EqualityComparer;

/// A set that deduplicates with an [`EqualityComparer`] instead of `Eq`.
///
/// Elements are grouped in buckets by hash code; within a bucket membership is
/// decided by `equals`, so colliding hash codes never cause false positives.
/// The set only grows.
pub struct BucketSet<'c, T, C: ?Sized> {
    comparer: &'c C,
    buckets: HashMap<u64, Vec<T>>,
    len: usize,
}

impl<'c, T, C> BucketSet<'c, T, C>
where
    C: EqualityComparer<T> + ?Sized,
{
    pub fn new(comparer: &'c C) -> Self {
        Self {
            comparer,
            buckets: HashMap::new(),
            len: 0,
        }
    }

    /// Insert `item` unless an equal element is already present.
    ///
    /// Returns `true` if the item was inserted. When it returns `false` the
    /// set is left untouched and `item` is dropped.
    pub fn insert(&mut self, item: T) -> bool {
        let comparer = self.comparer;
        let bucket = self.buckets.entry(comparer.hash_code(&item)).or_default();
        if bucket.iter().any(|existing| comparer.equals(&item, existing)) {
            return false;
        }
        bucket.push(item);
        self.len += 1;
        true
    }

    /// Whether an element equal to `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        let hash = self.comparer.hash_code(item);
        self.buckets.get(&hash).is_some_and(|bucket| {
            bucket
                .iter()
                .any(|existing| self.comparer.equals(item, existing))
        })
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The comparer the set was built with.
    pub fn comparer(&self) -> &'c C {
        self.comparer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{by_field, custom, default};

    #[test]
    fn test_insert_and_contains() {
        let comparer = default::<i32>();
        let mut set = BucketSet::new(&comparer);
        assert!(set.insert(1));
        assert!(set.insert(2));
        assert!(!set.insert(1));
        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(!set.contains(&3));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_constant_hash_collisions() {
        let comparer = custom(|a: &&str, b: &&str| a == b, |_: &&str| 42);
        let mut set = BucketSet::new(&comparer);
        assert!(set.insert("apple"));
        assert!(set.insert("banana"));
        assert!(set.insert("cherry"));
        assert!(!set.insert("apple"));
        assert!(set.contains(&"banana"));
        assert!(!set.contains(&"durian"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_rejected_insert_keeps_first_representative() {
        let comparer = by_field(|pair: &(u8, char)| pair.0);
        let mut set = BucketSet::new(&comparer);
        assert!(set.insert((1, 'a')));
        assert!(!set.insert((1, 'b')));
        assert!(set.contains(&(1, 'z')));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty() {
        let comparer = default::<String>();
        let set: BucketSet<String, _> = BucketSet::new(&comparer);
        assert!(set.is_empty());
        assert!(!set.contains(&"x".to_string()));
    }

    #[test]
    fn test_dyn_comparer() {
        let comparer = default::<u64>();
        let dyn_comparer: &dyn EqualityComparer<u64> = &comparer;
        let mut set: BucketSet<u64, _> = BucketSet::new(dyn_comparer);
        assert!(set.insert(5));
        assert!(!set.insert(5));
    }
}
