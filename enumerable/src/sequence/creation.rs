use std::rc::Rc;

use super::core::Sequence;

impl<'a, T: Clone + 'a> Sequence<'a, T> {
    /// A sequence over a borrowed slice; elements are cloned as they are
    /// visited.
    pub fn from_slice(items: &'a [T]) -> Self {
        Self::new(move |visitor| items.iter().cloned().all(|item| visitor(item)))
    }

    /// A sequence that owns its elements.
    pub fn from_vec(items: Vec<T>) -> Self {
        let items: Rc<[T]> = items.into();
        Self::new(move |visitor| items.iter().cloned().all(|item| visitor(item)))
    }

    /// `value`, `count` times.
    pub fn repeat(value: T, count: usize) -> Self {
        Self::new(move |visitor| (0..count).all(|_| visitor(value.clone())))
    }
}

impl Sequence<'_, i64> {
    /// `count` consecutive integers starting at `start`.
    ///
    /// The sequence ends early rather than overflow past `i64::MAX`.
    pub fn range(start: i64, count: usize) -> Self {
        Self::new(move |visitor| {
            let mut current = start;
            for _ in 0..count {
                if !visitor(current) {
                    return false;
                }
                match current.checked_add(1) {
                    Some(next) => current = next,
                    None => break,
                }
            }
            true
        })
    }
}

impl<'a, T: Clone + 'a> From<Vec<T>> for Sequence<'a, T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<'a, T: Clone + 'a> From<&'a [T]> for Sequence<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::from_slice(items)
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Sequence<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::sequence::{SequenceCore, SequenceExt};

    #[test]
    fn test_from_slice() {
        let items = [3, 1, 2];
        let seq = Sequence::from_slice(&items);
        assert_eq!(seq.to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn test_from_slice_clones_lazily() {
        #[derive(Debug)]
        struct Counted<'c>(&'c Cell<usize>);

        impl Clone for Counted<'_> {
            fn clone(&self) -> Self {
                self.0.set(self.0.get() + 1);
                Counted(self.0)
            }
        }

        let clones = Cell::new(0);
        let items = vec![Counted(&clones), Counted(&clones), Counted(&clones)];
        let seq = Sequence::from_slice(&items);
        assert_eq!(clones.get(), 0);
        assert!(seq.first().is_some());
        assert_eq!(clones.get(), 1);
    }

    #[test]
    fn test_range() {
        assert_eq!(Sequence::range(5, 3).to_vec(), vec![5, 6, 7]);
        assert_eq!(Sequence::range(-2, 0).to_vec(), Vec::<i64>::new());
    }

    #[test]
    fn test_range_stops_at_max() {
        assert_eq!(
            Sequence::range(i64::MAX - 1, 10).to_vec(),
            vec![i64::MAX - 1, i64::MAX]
        );
    }

    #[test]
    fn test_range_stops_on_visitor() {
        let mut seen = Vec::new();
        let completed = Sequence::range(0, 1_000_000).visit(&mut |i| {
            seen.push(i);
            seen.len() < 3
        });
        assert!(!completed);
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Sequence::repeat("x", 3).to_vec(), vec!["x", "x", "x"]);
        assert_eq!(Sequence::repeat("x", 0).count(), 0);
    }

    #[test]
    fn test_from_iterator() {
        let seq: Sequence<char> = "abc".chars().collect();
        assert_eq!(seq.to_vec(), vec!['a', 'b', 'c']);
    }
}
