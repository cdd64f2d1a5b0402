use std::cmp::Ordering;
use std::hash::Hash;
use std::rc::Rc;

use enumerable_comparer::{default, BucketSet, EqualityComparer};

use crate::error;
use crate::order::OrderedSequence;

use super::core::Sequence;
use super::window::RingBuffer;

/// The core sequence interface: a sequence must implement this to function.
///
/// If you do, [`SequenceExt`] provides the whole operator API on top of it.
pub trait SequenceCore<'a, T: 'a>: Clone + 'a {
    /// Push the elements into `visitor`, in order, until it returns `false`.
    ///
    /// Returns `false` if the visitor stopped iteration and `true` if the
    /// elements ran out.
    fn visit(&self, visitor: &mut dyn FnMut(T) -> bool) -> bool;

    /// Check whether the sequence has no source at all.
    fn is_absent(&self) -> bool {
        false
    }
}

// Wrap `source` in a new producer. Absence propagates, so operators over a
// missing source are missing too.
fn derive<'a, T, U, S, F>(source: &S, producer: F) -> Sequence<'a, U>
where
    T: 'a,
    U: 'a,
    S: SequenceCore<'a, T>,
    F: Fn(&S, &mut dyn FnMut(U) -> bool) -> bool + 'a,
{
    if source.is_absent() {
        return Sequence::absent();
    }
    let source = source.clone();
    Sequence::new(move |visitor| producer(&source, visitor))
}

pub trait SequenceExt<'a, T: 'a>: SequenceCore<'a, T> {
    /// This sequence as a plain [`Sequence`].
    ///
    /// For an ordered sequence the result still sorts on every visit.
    fn to_sequence(&self) -> Sequence<'a, T> {
        derive(self, |source, visitor| source.visit(visitor))
    }

    /// The elements for which `predicate` holds.
    fn filter<P>(&self, predicate: P) -> Sequence<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        derive(self, move |source, visitor| {
            source.visit(&mut |item| !predicate(&item) || visitor(item))
        })
    }

    /// Project each element through `f`.
    fn map<U, F>(&self, f: F) -> Sequence<'a, U>
    where
        U: 'a,
        F: Fn(T) -> U + 'a,
    {
        derive(self, move |source, visitor| {
            source.visit(&mut |item| visitor(f(item)))
        })
    }

    /// At most the first `count` elements.
    fn take(&self, count: usize) -> Sequence<'a, T> {
        derive(self, move |source, visitor| {
            if count == 0 {
                return true;
            }
            let mut remaining = count;
            let mut stopped = false;
            source.visit(&mut |item| {
                if !visitor(item) {
                    stopped = true;
                    return false;
                }
                remaining -= 1;
                remaining > 0
            });
            !stopped
        })
    }

    /// Everything after the first `count` elements.
    fn skip(&self, count: usize) -> Sequence<'a, T> {
        derive(self, move |source, visitor| {
            let mut skipped = 0;
            source.visit(&mut |item| {
                if skipped < count {
                    skipped += 1;
                    true
                } else {
                    visitor(item)
                }
            })
        })
    }

    /// Elements up to, not including, the first that fails `predicate`.
    fn take_while<P>(&self, predicate: P) -> Sequence<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        derive(self, move |source, visitor| {
            let mut stopped = false;
            source.visit(&mut |item| {
                if !predicate(&item) {
                    return false;
                }
                if visitor(item) {
                    true
                } else {
                    stopped = true;
                    false
                }
            });
            !stopped
        })
    }

    /// Elements from the first that fails `predicate` onward.
    fn skip_while<P>(&self, predicate: P) -> Sequence<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        derive(self, move |source, visitor| {
            let mut skipping = true;
            source.visit(&mut |item| {
                if skipping && predicate(&item) {
                    return true;
                }
                skipping = false;
                visitor(item)
            })
        })
    }

    /// The last `count` elements, in their original order.
    ///
    /// Keeps a ring buffer of `count` elements while the source runs to the
    /// end, then replays it. On an ordered sequence the window is taken over
    /// the sorted elements.
    fn take_last(&self, count: usize) -> Sequence<'a, T> {
        derive(self, move |source, visitor| {
            if count == 0 {
                return true;
            }
            let mut window = RingBuffer::new(count);
            source.visit(&mut |item| {
                window.push(item);
                true
            });
            window.replay(visitor)
        })
    }

    /// Everything except the last `count` elements.
    fn skip_last(&self, count: usize) -> Sequence<'a, T> {
        derive(self, move |source, visitor| {
            if count == 0 {
                return source.visit(visitor);
            }
            let mut window = RingBuffer::new(count);
            source.visit(&mut |item| match window.push(item) {
                Some(evicted) => visitor(evicted),
                None => true,
            })
        })
    }

    /// This sequence followed by `other`.
    fn concat<O>(&self, other: &O) -> Sequence<'a, T>
    where
        O: SequenceCore<'a, T>,
    {
        if self.is_absent() && other.is_absent() {
            return Sequence::absent();
        }
        let first = self.clone();
        let second = other.clone();
        Sequence::new(move |visitor| first.visit(visitor) && second.visit(visitor))
    }

    /// The elements in reverse order. Materializes the source.
    fn reverse(&self) -> Sequence<'a, T> {
        derive(self, |source, visitor| {
            source.to_vec().into_iter().rev().all(|item| visitor(item))
        })
    }

    /// First occurrences only, by natural equality.
    fn distinct(&self) -> Sequence<'a, T>
    where
        T: Eq + Hash + Clone,
    {
        self.distinct_by(default::<T>())
    }

    /// First occurrences only, by `comparer`.
    fn distinct_by<C>(&self, comparer: C) -> Sequence<'a, T>
    where
        T: Clone,
        C: EqualityComparer<T> + 'a,
    {
        derive(self, move |source, visitor| {
            let mut seen = BucketSet::new(&comparer);
            source.visit(&mut |item| !seen.insert(item.clone()) || visitor(item))
        })
    }

    /// Distinct elements of this sequence followed by distinct elements of
    /// `other` not seen before.
    fn union_by<O, C>(&self, other: &O, comparer: C) -> Sequence<'a, T>
    where
        T: Clone,
        O: SequenceCore<'a, T>,
        C: EqualityComparer<T> + 'a,
    {
        self.concat(other).distinct_by(comparer)
    }

    /// Distinct elements of this sequence that also occur in `other`.
    ///
    /// `other` is read completely before the first element is produced.
    fn intersect_by<O, C>(&self, other: &O, comparer: C) -> Sequence<'a, T>
    where
        T: Clone,
        O: SequenceCore<'a, T>,
        C: EqualityComparer<T> + 'a,
    {
        let other = other.clone();
        derive(self, move |source, visitor| {
            let mut present = BucketSet::new(&comparer);
            other.visit(&mut |item| {
                present.insert(item);
                true
            });
            let mut emitted = BucketSet::new(&comparer);
            source.visit(&mut |item| {
                !present.contains(&item) || !emitted.insert(item.clone()) || visitor(item)
            })
        })
    }

    /// Distinct elements of this sequence that do not occur in `other`.
    ///
    /// `other` is read completely before the first element is produced.
    fn except_by<O, C>(&self, other: &O, comparer: C) -> Sequence<'a, T>
    where
        T: Clone,
        O: SequenceCore<'a, T>,
        C: EqualityComparer<T> + 'a,
    {
        let other = other.clone();
        derive(self, move |source, visitor| {
            let mut excluded = BucketSet::new(&comparer);
            other.visit(&mut |item| {
                excluded.insert(item);
                true
            });
            source.visit(&mut |item| !excluded.insert(item.clone()) || visitor(item))
        })
    }

    /// Sort by `compare`, deferred until the elements are pulled.
    fn order_by<F>(&self, compare: F) -> OrderedSequence<'a, T>
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        OrderedSequence::new(self.to_sequence(), Rc::new(compare))
    }

    /// Sort by `compare`, largest first, deferred until the elements are
    /// pulled.
    fn order_by_descending<F>(&self, compare: F) -> OrderedSequence<'a, T>
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        self.order_by(move |a, b| compare(a, b).reverse())
    }

    /// Sort by the key `key` extracts, deferred until the elements are pulled.
    fn order_by_key<K, F>(&self, key: F) -> OrderedSequence<'a, T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.order_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Sort by the key `key` extracts, largest first.
    fn order_by_key_descending<K, F>(&self, key: F) -> OrderedSequence<'a, T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.order_by(move |a, b| key(b).cmp(&key(a)))
    }

    /// Call `f` on every element.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(T),
    {
        self.visit(&mut |item| {
            f(item);
            true
        });
    }

    /// Collect the elements.
    fn to_vec(&self) -> Vec<T> {
        let mut items = Vec::new();
        self.visit(&mut |item| {
            items.push(item);
            true
        });
        items
    }

    fn count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| {
            count += 1;
            true
        });
        count
    }

    /// Whether the sequence has no elements. Stops at the first element.
    fn is_empty(&self) -> bool {
        !self.any(|_| true)
    }

    /// Whether any element satisfies `predicate`; stops at the first match.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        let mut found = false;
        self.visit(&mut |item| {
            found = predicate(&item);
            !found
        });
        found
    }

    /// Whether every element satisfies `predicate`; stops at the first
    /// failure. True for an empty sequence.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        let mut holds = true;
        self.visit(&mut |item| {
            holds = predicate(&item);
            holds
        });
        holds
    }

    fn first(&self) -> Option<T> {
        let mut first = None;
        self.visit(&mut |item| {
            first = Some(item);
            false
        });
        first
    }

    /// The first element, or the default value of `T`.
    fn first_or_default(&self) -> T
    where
        T: Default,
    {
        self.first().unwrap_or_default()
    }

    fn last(&self) -> Option<T> {
        let mut last = None;
        self.visit(&mut |item| {
            last = Some(item);
            true
        });
        last
    }

    /// The last element, or the default value of `T`.
    fn last_or_default(&self) -> T
    where
        T: Default,
    {
        self.last().unwrap_or_default()
    }

    /// The element at position `index`, counting from zero.
    fn element_at(&self, index: usize) -> Option<T> {
        let mut position = 0;
        let mut found = None;
        self.visit(&mut |item| {
            if position == index {
                found = Some(item);
                return false;
            }
            position += 1;
            true
        });
        found
    }

    /// The only distinct element, by natural equality.
    fn single(&self) -> error::Result<T>
    where
        T: Eq + Hash + Clone,
    {
        self.single_by(&default::<T>())
    }

    /// The only distinct element, by `comparer`.
    ///
    /// Duplicates of the first element do not count against it. Iteration
    /// stops as soon as a second distinct element shows up.
    fn single_by<C>(&self, comparer: &C) -> error::Result<T>
    where
        T: Clone,
        C: EqualityComparer<T> + ?Sized,
    {
        let mut seen = BucketSet::new(comparer);
        let mut result = None;
        let mut distinct = 0;
        self.visit(&mut |item| {
            if !seen.insert(item.clone()) {
                return true;
            }
            distinct += 1;
            if distinct > 1 {
                return false;
            }
            result = Some(item);
            true
        });
        match (distinct, result) {
            (1, Some(item)) => Ok(item),
            (0, _) => Err(error::Error::NoElements),
            _ => Err(error::Error::MultipleElements),
        }
    }

    /// Whether `value` occurs, by `==`. Scans linearly and stops at the
    /// first match; an absent sequence is never driven.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        if self.is_absent() {
            return false;
        }
        self.any(|item| item == value)
    }

    /// Whether an element equal to `value` by `comparer` occurs.
    fn contains_by<C>(&self, value: &T, comparer: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        if self.is_absent() {
            return false;
        }
        self.any(|item| comparer.equals(item, value))
    }

    /// Aggregate with a seed.
    fn fold<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut accumulator = Some(seed);
        self.visit(&mut |item| {
            accumulator = accumulator.take().map(|acc| f(acc, item));
            true
        });
        match accumulator {
            Some(acc) => acc,
            None => unreachable!("the accumulator is put back after every element"),
        }
    }

    /// Aggregate without a seed; `None` for an empty sequence.
    fn reduce<F>(&self, mut f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut accumulator = None;
        self.visit(&mut |item| {
            accumulator = Some(match accumulator.take() {
                Some(acc) => f(acc, item),
                None => item,
            });
            true
        });
        accumulator
    }

    /// The smallest element; the first one among equals.
    fn min(&self) -> Option<T>
    where
        T: Ord,
    {
        self.reduce(std::cmp::min)
    }

    /// The largest element; the last one among equals.
    fn max(&self) -> Option<T>
    where
        T: Ord,
    {
        self.reduce(std::cmp::max)
    }

    fn min_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.reduce(|a, b| if key(&b) < key(&a) { b } else { a })
    }

    fn max_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.reduce(|a, b| if key(&b) >= key(&a) { b } else { a })
    }
}

impl<'a, T: 'a, S> SequenceExt<'a, T> for S where S: SequenceCore<'a, T> {}
