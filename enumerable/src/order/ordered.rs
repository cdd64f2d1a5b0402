use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::sequence::{Sequence, SequenceCore, SequenceExt};

use super::rule::{compare_by_rules, OrderRule};

/// A sequence with a deferred, stable, multi-level sort.
///
/// Created by the `order_by` family on [`SequenceExt`] and refined with the
/// `then_by` family, which return new ordered sequences and leave the
/// receiver as it was. Nothing is sorted until elements are pulled; every
/// terminal operation materializes the source and sorts it again, so the
/// source may change between pulls.
///
/// Elements that compare `Equal` under every rule keep their source order.
pub struct OrderedSequence<'a, T> {
    source: Sequence<'a, T>,
    rules: Vec<OrderRule<'a, T>>,
}

impl<'a, T: 'a> OrderedSequence<'a, T> {
    pub(crate) fn new(source: Sequence<'a, T>, rule: OrderRule<'a, T>) -> Self {
        Self {
            source,
            rules: vec![rule],
        }
    }

    /// Break ties of the existing rules with `compare`.
    pub fn then_by<F>(&self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        let mut rules = Vec::with_capacity(self.rules.len() + 1);
        rules.extend(self.rules.iter().cloned());
        rules.push(Rc::new(compare) as OrderRule<'a, T>);
        Self {
            source: self.source.clone(),
            rules,
        }
    }

    /// Break ties with `compare`, largest first.
    pub fn then_by_descending<F>(&self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        self.then_by(move |a, b| compare(a, b).reverse())
    }

    /// Break ties by the key `key` extracts.
    pub fn then_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.then_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Break ties by the key `key` extracts, largest first.
    pub fn then_by_key_descending<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.then_by(move |a, b| key(b).cmp(&key(a)))
    }

    /// Number of accumulated rules; never zero.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Compare two elements the way the sort does.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        compare_by_rules(&self.rules, a, b)
    }

    /// Materialize the source into a fresh buffer and sort it.
    pub fn sorted(&self) -> Vec<T> {
        let mut buffer = self.source.to_vec();
        // sort_by is stable, which gives the tie guarantee
        buffer.sort_by(|a, b| self.compare(a, b));
        buffer
    }

    /// Binary search for an element that compares `Equal` to `value` under
    /// every rule.
    ///
    /// Unlike [`SequenceExt::contains`], equality here is whatever the rules
    /// say it is, which is what makes the search sound: the buffer is sorted
    /// by exactly the relation being searched for. Use `contains` or
    /// `contains_by` when equality and ordering differ.
    pub fn contains_ordered(&self, value: &T) -> bool {
        if self.source.is_absent() {
            return false;
        }
        self.sorted()
            .binary_search_by(|probe| self.compare(probe, value))
            .is_ok()
    }
}

impl<T> Clone for OrderedSequence<'_, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T> fmt::Debug for OrderedSequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSequence")
            .field("source", &self.source)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<'a, T: 'a> SequenceCore<'a, T> for OrderedSequence<'a, T> {
    fn visit(&self, visitor: &mut dyn FnMut(T) -> bool) -> bool {
        self.sorted().into_iter().all(|item| visitor(item))
    }

    fn is_absent(&self) -> bool {
        self.source.is_absent()
    }
}
