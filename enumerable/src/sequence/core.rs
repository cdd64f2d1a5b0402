// A sequence is a producer: a function that pushes each element into a
// visitor until either the elements run out or the visitor returns false.
// Operators wrap producers in producers; nothing runs until a terminal
// operator calls `visit`.
//
// creation.rs contains the constructors for common sources
// traits.rs contains the operators

use std::fmt;
use std::rc::Rc;

use super::traits::SequenceCore;

pub(crate) type Producer<'a, T> = dyn Fn(&mut dyn FnMut(T) -> bool) -> bool + 'a;

/// A lazily evaluated, replayable sequence of `T`.
///
/// Cloning a sequence is cheap and shares the producer. Every terminal
/// operation replays the producer from the start; nothing is cached.
///
/// A sequence can be *absent*, which stands in for a missing source. An
/// absent sequence behaves as an empty one, but operators that can answer
/// without driving their source (such as `contains`) short-circuit on it.
pub struct Sequence<'a, T> {
    producer: Option<Rc<Producer<'a, T>>>,
}

// a sequence is never bigger than a fat pointer
#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(Sequence<'static, u8>, [u8; 16]);

impl<'a, T: 'a> Sequence<'a, T> {
    /// Construct a sequence from a producer.
    ///
    /// The producer must call the visitor once per element, in order, and
    /// stop as soon as the visitor returns `false`. It returns `false` if it
    /// was stopped that way and `true` if it ran out of elements.
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(&mut dyn FnMut(T) -> bool) -> bool + 'a,
    {
        Self {
            producer: Some(Rc::new(producer)),
        }
    }

    /// Construct an empty sequence
    pub fn empty() -> Self {
        Self::new(|_| true)
    }

    /// Construct the absent sequence
    pub fn absent() -> Self {
        Self { producer: None }
    }

    /// Check whether this sequence is the absent sequence
    pub fn is_absent(&self) -> bool {
        self.producer.is_none()
    }
}

impl<T> Clone for Sequence<'_, T> {
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
        }
    }
}

impl<'a, T: 'a> Default for Sequence<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("absent", &self.producer.is_none())
            .finish()
    }
}

impl<'a, T: 'a> SequenceCore<'a, T> for Sequence<'a, T> {
    #[inline]
    fn visit(&self, visitor: &mut dyn FnMut(T) -> bool) -> bool {
        match &self.producer {
            Some(producer) => producer(visitor),
            None => true,
        }
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.producer.is_none()
    }
}
