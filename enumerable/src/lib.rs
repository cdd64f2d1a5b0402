//! Lazily evaluated, LINQ-style sequences.
//!
//! A [`Sequence`] is a replayable producer of elements. Operators such as
//! [`filter`](SequenceExt::filter), [`take_last`](SequenceExt::take_last) and
//! [`order_by`](SequenceExt::order_by) wrap it without pulling anything;
//! terminal operators such as [`to_vec`](SequenceExt::to_vec) and
//! [`single`](SequenceExt::single) drive it.
//!
//! Equality can be supplied from the outside with the comparers in
//! [`comparer`], so that types without `Eq + Hash` can still be
//! deduplicated and searched.
//!
//! ```
//! use enumerable::{by_field, Sequence, SequenceExt};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Reading {
//!     sensor: u32,
//!     value: f64,
//! }
//!
//! let readings = Sequence::from_vec(vec![
//!     Reading { sensor: 2, value: 0.5 },
//!     Reading { sensor: 1, value: 1.5 },
//!     Reading { sensor: 2, value: 2.5 },
//! ]);
//!
//! let sorted = readings.order_by_key(|r| r.sensor);
//! assert_eq!(sorted.first().map(|r| r.sensor), Some(1));
//! assert_eq!(sorted.take_last(1).to_vec()[0].value, 2.5);
//!
//! let sensor_two = readings.filter(|r| r.sensor == 2);
//! assert!(sensor_two.single_by(&by_field(|r: &Reading| r.sensor)).is_ok());
//! ```
pub mod error;
pub mod order;
pub mod sequence;

pub use enumerable_comparer as comparer;

pub use crate::error::{Error, Result};
pub use crate::order::{OrderRule, OrderedSequence};
pub use crate::sequence::{Sequence, SequenceCore, SequenceExt};
pub use enumerable_comparer::{by_field, composite, custom, default, EqualityComparer};
