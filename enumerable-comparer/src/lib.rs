//! Equality comparers: equality plus a compatible hash code, supplied from
//! the outside so that types without `Eq + Hash` can still be deduplicated,
//! counted and searched.
//!
//! ```
//! use enumerable_comparer::{by_field, BucketSet};
//!
//! struct Sample {
//!     name: &'static str,
//!     readings: Vec<f64>,
//! }
//!
//! let comparer = by_field(|s: &Sample| s.name);
//! let mut seen = BucketSet::new(&comparer);
//! assert!(seen.insert(Sample { name: "a", readings: vec![1.0] }));
//! assert!(!seen.insert(Sample { name: "a", readings: vec![2.0] }));
//! ```
mod bucket;
mod by_field;
mod comparer;
mod composite;
mod custom;
pub mod hash;
mod natural;

pub use bucket::BucketSet;
pub use by_field::{by_field, ByField};
pub use comparer::EqualityComparer;
pub use composite::{composite, Composite};
pub use custom::{custom, Custom};
pub use natural::{default, DefaultComparer};
