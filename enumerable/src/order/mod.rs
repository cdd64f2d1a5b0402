/// Deferred, stable, multi-level sorting.
mod ordered;
mod rule;

pub use ordered::OrderedSequence;
pub use rule::OrderRule;
