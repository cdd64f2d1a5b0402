/// A sequence is a lazily evaluated, replayable stream of elements. Sources
/// are wrapped by operators, and nothing is pulled until a terminal operator
/// visits the result.
mod core;
mod creation;
mod traits;
mod window;

pub use self::core::Sequence;
pub use traits::{SequenceCore, SequenceExt};
