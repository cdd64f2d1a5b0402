use thiserror::Error;

/// Cardinality failures of operators that require exactly one element.
///
/// All other operators are total: they degrade to empty sequences, `false` or
/// `None` instead of failing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// The sequence was empty or absent.
    #[error("sequence contains no elements")]
    NoElements,
    /// The sequence held more than one distinct element.
    #[error("sequence contains more than one distinct element")]
    MultipleElements,
}

pub type Result<T> = std::result::Result<T, Error>;
