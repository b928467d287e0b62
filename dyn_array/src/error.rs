use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ArrayError {
    #[error("Index out of bounds: the length is {len} but the index is {index}")]
    OutOfBounds { index: isize, len: usize },
    #[error("Tried to remove an element from an empty array")]
    EmptyContainer,
    #[error("Tried to resize an array with length {len} to the smaller capacity {requested}")]
    InvalidResize { len: usize, requested: usize },
    #[error("Invalid capacity policy: {0}")]
    #[diagnostic(help("the default policy is a minimum capacity of 16 and a shrink divisor of 4"))]
    InvalidPolicy(String),
}

impl ArrayError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        ArrayError::OutOfBounds {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }
}
