use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ListError {
    #[error("Index out of bounds: the length is {len} but the index is {index}")]
    OutOfBounds { index: isize, len: usize },
    #[error("Tried to remove an element from an empty list")]
    EmptyContainer,
}

impl ListError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        ListError::OutOfBounds {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }
}
