#![forbid(clippy::unconditional_recursion)]

pub mod index;
pub mod operation;

pub use index::resolve_index;
pub use operation::SeqOperation;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Positional editing shared by the sequence containers.
///
/// Fallible operations report the container's own error type and must leave
/// the container untouched when they fail.
pub trait Sequence: HasLength {
    type Item: PartialEq;
    type Error: std::error::Error;

    fn push(&mut self, item: Self::Item);
    fn pop(&mut self) -> Result<Self::Item, Self::Error>;
    /// Negative indices count back from the end, see [resolve_index].
    fn insert(&mut self, index: isize, item: Self::Item) -> Result<(), Self::Error>;
    fn delete(&mut self, index: usize) -> Result<Self::Item, Self::Error>;
    fn find(&self, item: &Self::Item) -> Option<usize>;
    fn remove_item(&mut self, item: &Self::Item) -> bool;
}
