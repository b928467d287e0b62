use crate::Sequence;

/// A single recorded edit that can be replayed onto any [Sequence].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SeqOperation<T> {
    Push(T),
    Pop,
    Insert(isize, T),
    Delete(usize),
    RemoveItem(T),
}

impl<T: PartialEq> SeqOperation<T> {
    /// Applies the edit. A value removal that finds nothing is not an error.
    pub fn apply<Seq: Sequence<Item = T>>(self, seq: &mut Seq) -> Result<(), Seq::Error> {
        match self {
            SeqOperation::Push(item) => seq.push(item),
            SeqOperation::Pop => {
                seq.pop()?;
            }
            SeqOperation::Insert(idx, item) => seq.insert(idx, item)?,
            SeqOperation::Delete(idx) => {
                seq.delete(idx)?;
            }
            SeqOperation::RemoveItem(item) => {
                seq.remove_item(&item);
            }
        }
        Ok(())
    }

    /// Applies every edit in order, stopping at the first failure.
    pub fn apply_all<Seq: Sequence<Item = T>>(
        ops: impl IntoIterator<Item = Self>,
        seq: &mut Seq,
    ) -> Result<(), Seq::Error> {
        ops.into_iter().try_for_each(|op| op.apply(seq))
    }
}
