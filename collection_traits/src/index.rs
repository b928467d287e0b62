/// Maps a possibly negative index onto `0..`, counting negative values back
/// from `len`.
///
/// Returns `None` when the index points before the start. The upper bound is
/// left to the caller, since inserts accept `len` while lookups do not.
pub fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_add_signed(index)
    } else {
        usize::try_from(index).ok()
    }
}
