//! A growable array with an explicit power-of-two capacity policy.
//!
//! Unlike [Vec], the capacity is part of the observable contract: it starts at
//! the smallest power of two that fits the requested size (at least 16),
//! doubles when an insert finds the array full and halves once deletions
//! leave it a quarter occupied.

use collection_traits::{resolve_index, HasLength, Sequence};
use std::fmt::{Debug, Formatter};
use std::iter::Flatten;
use tracing::{debug, trace};

pub use error::ArrayError;
pub use policy::CapacityPolicy;
pub use value::Value;

pub mod error;
pub mod policy;
pub mod value;


pub type Iter<'a, T> = Flatten<std::slice::Iter<'a, Option<T>>>;
pub type IterMut<'a, T> = Flatten<std::slice::IterMut<'a, Option<T>>>;
pub type IntoIter<T> = Flatten<std::vec::IntoIter<Option<T>>>;

#[derive(Clone)]
pub struct DynArray<T> {
    /// Slots `..len` are always occupied, the rest are always empty.
    slots: Box<[Option<T>]>,
    len: usize,
    policy: CapacityPolicy,
}

impl<T> DynArray<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty array with room for at least `initial_capacity`
    /// elements, rounded up to a power of two no smaller than 16.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::with_valid_policy(initial_capacity, CapacityPolicy::default())
    }

    pub fn with_policy(
        initial_capacity: usize,
        policy: CapacityPolicy,
    ) -> Result<Self, ArrayError> {
        if let Err(err) = policy.validate() {
            debug!(?policy, "rejected capacity policy");
            return Err(err);
        }
        Ok(Self::with_valid_policy(initial_capacity, policy))
    }

    fn with_valid_policy(initial_capacity: usize, policy: CapacityPolicy) -> Self {
        Self {
            slots: empty_slots(policy.initial_capacity(initial_capacity)),
            len: 0,
            policy,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots[..self.len].get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots[..self.len].get_mut(index)?.as_mut()
    }

    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.get(index)
            .ok_or_else(|| ArrayError::out_of_bounds(index, self.len))
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, ArrayError> {
        let len = self.len;
        let slot = self
            .get_mut(index)
            .ok_or_else(|| ArrayError::out_of_bounds(index, len))?;
        Ok(std::mem::replace(slot, item))
    }

    pub fn push(&mut self, item: T) {
        self.insert_at(self.len, item);
    }

    /// Inserts `item` so that it ends up at `index`, shifting everything from
    /// `index` onwards one slot to the right.
    ///
    /// A negative `index` is taken as `len + index`, so `-1` inserts in front
    /// of the current last element. Note that this is an insertion gap, not
    /// an element position: `insert(-1, ..)` never appends.
    pub fn insert(&mut self, index: isize, item: T) -> Result<(), ArrayError> {
        let len = self.len;
        let idx = resolve_index(index, len)
            .filter(|idx| *idx <= len)
            .ok_or(ArrayError::OutOfBounds { index, len })?;
        self.insert_at(idx, item);
        Ok(())
    }

    pub fn prepend(&mut self, item: T) {
        self.insert_at(0, item);
    }

    pub fn pop(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::EmptyContainer);
        }
        self.delete(self.len - 1)
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Shrinks the backing store when the array drops to a quarter of its
    /// capacity.
    pub fn delete(&mut self, index: usize) -> Result<T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::out_of_bounds(index, self.len));
        }
        let Some(removed) = self.slots[index].take() else {
            return Err(ArrayError::out_of_bounds(index, self.len));
        };

        // walk the freed slot up to the end of the occupied range
        for i in index..self.len - 1 {
            self.slots.swap(i, i + 1);
        }
        self.len -= 1;

        if let Some(capacity) = self.policy.shrunk(self.len, self.capacity()) {
            self.resize(capacity)?;
        }

        Ok(removed)
    }

    pub fn find(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(item).is_some()
    }

    /// Deletes the first element equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find(item) {
            Some(idx) => self.delete(idx).is_ok(),
            None => false,
        }
    }

    /// Drops every element and returns the capacity to the policy floor.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.policy.min_capacity);
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.slots[..self.len].iter().flatten()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.slots[..self.len].iter_mut().flatten()
    }

    /// Fails if `new_capacity` can not hold the current elements.
    pub(crate) fn resize(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity < self.len {
            return Err(ArrayError::InvalidResize {
                len: self.len,
                requested: new_capacity,
            });
        }
        if new_capacity != self.capacity() {
            self.reallocate(new_capacity);
        }
        Ok(())
    }

    fn insert_at(&mut self, idx: usize, item: T) {
        debug_assert!(idx <= self.len);
        if self.len == self.capacity() {
            self.reallocate(self.policy.grown(self.capacity()));
        }

        // slot `len` is empty, walk it down to `idx`, highest index first
        for i in (idx..self.len).rev() {
            self.slots.swap(i, i + 1);
        }
        self.slots[idx] = Some(item);
        self.len += 1;
    }

    /// Moves the occupied slots into a fresh backing store of `new_capacity`.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            "reallocating backing store"
        );

        let mut slots = std::mem::take(&mut self.slots).into_vec();
        slots.truncate(self.len);
        slots.resize_with(new_capacity, || None);
        self.slots = slots.into_boxed_slice();
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let required = self.len.saturating_add(lower);
        if required > self.capacity() {
            self.reallocate(self.policy.initial_capacity(required));
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_vec().into_iter().flatten()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> HasLength for DynArray<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq> Sequence for DynArray<T> {
    type Item = T;
    type Error = ArrayError;

    fn push(&mut self, item: T) {
        self.push(item);
    }

    fn pop(&mut self) -> Result<T, ArrayError> {
        self.pop()
    }

    fn insert(&mut self, index: isize, item: T) -> Result<(), ArrayError> {
        self.insert(index, item)
    }

    fn delete(&mut self, index: usize) -> Result<T, ArrayError> {
        self.delete(index)
    }

    fn find(&self, item: &T) -> Option<usize> {
        self.find(item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        self.remove(item)
    }
}
