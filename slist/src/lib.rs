//! Singly linked list with O(1) access to both ends.
//!
//! Nodes live in an arena owned by the list and link to each other through
//! integer handles, so relinking never moves ownership around.

use crate::arena::{Arena, Node, NodeId};
use collection_traits::{resolve_index, HasLength, Sequence};
use std::fmt::{Debug, Formatter};

pub use error::ListError;

mod arena;
pub mod error;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct LinkedList<T> {
    arena: Arena<T>,
    first: Option<NodeId>,
    /// Cached tail. `None` exactly when `first` is.
    last: Option<NodeId>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::default(),
            first: None,
            last: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.first.map(|id| &self.arena.get(id).value)
    }

    pub fn back(&self) -> Option<&T> {
        self.last.map(|id| &self.arena.get(id).value)
    }

    /// Returns the element at `index`. Negative indices count from the end,
    /// `-1` being the last element.
    ///
    /// Walks from the front, except for the last element which is read
    /// through the cached tail.
    pub fn at(&self, index: isize) -> Result<&T, ListError> {
        // Lookups and inserts both resolve to `len + index`. For inserts that
        // is a gap, so `insert(-1, ..)` lands before the tail while `at(-1)`
        // reads the tail itself.
        resolve_index(index, self.len)
            .and_then(|idx| self.node_at(idx))
            .map(|id| &self.arena.get(id).value)
            .ok_or(ListError::OutOfBounds {
                index,
                len: self.len,
            })
    }

    pub fn push_front(&mut self, item: T) {
        let id = self.arena.alloc(Node {
            value: item,
            next: self.first,
        });
        self.first = Some(id);
        if self.last.is_none() {
            self.last = Some(id);
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, item: T) {
        let id = self.arena.alloc(Node {
            value: item,
            next: None,
        });
        match self.last {
            Some(last) => self.arena.get_mut(last).next = Some(id),
            None => self.first = Some(id),
        }
        self.last = Some(id);
        self.len += 1;
    }

    /// Inserts `item` so that it ends up at `index`. A negative `index` is
    /// taken as `len + index`.
    pub fn insert(&mut self, index: isize, item: T) -> Result<(), ListError> {
        let len = self.len;
        let oob = ListError::OutOfBounds { index, len };
        let idx = resolve_index(index, len)
            .filter(|idx| *idx <= len)
            .ok_or(oob.clone())?;

        if idx == 0 {
            self.push_front(item);
        } else if idx == len {
            self.push_back(item);
        } else {
            let prev = self.node_at(idx - 1).ok_or(oob)?;
            let next = self.arena.get(prev).next;
            let id = self.arena.alloc(Node { value: item, next });
            self.arena.get_mut(prev).next = Some(id);
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let oob = ListError::out_of_bounds(index, self.len);
        if index >= self.len {
            return Err(oob);
        }

        let prev = match index {
            0 => None,
            _ => Some(self.node_at(index - 1).ok_or(oob.clone())?),
        };
        let target = match prev {
            Some(prev) => self.arena.get(prev).next,
            None => self.first,
        }
        .ok_or(oob)?;

        Ok(self.unlink(prev, target))
    }

    pub fn pop_front(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        self.remove(self.len - 1)
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

    /// Removes the first element equal to `item`. Returns whether one was found.
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev = None;
        let mut cur = self.first;
        while let Some(id) = cur {
            let node = self.arena.get(id);
            if node.value == *item {
                self.unlink(prev, id);
                return true;
            }
            prev = Some(id);
            cur = node.next;
        }
        false
    }

    /// Reverses the list in place by flipping every link.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.first;
        while let Some(id) = cur {
            let node = self.arena.get_mut(id);
            cur = node.next;
            node.next = prev;
            prev = Some(id);
        }
        std::mem::swap(&mut self.first, &mut self.last);
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.first = None;
        self.last = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            cur: self.first,
            remaining: self.len,
        }
    }

    fn node_at(&self, idx: usize) -> Option<NodeId> {
        if idx >= self.len {
            return None;
        }
        if idx == self.len - 1 {
            return self.last;
        }

        let mut cur = self.first?;
        for _ in 0..idx {
            cur = self.arena.get(cur).next?;
        }
        Some(cur)
    }

    /// Detaches `id`, whose predecessor is `prev`, and returns its value.
    fn unlink(&mut self, prev: Option<NodeId>, id: NodeId) -> T {
        let node = self.arena.release(id);
        match prev {
            Some(prev) => self.arena.get_mut(prev).next = node.next,
            None => self.first = node.next,
        }
        if node.next.is_none() {
            self.last = prev;
        }
        self.len -= 1;
        node.value
    }
}

pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    cur: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.cur?);
        self.cur = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> HasLength for LinkedList<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq> Sequence for LinkedList<T> {
    type Item = T;
    type Error = ListError;

    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    fn pop(&mut self) -> Result<T, ListError> {
        self.pop_back()
    }

    fn insert(&mut self, index: isize, item: T) -> Result<(), ListError> {
        self.insert(index, item)
    }

    fn delete(&mut self, index: usize) -> Result<T, ListError> {
        self.remove(index)
    }

    fn find(&self, item: &T) -> Option<usize> {
        self.find(item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        self.remove_item(item)
    }
}
