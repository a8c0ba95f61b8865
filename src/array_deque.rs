use alloc::{boxed::Box, vec::Vec};

use crate::Deque;

/// Smallest buffer the deque ever holds
const MIN_CAPACITY: usize = 8;

/// A growable double-ended queue backed by a circular buffer
///
/// The buffer length is always a power of two, at least 8. Two cursors track the
/// free slot just before the front (`next_first`) and the free slot just after the
/// back (`next_last`); the items occupy the slots strictly between them, wrapping
/// around the end of the buffer. Tracking the neighbouring free slots instead of the
/// ends themselves keeps a full buffer distinguishable from an empty one.
///
/// The buffer doubles when a push finds it full and halves when a pop leaves it
/// less than a quarter used, never going below 8 slots.
#[derive(Debug, Clone)]
pub struct ArrayDeque<T> {
    /// The circular buffer; vacated slots hold `None`
    buf: Box<[Option<T>]>,
    /// The current number of items stored
    len: usize,
    /// The free slot immediately before the front item
    next_first: usize,
    /// The free slot immediately after the back item
    next_last: usize,
}

impl<T> ArrayDeque<T> {
    /// Creates an empty deque with a buffer of 8 slots
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty deque able to hold at least `capacity` items before growing
    ///
    /// # Arguments
    ///
    /// * `capacity` - The requested capacity, rounded up to a power of two no smaller than 8
    ///
    /// # Returns
    ///
    /// * `Self` - The `ArrayDeque` instance
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = capacity.max(MIN_CAPACITY).next_power_of_two();
        Self {
            buf: empty_buffer(cap),
            len: 0,
            next_first: cap - 1,
            next_last: 0,
        }
    }

    /// Returns the number of slots in the backing buffer
    ///
    /// # Returns
    ///
    /// * `usize` - The current capacity, always a power of two and at least 8
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Removes every item and shrinks the buffer back to 8 slots
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    #[inline]
    const fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Maps a position onto the buffer; the capacity is a power of two
    #[inline]
    const fn wrap(&self, idx: usize) -> usize {
        idx & (self.buf.len() - 1)
    }

    /// Index of the slot holding the item at logical position `i`
    #[inline]
    const fn physical(&self, i: usize) -> usize {
        self.wrap(self.next_first + 1 + i)
    }

    /// Moves the items into a buffer of `capacity` slots, front item first
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity.is_power_of_two() && capacity >= MIN_CAPACITY);
        debug_assert!(self.len <= capacity);

        let mut buf = empty_buffer(capacity);
        for (i, slot) in buf.iter_mut().take(self.len).enumerate() {
            let idx = self.physical(i);
            *slot = self.buf[idx].take();
        }

        self.buf = buf;
        self.next_first = capacity - 1;
        self.next_last = self.len;
    }

    /// Halves the buffer once less than a quarter of it is in use
    #[inline]
    fn shrink_if_sparse(&mut self) {
        let cap = self.capacity();
        if cap >= 2 * MIN_CAPACITY && self.len * 4 < cap {
            self.resize(cap / 2);
        }
    }
}

fn empty_buffer<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut vec = Vec::with_capacity(capacity);
    vec.resize_with(capacity, || None);
    vec.into_boxed_slice()
}

impl<T> Deque<T> for ArrayDeque<T> {
    type Iter<'a>
        = ArrayIter<'a, T>
    where
        T: 'a;

    fn add_first(&mut self, item: T) {
        if self.is_full() {
            self.resize(self.capacity() * 2);
        }
        self.buf[self.next_first] = Some(item);
        self.next_first = self.wrap(self.next_first + self.capacity() - 1);
        self.len += 1;
    }

    fn add_last(&mut self, item: T) {
        if self.is_full() {
            self.resize(self.capacity() * 2);
        }
        self.buf[self.next_last] = Some(item);
        self.next_last = self.wrap(self.next_last + 1);
        self.len += 1;
    }

    fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let idx = self.physical(0);
        let item = self.buf[idx].take();
        debug_assert!(item.is_some(), "live slot was vacant");
        self.next_first = idx;
        self.len -= 1;
        self.shrink_if_sparse();

        item
    }

    fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let idx = self.wrap(self.next_last + self.capacity() - 1);
        let item = self.buf[idx].take();
        debug_assert!(item.is_some(), "live slot was vacant");
        self.next_last = idx;
        self.len -= 1;
        self.shrink_if_sparse();

        item
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            None
        } else {
            self.buf[self.physical(index)].as_ref()
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn iter(&self) -> ArrayIter<'_, T> {
        ArrayIter {
            deque: self,
            index: 0,
        }
    }
}

/// Front-to-back iterator over an [`ArrayDeque`]
#[derive(Debug, Clone)]
pub struct ArrayIter<'a, T> {
    deque: &'a ArrayDeque<T>,
    index: usize,
}

impl<'a, T> Iterator for ArrayIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let item = self.deque.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ArrayIter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = ArrayIter<'a, T>;

    fn into_iter(self) -> ArrayIter<'a, T> {
        self.iter()
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for ArrayDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.add_last(item));
    }
}

impl<T> FromIterator<T> for ArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: PartialEq, D: Deque<T>> PartialEq<D> for ArrayDeque<T> {
    fn eq(&self, other: &D) -> bool {
        self.eq_deque(other)
    }
}

impl<T: Eq> Eq for ArrayDeque<T> {}
