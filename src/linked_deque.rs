use alloc::vec::Vec;

use crate::Deque;

/// Arena slot of the sentinel node; it never holds an item
const SENTINEL: usize = 0;

/// A node of the ring, addressed by its index in the arena
#[derive(Debug, Clone)]
struct Node<T> {
    /// The stored item, `None` for the sentinel and for recycled slots
    item: Option<T>,
    /// Index of the following node (the sentinel after the last item)
    next: usize,
    /// Index of the preceding node (the sentinel before the first item)
    prev: usize,
}

/// A double-ended queue built as a doubly linked ring around a sentinel node
///
/// The sentinel's `next` is the first item and its `prev` the last; with no items
/// both point back at the sentinel itself, so neither end ever needs a null check.
/// Nodes live in an arena and link to each other by index. Slots freed by removals
/// go on a free list and are reused by later insertions.
///
/// - Insertion and removal at either end: O(1)
/// - Indexed access: O(n)
#[derive(Debug, Clone)]
pub struct LinkedDeque<T> {
    /// Node storage; index 0 is the sentinel
    nodes: Vec<Node<T>>,
    /// Recycled slots available for allocation, used as a LIFO stack
    free_list: Vec<usize>,
    /// Number of item nodes on the ring
    len: usize,
}

impl<T> LinkedDeque<T> {
    /// Creates an empty deque holding only the sentinel
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                item: None,
                next: SENTINEL,
                prev: SENTINEL,
            }],
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Removes every item and releases the arena
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Returns the item at `index` by recursing along the ring from the front
    ///
    /// Gives the same answer as [`Deque::get`]. Each call walks half of the remaining
    /// distance and recurses on the rest, so the depth grows with `log2(index)`.
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based position from the front
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - The item, or `None` if `index` is out of bounds
    pub fn get_recursive(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.get_from(self.node(SENTINEL).next, index)
    }

    fn get_from(&self, mut idx: usize, index: usize) -> Option<&T> {
        if idx == SENTINEL {
            return None;
        }
        if index == 0 {
            return self.node(idx).item.as_ref();
        }

        let skip = index.div_ceil(2);
        for _ in 0..skip {
            idx = self.node(idx).next;
            if idx == SENTINEL {
                return None;
            }
        }
        self.get_from(idx, index - skip)
    }

    /// Walks the ring and checks that every link is mirrored and the count matches
    ///
    /// # Returns
    ///
    /// * `bool` - True if the ring is closed and holds exactly `len` item nodes
    pub fn is_ring_closed(&self) -> bool {
        let mut count = 0;
        let mut current = SENTINEL;

        loop {
            let next = self.node(current).next;
            if next >= self.nodes.len() || self.node(next).prev != current {
                return false;
            }
            if next == SENTINEL {
                break;
            }
            if self.node(next).item.is_none() || count == self.len {
                return false;
            }
            count += 1;
            current = next;
        }

        count == self.len && self.node(SENTINEL).item.is_none()
    }

    #[inline]
    fn node(&self, idx: usize) -> &Node<T> {
        &self.nodes[idx]
    }

    #[inline]
    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        &mut self.nodes[idx]
    }

    /// Places a node in a recycled slot, or a new one, and returns its index
    fn allocate_node(&mut self, item: T, prev: usize, next: usize) -> usize {
        let node = Node {
            item: Some(item),
            next,
            prev,
        };
        match self.free_list.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Takes the item out of an unlinked node and recycles its slot
    fn deallocate_node(&mut self, idx: usize) -> Option<T> {
        debug_assert_ne!(idx, SENTINEL, "the sentinel is never released");
        let node = self.node_mut(idx);
        node.next = idx;
        node.prev = idx;
        let item = node.item.take();
        self.free_list.push(idx);
        item
    }

    /// Links a new node between two adjacent nodes
    fn link_between(&mut self, item: T, prev: usize, next: usize) {
        debug_assert_eq!(self.node(prev).next, next);
        let idx = self.allocate_node(item, prev, next);
        self.node_mut(prev).next = idx;
        self.node_mut(next).prev = idx;
        self.len += 1;
    }

    /// Bridges the neighbours of `idx` over it, then releases it
    fn unlink(&mut self, idx: usize) -> Option<T> {
        let Node { prev, next, .. } = *self.node(idx);
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        self.len -= 1;
        self.deallocate_node(idx)
    }
}

impl<T> Deque<T> for LinkedDeque<T> {
    type Iter<'a>
        = LinkedIter<'a, T>
    where
        T: 'a;

    fn add_first(&mut self, item: T) {
        let first = self.node(SENTINEL).next;
        self.link_between(item, SENTINEL, first);
    }

    fn add_last(&mut self, item: T) {
        let last = self.node(SENTINEL).prev;
        self.link_between(item, last, SENTINEL);
    }

    fn remove_first(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let first = self.node(SENTINEL).next;
        self.unlink(first)
    }

    fn remove_last(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let last = self.node(SENTINEL).prev;
        self.unlink(last)
    }

    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.iter().nth(index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn iter(&self) -> LinkedIter<'_, T> {
        LinkedIter {
            nodes: &self.nodes,
            current: self.node(SENTINEL).next,
            remaining: self.len,
        }
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        self.node(self.node(SENTINEL).prev).item.as_ref()
    }
}

/// Front-to-back iterator over a [`LinkedDeque`], stopping at the sentinel
#[derive(Debug, Clone)]
pub struct LinkedIter<'a, T> {
    nodes: &'a [Node<T>],
    current: usize,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.current == SENTINEL {
            return None;
        }
        let node = &self.nodes[self.current];
        self.current = node.next;
        self.remaining -= 1;
        node.item.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedIter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = LinkedIter<'a, T>;

    fn into_iter(self) -> LinkedIter<'a, T> {
        self.iter()
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.add_last(item));
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: PartialEq, D: Deque<T>> PartialEq<D> for LinkedDeque<T> {
    fn eq(&self, other: &D) -> bool {
        self.eq_deque(other)
    }
}

impl<T: Eq> Eq for LinkedDeque<T> {}
