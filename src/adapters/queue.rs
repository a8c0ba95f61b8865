use core::marker::PhantomData;

use crate::{Deque, LinkedDeque};

/// First-in first-out queue over any [`Deque`]
///
/// Items enter at the back of the wrapped deque and leave from its front. Dequeuing
/// or peeking an empty queue yields `None`.
///
/// # Type Parameters
///
/// * `T` - The type of the queued items
/// * `D` - The backing deque, a [`LinkedDeque`] unless chosen otherwise
#[derive(Debug, Clone)]
pub struct Queue<T, D = LinkedDeque<T>> {
    deque: D,
    _item: PhantomData<T>,
}

impl<T, D> Queue<T, D>
where
    D: Deque<T> + Default,
{
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::with_deque(D::default())
    }
}

impl<T, D> Queue<T, D>
where
    D: Deque<T>,
{
    /// Creates a queue whose front is the front of `deque`
    pub fn with_deque(deque: D) -> Self {
        Self {
            deque,
            _item: PhantomData,
        }
    }

    /// Adds an item at the rear of the queue
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.deque.add_last(item);
    }

    /// Removes and returns the item at the front of the queue
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.deque.remove_first()
    }

    /// Returns a reference to the item at the front of the queue
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.deque.first()
    }

    /// Returns the item at `index` places behind the front
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.deque.get(index)
    }

    /// Returns the number of queued items
    #[inline]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Returns true if the queue holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Consumes the queue and returns the backing deque
    pub fn into_inner(self) -> D {
        self.deque
    }
}

impl<T, D> Default for Queue<T, D>
where
    D: Deque<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
