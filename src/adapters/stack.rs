use core::marker::PhantomData;

use crate::{ArrayDeque, Deque};

/// Last-in first-out stack over any [`Deque`]
///
/// Pushes and pops happen at the back of the wrapped deque. Popping or peeking an
/// empty stack yields `None`.
///
/// Storage follows the backing deque. The default [`ArrayDeque`] halves its buffer once
/// it is less than a quarter full, so a stack that is drained gives memory back. Use
/// `Stack<T, LinkedDeque<T>>` to keep every slot ever allocated for reuse instead.
///
/// # Type Parameters
///
/// * `T` - The type of the items on the stack
/// * `D` - The backing deque, an [`ArrayDeque`] unless chosen otherwise
#[derive(Debug, Clone)]
pub struct Stack<T, D = ArrayDeque<T>> {
    deque: D,
    _item: PhantomData<T>,
}

impl<T, D> Stack<T, D>
where
    D: Deque<T> + Default,
{
    /// Creates an empty stack
    pub fn new() -> Self {
        Self::with_deque(D::default())
    }
}

impl<T, D> Stack<T, D>
where
    D: Deque<T>,
{
    /// Creates a stack whose top is the back of `deque`
    pub fn with_deque(deque: D) -> Self {
        Self {
            deque,
            _item: PhantomData,
        }
    }

    /// Places an item on top of the stack
    #[inline]
    pub fn push(&mut self, item: T) {
        self.deque.add_last(item);
    }

    /// Removes and returns the most recently pushed item
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.deque.remove_last()
    }

    /// Returns a reference to the most recently pushed item
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.deque.last()
    }

    /// Returns the number of items on the stack
    #[inline]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Returns true if the stack holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Consumes the stack and returns the backing deque
    pub fn into_inner(self) -> D {
        self.deque
    }
}

impl<T, D> Default for Stack<T, D>
where
    D: Deque<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkedDeque;

    #[test]
    fn test_lifo_order() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), None);

        for i in 1..=20 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 20);
        assert_eq!(stack.top(), Some(&20));

        for i in (1..=20).rev() {
            assert_eq!(stack.pop(), Some(i));
        }
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_linked_backing() {
        let mut stack: Stack<&str, LinkedDeque<&str>> = Stack::default();
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.top(), Some(&"b"));
        assert_eq!(stack.pop(), Some("b"));

        let deque = stack.into_inner();
        assert_eq!(deque.len(), 1);
        assert_eq!(deque.first(), Some(&"a"));
    }

    #[test]
    fn test_default_backing_shrinks_when_drained() {
        let mut stack: Stack<u32> = Stack::new();
        for i in 0..64 {
            stack.push(i);
        }
        assert_eq!(stack.into_inner().capacity(), 64);

        let mut stack = Stack::with_deque((0..64).collect::<ArrayDeque<u32>>());
        while stack.len() > 4 {
            stack.pop();
        }
        let deque = stack.into_inner();
        assert!(deque.capacity() < 64);
        assert!(deque.capacity() >= 8);
    }

    #[test]
    fn test_wraps_existing_deque() {
        let deque: ArrayDeque<_> = (0..3).collect();
        let mut stack = Stack::with_deque(deque);
        assert_eq!(stack.top(), Some(&2));
        stack.push(3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
    }
}
