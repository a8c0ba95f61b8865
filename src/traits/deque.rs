use core::fmt::{self, Display, Write};

/// Double-ended queue contract shared by every deque in this crate
///
/// Items can be added and removed at both ends and read by position from the front.
/// Implementations differ only in storage; for the same history of operations they
/// expose the same sequence, so callers can swap one for another freely.
///
/// Queries on an empty deque, or with an index outside `[0, len)`, yield `None`
/// instead of panicking. Callers branch on the result.
///
/// # Examples
///
/// ```
/// # use dual_deque::{ArrayDeque, Deque, LinkedDeque};
/// let mut array = ArrayDeque::new();
/// let mut linked = LinkedDeque::new();
///
/// array.add_last(1);
/// array.add_first(0);
/// linked.add_first(1);
/// linked.add_first(0);
///
/// assert!(array.eq_deque(&linked));
/// assert_eq!(array.remove_last(), linked.remove_last());
/// ```
pub trait Deque<T> {
    /// Forward iterator over the items, front to back
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Inserts an item in front of the current first item
    fn add_first(&mut self, item: T);

    /// Inserts an item after the current last item
    fn add_last(&mut self, item: T);

    /// Removes and returns the first item
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The first item, or `None` if the deque is empty
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the last item
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The last item, or `None` if the deque is empty
    fn remove_last(&mut self) -> Option<T>;

    /// Returns a reference to the item at `index`, counted from the front
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based position from the front
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - The item, or `None` if `index` is out of bounds
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns the number of items currently stored
    fn len(&self) -> usize;

    /// Returns a fresh iterator starting at the current front
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns true if the deque holds no items
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the first item, if any
    #[inline]
    fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last item, if any
    #[inline]
    fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns true if `other` holds equal items in the same order
    ///
    /// Works across implementations, so an `ArrayDeque` and a `LinkedDeque` built from
    /// the same history compare equal.
    fn eq_deque<D>(&self, other: &D) -> bool
    where
        D: Deque<T> + ?Sized,
        T: PartialEq,
    {
        self.len() == other.len() && self.iter().eq(other.iter())
    }

    /// Writes every item front to back, separated by single spaces, then one newline
    ///
    /// # Examples
    ///
    /// ```
    /// # use dual_deque::{Deque, LinkedDeque};
    /// let deque: LinkedDeque<_> = [3, 1, 4].into_iter().collect();
    /// let mut out = String::new();
    /// deque.print_deque(&mut out).unwrap();
    /// assert_eq!(out, "3 1 4\n");
    /// ```
    fn print_deque<W>(&self, out: &mut W) -> fmt::Result
    where
        W: Write,
        T: Display,
    {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{item}")?;
        }
        out.write_char('\n')
    }
}
