use core::cmp::Ordering;

use crate::{
    ArrayDeque, Deque,
    array_deque::ArrayIter,
    utils::{Comparator, Natural},
};

/// # Maximum Lookup over an Array-Backed Deque
///
/// An [`ArrayDeque`] that also reports its largest item under a comparator chosen at
/// construction, or under one supplied per call.
///
/// The lookup is a single front-to-back scan and never reorders the deque. A later item
/// only replaces the current best when it compares strictly greater, so among items the
/// comparator ranks equal the one nearest the front wins.
///
/// # Examples
///
/// ```
/// # use dual_deque::{Deque, MaxArrayDeque};
/// let mut deque = MaxArrayDeque::new(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
/// deque.add_last((20, "sami"));
/// deque.add_last((26, "belal"));
/// deque.add_last((26, "waled"));
///
/// assert_eq!(deque.max(), Some(&(26, "belal")));
/// assert_eq!(deque.max_by(&|a: &(u32, &str), b: &(u32, &str)| a.1.cmp(b.1)), Some(&(26, "waled")));
/// ```
#[derive(Debug, Clone)]
pub struct MaxArrayDeque<T, C> {
    /// The underlying storage
    deque: ArrayDeque<T>,
    /// Default ordering used by [`MaxArrayDeque::max`]
    comparator: C,
}

impl<T, C> MaxArrayDeque<T, C>
where
    C: Comparator<T>,
{
    /// Creates an empty deque ranked by `comparator`
    ///
    /// # Arguments
    ///
    /// * `comparator` - The default ordering for [`MaxArrayDeque::max`]
    ///
    /// # Returns
    ///
    /// * `Self` - The `MaxArrayDeque` instance
    pub fn new(comparator: C) -> Self {
        Self {
            deque: ArrayDeque::new(),
            comparator,
        }
    }

    /// Returns the largest item under the comparator given at construction
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - The first item achieving the maximum, or `None` if the deque is empty
    #[inline]
    pub fn max(&self) -> Option<&T> {
        self.max_by(&self.comparator)
    }

    /// Returns the largest item under `comparator`
    ///
    /// # Arguments
    ///
    /// * `comparator` - The ordering to rank items by for this call only
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - The first item achieving the maximum, or `None` if the deque is empty
    pub fn max_by<K>(&self, comparator: &K) -> Option<&T>
    where
        K: Comparator<T> + ?Sized,
    {
        let mut items = self.deque.iter();
        let mut best = items.next()?;
        for item in items {
            if comparator.compare(item, best) == Ordering::Greater {
                best = item;
            }
        }
        Some(best)
    }

    /// Returns the comparator given at construction
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, C> MaxArrayDeque<T, C> {
    /// Returns the underlying [`ArrayDeque`]
    #[inline]
    pub fn as_array_deque(&self) -> &ArrayDeque<T> {
        &self.deque
    }

    /// Returns the number of slots in the backing buffer
    #[inline]
    pub fn capacity(&self) -> usize {
        self.deque.capacity()
    }
}

impl<T: Ord> Default for MaxArrayDeque<T, Natural> {
    fn default() -> Self {
        Self::new(Natural)
    }
}

impl<T, C> AsRef<ArrayDeque<T>> for MaxArrayDeque<T, C> {
    fn as_ref(&self) -> &ArrayDeque<T> {
        &self.deque
    }
}

impl<T, C> Deque<T> for MaxArrayDeque<T, C> {
    type Iter<'a>
        = ArrayIter<'a, T>
    where
        T: 'a,
        C: 'a;

    #[inline]
    fn add_first(&mut self, item: T) {
        self.deque.add_first(item);
    }

    #[inline]
    fn add_last(&mut self, item: T) {
        self.deque.add_last(item);
    }

    #[inline]
    fn remove_first(&mut self) -> Option<T> {
        self.deque.remove_first()
    }

    #[inline]
    fn remove_last(&mut self) -> Option<T> {
        self.deque.remove_last()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.deque.get(index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.deque.len()
    }

    #[inline]
    fn iter(&self) -> ArrayIter<'_, T> {
        self.deque.iter()
    }
}

impl<'a, T, C> IntoIterator for &'a MaxArrayDeque<T, C> {
    type Item = &'a T;
    type IntoIter = ArrayIter<'a, T>;

    fn into_iter(self) -> ArrayIter<'a, T> {
        self.deque.iter()
    }
}

impl<T, C> Extend<T> for MaxArrayDeque<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.deque.extend(iter);
    }
}

impl<T, C> FromIterator<T> for MaxArrayDeque<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            deque: iter.into_iter().collect(),
            comparator: C::default(),
        }
    }
}

impl<T: PartialEq, C, D: Deque<T>> PartialEq<D> for MaxArrayDeque<T, C> {
    fn eq(&self, other: &D) -> bool {
        self.eq_deque(other)
    }
}

impl<T: Eq, C> Eq for MaxArrayDeque<T, C> {}
