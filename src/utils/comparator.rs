use core::cmp::Ordering;

use num_traits::float::FloatCore;
use ordered_float::OrderedFloat;

/// Trait for ordering policies used to rank items
///
/// # Type Parameters
///
/// * `T` - The type of the items being compared
///
/// Implementations must be a total order; the result of ranking under anything else
/// is unspecified. Any closure `Fn(&T, &T) -> Ordering` is a comparator.
pub trait Comparator<T: ?Sized> {
    /// Returns how `a` orders relative to `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders items by their `Ord` implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped comparator
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse<C>(
    /// The comparator being inverted
    pub C,
);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Total order over floats, with NaN above every other value
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalFloat;

impl<T: FloatCore> Comparator<T> for TotalFloat {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        OrderedFloat(*a).cmp(&OrderedFloat(*b))
    }
}
