mod comparator;
pub use comparator::{Comparator, Natural, Reverse, TotalFloat};
