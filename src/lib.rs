#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

mod traits;
pub use traits::Deque;

mod utils;
pub use utils::{Comparator, Natural, Reverse, TotalFloat};

mod array_deque;
pub use array_deque::{ArrayDeque, ArrayIter};

mod linked_deque;
pub use linked_deque::{LinkedDeque, LinkedIter};

mod max_array_deque;
pub use max_array_deque::MaxArrayDeque;

mod adapters;
pub use adapters::{Queue, Stack};

mod differential;
pub use differential::{Differential, Divergence, Op};
