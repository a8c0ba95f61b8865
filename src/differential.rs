use core::{fmt, marker::PhantomData};

use crate::Deque;

/// A single deque operation, replayable against any [`Deque`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op<T> {
    /// Insert at the front
    AddFirst(T),
    /// Insert at the back
    AddLast(T),
    /// Remove from the front
    RemoveFirst,
    /// Remove from the back
    RemoveLast,
    /// Read by position from the front
    Get(usize),
}

/// The first disagreement found between two deques driven in lockstep
#[derive(Debug, Clone, PartialEq)]
pub enum Divergence<T> {
    /// An operation returned different items
    Mismatch {
        /// Zero-based number of the operation
        step: usize,
        /// The operation that disagreed
        op: Op<T>,
        /// What the left deque returned
        left: Option<T>,
        /// What the right deque returned
        right: Option<T>,
    },
    /// The deques report different lengths
    Len {
        /// Zero-based number of the operation after which the lengths differ
        step: usize,
        /// Length of the left deque
        left: usize,
        /// Length of the right deque
        right: usize,
    },
    /// The deques hold different items at `index`
    Contents {
        /// Zero-based number of the operation after which the contents differ
        step: usize,
        /// First position that differs
        index: usize,
    },
}

impl<T: fmt::Debug> fmt::Display for Divergence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                step,
                op,
                left,
                right,
            } => write!(
                f,
                "step {step}: {op:?} returned {left:?} on the left but {right:?} on the right"
            ),
            Self::Len { step, left, right } => {
                write!(f, "step {step}: lengths differ ({left} vs {right})")
            }
            Self::Contents { step, index } => {
                write!(f, "step {step}: items differ at index {index}")
            }
        }
    }
}

impl<T: fmt::Debug> core::error::Error for Divergence<T> {}

/// Drives two deques through the same operations and compares what they report
///
/// After every operation both deques must return the same item, report the same
/// length, and hold the same sequence. The first mismatch is returned as a
/// [`Divergence`] and the run stops there.
///
/// # Examples
///
/// ```
/// # use dual_deque::{ArrayDeque, Differential, LinkedDeque, Op};
/// let mut oracle = Differential::new(ArrayDeque::new(), LinkedDeque::new());
/// oracle
///     .run([Op::AddFirst(3), Op::AddLast(4), Op::RemoveFirst, Op::Get(0)])
///     .unwrap();
/// assert_eq!(oracle.steps(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Differential<T, A, B> {
    left: A,
    right: B,
    steps: usize,
    _item: PhantomData<T>,
}

impl<T, A, B> Differential<T, A, B>
where
    T: Clone + PartialEq,
    A: Deque<T>,
    B: Deque<T>,
{
    /// Pairs two deques for lockstep checking
    pub fn new(left: A, right: B) -> Self {
        Self {
            left,
            right,
            steps: 0,
            _item: PhantomData,
        }
    }

    /// Applies one operation to both deques and checks they still agree
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to replay
    ///
    /// # Returns
    ///
    /// * `Result<(), Divergence<T>>` - The first disagreement, if any
    pub fn apply(&mut self, op: Op<T>) -> Result<(), Divergence<T>> {
        let step = self.steps;
        self.steps += 1;

        let (left, right) = match &op {
            Op::AddFirst(item) => {
                self.left.add_first(item.clone());
                self.right.add_first(item.clone());
                (self.left.first().cloned(), self.right.first().cloned())
            }
            Op::AddLast(item) => {
                self.left.add_last(item.clone());
                self.right.add_last(item.clone());
                (self.left.last().cloned(), self.right.last().cloned())
            }
            Op::RemoveFirst => (self.left.remove_first(), self.right.remove_first()),
            Op::RemoveLast => (self.left.remove_last(), self.right.remove_last()),
            Op::Get(index) => (
                self.left.get(*index).cloned(),
                self.right.get(*index).cloned(),
            ),
        };

        if left != right {
            return Err(Divergence::Mismatch {
                step,
                op,
                left,
                right,
            });
        }

        self.check_agreement(step)
    }

    /// Applies every operation in order, stopping at the first disagreement
    pub fn run<I>(&mut self, ops: I) -> Result<(), Divergence<T>>
    where
        I: IntoIterator<Item = Op<T>>,
    {
        ops.into_iter().try_for_each(|op| self.apply(op))?;
        self.verify_indexed()
    }

    /// Compares both deques position by position through `get`
    ///
    /// Every index in `[0, len)` must return equal items and `len` itself must be
    /// out of bounds on both sides.
    pub fn verify_indexed(&self) -> Result<(), Divergence<T>> {
        let step = self.steps.saturating_sub(1);
        self.check_len(step)?;

        let len = self.left.len();
        for index in 0..=len {
            if self.left.get(index) != self.right.get(index) {
                return Err(Divergence::Contents { step, index });
            }
        }
        Ok(())
    }

    /// Returns how many operations have been applied
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the left deque
    #[inline]
    pub fn left(&self) -> &A {
        &self.left
    }

    /// Returns the right deque
    #[inline]
    pub fn right(&self) -> &B {
        &self.right
    }

    /// Consumes the oracle and returns both deques
    pub fn into_inner(self) -> (A, B) {
        (self.left, self.right)
    }

    fn check_len(&self, step: usize) -> Result<(), Divergence<T>> {
        let (left, right) = (self.left.len(), self.right.len());
        if left != right || self.left.is_empty() != self.right.is_empty() {
            return Err(Divergence::Len { step, left, right });
        }
        Ok(())
    }

    fn check_agreement(&self, step: usize) -> Result<(), Divergence<T>> {
        self.check_len(step)?;

        match self
            .left
            .iter()
            .zip(self.right.iter())
            .position(|(l, r)| l != r)
        {
            Some(index) => Err(Divergence::Contents { step, index }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;
    use crate::{ArrayDeque, LinkedDeque, MaxArrayDeque, utils::Natural};
    use alloc::{string::ToString, vec::Vec};
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    impl<T: Arbitrary> Arbitrary for Op<T> {
        fn arbitrary(g: &mut Gen) -> Self {
            match u8::arbitrary(g) % 5 {
                0 => Op::AddFirst(T::arbitrary(g)),
                1 => Op::AddLast(T::arbitrary(g)),
                2 => Op::RemoveFirst,
                3 => Op::RemoveLast,
                _ => Op::Get(usize::arbitrary(g) % 64),
            }
        }
    }

    /// Deque that answers `remove_first` from the wrong end once it holds two items
    #[derive(Default)]
    struct Faulty(ArrayDeque<i32>);

    impl Deque<i32> for Faulty {
        type Iter<'a> = crate::ArrayIter<'a, i32>;

        fn add_first(&mut self, item: i32) {
            self.0.add_first(item)
        }

        fn add_last(&mut self, item: i32) {
            self.0.add_last(item)
        }

        fn remove_first(&mut self) -> Option<i32> {
            if self.0.len() >= 2 {
                self.0.remove_last()
            } else {
                self.0.remove_first()
            }
        }

        fn remove_last(&mut self) -> Option<i32> {
            self.0.remove_last()
        }

        fn get(&self, index: usize) -> Option<&i32> {
            self.0.get(index)
        }

        fn len(&self) -> usize {
            self.0.len()
        }

        fn iter(&self) -> Self::Iter<'_> {
            self.0.iter()
        }
    }

    #[quickcheck]
    fn prop_array_and_linked_agree(ops: Vec<Op<i16>>) -> bool {
        Differential::new(ArrayDeque::new(), LinkedDeque::new())
            .run(ops)
            .is_ok()
    }

    #[quickcheck]
    fn prop_max_array_and_linked_agree(ops: Vec<Op<u8>>) -> bool {
        Differential::new(MaxArrayDeque::new(Natural), LinkedDeque::new())
            .run(ops)
            .is_ok()
    }

    #[test]
    fn test_randomized_lockstep() {
        let mut rng = StdRng::seed_from_u64(0x0dec_0de5);
        let mut oracle = Differential::new(ArrayDeque::new(), LinkedDeque::new());

        for _ in 0..100_000 {
            let value = rng.gen_range(0..100);
            let op = match rng.gen_range(0..10) {
                0 | 1 => Op::AddFirst(value),
                2 | 3 => Op::AddLast(value),
                4 | 5 => Op::RemoveFirst,
                6 | 7 => Op::RemoveLast,
                _ => Op::Get(rng.gen_range(0..64)),
            };
            if let Err(divergence) = oracle.apply(op) {
                panic!("{divergence}");
            }
        }

        oracle.verify_indexed().unwrap();
        let (array, linked) = oracle.into_inner();
        assert!(array.capacity().is_power_of_two());
        assert!(linked.is_ring_closed());
        assert_eq!(array, linked);
    }

    #[test]
    fn test_grow_then_drain_in_lockstep() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut oracle = Differential::new(ArrayDeque::new(), LinkedDeque::new());

        for _ in 0..3 {
            for _ in 0..5_000 {
                let value: u32 = rng.r#gen();
                let op = if rng.gen_bool(0.5) {
                    Op::AddFirst(value)
                } else {
                    Op::AddLast(value)
                };
                oracle.apply(op).unwrap();
            }
            oracle.verify_indexed().unwrap();
            while !oracle.left().is_empty() {
                let op = if rng.gen_bool(0.5) {
                    Op::RemoveFirst
                } else {
                    Op::RemoveLast
                };
                oracle.apply(op).unwrap();
            }
            assert_eq!(oracle.left().capacity(), 8);
            assert!(oracle.right().is_empty());
        }
    }

    #[test]
    fn test_reports_first_divergence() {
        let mut oracle = Differential::new(ArrayDeque::new(), Faulty::default());
        let result = oracle.run([
            Op::AddLast(1),
            Op::RemoveFirst,
            Op::AddLast(2),
            Op::AddLast(3),
            Op::RemoveFirst,
            Op::AddLast(4),
        ]);

        let divergence = result.unwrap_err();
        assert_eq!(
            divergence,
            Divergence::Mismatch {
                step: 4,
                op: Op::RemoveFirst,
                left: Some(2),
                right: Some(3),
            }
        );
        assert_eq!(oracle.steps(), 5);
        assert_eq!(
            divergence.to_string(),
            "step 4: RemoveFirst returned Some(2) on the left but Some(3) on the right"
        );
    }

    #[test]
    fn test_empty_removals_agree() {
        let mut oracle = Differential::new(LinkedDeque::<char>::new(), ArrayDeque::new());
        oracle
            .run([Op::RemoveFirst, Op::RemoveLast, Op::Get(0)])
            .unwrap();
        assert_eq!(oracle.steps(), 3);
    }

    #[test]
    fn test_divergence_display() {
        let len = Divergence::<u8>::Len {
            step: 3,
            left: 2,
            right: 1,
        };
        assert_eq!(len.to_string(), "step 3: lengths differ (2 vs 1)");

        let contents = Divergence::<u8>::Contents { step: 0, index: 5 };
        assert_eq!(contents.to_string(), "step 0: items differ at index 5");
    }
}
