//! Terminal operations.
//!
//! Each one moves the pull chain out of the sequence (closing it), drives it
//! to completion or to the first decisive element, and drops it before
//! returning. The first read error stops the operation and is returned.

use crate::error::Result;
use crate::sequence::LazySeq;
use std::iter::Sum;

impl<'a, T: 'a> LazySeq<'a, T> {
    /// Call `action` on every element, in order.
    pub fn for_each<F>(&mut self, mut action: F) -> Result<()>
    where
        F: FnMut(T),
    {
        for item in self.take_pull("for_each", false)? {
            action(item?);
        }
        Ok(())
    }

    /// `true` as soon as one element satisfies `pred`; `false` when empty.
    pub fn any_match<P>(&mut self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        for item in self.take_pull("any_match", true)? {
            if pred(&item?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// `false` as soon as one element fails `pred`; `true` when empty.
    pub fn all_match<P>(&mut self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        for item in self.take_pull("all_match", true)? {
            if !pred(&item?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `false` as soon as one element satisfies `pred`; `true` when empty.
    pub fn none_match<P>(&mut self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        for item in self.take_pull("none_match", true)? {
            if pred(&item?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The first element in encounter order, if any.
    pub fn find_first(&mut self) -> Result<Option<T>> {
        self.take_pull("find_first", true)?.next().transpose()
    }

    /// Some element, if any.
    ///
    /// Sequences here are always evaluated in order, so this returns the same
    /// element as [`find_first`](Self::find_first). Callers should not rely on
    /// which element they get.
    pub fn find_any(&mut self) -> Result<Option<T>> {
        self.take_pull("find_any", true)?.next().transpose()
    }

    /// Fold every element left to right starting from `identity`.
    ///
    /// Returns `identity` unchanged for an empty sequence.
    pub fn reduce<F>(&mut self, identity: T, combiner: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.fold_as("reduce", identity, combiner)
    }

    /// Like [`reduce`](Self::reduce) without an identity: `None` when empty.
    pub fn reduce_opt<F>(&mut self, mut combiner: F) -> Result<Option<T>>
    where
        F: FnMut(T, T) -> T,
    {
        let mut acc = None;
        for item in self.take_pull("reduce_opt", false)? {
            let value = item?;
            acc = Some(match acc {
                Some(prev) => combiner(prev, value),
                None => value,
            });
        }
        Ok(acc)
    }

    /// Fold into an accumulator of a different type.
    pub fn fold<A, F>(&mut self, init: A, f: F) -> Result<A>
    where
        F: FnMut(A, T) -> A,
    {
        self.fold_as("fold", init, f)
    }

    fn fold_as<A, F>(&mut self, op: &'static str, init: A, mut f: F) -> Result<A>
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = init;
        for item in self.take_pull(op, false)? {
            acc = f(acc, item?);
        }
        Ok(acc)
    }

    /// Number of elements.
    pub fn count(&mut self) -> Result<usize> {
        self.fold_as("count", 0, |n, _| n + 1)
    }

    /// Collect into any `FromIterator` container.
    pub fn collect<C>(&mut self) -> Result<C>
    where
        C: FromIterator<T>,
    {
        self.take_pull("collect", false)?.collect()
    }

    /// Shorthand for `collect::<Vec<T>>()`.
    pub fn to_vec(&mut self) -> Result<Vec<T>> {
        self.collect()
    }

    pub fn sum<S>(&mut self) -> Result<S>
    where
        S: Sum<T>,
    {
        self.take_pull("sum", false)?.sum()
    }

    pub fn min(&mut self) -> Result<Option<T>>
    where
        T: Ord,
    {
        self.reduce_opt(std::cmp::min)
    }

    pub fn max(&mut self) -> Result<Option<T>>
    where
        T: Ord,
    {
        self.reduce_opt(std::cmp::max)
    }

    /// The element with the smallest key; the first one on ties.
    pub fn min_by_key<K, F>(&mut self, mut key: F) -> Result<Option<T>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut best: Option<(K, T)> = None;
        for item in self.take_pull("min_by_key", false)? {
            let value = item?;
            let k = key(&value);
            if best.as_ref().is_none_or(|(bk, _)| k < *bk) {
                best = Some((k, value));
            }
        }
        Ok(best.map(|(_, v)| v))
    }

    /// The element with the largest key; the last one on ties.
    pub fn max_by_key<K, F>(&mut self, mut key: F) -> Result<Option<T>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut best: Option<(K, T)> = None;
        for item in self.take_pull("max_by_key", false)? {
            let value = item?;
            let k = key(&value);
            if best.as_ref().is_none_or(|(bk, _)| k >= *bk) {
                best = Some((k, value));
            }
        }
        Ok(best.map(|(_, v)| v))
    }
}
