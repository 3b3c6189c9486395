//! Constructors for in-memory and generated sequences.
//!
//! None of these pull anything: values are moved into the sequence, and
//! generators or step functions are first called by a terminal operation.
//!
//! ### Overview
//! - [`empty`], [`once`], [`of`], [`from_vec`], [`from_iter`] -- finite sources.
//! - [`generate`], [`iterate`] -- infinite sources; bound them with
//!   [`limit`](LazySeq::limit) before a full pull.
//! - [`iterate_while`] -- iterate until a predicate fails.
//! - [`random_ints`], [`random_ints_seeded`], [`random_ints_in`] -- infinite
//!   random integer sources.
//! - [`chars`] -- the characters of a string.
//!
//! ### Example
//! ```ignore
//! use lazyseq::*;
//!
//! let plus = iterate("+".to_string(), |s| format!("{s}+"))
//!     .limit(3)
//!     .to_vec()?;
//! assert_eq!(plus, vec!["+", "++", "+++"]);
//! ```

use crate::error::{Result, SeqError};
use crate::sequence::LazySeq;
use crate::stage::SourceKind;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// A sequence with no elements.
pub fn empty<'a, T: 'a>() -> LazySeq<'a, T> {
    LazySeq::from_source(SourceKind::Empty, std::iter::empty(), true)
}

/// A sequence of exactly one element.
pub fn once<'a, T: 'a>(value: T) -> LazySeq<'a, T> {
    LazySeq::from_source(SourceKind::Values, std::iter::once(value), true)
}

/// A finite sequence of the given values, in order.
///
/// ```ignore
/// let words = of(["one", "two", "three"]);
/// ```
pub fn of<'a, T, I>(values: I) -> LazySeq<'a, T>
where
    T: 'a,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    LazySeq::from_source(SourceKind::Values, values.into_iter(), true)
}

/// A finite sequence over an owned vector.
pub fn from_vec<'a, T: 'a>(data: Vec<T>) -> LazySeq<'a, T> {
    LazySeq::from_source(SourceKind::Values, data.into_iter(), true)
}

/// A sequence over any iterator.
///
/// The iterator is pulled lazily. It counts as unbounded when its
/// `size_hint` has no upper bound (e.g. `0..` or `repeat`).
pub fn from_iter<'a, T, I>(iter: I) -> LazySeq<'a, T>
where
    T: 'a,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    let iter = iter.into_iter();
    let bounded = iter.size_hint().1.is_some();
    LazySeq::from_source(SourceKind::Iter, iter, bounded)
}

/// An infinite sequence calling `supplier` once per pulled element.
///
/// ```ignore
/// let ones = generate(|| "one").limit(3).to_vec()?;
/// assert_eq!(ones, vec!["one"; 3]);
/// ```
pub fn generate<'a, T, F>(supplier: F) -> LazySeq<'a, T>
where
    T: 'a,
    F: FnMut() -> T + 'a,
{
    LazySeq::from_source(SourceKind::Generate, std::iter::repeat_with(supplier), false)
}

/// An infinite sequence `seed, step(seed), step(step(seed)), ...`.
///
/// `step` runs only when the next element is pulled, so `limit(n)` calls it
/// `n - 1` times.
pub fn iterate<'a, T, F>(seed: T, step: F) -> LazySeq<'a, T>
where
    T: Clone + 'a,
    F: FnMut(&T) -> T + 'a,
{
    LazySeq::from_source(SourceKind::Iterate, Iterate::new(seed, step), false)
}

/// Like [`iterate`], stopping before the first element for which `has_next`
/// is `false`. The seed is tested too.
pub fn iterate_while<'a, T, P, F>(seed: T, mut has_next: P, step: F) -> LazySeq<'a, T>
where
    T: Clone + 'a,
    P: FnMut(&T) -> bool + 'a,
    F: FnMut(&T) -> T + 'a,
{
    let iter = Iterate::new(seed, step).take_while(move |v| has_next(v));
    LazySeq::from_source(SourceKind::IterateWhile, iter, true)
}

/// An infinite sequence of random `i32` from the thread-local generator.
pub fn random_ints<'a>() -> LazySeq<'a, i32> {
    let mut rng = rand::thread_rng();
    LazySeq::from_source(SourceKind::Random, std::iter::repeat_with(move || rng.r#gen::<i32>()), false)
}

/// Like [`random_ints`] with a seeded generator, for reproducible runs.
pub fn random_ints_seeded<'a>(seed: u64) -> LazySeq<'a, i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    LazySeq::from_source(SourceKind::Random, std::iter::repeat_with(move || rng.r#gen::<i32>()), false)
}

/// An infinite sequence of random `i32` in `range` (`origin` inclusive,
/// `bound` exclusive).
///
/// # Errors
/// [`SeqError::EmptyRange`] if `range` holds no value.
pub fn random_ints_in<'a>(range: Range<i32>) -> Result<LazySeq<'a, i32>> {
    if range.is_empty() {
        return Err(SeqError::EmptyRange {
            start: range.start,
            end: range.end,
        });
    }
    let dist = Uniform::from(range);
    let mut rng = rand::thread_rng();
    Ok(LazySeq::from_source(
        SourceKind::Random,
        std::iter::repeat_with(move || rng.sample(dist)),
        false,
    ))
}

/// The characters of `text`, in order.
///
/// Elements are Unicode scalar values, so a character outside the Basic
/// Multilingual Plane is one element.
pub fn chars(text: &str) -> LazySeq<'_, char> {
    LazySeq::from_source(SourceKind::Characters, text.chars(), true)
}

/// Lazy `seed, step(seed), ...` holding only the last yielded value.
struct Iterate<T, F> {
    seed: Option<T>,
    last: Option<T>,
    step: F,
}

impl<T, F> Iterate<T, F> {
    fn new(seed: T, step: F) -> Self {
        Self {
            seed: Some(seed),
            last: None,
            step,
        }
    }
}

impl<T: Clone, F: FnMut(&T) -> T> Iterator for Iterate<T, F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = match self.last.take() {
            Some(prev) => (self.step)(&prev),
            None => self.seed.take()?,
        };
        self.last = Some(value.clone());
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
