//! # lazyseq
//!
//! **Lazy, single-use, pull-based sequences** for Rust. Build a sequence from
//! values, generators, step functions, random sources, characters, regex
//! splits, file lines or a builder; chain transformations; then drive it with
//! exactly one terminal operation.
//!
//! ## Key Features
//!
//! - **Lazy** - chaining `map`/`filter`/`peek` evaluates nothing; the terminal
//!   operation pulls one element at a time through every stage
//! - **Single use** - a consumed sequence reports
//!   [`SeqError::SequenceClosed`] instead of silently yielding nothing
//! - **Short-circuiting** - `any_match`, `all_match`, `none_match`,
//!   `find_first` and `find_any` stop pulling once the answer is known
//! - **Scoped I/O** - file line sources release their handle on exhaustion,
//!   error, or drop, and report failures as [`SeqError::SourceRead`]
//! - **Explainable** - every sequence carries a [`Plan`] that can be
//!   [`explain`](LazySeq::explain)ed
//!
//! ## Quick Start
//!
//! ```ignore
//! use lazyseq::*;
//!
//! # fn main() -> lazyseq::Result<()> {
//! let people = vec![Record::new("Bob", 30), Record::new("Jim", 19), Record::new("Carol", 60)];
//!
//! let total_age = from_vec(people)
//!     .map(|p| p.age())
//!     .reduce(0, |a, b| a + b)?;
//! assert_eq!(total_age, 109);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Construction
//!
//! - [`empty`], [`once`], [`of`], [`from_vec`], [`from_iter`], [`seq!`] - finite values
//! - [`generate`], [`iterate`], [`iterate_while`] - generated elements
//! - [`random_ints`], [`random_ints_seeded`], [`random_ints_in`] - random integers
//! - [`chars`] - characters of a string
//! - [`split`], [`split_regex`] - pieces between regex matches
//! - [`lines`], [`lines_from_reader`], `read_jsonl` - external text
//! - [`SeqBuilder`] - add elements one by one, then `build()`
//!
//! ### Intermediate operations
//!
//! [`map`](LazySeq::map), [`filter`](LazySeq::filter), [`peek`](LazySeq::peek),
//! [`limit`](LazySeq::limit), [`skip`](LazySeq::skip),
//! [`flat_map`](LazySeq::flat_map), [`take_while`](LazySeq::take_while),
//! [`drop_while`](LazySeq::drop_while), [`distinct`](LazySeq::distinct).
//! Each takes the sequence by value and returns a new view.
//!
//! ### Terminal operations
//!
//! [`for_each`](LazySeq::for_each), [`any_match`](LazySeq::any_match),
//! [`all_match`](LazySeq::all_match), [`none_match`](LazySeq::none_match),
//! [`find_first`](LazySeq::find_first), [`find_any`](LazySeq::find_any),
//! [`reduce`](LazySeq::reduce), [`fold`](LazySeq::fold),
//! [`count`](LazySeq::count), [`collect`](LazySeq::collect) and friends.
//! Each takes `&mut self` and closes the view.
//!
//! ### Infinite sources
//!
//! `generate`, `iterate` and the random sources never end. Bound them with
//! `limit` or `take_while` before any terminal operation that does not
//! short-circuit; the library logs a warning but never adds a bound itself.
//!
//! ## Execution Modes
//!
//! Stages always run on the calling thread. [`Runner`] can hand the pulled
//! elements to a rayon pool for `reduce` and `for_each`
//! ([`reduce_par`](LazySeq::reduce_par), [`for_each_par`](LazySeq::for_each_par)).
//!
//! ## Feature Flags
//!
//! - `io-jsonl` - JSON Lines record source (`read_jsonl`)
//! - `compression-gzip` - transparent gzip decompression for line sources
//!
//! ## Module Overview
//!
//! - [`sequence`] - the `LazySeq` type and its core stages
//! - [`helpers`] - constructors, extra stages and terminal operations
//! - [`builder`] - `SeqBuilder`
//! - [`io`] - file line sources, JSONL, decompression
//! - [`planner`] / [`stage`] - plan description and explanation
//! - [`runner`] - sequential and parallel terminal execution
//! - [`testing`] - assertions, fixtures and debug stages for tests

pub mod builder;
pub mod error;
pub mod helpers;
pub mod io;
pub mod planner;
pub mod record;
pub mod runner;
pub mod seq_id;
pub mod sequence;
pub mod stage;
pub mod testing;

pub use builder::SeqBuilder;
pub use error::{Result, SeqError};
pub use helpers::*;
pub use io::lines::{lines, lines_from_reader};
pub use planner::{Explanation, Plan};
pub use record::Record;
pub use runner::{ExecMode, Runner};
pub use seq_id::SeqId;
pub use sequence::LazySeq;
pub use stage::{SourceKind, Stage};

#[cfg(feature = "io-jsonl")]
pub use io::jsonl::read_jsonl;

/// Build a finite sequence from literal values: `seq![1, 2, 3]`.
#[macro_export]
macro_rules! seq {
    () => {
        $crate::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::of([$($value),+])
    };
}
