//! Lightweight unique identifier for a [`LazySeq`](crate::sequence::LazySeq) view.
//!
//! Every construction and every intermediate operation yields a new view with
//! a fresh `SeqId`. Ids show up in log fields and in
//! [`SeqError::SequenceClosed`](crate::SeqError::SequenceClosed), which makes it
//! easy to tell which view was reused.
//!
//! They're small, `Copy`, and hashable.

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Unique numeric identifier for a sequence view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct SeqId(u64);

impl SeqId {
    /// Allocate the next id (used internally by constructors and stages).
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Return the underlying numeric value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Display for SeqId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "seq#{}", self.0)
    }
}
