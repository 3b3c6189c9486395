//! Incremental construction of a finite sequence.

use crate::error::{Result, SeqError};
use crate::seq_id::SeqId;
use crate::sequence::LazySeq;
use crate::stage::SourceKind;
use tracing::debug;

/// Collects elements one at a time, then freezes them into a [`LazySeq`].
///
/// The builder is single-use: after [`build`](Self::build) every call to
/// [`add`](Self::add), [`accept`](Self::accept) or `build` fails with
/// [`SeqError::SequenceClosed`].
///
/// # Example
///
/// ```ignore
/// use lazyseq::SeqBuilder;
///
/// let mut builder = SeqBuilder::new();
/// builder.add("one")?.add("two")?.add("three")?;
/// builder.accept("four")?;
///
/// let words = builder.build()?.to_vec()?;
/// assert_eq!(words, vec!["one", "two", "three", "four"]);
/// ```
pub struct SeqBuilder<T> {
    id: SeqId,
    buffer: Option<Vec<T>>,
}

impl<T> Default for SeqBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SeqBuilder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: SeqId::next(),
            buffer: Some(Vec::new()),
        }
    }

    fn open_buffer(&mut self, op: &'static str) -> Result<&mut Vec<T>> {
        self.buffer
            .as_mut()
            .ok_or(SeqError::SequenceClosed { id: self.id, op })
    }

    /// Append `value`; returns the builder so calls can be chained with `?`.
    pub fn add(&mut self, value: T) -> Result<&mut Self> {
        self.open_buffer("add")?.push(value);
        Ok(self)
    }

    /// Append `value` without returning the builder.
    pub fn accept(&mut self, value: T) -> Result<()> {
        self.open_buffer("accept")?.push(value);
        Ok(())
    }

    /// Number of elements added so far (0 once built).
    pub fn len(&self) -> usize {
        self.buffer.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_built(&self) -> bool {
        self.buffer.is_none()
    }
}

impl<T: 'static> SeqBuilder<T> {
    /// Freeze the elements added so far into a sequence.
    pub fn build(&mut self) -> Result<LazySeq<'static, T>> {
        let values = self
            .buffer
            .take()
            .ok_or(SeqError::SequenceClosed { id: self.id, op: "build" })?;
        debug!(builder = %self.id, len = values.len(), "builder sealed");
        Ok(LazySeq::from_source(SourceKind::Builder, values.into_iter(), true))
    }
}
