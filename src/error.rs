//! Error type shared by every fallible operation in the crate.

use crate::seq_id::SeqId;
use std::io;
use thiserror::Error;

/// Errors surfaced by sequence construction and terminal operations.
#[derive(Debug, Error)]
pub enum SeqError {
    /// An external text source could not be opened, read or decoded.
    ///
    /// Returned when the source is opened, or from the terminal operation that
    /// pulled the failing line. The source handle is already released when the
    /// caller sees this error.
    #[error("failed to read source `{name}`")]
    SourceRead {
        name: String,
        #[source]
        source: io::Error,
    },

    /// A terminal operation was attempted on a consumed sequence, or a builder
    /// was used after `build()`.
    #[error("{id} is already consumed; `{op}` is not allowed")]
    SequenceClosed { id: SeqId, op: &'static str },

    /// The separator pattern given to [`split`](crate::split) does not compile.
    #[error("invalid separator pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A random source was asked for values from an empty range.
    #[error("empty range {start}..{end}")]
    EmptyRange { start: i32, end: i32 },
}

impl SeqError {
    pub(crate) fn source_read(name: impl Into<String>, source: io::Error) -> Self {
        Self::SourceRead {
            name: name.into(),
            source,
        }
    }

    /// `true` for [`SeqError::SequenceClosed`].
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::SequenceClosed { .. })
    }

    /// `true` for [`SeqError::SourceRead`].
    pub fn is_source_read(&self) -> bool {
        matches!(self, Self::SourceRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, SeqError>;
