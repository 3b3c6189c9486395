//! JSON Lines record source.
//!
//! Each non-blank line is one JSON document deserialized into `T` when it is
//! pulled. A line that does not parse is reported as
//! [`SeqError::SourceRead`] naming `path:line`.

use crate::error::{Result, SeqError};
use crate::io::lines::open_line_source;
use crate::sequence::LazySeq;
use crate::stage::SourceKind;
use serde::de::DeserializeOwned;
use std::io;
use std::path::Path;

/// Lazily read a JSONL file into typed records.
///
/// ```ignore
/// use lazyseq::{read_jsonl, Record};
///
/// let adults = read_jsonl::<Record>("people.jsonl")?
///     .filter(|r| r.age() >= 18)
///     .count()?;
/// ```
///
/// # Errors
/// [`SeqError::SourceRead`] if the file cannot be opened.
pub fn read_jsonl<T>(path: impl AsRef<Path>) -> Result<LazySeq<'static, T>>
where
    T: DeserializeOwned + 'static,
{
    let mut source = open_line_source(path.as_ref())?;
    let records = std::iter::from_fn(move || {
        loop {
            let line = match source.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(serde_json::from_str::<T>(&line).map_err(|e| {
                SeqError::source_read(
                    format!("{}:{}", source.name(), source.line_no()),
                    io::Error::new(io::ErrorKind::InvalidData, e),
                )
            }));
        }
    });
    Ok(LazySeq::from_pull(SourceKind::Jsonl, Box::new(records), true))
}
