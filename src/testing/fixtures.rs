//! Pre-built test data and I/O fixtures.

use crate::record::Record;
use anyhow::{Context, Result};
use std::io::{self, Cursor, Read, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::NamedTempFile;

/// Bob/30, Jim/19, Carol/60, in that order.
///
/// # Example
///
/// ```
/// use lazyseq::testing::sample_records;
///
/// let people = sample_records();
/// assert_eq!(people[0].name(), "Bob");
/// ```
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Bob", 30),
        Record::new("Jim", 19),
        Record::new("Carol", 60),
    ]
}

/// A sentence to split into words.
#[must_use]
pub fn sample_book() -> &'static str {
    "Here is a string of words that can be considered to be like a book"
}

/// Write `lines` (each followed by `\n`) to a fresh temporary file.
///
/// The file is deleted when the returned handle is dropped.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_temp_lines<S: AsRef<str>>(lines: &[S]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("create temp file")?;
    for line in lines {
        writeln!(file, "{}", line.as_ref()).context("write temp line")?;
    }
    file.flush().context("flush temp file")?;
    Ok(file)
}

/// Shared flag flipped when a [`ProbeReader`] is dropped.
#[derive(Clone, Debug, Default)]
pub struct ReleaseFlag(Arc<AtomicBool>);

impl ReleaseFlag {
    pub fn is_released(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// An in-memory reader that records when it is dropped, for checking that
/// sources release their handles. Optionally fails after a number of bytes.
pub struct ProbeReader {
    inner: Cursor<Vec<u8>>,
    fail_after: Option<u64>,
    released: ReleaseFlag,
}

impl ProbeReader {
    /// A reader over `text` and the flag that reports its release.
    pub fn new(text: &str) -> (Self, ReleaseFlag) {
        let released = ReleaseFlag::default();
        let reader = Self {
            inner: Cursor::new(text.as_bytes().to_vec()),
            fail_after: None,
            released: released.clone(),
        };
        (reader, released)
    }

    /// Make reads fail once `bytes` bytes have been delivered.
    #[must_use]
    pub fn failing_after(mut self, bytes: u64) -> Self {
        self.fail_after = Some(bytes);
        self
    }
}

impl Read for ProbeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(limit) = self.fail_after else {
            return self.inner.read(buf);
        };
        let pos = self.inner.position();
        if pos >= limit {
            return Err(io::Error::other("probe reader failure"));
        }
        let allowed = usize::try_from(limit - pos).unwrap_or(usize::MAX).min(buf.len());
        self.inner.read(&mut buf[..allowed])
    }
}

impl Drop for ProbeReader {
    fn drop(&mut self) {
        self.released.0.store(true, Ordering::SeqCst);
    }
}
