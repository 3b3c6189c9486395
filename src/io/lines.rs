//! Lazy line sources over files and buffered readers.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is not part
//! of the line. A final line without terminator is still a line.
//!
//! The reader is owned by the sequence's pull chain and released as soon as
//! it can no longer produce lines:
//! - at end of input, before the terminal operation returns;
//! - on the first read or decoding error, which is yielded once and ends
//!   the source;
//! - when the sequence (or the terminal operation holding the chain) is
//!   dropped before exhaustion, e.g. after a short-circuit.

use crate::error::{Result, SeqError};
use crate::io::compression::auto_detect_reader;
use crate::sequence::LazySeq;
use crate::stage::SourceKind;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// The lines of the text file at `path`, without line terminators.
///
/// The file is opened immediately; its lines are read as they are pulled.
/// Compressed files are decompressed transparently (see
/// [`compression`](crate::io::compression)).
///
/// # Errors
/// [`SeqError::SourceRead`] if the file cannot be opened. Read failures and
/// invalid UTF-8 later in the file surface from the terminal operation.
pub fn lines(path: impl AsRef<Path>) -> Result<LazySeq<'static, String>> {
    let source = open_line_source(path.as_ref())?;
    Ok(LazySeq::from_pull(SourceKind::Lines, Box::new(source), true))
}

/// The lines of an already opened reader. `name` identifies the source in
/// errors and logs.
pub fn lines_from_reader<'a, R>(name: impl Into<String>, reader: R) -> LazySeq<'a, String>
where
    R: BufRead + 'a,
{
    let source = LineSource::new(name.into(), reader);
    LazySeq::from_pull(SourceKind::Lines, Box::new(source), true)
}

pub(crate) fn open_line_source(path: &Path) -> Result<LineSource<BufReader<Box<dyn Read>>>> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| SeqError::source_read(&name, e))?;
    let reader = auto_detect_reader(file, path).map_err(|e| SeqError::source_read(&name, e))?;
    Ok(LineSource::new(name, BufReader::new(reader)))
}

/// One `Result<String>` per line. Owns the reader until it is released.
pub(crate) struct LineSource<R> {
    name: String,
    reader: Option<R>,
    line_no: usize,
    /// The previous line ended at `\r`; a `\n` right after it belongs to it.
    skip_lf: bool,
}

impl<R: BufRead> LineSource<R> {
    fn new(name: String, reader: R) -> Self {
        debug!(source = %name, "line source opened");
        Self {
            name,
            reader: Some(reader),
            line_no: 0,
            skip_lf: false,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn line_no(&self) -> usize {
        self.line_no
    }

    fn release(&mut self, why: &'static str) {
        if self.reader.take().is_some() {
            debug!(source = %self.name, lines = self.line_no, why, "line source released");
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let read = read_raw_line(reader, &mut self.skip_lf).and_then(|raw| {
            raw.map(|bytes| {
                String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            })
            .transpose()
        });
        match read {
            Ok(None) => {
                self.release("exhausted");
                None
            }
            Ok(Some(line)) => {
                self.line_no += 1;
                Some(Ok(line))
            }
            Err(e) => {
                let err = SeqError::source_read(format!("{}:{}", self.name, self.line_no + 1), e);
                self.release("read error");
                Some(Err(err))
            }
        }
    }
}

/// Read up to the next `\n`, `\r` or `\r\n`. `None` at end of input.
fn read_raw_line<R: BufRead>(reader: &mut R, skip_lf: &mut bool) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    let mut read_any = false;
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            return Ok(read_any.then_some(line));
        }
        if std::mem::take(skip_lf) && buf[0] == b'\n' {
            reader.consume(1);
            continue;
        }
        read_any = true;
        match buf.iter().position(|b| matches!(b, b'\n' | b'\r')) {
            Some(end) => {
                *skip_lf = buf[end] == b'\r';
                line.extend_from_slice(&buf[..end]);
                reader.consume(end + 1);
                return Ok(Some(line));
            }
            None => {
                let len = buf.len();
                line.extend_from_slice(buf);
                reader.consume(len);
            }
        }
    }
}

impl<R> Drop for LineSource<R> {
    fn drop(&mut self) {
        if self.reader.take().is_some() {
            debug!(source = %self.name, lines = self.line_no, "line source abandoned");
        }
    }
}
