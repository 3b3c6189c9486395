//! Splitting text on a separator pattern.
//!
//! Pieces are the substrings between matches, found one match at a time as
//! the sequence is pulled. Matching resumes where the previous match ended,
//! so an empty match right after a non-empty one still separates an empty
//! piece; after an empty match the search moves on by one character.
//!
//! The rules for empty pieces:
//!
//! - empty pieces between two matches are kept;
//! - trailing empty pieces are dropped;
//! - a leading empty piece is kept unless it comes from a zero-width match at
//!   the very start of the text;
//! - a text without any match, the empty text included, yields itself as the
//!   only piece.

use crate::error::{Result, SeqError};
use crate::sequence::LazySeq;
use crate::stage::SourceKind;
use regex::Regex;

/// Split `text` on every match of `pattern`.
///
/// ```ignore
/// let words = split("Here is a book", r"[^\p{L}]")?.to_vec()?;
/// assert_eq!(words, vec!["Here", "is", "a", "book"]);
/// ```
///
/// # Errors
/// [`SeqError::InvalidPattern`] if `pattern` does not compile.
pub fn split<'a>(text: &'a str, pattern: &str) -> Result<LazySeq<'a, &'a str>> {
    let regex = Regex::new(pattern).map_err(|source| SeqError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(split_regex(text, &regex))
}

/// Split `text` on every match of an already compiled `regex`.
pub fn split_regex<'a>(text: &'a str, regex: &Regex) -> LazySeq<'a, &'a str> {
    LazySeq::from_source(SourceKind::Split, SplitPieces::new(text, regex.clone()), true)
}

struct SplitPieces<'a> {
    regex: Regex,
    text: &'a str,
    /// Start of the next piece.
    current: usize,
    /// Where the next match search starts.
    search: usize,
    /// Whether any match has delimited a piece yet.
    matched: bool,
    /// Empty pieces seen but not yet yielded; released only when a non-empty
    /// piece follows them.
    pending_empty: usize,
    held: Option<&'a str>,
    done: bool,
}

impl<'a> SplitPieces<'a> {
    fn new(text: &'a str, regex: Regex) -> Self {
        Self {
            regex,
            text,
            current: 0,
            search: 0,
            matched: false,
            pending_empty: 0,
            held: None,
            done: false,
        }
    }

    fn char_after(&self, at: usize) -> usize {
        at + self.text[at..].chars().next().map_or(1, char::len_utf8)
    }

    /// Find the next non-empty piece, counting skipped empty ones.
    fn advance(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        while self.search <= self.text.len() {
            let Some(m) = self.regex.find_at(self.text, self.search) else {
                break;
            };
            self.search = if m.is_empty() { self.char_after(m.end()) } else { m.end() };
            if !self.matched && m.start() == 0 && m.is_empty() {
                // No leading empty piece from a zero-width match at the start.
                continue;
            }
            self.matched = true;

            let piece = &self.text[self.current..m.start()];
            self.current = m.end();
            if !piece.is_empty() {
                return Some(piece);
            }
            self.pending_empty += 1;
        }

        self.done = true;
        if !self.matched {
            return Some(self.text);
        }
        let tail = &self.text[self.current..];
        self.current = self.text.len();
        if tail.is_empty() {
            self.pending_empty = 0;
            None
        } else {
            Some(tail)
        }
    }
}

impl<'a> Iterator for SplitPieces<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.held.is_none() {
            self.held = self.advance();
        }
        if self.held.is_none() {
            return None;
        }
        if self.pending_empty > 0 {
            self.pending_empty -= 1;
            return Some("");
        }
        self.held.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.text.len() + 1))
    }
}
