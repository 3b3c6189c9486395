//! Descriptions of the production rule and pending transformations of a sequence.
//!
//! A [`Stage`] does not execute anything. The executable part of a sequence is
//! a chain of boxed iterators; stages only record *what* was chained so the
//! [`planner`](crate::planner) can explain a sequence and tell whether it is
//! bounded.

use std::fmt::{Display, Formatter, Result as FormatResult};

/// Where the elements of a sequence come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Empty,
    Values,
    Iter,
    Generate,
    Iterate,
    IterateWhile,
    Random,
    Characters,
    Split,
    Lines,
    Jsonl,
    Builder,
}

impl SourceKind {
    /// Sources that never run dry on their own.
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Generate | Self::Iterate | Self::Random)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Values => "values",
            Self::Iter => "iterator",
            Self::Generate => "generate",
            Self::Iterate => "iterate",
            Self::IterateWhile => "iterate-while",
            Self::Random => "random",
            Self::Characters => "characters",
            Self::Split => "regex-split",
            Self::Lines => "lines",
            Self::Jsonl => "jsonl",
            Self::Builder => "builder",
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(self.name())
    }
}

/// One link of a sequence plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Root of every plan.
    Source {
        kind: SourceKind,
        /// Upper bound on element count, when the source knows it.
        len_hint: Option<usize>,
        /// `false` when the source may produce elements forever.
        bounded: bool,
    },
    Map,
    Filter,
    Peek,
    FlatMap,
    Limit(usize),
    Skip(usize),
    TakeWhile,
    DropWhile,
    Distinct,
    /// Logging stage added by [`debug_inspect`](crate::sequence::LazySeq::debug_inspect).
    Inspect(String),
}

impl Stage {
    /// `true` for stages that cap the element count regardless of the source.
    pub fn bounds_output(&self) -> bool {
        matches!(self, Self::Limit(_) | Self::TakeWhile)
    }

    /// `true` for stages that may drop elements.
    pub fn is_selective(&self) -> bool {
        matches!(
            self,
            Self::Filter | Self::Limit(_) | Self::Skip(_) | Self::TakeWhile | Self::DropWhile | Self::Distinct
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Source { .. } => "source",
            Self::Map => "map",
            Self::Filter => "filter",
            Self::Peek => "peek",
            Self::FlatMap => "flat_map",
            Self::Limit(_) => "limit",
            Self::Skip(_) => "skip",
            Self::TakeWhile => "take_while",
            Self::DropWhile => "drop_while",
            Self::Distinct => "distinct",
            Self::Inspect(_) => "inspect",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Self::Source { kind, len_hint, bounded } => {
                write!(f, "source({kind}")?;
                match (len_hint, bounded) {
                    (Some(n), _) => write!(f, ", <= {n} elements)"),
                    (None, true) => write!(f, ", finite)"),
                    (None, false) => write!(f, ", unbounded)"),
                }
            }
            Self::Limit(n) => write!(f, "limit({n})"),
            Self::Skip(n) => write!(f, "skip({n})"),
            Self::Inspect(label) => write!(f, "inspect({label})"),
            other => f.write_str(other.name()),
        }
    }
}
