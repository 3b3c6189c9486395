//! The [`LazySeq`] type and its core intermediate operations.
//!
//! A `LazySeq<'a, T>` owns a boxed pull chain (`Iterator<Item = Result<T>>`)
//! and the [`Plan`] describing it. Intermediate operations take the sequence
//! by value and wrap the chain in one more adapter; nothing is pulled until a
//! terminal operation runs. Terminal operations take `&mut self`, move the
//! chain out and leave the view closed, so a second terminal call reports
//! [`SeqError::SequenceClosed`] instead of silently yielding nothing.
//!
//! Items are `Result<T>` because sources such as file lines can fail halfway.
//! Transform closures only ever see `Ok` values; errors travel down the chain
//! untouched and end the terminal operation that meets them.

use crate::error::{Result, SeqError};
use crate::planner::{Explanation, Plan};
use crate::seq_id::SeqId;
use crate::stage::{SourceKind, Stage};
use std::fmt::{Debug, Formatter, Result as FormatResult};
use tracing::{debug, trace, warn};

/// The type-erased pull chain behind a sequence.
pub(crate) type Pull<'a, T> = Box<dyn Iterator<Item = Result<T>> + 'a>;

enum State<'a, T> {
    Open(Pull<'a, T>),
    Closed,
}

/// A lazy, single-use, ordered sequence of `T`.
///
/// The lifetime `'a` covers anything the production rule or the stage closures
/// borrow, e.g. the text given to [`chars`](crate::chars).
///
/// # Infinite sources
///
/// Sequences built with [`generate`](crate::generate), [`iterate`](crate::iterate)
/// or the random sources never end on their own. Consuming them with a terminal
/// operation that does not short-circuit (`for_each`, `reduce`, `count`, ...)
/// without a prior [`limit`](LazySeq::limit) or [`take_while`](LazySeq::take_while)
/// never returns. That is a caller error: the sequence logs a warning but does
/// not add a bound of its own.
pub struct LazySeq<'a, T> {
    pub(crate) id: SeqId,
    pub(crate) plan: Plan,
    state: State<'a, T>,
}

impl<'a, T: 'a> LazySeq<'a, T> {
    /// Root a new sequence over a fallible pull chain.
    pub(crate) fn from_pull(kind: SourceKind, pull: Pull<'a, T>, bounded: bool) -> Self {
        let len_hint = if bounded { pull.size_hint().1 } else { None };
        let id = SeqId::next();
        trace!(seq = %id, source = %kind, "sequence created");
        Self {
            id,
            plan: Plan::source(kind, len_hint, bounded),
            state: State::Open(pull),
        }
    }

    /// Root a new sequence over an infallible iterator.
    pub(crate) fn from_source<I>(kind: SourceKind, iter: I, bounded: bool) -> Self
    where
        I: Iterator<Item = T> + 'a,
    {
        Self::from_pull(kind, Box::new(iter.map(Ok)), bounded)
    }

    /// Identifier of this view.
    pub fn id(&self) -> SeqId {
        self.id
    }

    /// The plan this view would execute.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Shorthand for `self.plan().explain()`.
    #[must_use]
    pub fn explain(&self) -> Explanation {
        self.plan.explain()
    }

    /// Shorthand for `self.plan().is_bounded()`.
    pub fn is_bounded(&self) -> bool {
        self.plan.is_bounded()
    }

    /// `true` once a terminal operation has consumed this view.
    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    /// Append a stage. A closed view stays closed; its plan still grows so it
    /// can be explained.
    pub(crate) fn chain<O, F>(self, stage: Stage, wrap: F) -> LazySeq<'a, O>
    where
        O: 'a,
        F: FnOnce(Pull<'a, T>) -> Pull<'a, O>,
    {
        let LazySeq {
            id: parent,
            mut plan,
            state,
        } = self;
        let id = SeqId::next();
        trace!(seq = %id, %parent, %stage, "stage appended");
        plan.push(stage);
        let state = match state {
            State::Open(pull) => State::Open(wrap(pull)),
            State::Closed => State::Closed,
        };
        LazySeq { id, plan, state }
    }

    /// Move the pull chain out for a terminal operation, closing this view.
    ///
    /// `short_circuit` tells whether `op` may stop early; full pulls over an
    /// unbounded plan are logged since they never return.
    pub(crate) fn take_pull(&mut self, op: &'static str, short_circuit: bool) -> Result<Pull<'a, T>> {
        match std::mem::replace(&mut self.state, State::Closed) {
            State::Open(pull) => {
                if !short_circuit && !self.plan.is_bounded() {
                    warn!(seq = %self.id, op, "full pull over a sequence that may not end");
                }
                debug!(seq = %self.id, op, "terminal operation started");
                Ok(pull)
            }
            State::Closed => {
                warn!(seq = %self.id, op, "sequence reused after consumption");
                Err(SeqError::SequenceClosed { id: self.id, op })
            }
        }
    }

    /// Apply `f` to each element.
    pub fn map<O, F>(self, mut f: F) -> LazySeq<'a, O>
    where
        O: 'a,
        F: FnMut(T) -> O + 'a,
    {
        self.chain(Stage::Map, move |pull| {
            Box::new(pull.map(move |item| item.map(&mut f)))
        })
    }

    /// Keep elements for which `pred` holds, in their original order.
    pub fn filter<P>(self, mut pred: P) -> LazySeq<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(Stage::Filter, move |pull| {
            Box::new(pull.filter(move |item| match item {
                Ok(value) => pred(value),
                Err(_) => true,
            }))
        })
    }

    /// Call `hook` on each element at the moment it is pulled through this stage.
    ///
    /// For observation only. Elements a short-circuiting terminal never pulls
    /// never reach the hook.
    pub fn peek<F>(self, mut hook: F) -> LazySeq<'a, T>
    where
        F: FnMut(&T) + 'a,
    {
        self.chain(Stage::Peek, move |pull| {
            Box::new(pull.inspect(move |item| {
                if let Ok(value) = item {
                    hook(value);
                }
            }))
        })
    }
}

impl<T> Debug for LazySeq<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.debug_struct("LazySeq")
            .field("id", &self.id)
            .field("plan", &self.plan)
            .field("closed", &matches!(self.state, State::Closed))
            .finish()
    }
}

/// Pull elements one by one outside a terminal operation.
///
/// Iterating a consumed view yields exactly one `Err(SequenceClosed)`.
impl<'a, T: 'a> IntoIterator for LazySeq<'a, T> {
    type Item = Result<T>;
    type IntoIter = Pull<'a, T>;

    fn into_iter(mut self) -> Self::IntoIter {
        match self.take_pull("into_iter", true) {
            Ok(pull) => pull,
            Err(err) => Box::new(std::iter::once(Err(err))),
        }
    }
}
