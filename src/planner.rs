//! Sequence plans and their explanation.
//!
//! A [`Plan`] is the linear description of a sequence: one [`Stage::Source`]
//! followed by the intermediate stages in the order they were chained. Plans
//! are cloned into each new view, so every view can explain itself without
//! touching the underlying iterator.
//!
//! The planner does not rewrite anything. Its job is to report:
//!
//! 1. **Steps** -- the source and each stage, in pull order.
//! 2. **Boundedness** -- whether a non-short-circuiting terminal operation is
//!    known to finish. Infinite sources (`generate`, `iterate`, random) and
//!    `flat_map` are unbounded unless a `limit` or `take_while` stage follows
//!    them.
//! 3. **Size hint** -- an upper bound on output size when it can be derived
//!    from the source and the `limit` stages.

use crate::stage::{SourceKind, Stage};
use std::fmt::{Display, Formatter, Result as FormatResult};

/// The production rule and pending transformations of a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    stages: Vec<Stage>,
}

impl Plan {
    pub(crate) fn source(kind: SourceKind, len_hint: Option<usize>, bounded: bool) -> Self {
        Self {
            stages: vec![Stage::Source {
                kind,
                len_hint,
                bounded,
            }],
        }
    }

    pub(crate) fn push(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    /// All stages, source first.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// The kind of the root source.
    pub fn source_kind(&self) -> Option<SourceKind> {
        match self.stages.first() {
            Some(Stage::Source { kind, .. }) => Some(*kind),
            _ => None,
        }
    }

    /// Whether a full (non-short-circuiting) pull of this plan is known to
    /// terminate, assuming finite sources are finite and `take_while`
    /// predicates eventually fail.
    ///
    /// `flat_map` may expand an element into an endless run, so only a
    /// bounding stage after the last `flat_map` counts.
    pub fn is_bounded(&self) -> bool {
        self.stages.iter().fold(false, |known, stage| match stage {
            Stage::Source { bounded, .. } => *bounded,
            Stage::FlatMap => false,
            other => known || other.bounds_output(),
        })
    }

    /// Upper bound on the number of elements this plan yields, if known.
    ///
    /// `flat_map` makes the bound unknown; `skip` lowers it; `limit` caps it.
    pub fn size_hint(&self) -> Option<usize> {
        let mut hint: Option<usize> = None;
        for stage in &self.stages {
            hint = match stage {
                Stage::Source { len_hint, .. } => *len_hint,
                Stage::Limit(n) => Some(hint.map_or(*n, |h| h.min(*n))),
                Stage::Skip(n) => hint.map(|h| h.saturating_sub(*n)),
                Stage::FlatMap => None,
                _ => hint,
            };
        }
        hint
    }

    /// Build a step-by-step explanation of this plan.
    #[must_use]
    pub fn explain(&self) -> Explanation {
        let steps = self
            .stages
            .iter()
            .enumerate()
            .map(|(index, stage)| ExplainStep {
                index,
                stage: stage.name(),
                description: describe(stage),
                selective: stage.is_selective(),
            })
            .collect();
        Explanation {
            steps,
            bounded: self.is_bounded(),
            size_hint: self.size_hint(),
        }
    }
}

fn describe(stage: &Stage) -> String {
    match stage {
        Stage::Source { kind, .. } if kind.is_infinite() => {
            format!("Pull from {kind} source (infinite)")
        }
        Stage::Source { kind, len_hint: Some(n), .. } => {
            format!("Pull from {kind} source (up to {n} elements)")
        }
        Stage::Source { kind, .. } => format!("Pull from {kind} source"),
        Stage::Map => "Transform each element".to_string(),
        Stage::Filter => "Keep elements matching a predicate".to_string(),
        Stage::Peek => "Observe each element as it passes".to_string(),
        Stage::FlatMap => "Expand each element into zero or more elements".to_string(),
        Stage::Limit(n) => format!("Stop after {n} elements"),
        Stage::Skip(n) => format!("Discard the first {n} elements"),
        Stage::TakeWhile => "Stop at the first element failing a predicate".to_string(),
        Stage::DropWhile => "Discard elements until a predicate fails".to_string(),
        Stage::Distinct => "Drop elements already seen".to_string(),
        Stage::Inspect(label) => format!("Log elements under `{label}`"),
    }
}

/// One step in an [`Explanation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainStep {
    /// Position in pull order (0 = source).
    pub index: usize,
    /// Short stage name, e.g. `"filter"`.
    pub stage: &'static str,
    /// Human-readable description.
    pub description: String,
    /// Whether the step may drop elements.
    pub selective: bool,
}

/// Detailed explanation of a sequence plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub steps: Vec<ExplainStep>,
    /// See [`Plan::is_bounded`].
    pub bounded: bool,
    /// See [`Plan::size_hint`].
    pub size_hint: Option<usize>,
}

impl Display for Explanation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "╔═══════════════════════════════════════════════╗")?;
        writeln!(f, "║          SEQUENCE PLAN EXPLANATION            ║")?;
        writeln!(f, "╚═══════════════════════════════════════════════╝")?;
        writeln!(
            f,
            "│ Bounded:      {:>10}",
            if self.bounded { "yes" } else { "NO" }
        )?;
        writeln!(
            f,
            "│ Size Hint:    {:>10}",
            self.size_hint
                .map_or_else(|| "Unknown".to_string(), |s| s.to_string())
        )?;
        writeln!(f, "│ Steps:        {:>10}", self.steps.len())?;
        writeln!(f, "└───────────────────────────────────────────────┘")?;
        for step in &self.steps {
            let marker = if step.selective { "▽" } else { "│" };
            writeln!(
                f,
                "  {marker} [{:>2}] {:<10} {}",
                step.index, step.stage, step.description
            )?;
        }
        if !self.bounded {
            writeln!(f)?;
            writeln!(
                f,
                "  ⚠ unbounded: a full pull may not finish without limit or take_while"
            )?;
        }
        Ok(())
    }
}
