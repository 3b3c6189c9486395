//! Debug stages for inspecting sequences during test execution.

use crate::sequence::LazySeq;
use crate::stage::Stage;
use std::fmt::Debug;
use tracing::debug;

/// Elements logged per inspect stage before it goes quiet.
const LOGGED_ELEMENTS: usize = 10;

impl<'a, T: Debug + 'a> LazySeq<'a, T> {
    /// Log elements under `label` as they are pulled through this point.
    ///
    /// Only the first ten elements are logged, at `debug` level. Elements and
    /// order are unchanged.
    ///
    /// ```no_run
    /// use lazyseq::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let doubled = of([1, 2, 3])
    ///     .debug_inspect("after source")
    ///     .map(|x| x * 2)
    ///     .debug_inspect("after map")
    ///     .to_vec()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn debug_inspect(self, label: impl Into<String>) -> LazySeq<'a, T> {
        let label = label.into();
        let stage = Stage::Inspect(label.clone());
        self.chain(stage, move |pull| {
            let mut seen = 0usize;
            Box::new(pull.inspect(move |item| {
                if seen < LOGGED_ELEMENTS {
                    match item {
                        Ok(value) => debug!(label = %label, index = seen, "{value:?}"),
                        Err(err) => debug!(label = %label, index = seen, error = %err, "read error"),
                    }
                } else if seen == LOGGED_ELEMENTS {
                    debug!(label = %label, "further elements not logged");
                }
                seen = seen.saturating_add(1);
            }))
        })
    }
}
