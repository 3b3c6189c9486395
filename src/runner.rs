//! Execution modes for the order-insensitive terminal operations.
//!
//! Pulling is always sequential: a sequence's stages run on the calling
//! thread, one element at a time. In [`ExecMode::Parallel`] the pulled
//! elements are then handed to a rayon pool, so only the *terminal* work
//! (the combiner of a reduction, the action of a `for_each`) runs
//! concurrently. Two consequences:
//!
//! - `reduce` needs an associative `combiner` and an `identity` that is a
//!   true identity for it; otherwise results differ between modes;
//! - `for_each` visits elements in no particular order.

use crate::error::Result;
use crate::sequence::LazySeq;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecMode {
    #[default]
    Sequential,
    /// `threads: None` uses one thread per logical CPU.
    Parallel { threads: Option<usize> },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Runner {
    pub mode: ExecMode,
}

impl Runner {
    pub fn sequential() -> Self {
        Self {
            mode: ExecMode::Sequential,
        }
    }

    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            mode: ExecMode::Parallel { threads },
        }
    }

    /// Reduce `seq` with `combiner`, starting from `identity`.
    pub fn reduce<'a, T, F>(&self, seq: &mut LazySeq<'a, T>, identity: T, combiner: F) -> Result<T>
    where
        T: Clone + Send + Sync + 'a,
        F: Fn(T, T) -> T + Send + Sync,
    {
        match self.mode {
            ExecMode::Sequential => seq.reduce(identity, combiner),
            ExecMode::Parallel { threads } => {
                let items = seq.to_vec()?;
                debug!(seq = %seq.id(), len = items.len(), "parallel reduce");
                Ok(install(threads, || {
                    items
                        .into_par_iter()
                        .reduce(|| identity.clone(), |a, b| combiner(a, b))
                }))
            }
        }
    }

    /// Call `action` on every element of `seq`.
    pub fn for_each<'a, T, F>(&self, seq: &mut LazySeq<'a, T>, action: F) -> Result<()>
    where
        T: Send + 'a,
        F: Fn(T) + Send + Sync,
    {
        match self.mode {
            ExecMode::Sequential => seq.for_each(action),
            ExecMode::Parallel { threads } => {
                let items = seq.to_vec()?;
                debug!(seq = %seq.id(), len = items.len(), "parallel for_each");
                install(threads, || items.into_par_iter().for_each(action));
                Ok(())
            }
        }
    }
}

fn build_pool(threads: Option<usize>) -> Option<ThreadPool> {
    let threads = threads.unwrap_or_else(num_cpus::get).max(1);
    match ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => Some(pool),
        Err(err) => {
            warn!(threads, error = %err, "falling back to the global rayon pool");
            None
        }
    }
}

fn install<R: Send>(threads: Option<usize>, op: impl FnOnce() -> R + Send) -> R {
    match build_pool(threads) {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

impl<'a, T: 'a> LazySeq<'a, T> {
    /// [`Runner::reduce`] on a default-sized parallel pool.
    pub fn reduce_par<F>(&mut self, identity: T, combiner: F) -> Result<T>
    where
        T: Clone + Send + Sync,
        F: Fn(T, T) -> T + Send + Sync,
    {
        Runner::parallel(None).reduce(self, identity, combiner)
    }

    /// [`Runner::for_each`] on a default-sized parallel pool. No order guarantee.
    pub fn for_each_par<F>(&mut self, action: F) -> Result<()>
    where
        T: Send,
        F: Fn(T) + Send + Sync,
    {
        Runner::parallel(None).for_each(self, action)
    }
}
