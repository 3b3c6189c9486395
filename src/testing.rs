//! Testing utilities for lazy sequences.
//!
//! This module provides helpers for writing idiomatic tests against
//! [`LazySeq`](crate::LazySeq) pipelines:
//!
//! - **Assertions**: compare what a sequence yields with expected values
//! - **Fixtures**: the sample records, sample text, temporary files, and a
//!   reader that reports when it is released
//! - **Debug utilities**: log elements as they are pulled
//! - **Tracing**: [`init_test_tracing`] routes logs through the test harness
//!
//! # Quick Start
//!
//! ```no_run
//! use lazyseq::*;
//! use lazyseq::testing::*;
//!
//! #[test]
//! fn adults_in_order() -> anyhow::Result<()> {
//!     let names = from_vec(sample_records())
//!         .filter(|r| r.age() > 20)
//!         .map(|r| r.name().to_string())
//!         .to_vec()?;
//!
//!     assert_collections_equal(&names, &["Bob".to_string(), "Carol".to_string()]);
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod debug;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;

use tracing_subscriber::{EnvFilter, fmt};

/// Install a tracing subscriber that writes through the test harness.
///
/// Honours `RUST_LOG` and defaults to `debug` for this crate. Safe to call
/// from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lazyseq=debug"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}
