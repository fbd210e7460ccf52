//! Sort fixture generator.
//!
//! Produces a case directory for sorting exercises: `input.txt` holds a
//! random sample of integers in draw order and `expected.txt` holds the same
//! values sorted.
//!
//! - **[`core`]**: Pure logic (sampling, list format, invariants). No I/O.
//! - **[`io`]**: Artifact paths and file access.
//!
//! [`generate`] and [`verify`] coordinate the two to implement CLI commands.

pub mod config;
pub mod core;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod verify;
