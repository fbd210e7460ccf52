//! Deterministic, pure logic behind fixture generation and verification.
//!
//! Core modules do no I/O. Randomness enters only through an explicit seed,
//! so every function here is reproducible in tests.

pub mod invariants;
pub mod list_format;
pub mod sample;
