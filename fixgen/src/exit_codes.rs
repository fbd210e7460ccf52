//! Stable exit codes for fixgen CLI commands.

/// Command succeeded (artifacts written, or fixture verified).
pub const OK: i32 = 0;
/// Command failed due to I/O, parse, or configuration errors.
pub const INVALID: i32 = 1;
/// `fixgen verify` read the fixture but it violates a sort invariant.
pub const MISMATCH: i32 = 2;
