//! I/O helpers for fixgen commands.

pub mod artifact;
