//! Test helpers shared by unit and integration tests.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::FixtureConfig;

/// Default config with a smaller sample count.
pub fn small_config(count: usize) -> FixtureConfig {
    FixtureConfig {
        count,
        ..FixtureConfig::default()
    }
}

/// Write raw artifact contents into `dir` using the default file names.
pub fn write_case(dir: &Path, input: &str, expected: &str) -> Result<()> {
    let cfg = FixtureConfig::default();
    fs::write(dir.join(&cfg.input_file), input).context("write input fixture")?;
    fs::write(dir.join(&cfg.expected_file), expected).context("write expected fixture")?;
    Ok(())
}

/// Create a temp case directory holding the given artifacts.
pub fn temp_case(input: &str, expected: &str) -> Result<tempfile::TempDir> {
    let temp = tempfile::tempdir().context("create tempdir")?;
    write_case(temp.path(), input, expected)?;
    Ok(temp)
}
