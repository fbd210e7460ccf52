//! Artifact paths and file access.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::FixtureConfig;
use crate::core::list_format::{parse_list, render_list};

/// Locations of the two artifacts inside a case directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePaths {
    pub input_path: PathBuf,
    pub expected_path: PathBuf,
}

impl FixturePaths {
    pub fn new(dir: &Path, cfg: &FixtureConfig) -> Self {
        Self {
            input_path: dir.join(&cfg.input_file),
            expected_path: dir.join(&cfg.expected_file),
        }
    }
}

/// Create or truncate `path` and write `values` in list format.
///
/// The file is flushed and closed before returning.
pub fn write_sequence(path: &Path, values: &[i64]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_list(values).as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Read and parse a list-format artifact.
pub fn read_sequence(path: &Path) -> Result<Vec<i64>> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_list(&contents).with_context(|| format!("parse {}", path.display()))
}
