//! Fixture verification for `fixgen verify`.
//!
//! Reads a case directory back, re-sorts the input and compares it with the
//! expected artifact.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::FixtureConfig;
use crate::core::invariants::validate_with_sorted;
use crate::core::sample::sorted_copy;
use crate::io::artifact::{FixturePaths, read_sequence};

/// Number of leading elements shown before and after sorting.
const HEAD_LEN: usize = 5;

/// Outcome of verifying one case directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub input_len: usize,
    pub expected_len: usize,
    pub valid: bool,
    pub errors: Vec<String>,
    /// Leading input values in draw order.
    pub head_before: Vec<i64>,
    /// Leading values of the re-sorted input.
    pub head_after: Vec<i64>,
    /// Wall-clock time spent sorting the input.
    pub sort_micros: u64,
}

impl VerifyReport {
    /// Human-readable report lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "verify: input_len={} expected_len={}",
                self.input_len, self.expected_len
            ),
            format!("verify: head_before={:?}", self.head_before),
            format!("verify: head_after={:?}", self.head_after),
            format!("verify: sort_micros={}", self.sort_micros),
        ];
        for error in &self.errors {
            lines.push(format!("verify: error {error}"));
        }
        lines.push(format!("verify: valid={}", self.valid));
        lines
    }

    /// Pretty JSON with trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut payload = serde_json::to_string_pretty(self).context("serialize report")?;
        payload.push('\n');
        Ok(payload)
    }
}

/// Verify the artifacts in `dir`.
///
/// Returns `Err` only when an artifact cannot be read or parsed; invariant
/// violations are reported through [`VerifyReport::valid`].
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn verify_dir(cfg: &FixtureConfig, dir: &Path) -> Result<VerifyReport> {
    cfg.validate().context("invalid fixture config")?;
    let paths = FixturePaths::new(dir, cfg);

    let input = read_sequence(&paths.input_path).context("load input artifact")?;
    let expected = read_sequence(&paths.expected_path).context("load expected artifact")?;
    debug!(input_len = input.len(), expected_len = expected.len(), "artifacts loaded");

    let started = Instant::now();
    let sorted = sorted_copy(&input);
    let sort_micros = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    let errors = validate_with_sorted(cfg, &input, &sorted, &expected);
    let valid = errors.is_empty();
    if valid {
        info!(sort_micros, "fixture valid");
    } else {
        warn!(violations = errors.len(), "fixture invalid");
    }

    Ok(VerifyReport {
        input_len: input.len(),
        expected_len: expected.len(),
        valid,
        errors,
        head_before: head(&input),
        head_after: head(&sorted),
        sort_micros,
    })
}

fn head(values: &[i64]) -> Vec<i64> {
    values.iter().take(HEAD_LEN).copied().collect()
}
