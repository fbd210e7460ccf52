//! Fixture parameters.
//!
//! The generator has no configuration surface: [`FixtureConfig::default`] is
//! the only configuration the CLI ever uses. Other values exist so tests can
//! work with small fixtures.

use anyhow::{Result, bail};

/// Number of samples drawn per fixture.
pub const SAMPLE_COUNT: usize = 10_000;
/// Largest value a sample may take (inclusive). The smallest is 0.
pub const MAX_VALUE: i64 = 9_999;
/// File name of the unsorted artifact.
pub const INPUT_FILE: &str = "input.txt";
/// File name of the sorted artifact.
pub const EXPECTED_FILE: &str = "expected.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Length of the sample sequence.
    pub count: usize,
    /// Inclusive upper bound for every sample.
    pub max_value: i64,
    /// Artifact holding the sample in draw order.
    pub input_file: String,
    /// Artifact holding the sorted sample.
    pub expected_file: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            count: SAMPLE_COUNT,
            max_value: MAX_VALUE,
            input_file: INPUT_FILE.to_string(),
            expected_file: EXPECTED_FILE.to_string(),
        }
    }
}

impl FixtureConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            bail!("count must be > 0");
        }
        if self.max_value < 0 {
            bail!("max_value must be >= 0");
        }
        if self.input_file.trim().is_empty() {
            bail!("input_file must be non-empty");
        }
        if self.expected_file.trim().is_empty() {
            bail!("expected_file must be non-empty");
        }
        if self.input_file == self.expected_file {
            bail!("input_file and expected_file must differ");
        }
        Ok(())
    }

    /// Whether `value` lies in `[0, max_value]`.
    pub fn in_range(&self, value: i64) -> bool {
        (0..=self.max_value).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_fixed_constants() {
        let cfg = FixtureConfig::default();
        assert_eq!(cfg.count, 10_000);
        assert_eq!(cfg.max_value, 9_999);
        assert_eq!(cfg.input_file, "input.txt");
        assert_eq!(cfg.expected_file, "expected.txt");
        cfg.validate().expect("default is valid");
    }

    #[test]
    fn rejects_zero_count() {
        let cfg = FixtureConfig {
            count: 0,
            ..FixtureConfig::default()
        };
        let err = cfg.validate().expect_err("zero count");
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn rejects_same_artifact_names() {
        let cfg = FixtureConfig {
            expected_file: "input.txt".to_string(),
            ..FixtureConfig::default()
        };
        let err = cfg.validate().expect_err("same names");
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let cfg = FixtureConfig::default();
        assert!(cfg.in_range(0));
        assert!(cfg.in_range(9_999));
        assert!(!cfg.in_range(-1));
        assert!(!cfg.in_range(10_000));
    }
}
