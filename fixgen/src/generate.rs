//! Fixture generation for `fixgen generate`.
//!
//! Draws one sample, writes it in draw order, then writes its sorted copy.
//! Any I/O failure aborts the run; nothing is retried or cleaned up.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::config::FixtureConfig;
use crate::core::sample::{draw_sample, entropy_seed, rng_from_seed, sorted_copy};
use crate::io::artifact::{FixturePaths, write_sequence};

/// Options accepted by `fixgen generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory receiving the artifacts.
    pub dir: PathBuf,
    /// Seed for a reproducible draw. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub paths: FixturePaths,
    /// Seed actually used (supplied or drawn).
    pub seed: u64,
    pub count: usize,
}

impl GenerateOutcome {
    /// The completion line printed to stdout.
    pub fn summary(&self) -> String {
        format!(
            "generate: wrote sample to {} and sorted result to {} (count={} seed={})",
            self.paths.input_path.display(),
            self.paths.expected_path.display(),
            self.count,
            self.seed
        )
    }
}

/// Generate both artifacts in `opts.dir`.
#[instrument(skip_all, fields(dir = %opts.dir.display()))]
pub fn generate(cfg: &FixtureConfig, opts: &GenerateOptions) -> Result<GenerateOutcome> {
    cfg.validate().context("invalid fixture config")?;

    let seed = opts.seed.unwrap_or_else(entropy_seed);
    info!(seed, seeded = opts.seed.is_some(), "drawing sample");
    let mut rng = rng_from_seed(seed);
    let sample = draw_sample(&mut rng, cfg.count, cfg.max_value);

    let paths = FixturePaths::new(&opts.dir, cfg);
    write_artifact("input", &paths.input_path, &sample)?;

    let sorted = sorted_copy(&sample);
    drop(sample);
    write_artifact("expected", &paths.expected_path, &sorted)?;

    Ok(GenerateOutcome {
        paths,
        seed,
        count: cfg.count,
    })
}

fn write_artifact(label: &str, path: &Path, values: &[i64]) -> Result<()> {
    debug!(label, path = %path.display(), len = values.len(), "writing artifact");
    write_sequence(path, values).with_context(|| format!("write {label} artifact"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invariants::validate_fixture;
    use crate::io::artifact::read_sequence;

    fn run_in(dir: &Path, seed: Option<u64>) -> GenerateOutcome {
        let opts = GenerateOptions {
            dir: dir.to_path_buf(),
            seed,
        };
        generate(&FixtureConfig::default(), &opts).expect("generate")
    }

    #[test]
    fn writes_valid_fixture() {
        let temp = tempfile::tempdir().expect("tempdir");
        let outcome = run_in(temp.path(), Some(42));

        let input = read_sequence(&outcome.paths.input_path).expect("input");
        let expected = read_sequence(&outcome.paths.expected_path).expect("expected");
        assert_eq!(input.len(), 10_000);
        assert_eq!(expected.len(), 10_000);
        let errors = validate_fixture(&FixtureConfig::default(), &input, &expected);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn same_seed_writes_identical_artifacts() {
        let first = tempfile::tempdir().expect("tempdir");
        let second = tempfile::tempdir().expect("tempdir");
        let a = run_in(first.path(), Some(1234));
        let b = run_in(second.path(), Some(1234));

        let read = |path: &Path| std::fs::read_to_string(path).expect("read");
        assert_eq!(read(&a.paths.input_path), read(&b.paths.input_path));
        assert_eq!(read(&a.paths.expected_path), read(&b.paths.expected_path));
    }

    #[test]
    fn unseeded_runs_record_their_seed() {
        let temp = tempfile::tempdir().expect("tempdir");
        let outcome = run_in(temp.path(), None);
        let replay = tempfile::tempdir().expect("tempdir");
        let replayed = run_in(replay.path(), Some(outcome.seed));

        let input = read_sequence(&outcome.paths.input_path).expect("input");
        let again = read_sequence(&replayed.paths.input_path).expect("replayed input");
        assert_eq!(input, again);
    }

    #[test]
    fn summary_names_both_artifacts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let outcome = run_in(temp.path(), Some(5));
        let summary = outcome.summary();
        assert!(summary.contains("input.txt"));
        assert!(summary.contains("expected.txt"));
        assert!(summary.contains("seed=5"));
        assert!(!summary.contains('\n'));
    }

    #[test]
    fn unwritable_dir_is_fatal() {
        let temp = tempfile::tempdir().expect("tempdir");
        let opts = GenerateOptions {
            dir: temp.path().join("does-not-exist"),
            seed: Some(1),
        };
        let err = generate(&FixtureConfig::default(), &opts).expect_err("missing dir");
        assert!(format!("{err:#}").contains("write input artifact"));
    }

    #[test]
    fn rejects_invalid_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = FixtureConfig {
            count: 0,
            ..FixtureConfig::default()
        };
        let opts = GenerateOptions {
            dir: temp.path().to_path_buf(),
            seed: Some(1),
        };
        let err = generate(&cfg, &opts).expect_err("invalid config");
        assert!(format!("{err:#}").contains("count must be > 0"));
    }
}
