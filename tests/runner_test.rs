//! Sweep sequencing tests: launch order and fail-fast abort.

use splatsweep::experiment::{base_args, benchmark_suite, SweepPaths};
use splatsweep::runner::{Launcher, Sweep};
use splatsweep::{Error, Result};

/// Records every launch and fails when it reaches a chosen experiment.
struct ScriptedLauncher {
    launched: Vec<String>,
    tokens_seen: Vec<Vec<String>>,
    fail_on: Option<&'static str>,
    fail_code: Option<i32>,
}

impl ScriptedLauncher {
    fn succeeding() -> Self {
        Self {
            launched: Vec::new(),
            tokens_seen: Vec::new(),
            fail_on: None,
            fail_code: None,
        }
    }

    fn failing_on(name: &'static str, code: Option<i32>) -> Self {
        Self {
            fail_on: Some(name),
            fail_code: code,
            ..Self::succeeding()
        }
    }
}

impl Launcher for ScriptedLauncher {
    fn launch(&mut self, experiment: &str, tokens: &[String]) -> Result<()> {
        self.launched.push(experiment.to_string());
        self.tokens_seen.push(tokens.to_vec());
        if self.fail_on == Some(experiment) {
            return Err(Error::TrainingFailed {
                experiment: experiment.to_string(),
                code: self.fail_code,
            });
        }
        Ok(())
    }
}

fn paths() -> SweepPaths {
    SweepPaths::for_project("/work/splat")
}

#[test]
fn test_runs_every_experiment_in_suite_order() {
    let mut sweep = Sweep::new(base_args(), paths(), ScriptedLauncher::succeeding());
    sweep.run(&benchmark_suite()).expect("sweep failed");

    assert_eq!(
        sweep.launcher().launched,
        vec![
            "bicycle",
            "garden",
            "stump",
            "bonsai",
            "counter",
            "room",
            "kitchen",
            "train",
            "truck",
            "drjohnson",
            "playroom",
        ]
    );
}

#[test]
fn test_fail_fast_stops_the_batch() {
    let mut sweep = Sweep::new(
        base_args(),
        paths(),
        ScriptedLauncher::failing_on("stump", Some(137)),
    );
    let err = sweep
        .run(&benchmark_suite())
        .expect_err("sweep should fail");

    // bicycle and garden ran, stump failed, nothing after it was launched
    assert_eq!(sweep.launcher().launched, vec!["bicycle", "garden", "stump"]);

    match err {
        Error::TrainingFailed { experiment, code } => {
            assert_eq!(experiment, "stump");
            assert_eq!(code, Some(137));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_signal_killed_run_still_aborts() {
    let mut sweep = Sweep::new(
        base_args(),
        paths(),
        ScriptedLauncher::failing_on("bicycle", None),
    );
    let err = sweep
        .run(&benchmark_suite())
        .expect_err("sweep should fail");

    assert_eq!(sweep.launcher().launched, vec!["bicycle"]);
    assert!(matches!(err, Error::TrainingFailed { code: None, .. }));
}

#[test]
fn test_launcher_receives_resolved_tokens() {
    let mut sweep = Sweep::new(base_args(), paths(), ScriptedLauncher::succeeding());
    sweep.run(&benchmark_suite()).expect("sweep failed");

    let bicycle_tokens = &sweep.launcher().tokens_seen[0];
    assert_eq!(
        &bicycle_tokens[..6],
        &["--eval", "--resolution", "4", "--max_shapes", "6400000", "--outdoor"]
    );
    assert!(bicycle_tokens.contains(&"--model_path".to_string()));
    assert!(bicycle_tokens.contains(&"--source_path".to_string()));
}

#[test]
fn test_empty_suite_is_a_noop() {
    let mut sweep = Sweep::new(base_args(), paths(), ScriptedLauncher::succeeding());
    sweep.run(&[]).expect("empty sweep failed");

    assert!(sweep.launcher().launched.is_empty());
}
