//! Sequential sweep execution.
//!
//! One experiment at a time, each blocking until the trainer exits; the
//! first failure aborts everything that follows. There is no retry, no
//! timeout and no parallelism — a sweep is a long-running, attended batch,
//! and a broken run means the remaining results would not be comparable
//! anyway.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::experiment::{base_args, ArgMap, Experiment, SweepPaths};

/// Seam between sweep sequencing and process spawning.
///
/// The runner only needs "run this token sequence to completion"; keeping
/// that behind a trait lets the batch semantics be exercised without
/// spawning real processes.
pub trait Launcher {
    /// Launch one training run and block until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error when the run cannot be spawned or exits
    /// unsuccessfully.
    fn launch(&mut self, experiment: &str, tokens: &[String]) -> Result<()>;
}

/// Launches the external trainer as a blocking subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainLauncher {
    interpreter: PathBuf,
    script: PathBuf,
}

impl TrainLauncher {
    /// Create a launcher invoking `script` through `interpreter`.
    #[must_use]
    pub fn new(interpreter: impl Into<PathBuf>, script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
        }
    }

    /// Interpreter the trainer script runs under.
    #[must_use]
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Path of the trainer script.
    #[must_use]
    pub fn script(&self) -> &Path {
        &self.script
    }
}

impl Launcher for TrainLauncher {
    fn launch(&mut self, experiment: &str, tokens: &[String]) -> Result<()> {
        let status = Command::new(&self.interpreter)
            .arg(&self.script)
            .args(tokens)
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::TrainingFailed {
                experiment: experiment.to_string(),
                code: status.code(),
            })
        }
    }
}

/// A configured sweep: shared base settings, path roots, and the launcher
/// that runs each resolved configuration.
#[derive(Debug)]
pub struct Sweep<L = TrainLauncher> {
    base: ArgMap,
    paths: SweepPaths,
    launcher: L,
}

impl Sweep<TrainLauncher> {
    /// Create a sweep builder rooted at `project_root`.
    #[must_use]
    pub fn builder(project_root: impl AsRef<Path>) -> SweepBuilder {
        SweepBuilder::new(project_root)
    }
}

impl<L: Launcher> Sweep<L> {
    /// Create a sweep from explicit parts.
    #[must_use]
    pub fn new(base: ArgMap, paths: SweepPaths, launcher: L) -> Self {
        Self {
            base,
            paths,
            launcher,
        }
    }

    /// The launcher in use.
    #[must_use]
    pub const fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Run every experiment in order, aborting at the first failure.
    ///
    /// # Errors
    ///
    /// Propagates the first launch failure; experiments after it are never
    /// started.
    pub fn run(&mut self, experiments: &[Experiment]) -> Result<()> {
        for experiment in experiments {
            self.run_one(experiment)?;
        }
        Ok(())
    }

    fn run_one(&mut self, experiment: &Experiment) -> Result<()> {
        let resolved = experiment.resolve(&self.base, &self.paths);
        let tokens = resolved.to_cli_tokens();

        info!(experiment = experiment.name(), "launching training run");
        if let Ok(config) = serde_json::to_string(&resolved) {
            debug!(experiment = experiment.name(), %config, "resolved configuration");
        }
        debug!(
            experiment = experiment.name(),
            command = tokens.join(" "),
            "trainer arguments"
        );

        let started = Instant::now();
        self.launcher.launch(experiment.name(), &tokens)?;
        info!(
            experiment = experiment.name(),
            elapsed_s = started.elapsed().as_secs(),
            "training run finished"
        );
        Ok(())
    }
}

/// Builder for [`Sweep`].
#[derive(Debug)]
pub struct SweepBuilder {
    project_root: PathBuf,
    base: ArgMap,
    interpreter: PathBuf,
    script: Option<PathBuf>,
    output_root: Option<PathBuf>,
    dataset_root: Option<PathBuf>,
}

impl SweepBuilder {
    fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            base: base_args(),
            interpreter: PathBuf::from("python3"),
            script: None,
            output_root: None,
            dataset_root: None,
        }
    }

    /// Replace the shared base settings.
    #[must_use]
    pub fn base_args(mut self, base: ArgMap) -> Self {
        self.base = base;
        self
    }

    /// Interpreter the trainer script runs under (default `python3`).
    #[must_use]
    pub fn interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Trainer script path (default `train.py` under the project root).
    #[must_use]
    pub fn train_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Root for default model output paths.
    #[must_use]
    pub fn output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = Some(root.into());
        self
    }

    /// Root for default source dataset paths.
    #[must_use]
    pub fn dataset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.dataset_root = Some(root.into());
        self
    }

    /// Build the sweep.
    #[must_use]
    pub fn build(self) -> Sweep<TrainLauncher> {
        let defaults = SweepPaths::for_project(&self.project_root);
        let paths = SweepPaths::new(
            self.output_root
                .unwrap_or_else(|| defaults.output_root().to_path_buf()),
            self.dataset_root
                .unwrap_or_else(|| defaults.dataset_root().to_path_buf()),
        );
        let script = self
            .script
            .unwrap_or_else(|| self.project_root.join("train.py"));

        Sweep::new(self.base, paths, TrainLauncher::new(self.interpreter, script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let sweep = Sweep::builder("/work/splat").build();

        assert_eq!(sweep.launcher().interpreter(), Path::new("python3"));
        assert_eq!(sweep.launcher().script(), Path::new("/work/splat/train.py"));
    }

    #[test]
    fn test_builder_overrides() {
        let sweep = Sweep::builder("/work/splat")
            .interpreter("/usr/bin/python3.11")
            .train_script("/work/splat/tools/train.py")
            .build();

        assert_eq!(
            sweep.launcher().interpreter(),
            Path::new("/usr/bin/python3.11")
        );
        assert_eq!(
            sweep.launcher().script(),
            Path::new("/work/splat/tools/train.py")
        );
    }
}
